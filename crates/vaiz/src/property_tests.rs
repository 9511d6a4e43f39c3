//! Property-based tests for the envelope codec and header construction
//!
//! These generate random statuses, discriminants and payloads and check the
//! classification rules hold for all of them, not just the hand-picked cases.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    use crate::envelope::decode;
    use crate::error::Error;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    // ===== Strategy Generators =====

    fn arb_error_status() -> impl Strategy<Value = u16> {
        prop_oneof![100u16..200u16, 300u16..600u16]
    }

    fn arb_success_status() -> impl Strategy<Value = u16> {
        200u16..300u16
    }

    fn arb_code() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,40}"
    }

    fn arb_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,100}"
    }

    fn arb_unknown_type() -> impl Strategy<Value = String> {
        "[a-z]{1,10}".prop_filter("not a known discriminant", |t| t != "ok" && t != "error")
    }

    // ===== Status Classification =====

    proptest! {
        /// Property: a non-success status is always an API error carrying that status
        #[test]
        fn prop_error_status_is_api_error(
            status in arb_error_status(),
            body in arb_text(),
        ) {
            match decode::<Named>(status, body.as_bytes()) {
                Err(Error::Api { status: got, code, .. }) => {
                    prop_assert_eq!(got, status);
                    prop_assert_eq!(code, format!("HTTP_{}", status));
                }
                other => prop_assert!(false, "Expected Api error, got {:?}", other),
            }
        }

        /// Property: a remote error code on a failing status is surfaced verbatim
        #[test]
        fn prop_error_status_keeps_remote_code(
            status in arb_error_status(),
            code in arb_code(),
        ) {
            let body = serde_json::to_vec(&json!({"error": {"code": code}})).unwrap();
            let err = decode::<Named>(status, &body).unwrap_err();
            prop_assert_eq!(err.api_code(), Some(code.as_str()));
        }
    }

    // ===== Envelope Discrimination =====

    proptest! {
        /// Property: an ok envelope yields its payload for any success status
        #[test]
        fn prop_ok_envelope_yields_payload(
            status in arb_success_status(),
            name in arb_text(),
        ) {
            let body = serde_json::to_vec(&json!({
                "type": "ok",
                "payload": {"name": name, "ignored": true}
            }))
            .unwrap();

            let named: Named = decode(status, &body).unwrap();
            prop_assert_eq!(named.name, name);
        }

        /// Property: an error envelope is an API error even with a 2xx status
        #[test]
        fn prop_error_envelope_is_api_error(
            status in arb_success_status(),
            code in arb_code(),
            message in proptest::option::of(arb_text()),
        ) {
            let body = serde_json::to_vec(&json!({
                "type": "error",
                "error": {"code": code, "message": message}
            }))
            .unwrap();

            match decode::<Named>(status, &body) {
                Err(Error::Api { code: got_code, message: got_message, status: got_status }) => {
                    prop_assert_eq!(got_code, code);
                    prop_assert_eq!(got_message, message);
                    prop_assert_eq!(got_status, status);
                }
                other => prop_assert!(false, "Expected Api error, got {:?}", other),
            }
        }

        /// Property: any unknown discriminant is a schema error
        #[test]
        fn prop_unknown_type_is_schema_error(kind in arb_unknown_type()) {
            let body = serde_json::to_vec(&json!({
                "type": kind,
                "payload": {"name": "x"}
            }))
            .unwrap();

            prop_assert!(decode::<Named>(200, &body).unwrap_err().is_schema());
        }

        /// Property: arbitrary non-JSON text with a 2xx status is a schema error
        #[test]
        fn prop_non_json_success_is_schema_error(text in "[a-z<>/ ]{1,50}") {
            prop_assume!(serde_json::from_str::<serde_json::Value>(&text).is_err());
            prop_assert!(decode::<Named>(200, text.as_bytes()).unwrap_err().is_schema());
        }
    }

    // ===== Header Construction =====

    proptest! {
        /// Property: every request carries the configured key and space verbatim
        #[test]
        fn prop_headers_carry_credentials(
            key in "[A-Za-z0-9_-]{1,64}",
            space in "[a-f0-9]{24}",
        ) {
            use crate::config::ClientConfig;
            use crate::http::BaseClient;

            let base = BaseClient::new(ClientConfig::new(key.clone(), space.clone()), None)
                .expect("valid config");
            let headers = base.headers();

            prop_assert_eq!(
                headers.get("authorization").unwrap().to_str().unwrap(),
                format!("Bearer {}", key)
            );
            prop_assert_eq!(headers.get("current-space-id").unwrap().to_str().unwrap(), space);
            prop_assert_eq!(
                headers.get("content-type").unwrap().to_str().unwrap(),
                "application/json"
            );
        }
    }
}
