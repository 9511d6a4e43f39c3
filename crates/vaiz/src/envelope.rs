//! Request/response envelope codec
//!
//! Every Vaiz endpoint answers with the same outer shape:
//!
//! ```json
//! { "type": "ok",    "payload": { ... } }
//! { "type": "error", "error": { "code": "TaskNotFound", "message": "..." } }
//! ```
//!
//! `type` is the discriminant. Decoding is strict: a body that does not carry
//! a recognised discriminant, or whose payload does not deserialize into the
//! expected record, is a [`Error::Schema`]. Unknown extra fields inside a
//! payload are tolerated so additive server changes do not break clients.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Discriminant value of a success envelope.
pub const TYPE_OK: &str = "ok";

/// Discriminant value of an error envelope.
pub const TYPE_ERROR: &str = "error";

/// Error object carried by an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    /// Machine-readable error code
    pub code: String,

    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A validated response envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// `type: "ok"` with an object payload
    Ok(Map<String, Value>),
    /// `type: "error"` with a coded error
    Error(RemoteError),
}

impl ResponseEnvelope {
    /// Validate the outer shape of a parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if the value is not an object, the `type`
    /// discriminant is missing or unknown, an `ok` envelope has no object
    /// payload, or an `error` envelope has no string `error.code`.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut body) = value else {
            return Err(Error::Schema(format!(
                "response body must be a JSON object, got {}",
                kind_of(&value)
            )));
        };

        let kind = match body.remove("type") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(Error::Schema(format!(
                    "envelope `type` must be a string, got {}",
                    kind_of(&other)
                )));
            }
            None => {
                return Err(Error::Schema(
                    "envelope is missing the `type` discriminant".to_string(),
                ));
            }
        };

        match kind.as_str() {
            TYPE_OK => match body.remove("payload") {
                Some(Value::Object(payload)) => Ok(ResponseEnvelope::Ok(payload)),
                Some(other) => Err(Error::Schema(format!(
                    "envelope `payload` must be an object, got {}",
                    kind_of(&other)
                ))),
                None => Err(Error::Schema(
                    "`ok` envelope is missing `payload`".to_string(),
                )),
            },
            TYPE_ERROR => remote_error(body.remove("error"))
                .map(ResponseEnvelope::Error)
                .ok_or_else(|| {
                    Error::Schema("`error` envelope is missing a string `error.code`".to_string())
                }),
            other => Err(Error::Schema(format!("unknown envelope type `{}`", other))),
        }
    }

    /// Unwrap the payload into `P`, or turn an error envelope into [`Error::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for error envelopes and [`Error::Schema`] when
    /// the payload does not match `P`.
    pub fn into_payload<P: DeserializeOwned>(self, status: u16) -> Result<P> {
        match self {
            ResponseEnvelope::Ok(payload) => serde_json::from_value(Value::Object(payload))
                .map_err(|e| Error::Schema(format!("unexpected payload shape: {}", e))),
            ResponseEnvelope::Error(RemoteError { code, message }) => Err(Error::Api {
                code,
                message,
                status,
            }),
        }
    }
}

/// Encode a request body.
///
/// Field order and values are exactly those of `body`'s `Serialize` impl.
pub fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(body)?)
}

/// Decode a raw HTTP response into the payload type `P`.
///
/// A non-success status is always an [`Error::Api`]: the remote
/// `error.code` is used when the body carries one, otherwise the code is
/// `HTTP_<status>` and the message is the body text.
///
/// # Errors
///
/// See [`ResponseEnvelope::from_value`] and [`ResponseEnvelope::into_payload`].
pub fn decode<P: DeserializeOwned>(status: u16, body: &[u8]) -> Result<P> {
    if !(200..300).contains(&status) {
        return Err(error_from_status(status, body));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::Schema(format!("response body is not valid JSON: {}", e)))?;

    ResponseEnvelope::from_value(value)?.into_payload(status)
}

fn error_from_status(status: u16, body: &[u8]) -> Error {
    let remote = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|mut value| value.get_mut("error").map(Value::take))
        .and_then(|error| remote_error(Some(error)));

    match remote {
        Some(RemoteError { code, message }) => Error::Api {
            code,
            message,
            status,
        },
        None => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            Error::Api {
                code: format!("HTTP_{}", status),
                message: (!text.is_empty()).then_some(text),
                status,
            }
        }
    }
}

fn remote_error(value: Option<Value>) -> Option<RemoteError> {
    value.and_then(|v| serde_json::from_value(v).ok())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
