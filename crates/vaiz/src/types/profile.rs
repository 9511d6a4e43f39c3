//! The authenticated user's profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ColorInfo;

/// Profile of the user the API key belongs to.
///
/// Credential material the server may include (password hashes, recovery
/// codes) is not modelled and is dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// User id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Nickname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,

    /// Primary email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// All registered emails
    #[serde(default)]
    pub emails: Vec<ProfileEmail>,

    /// Color settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInfo>,

    /// Avatar rendering mode as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_mode: Option<u8>,

    /// Member id of this user in the current space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    /// Onboarding steps not yet completed
    #[serde(default)]
    pub incomplete_steps: Vec<String>,

    /// Registration timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<DateTime<Utc>>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One email address on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmail {
    /// Address
    pub email: String,
    /// Whether the address was confirmed
    #[serde(default)]
    pub confirmed: bool,
    /// Whether this is the primary address
    #[serde(default)]
    pub primary: bool,
}

/// Payload of `getProfile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileResponse {
    /// The profile
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_drops_credentials() {
        let profile: Profile = serde_json::from_value(json!({
            "_id": "u1",
            "fullName": "Ana Example",
            "email": "ana@example.com",
            "emails": [{"email": "ana@example.com", "confirmed": true, "primary": true}],
            "avatarMode": 2,
            "memberId": "m1",
            "passwordHash": "$2b$10$secret",
            "recoveryCodes": [{"code": "abc"}],
            "registeredDate": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(profile.member_id.as_deref(), Some("m1"));
        assert!(profile.emails[0].primary);

        let reencoded = serde_json::to_string(&profile).unwrap();
        assert!(!reencoded.contains("secret"));
        assert!(!reencoded.contains("recoveryCodes"));
    }
}
