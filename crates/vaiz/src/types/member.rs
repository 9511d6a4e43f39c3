//! Space members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ColorInfo;

/// A member of the current space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Nickname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,

    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Avatar rendering mode as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_mode: Option<u8>,

    /// Color settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInfo>,

    /// Space id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    /// Membership status, e.g. `Active`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the member joined the space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Best available display name: full name, then nickname, then email.
    pub fn display_name(&self) -> Option<&str> {
        [&self.full_name, &self.nick_name, &self.email]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.trim().is_empty())
    }
}

/// Payload of `getSpaceMembers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MembersResponse {
    /// Every member of the space
    pub members: Vec<Member>,
}
