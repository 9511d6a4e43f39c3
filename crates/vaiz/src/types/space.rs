//! Spaces (tenants).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::ColorInfo;

/// A space: the tenant every request is scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Space id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Space name
    pub name: String,

    /// Color settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInfo>,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Avatar rendering mode as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_mode: Option<u8>,

    /// Creator: either a member id or an embedded user object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Value>,

    /// Subscription plan name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    /// Whether the caller is a guest in this space
    #[serde(default)]
    pub is_foreign: bool,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Space {
    /// Creator id, whether sent as a bare id or an embedded object.
    pub fn creator_id(&self) -> Option<&str> {
        match self.creator.as_ref()? {
            Value::String(id) => Some(id.as_str()),
            Value::Object(user) => user.get("_id").or_else(|| user.get("id"))?.as_str(),
            _ => None,
        }
    }
}

/// Payload of `getSpace`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpaceResponse {
    /// The space
    pub space: Space,
}
