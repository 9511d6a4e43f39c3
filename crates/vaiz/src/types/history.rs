//! Activity history of tasks and other entities.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Kind;

/// Request body for `getHistory`.
///
/// `last_loaded_date` pages backwards: pass `0` for the newest entries, then
/// the creation time (milliseconds since the epoch) of the oldest entry seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct GetHistoryRequest {
    /// Kind of entity
    pub kind: Kind,

    /// Entity id
    pub kind_id: String,

    /// History keys to leave out, e.g. `TASK_COMMENTED`
    #[serde(default)]
    #[builder(default)]
    pub exclude_keys: Vec<String>,

    /// Paging cursor; `0` starts from the newest entry
    #[serde(default)]
    #[builder(default)]
    pub last_loaded_date: i64,
}

impl GetHistoryRequest {
    /// Create a builder for constructing a GetHistoryRequest.
    pub fn builder() -> GetHistoryRequestBuilder {
        GetHistoryRequestBuilder::default()
    }
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Entry id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Event key, e.g. `TASK_CREATED`
    pub key: String,

    /// Kind of entity the event happened on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,

    /// Entity id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_id: Option<String>,

    /// Member who caused the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,

    /// Event details; shape depends on `key`
    #[serde(default)]
    pub data: Value,

    /// When the event happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload of `getHistory`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryResponse {
    /// Entries, newest first
    pub histories: Vec<HistoryItem>,
}
