//! Value types shared across resources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority, encoded on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    /// 0
    Low,
    /// 1
    #[default]
    General,
    /// 2
    Medium,
    /// 3
    High,
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => 0,
            TaskPriority::General => 1,
            TaskPriority::Medium => 2,
            TaskPriority::High => 3,
        }
    }
}

impl TryFrom<u8> for TaskPriority {
    type Error = UnknownPriority;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskPriority::Low),
            1 => Ok(TaskPriority::General),
            2 => Ok(TaskPriority::Medium),
            3 => Ok(TaskPriority::High),
            other => Err(UnknownPriority(other)),
        }
    }
}

/// An integer that does not name a [`TaskPriority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownPriority(pub u8);

impl fmt::Display for UnknownPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task priority {}", self.0)
    }
}

impl std::error::Error for UnknownPriority {}

/// Custom field value attached to a task on create/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Board custom field id
    pub id: String,
    /// Field value
    pub value: CustomFieldValue,
}

impl CustomField {
    /// Create a custom field value.
    pub fn new(id: impl Into<String>, value: impl Into<CustomFieldValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Single or multi-valued custom field content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    /// Text, number-as-text, date, single select
    Single(String),
    /// Multi-select or member lists
    Multiple(Vec<String>),
}

impl From<String> for CustomFieldValue {
    fn from(value: String) -> Self {
        CustomFieldValue::Single(value)
    }
}

impl From<&str> for CustomFieldValue {
    fn from(value: &str) -> Self {
        CustomFieldValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for CustomFieldValue {
    fn from(values: Vec<String>) -> Self {
        CustomFieldValue::Multiple(values)
    }
}

/// Color settings used by spaces, members and profiles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    /// Color name or hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the color is a dark variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dark: Option<bool>,
}

/// Kind of entity a document, history entry or other scoped record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Shared space scope
    Space,
    /// A project
    Project,
    /// A task
    Task,
    /// A document
    Document,
    /// A board
    Board,
    /// A milestone
    Milestone,
    /// A member's personal scope
    Member,
}
