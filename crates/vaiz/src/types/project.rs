//! Projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project in the current space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Project name
    pub name: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creator member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Member ids on the project team
    #[serde(default)]
    pub team: Vec<String>,

    /// Color name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Short project key used in task hrids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Owning space id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    /// Archiver member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archiver: Option<String>,

    /// Archive timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload of `getProjects`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsResponse {
    /// Every project visible in the space
    pub projects: Vec<Project>,
}

/// Payload of `getProject`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectResponse {
    /// The project
    pub project: Project,
}
