//! Milestones.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A milestone grouping tasks on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Milestone id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Milestone name
    pub name: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Board id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,

    /// Description document id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    /// Number of tasks in the milestone
    #[serde(default)]
    pub total: u32,

    /// Number of completed tasks
    #[serde(default)]
    pub completed: u32,

    /// Follower id → role
    #[serde(default)]
    pub followers: HashMap<String, String>,

    /// Due window start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_start: Option<DateTime<Utc>>,

    /// Due window end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_end: Option<DateTime<Utc>>,

    /// Display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Creator member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Last editor member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Archiver member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archiver: Option<String>,

    /// Archive timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,

    /// Deleter member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleter: Option<String>,

    /// Deletion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Milestone {
    /// Completion ratio in `0.0..=1.0`; zero when the milestone is empty.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed.min(self.total)) / f64::from(self.total)
        }
    }
}

/// Payload of `getMilestones`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MilestonesResponse {
    /// Every milestone in the space
    pub milestones: Vec<Milestone>,
}

/// Payload of `createMilestone`, `getMilestone` and `editMilestone`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MilestoneResponse {
    /// The milestone
    pub milestone: Milestone,
}

/// Request body for `createMilestone`.
///
/// ```
/// use vaiz::CreateMilestoneRequest;
///
/// let request = CreateMilestoneRequest::builder()
///     .name("Q1")
///     .board("board-id")
///     .project("project-id")
///     .color("#4CAF50")
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneRequest {
    /// Milestone name
    pub name: String,

    /// Board id
    pub board: String,

    /// Project id
    pub project: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,

    /// Due window start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_start: Option<DateTime<Utc>>,

    /// Due window end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_end: Option<DateTime<Utc>>,

    /// Display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub color: Option<String>,
}

impl CreateMilestoneRequest {
    /// Create a builder for constructing a CreateMilestoneRequest.
    pub fn builder() -> CreateMilestoneRequestBuilder {
        CreateMilestoneRequestBuilder::default()
    }
}

/// Request body for `editMilestone`. Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct EditMilestoneRequest {
    /// Milestone to edit
    pub milestone_id: String,

    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,

    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,

    /// New due window start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_start: Option<DateTime<Utc>>,

    /// New due window end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_end: Option<DateTime<Utc>>,

    /// New display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub color: Option<String>,
}

impl EditMilestoneRequest {
    /// Create a builder for constructing an EditMilestoneRequest.
    pub fn builder() -> EditMilestoneRequestBuilder {
        EditMilestoneRequestBuilder::default()
    }
}

/// Request body for `toggleMilestone`.
///
/// Each listed milestone is attached to the task if absent and detached if
/// present. The payload is the updated task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleMilestoneRequest {
    /// Task to update
    pub task_id: String,
    /// Milestones to toggle on the task
    pub milestone_ids: Vec<String>,
}

impl ToggleMilestoneRequest {
    /// Toggle `milestone_ids` on `task_id`.
    pub fn new(
        task_id: impl Into<String>,
        milestone_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            milestone_ids: milestone_ids.into_iter().map(Into::into).collect(),
        }
    }
}
