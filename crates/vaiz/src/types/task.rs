//! Task records and task request types.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{CustomField, TaskPriority};

/// A task as returned by the API.
///
/// Only `id` and `name` are required; everything else is optional because
/// different endpoints return differently-populated task records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Task name
    pub name: String,

    /// Human-readable id, e.g. `PRJ-12`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrid: Option<String>,

    /// Board group (column) id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Board id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,

    /// Project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Parent task id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_task: Option<String>,

    /// Board type ids
    #[serde(default)]
    pub types: Vec<String>,

    /// Raw priority level. Levels the client does not know are kept as-is;
    /// use [`Task::priority_level`] for the typed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// Whether the task is completed
    #[serde(default)]
    pub completed: bool,

    /// Assigned member ids
    #[serde(default)]
    pub assignees: Vec<String>,

    /// Subtask ids
    #[serde(default)]
    pub subtasks: Vec<String>,

    /// Milestone ids
    #[serde(default)]
    pub milestones: Vec<String>,

    /// Primary milestone id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,

    /// Follower id → role
    #[serde(default)]
    pub followers: HashMap<String, String>,

    /// Due window start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_start: Option<DateTime<Utc>>,

    /// Due window end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_end: Option<DateTime<Utc>>,

    /// Blocking task ids
    #[serde(default)]
    pub right_connectors: Vec<String>,

    /// Blocked-by task ids
    #[serde(default)]
    pub left_connectors: Vec<String>,

    /// Custom field values
    #[serde(default)]
    pub custom_fields: Vec<TaskCustomField>,

    /// Description document id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    /// Creator member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Last editor member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Archiver member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archiver: Option<String>,

    /// Deleter member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleter: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Completion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Archive timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,

    /// Deletion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Typed priority, or `None` if the task has no priority or a level
    /// newer than [`TaskPriority`].
    pub fn priority_level(&self) -> Option<TaskPriority> {
        self.priority.and_then(|p| TaskPriority::try_from(p).ok())
    }
}

/// A custom field value stored on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCustomField {
    /// Board custom field id
    pub id: String,
    /// Stored value; shape depends on the field type
    #[serde(default)]
    pub value: Value,
}

/// Request body for `createTask`.
///
/// # Example
///
/// ```
/// use vaiz::{CreateTaskRequest, TaskPriority};
///
/// let request = CreateTaskRequest::builder()
///     .name("Write release notes")
///     .group("group-id")
///     .board("board-id")
///     .project("project-id")
///     .priority(TaskPriority::High)
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task name
    pub name: String,

    /// Board group (column) id
    pub group: String,

    /// Board id
    pub board: String,

    /// Project id
    pub project: String,

    /// Parent task id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub parent_task: Option<String>,

    /// Board type ids
    #[serde(default)]
    #[builder(default)]
    pub types: Vec<String>,

    /// Priority
    #[serde(default)]
    #[builder(default)]
    pub priority: TaskPriority,

    /// Create as completed
    #[serde(default)]
    #[builder(default)]
    pub completed: bool,

    /// Assigned member ids
    #[serde(default)]
    #[builder(default)]
    pub assignees: Vec<String>,

    /// Subtask ids
    #[serde(default)]
    #[builder(default)]
    pub subtasks: Vec<String>,

    /// Milestone ids
    #[serde(default)]
    #[builder(default)]
    pub milestones: Vec<String>,

    /// Due window start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_start: Option<DateTime<Utc>>,

    /// Due window end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_end: Option<DateTime<Utc>>,

    /// Blocking task ids
    #[serde(default)]
    #[builder(default)]
    pub right_connectors: Vec<String>,

    /// Blocked-by task ids
    #[serde(default)]
    #[builder(default)]
    pub left_connectors: Vec<String>,

    /// Custom field values
    #[serde(default)]
    #[builder(default)]
    pub custom_fields: Vec<CustomField>,

    /// Plain-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
}

impl CreateTaskRequest {
    /// Create a builder for constructing a CreateTaskRequest.
    pub fn builder() -> CreateTaskRequestBuilder {
        CreateTaskRequestBuilder::default()
    }
}

/// Request body for `editTask`. Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct EditTaskRequest {
    /// Task to edit
    pub task_id: String,

    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,

    /// New parent task id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub parent_task: Option<String>,

    /// Replacement board type ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub types: Option<Vec<String>>,

    /// New priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub priority: Option<TaskPriority>,

    /// Completion state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub completed: Option<bool>,

    /// Replacement assignee ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub assignees: Option<Vec<String>>,

    /// Replacement subtask ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub subtasks: Option<Vec<String>>,

    /// Replacement milestone ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub milestones: Option<Vec<String>>,

    /// New due window start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_start: Option<DateTime<Utc>>,

    /// New due window end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_end: Option<DateTime<Utc>>,

    /// Replacement blocking task ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub right_connectors: Option<Vec<String>>,

    /// Replacement blocked-by task ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub left_connectors: Option<Vec<String>>,

    /// Replacement custom field values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub custom_fields: Option<Vec<CustomField>>,
}

impl EditTaskRequest {
    /// Create a builder for constructing an EditTaskRequest.
    pub fn builder() -> EditTaskRequestBuilder {
        EditTaskRequestBuilder::default()
    }
}

/// Filters and paging for `getTasks`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct GetTasksRequest {
    /// Restrict to these task ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    /// Restrict to a board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,

    /// Restrict to a project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Restrict to tasks assigned to any of these members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,

    /// Restrict to subtasks of a task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_task: Option<String>,

    /// Restrict to any of these milestones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<String>>,

    /// Completion state filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    /// Archive state filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Page size (the server caps this at 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of tasks to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl GetTasksRequest {
    /// Create a builder for constructing a GetTasksRequest.
    pub fn builder() -> GetTasksRequestBuilder {
        GetTasksRequestBuilder::default()
    }
}

/// Payload of `createTask`, `getTask` and `editTask`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskResponse {
    /// The task
    pub task: Task,
}

/// Payload of `getTasks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TasksResponse {
    /// One page of tasks
    pub tasks: Vec<Task>,
}
