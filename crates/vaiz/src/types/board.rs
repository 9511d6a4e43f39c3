//! Boards and their configuration.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A board (kanban) inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Board id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Board name
    pub name: String,

    /// Owning project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Columns
    #[serde(default)]
    pub groups: Vec<BoardGroup>,

    /// Task types available on this board
    #[serde(default)]
    pub types_list: Vec<BoardType>,

    /// Custom field definitions
    #[serde(default)]
    pub custom_fields: Vec<BoardCustomField>,

    /// Group id → ordered task ids
    #[serde(default)]
    pub task_order_by_groups: HashMap<String, Vec<String>>,

    /// Creator member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

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

impl Board {
    /// Find a group (column) by name.
    pub fn group_named(&self, name: &str) -> Option<&BoardGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Find a custom field definition by name.
    pub fn custom_field_named(&self, name: &str) -> Option<&BoardCustomField> {
        self.custom_fields.iter().find(|field| field.name == name)
    }
}

/// A board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGroup {
    /// Group id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Group name
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Work-in-progress limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Hidden on the board view
    #[serde(default)]
    pub hidden: bool,
}

/// A task type defined on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardType {
    /// Type id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Color name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hidden on the board view
    #[serde(default)]
    pub hidden: bool,
}

/// A custom field definition on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardCustomField {
    /// Field id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Field name
    pub name: String,
    /// Field type, e.g. `Text`, `Select`, `Date`
    #[serde(rename = "type")]
    pub r#type: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Select options, shape depends on the field type
    #[serde(default)]
    pub options: Vec<Value>,
    /// Hidden on the board view
    #[serde(default)]
    pub hidden: bool,
}

/// Payload of `getBoards`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardsResponse {
    /// Every board in the space
    pub boards: Vec<Board>,
}

/// Payload of `getBoard`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardResponse {
    /// The board
    pub board: Board,
}

/// Kind of value a board custom field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomFieldType {
    /// Free text
    Text,
    /// Number
    Number,
    /// Checkbox
    Checkbox,
    /// Date
    Date,
    /// Space member reference
    Member,
    /// Links to other tasks
    TaskRelations,
    /// One or more options from a list
    Select,
    /// URL
    Url,
}

/// Payload of `createBoardType` and `editBoardType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTypeResponse {
    /// The created or updated type
    pub board_type: BoardType,
}

/// Payload of `createBoardGroup` and `editBoardGroup`: every group of the board
/// after the change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardGroupsResponse {
    /// The board's groups
    pub board_groups: Vec<BoardGroup>,
}

/// Payload of `createBoardCustomField` and `editBoardCustomField`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCustomFieldResponse {
    /// The created or updated field
    pub custom_field: BoardCustomField,
}

/// Request body for `createBoardType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardTypeRequest {
    /// Board to add the type to
    pub board_id: String,
    /// Display label
    pub label: String,
    /// Icon name, e.g. `Cursor`
    pub icon: String,
    /// Color name, e.g. `silver`
    pub color: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
}

impl CreateBoardTypeRequest {
    /// Create a builder for constructing a CreateBoardTypeRequest.
    pub fn builder() -> CreateBoardTypeRequestBuilder {
        CreateBoardTypeRequestBuilder::default()
    }
}

/// Request body for `editBoardType`. Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct EditBoardTypeRequest {
    /// Type to edit
    pub board_type_id: String,
    /// Board owning the type
    pub board_id: String,
    /// New label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub label: Option<String>,
    /// New icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub icon: Option<String>,
    /// New color name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub color: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
    /// Hide or show the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub hidden: Option<bool>,
}

impl EditBoardTypeRequest {
    /// Create a builder for constructing an EditBoardTypeRequest.
    pub fn builder() -> EditBoardTypeRequestBuilder {
        EditBoardTypeRequestBuilder::default()
    }
}

/// Request body for `createBoardGroup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardGroupRequest {
    /// Board to add the group to
    pub board_id: String,
    /// Group name
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
}

impl CreateBoardGroupRequest {
    /// Create a builder for constructing a CreateBoardGroupRequest.
    pub fn builder() -> CreateBoardGroupRequestBuilder {
        CreateBoardGroupRequestBuilder::default()
    }
}

/// Request body for `editBoardGroup`. Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct EditBoardGroupRequest {
    /// Group to edit
    pub board_group_id: String,
    /// Board owning the group
    pub board_id: String,
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
    /// New work-in-progress limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub limit: Option<u32>,
    /// Hide or show the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub hidden: Option<bool>,
}

impl EditBoardGroupRequest {
    /// Create a builder for constructing an EditBoardGroupRequest.
    pub fn builder() -> EditBoardGroupRequestBuilder {
        EditBoardGroupRequestBuilder::default()
    }
}

/// Request body for `createBoardCustomField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardCustomFieldRequest {
    /// Board to add the field to
    pub board_id: String,
    /// Field name
    pub name: String,
    /// Field type
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
    /// Hidden on the board view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub hidden: Option<bool>,
    /// Select options, for `Select` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub options: Option<Vec<Value>>,
}

impl CreateBoardCustomFieldRequest {
    /// Create a builder for constructing a CreateBoardCustomFieldRequest.
    pub fn builder() -> CreateBoardCustomFieldRequestBuilder {
        CreateBoardCustomFieldRequestBuilder::default()
    }
}

/// Request body for `editBoardCustomField`. Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct EditBoardCustomFieldRequest {
    /// Field to edit
    pub field_id: String,
    /// Board owning the field
    pub board_id: String,
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
    /// Hide or show the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub hidden: Option<bool>,
    /// Replacement select options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub options: Option<Vec<Value>>,
}

impl EditBoardCustomFieldRequest {
    /// Create a builder for constructing an EditBoardCustomFieldRequest.
    pub fn builder() -> EditBoardCustomFieldRequestBuilder {
        EditBoardCustomFieldRequestBuilder::default()
    }
}
