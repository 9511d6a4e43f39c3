//! API resource endpoints
//!
//! Each resource is a thin handle over the shared [`BaseClient`]: one method
//! per remote endpoint, a fixed request shape in and the unwrapped payload out.

pub mod boards;
pub mod comments;
pub mod documents;
pub mod members;
pub mod milestones;
pub mod profile;
pub mod projects;
pub mod spaces;
pub mod tasks;

pub use boards::Boards;
pub use comments::Comments;
pub use documents::Documents;
pub use members::Members;
pub use milestones::Milestones;
pub use profile::Profiles;
pub use projects::Projects;
pub use spaces::Spaces;
pub use tasks::Tasks;

use serde::Serialize;

use crate::http::BaseClient;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the shared base client.
    fn base(&self) -> &BaseClient;
}

/// Remote endpoint names, appended to the base URL.
pub mod endpoints {
    /// Create a task
    pub const CREATE_TASK: &str = "createTask";
    /// Fetch one task by slug
    pub const GET_TASK: &str = "getTask";
    /// Edit a task
    pub const EDIT_TASK: &str = "editTask";
    /// List tasks with filters
    pub const GET_TASKS: &str = "getTasks";
    /// Activity history of a task or other entity
    pub const GET_HISTORY: &str = "getHistory";
    /// List projects
    pub const GET_PROJECTS: &str = "getProjects";
    /// Fetch one project
    pub const GET_PROJECT: &str = "getProject";
    /// List boards
    pub const GET_BOARDS: &str = "getBoards";
    /// Fetch one board
    pub const GET_BOARD: &str = "getBoard";
    /// Add a task type to a board
    pub const CREATE_BOARD_TYPE: &str = "createBoardType";
    /// Edit a board task type
    pub const EDIT_BOARD_TYPE: &str = "editBoardType";
    /// Add a group (column) to a board
    pub const CREATE_BOARD_GROUP: &str = "createBoardGroup";
    /// Edit a board group
    pub const EDIT_BOARD_GROUP: &str = "editBoardGroup";
    /// Add a custom field to a board
    pub const CREATE_BOARD_CUSTOM_FIELD: &str = "createBoardCustomField";
    /// Edit a board custom field
    pub const EDIT_BOARD_CUSTOM_FIELD: &str = "editBoardCustomField";
    /// List milestones
    pub const GET_MILESTONES: &str = "getMilestones";
    /// Create a milestone
    pub const CREATE_MILESTONE: &str = "createMilestone";
    /// Fetch one milestone
    pub const GET_MILESTONE: &str = "getMilestone";
    /// Edit a milestone
    pub const EDIT_MILESTONE: &str = "editMilestone";
    /// Attach or detach milestones on a task
    pub const TOGGLE_MILESTONE: &str = "toggleMilestone";
    /// Comment on a document
    pub const POST_COMMENT: &str = "postComment";
    /// Edit a comment
    pub const EDIT_COMMENT: &str = "editComment";
    /// Delete a comment
    pub const DELETE_COMMENT: &str = "deleteComment";
    /// List the comments on a document
    pub const GET_COMMENTS: &str = "getComments";
    /// React to a comment with an emoji
    pub const REACT_TO_COMMENT: &str = "reactToComment";
    /// List documents in a scope
    pub const GET_DOCUMENTS: &str = "getDocuments";
    /// Create a document
    pub const CREATE_DOCUMENT: &str = "createDocument";
    /// Rename a document
    pub const EDIT_DOCUMENT: &str = "editDocument";
    /// Replace a document's content with plain text
    pub const REPLACE_DOCUMENT: &str = "replaceDocument";
    /// Fetch a document body as JSON
    pub const GET_JSON_DOCUMENT: &str = "getJSONDocument";
    /// List space members
    pub const GET_SPACE_MEMBERS: &str = "getSpaceMembers";
    /// Fetch the caller's profile
    pub const GET_PROFILE: &str = "getProfile";
    /// Fetch one space
    pub const GET_SPACE: &str = "getSpace";
}

/// Body of list endpoints that take no arguments; encodes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub(crate) struct EmptyBody {}
