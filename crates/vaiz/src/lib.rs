//! # Vaiz SDK
//!
//! Rust client for the Vaiz task-management API:
//! - Tasks: create, fetch, edit, list, paginate and read their history
//! - Boards with their types, groups and custom fields
//! - Milestones, comments and documents
//! - Projects, space members, profile and spaces
//! - Strict response envelope validation with typed errors
//! - Pluggable transport for testing or custom HTTP stacks
//!
//! Every call is a single `POST {base_url}/{endpoint}` carrying the bearer
//! API key and the `current-space-id` header. There are no retries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vaiz::{Client, ClientConfig, CreateTaskRequest, TaskPriority};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("your-api-key", "your-space-id"))?;
//!
//!     let board = client.boards().get_boards().await?.boards.remove(0);
//!     let group = board.groups.first().ok_or("board has no groups")?;
//!
//!     let created = client
//!         .tasks()
//!         .create_task(
//!             &CreateTaskRequest::builder()
//!                 .name("Write release notes")
//!                 .group(group.id.clone())
//!                 .board(board.id.clone())
//!                 .project(board.project.clone().unwrap_or_default())
//!                 .priority(TaskPriority::High)
//!                 .build()?,
//!         )
//!         .await?;
//!
//!     println!("Created task {}", created.task.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{BaseClient, HttpTransport, HttpTransportConfig, Transport, TransportError};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use vaiz::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, Result,
        types::{
            Board, CreateTaskRequest, CreateTaskRequestBuilder, EditTaskRequest,
            EditTaskRequestBuilder, GetTasksRequest, Project, Task, TaskPriority,
        },
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[cfg(test)]
mod property_tests;
