//! Request and response types for the Vaiz API
//!
//! Entities mirror the server's records: the server's `_id` is exposed as
//! `id`, only the identifying fields are required, and unknown fields are
//! ignored. Every `*Response` type is the unwrapped `payload` of an `ok`
//! envelope.

pub use board::*;
pub use comment::*;
pub use common::*;
pub use document::*;
pub use history::*;
pub use member::*;
pub use milestone::*;
pub use profile::*;
pub use project::*;
pub use space::*;
pub use task::*;

pub mod board;
pub mod comment;
pub mod common;
pub mod document;
pub mod history;
pub mod member;
pub mod milestone;
pub mod profile;
pub mod project;
pub mod space;
pub mod task;
