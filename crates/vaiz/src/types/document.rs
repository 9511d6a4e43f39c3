//! Documents: standalone pages and the description bodies of tasks and
//! milestones.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::Kind;

/// Document metadata. The content itself is fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Title
    #[serde(default)]
    pub title: String,

    /// Scope the document belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,

    /// Id of the space, project or member owning the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_id: Option<String>,

    /// Content size in bytes
    #[serde(default)]
    pub size: u64,

    /// Creator member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Members who edited the document
    #[serde(default)]
    pub contributor_ids: Vec<String>,

    /// Follower id → role
    #[serde(default)]
    pub followers: HashMap<String, String>,

    /// Parent document id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_document: Option<String>,

    /// Archive timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Deletion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request body for `getDocuments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentsRequest {
    /// Scope to list
    pub kind: Kind,
    /// Id of the space, project or member
    pub kind_id: String,
}

impl GetDocumentsRequest {
    /// List the documents of `kind_id`.
    pub fn new(kind: Kind, kind_id: impl Into<String>) -> Self {
        Self {
            kind,
            kind_id: kind_id.into(),
        }
    }
}

/// Request body for `createDocument`.
///
/// ```
/// use vaiz::{CreateDocumentRequest, Kind};
///
/// let request = CreateDocumentRequest::builder()
///     .kind(Kind::Space)
///     .kind_id("space-id")
///     .title("Meeting notes")
///     .build()?;
/// assert_eq!(request.index, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Scope of the new document
    pub kind: Kind,

    /// Id of the space, project or member
    pub kind_id: String,

    /// Title
    pub title: String,

    /// Position in the document list
    #[serde(default)]
    #[builder(default)]
    pub index: u32,

    /// Parent document id, for nested documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub parent_document: Option<String>,
}

impl CreateDocumentRequest {
    /// Create a builder for constructing a CreateDocumentRequest.
    pub fn builder() -> CreateDocumentRequestBuilder {
        CreateDocumentRequestBuilder::default()
    }
}

/// Request body for `editDocument`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDocumentRequest {
    /// Document to rename
    pub document_id: String,
    /// New title
    pub title: String,
}

/// Payload of `getDocuments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentsResponse {
    /// Documents in the requested scope
    pub documents: Vec<Document>,
}

/// Payload of `createDocument` and `editDocument`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentResponse {
    /// The document
    pub document: Document,
}

/// Payload of `replaceDocument`; the server sends no data back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ReplaceDocumentResponse {}

/// Payload of `getJSONDocument`: the document body as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub(crate) struct DocumentBodyPayload {
    #[serde(default)]
    pub json: Option<String>,
}
