//! Documents API endpoint

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{Resource, endpoints};
use crate::error::{Error, Result};
use crate::http::BaseClient;
use crate::types::{
    CreateDocumentRequest, DocumentBodyPayload, DocumentResponse, DocumentsResponse,
    EditDocumentRequest, GetDocumentsRequest, ReplaceDocumentResponse,
};

/// Documents API resource.
#[derive(Debug, Clone)]
pub struct Documents {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentIdBody<'a> {
    document_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplaceDocumentBody<'a> {
    document_id: &'a str,
    description: &'a str,
}

impl Documents {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// List the documents of a space, project or member.
    pub async fn get_documents(&self, request: &GetDocumentsRequest) -> Result<DocumentsResponse> {
        self.base.request(endpoints::GET_DOCUMENTS, request).await
    }

    /// Create an empty document.
    pub async fn create_document(
        &self,
        request: &CreateDocumentRequest,
    ) -> Result<DocumentResponse> {
        self.base.request(endpoints::CREATE_DOCUMENT, request).await
    }

    /// Rename a document.
    pub async fn edit_document(&self, request: &EditDocumentRequest) -> Result<DocumentResponse> {
        self.base.request(endpoints::EDIT_DOCUMENT, request).await
    }

    /// Replace a document's whole content with plain text.
    pub async fn replace_document(
        &self,
        document_id: &str,
        description: &str,
    ) -> Result<ReplaceDocumentResponse> {
        self.base
            .request(
                endpoints::REPLACE_DOCUMENT,
                &ReplaceDocumentBody {
                    document_id,
                    description,
                },
            )
            .await
    }

    /// Fetch a document body (a task description or standalone document) as
    /// JSON.
    ///
    /// The server sends the body as a JSON-encoded string. A missing body
    /// yields an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if the body string is not valid JSON.
    pub async fn get_document_body(&self, document_id: &str) -> Result<Value> {
        let payload: DocumentBodyPayload = self
            .base
            .request(endpoints::GET_JSON_DOCUMENT, &DocumentIdBody { document_id })
            .await?;

        match payload.json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| Error::Schema(format!("document body is not valid JSON: {}", e))),
            None => {
                debug!(document_id, "Document has no body");
                Ok(Value::Object(Map::new()))
            }
        }
    }
}

impl Resource for Documents {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
