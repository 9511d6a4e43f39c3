//! Comments API endpoint

use std::sync::Arc;

use serde::Serialize;

use super::{Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::{
    CommentReactionType, CommentResponse, CommentsResponse, EditCommentRequest,
    PostCommentRequest, ReactToCommentRequest, ReactionsResponse,
};

/// Comments API resource.
///
/// Comments hang off documents: a task's or milestone's `document` id, or a
/// standalone document.
#[derive(Debug, Clone)]
pub struct Comments {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentIdBody<'a> {
    document_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentIdBody<'a> {
    comment_id: &'a str,
}

impl Comments {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Post a comment on a document.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use vaiz::{Client, PostCommentRequest};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let task = client.tasks().get_task("PRJ-12").await?.task;
    /// let request = PostCommentRequest::builder()
    ///     .document_id(task.document.unwrap_or_default())
    ///     .content("<p>Looks good</p>")
    ///     .build()?;
    ///
    /// let posted = client.comments().post_comment(&request).await?;
    /// println!("Comment {}", posted.comment.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post_comment(&self, request: &PostCommentRequest) -> Result<CommentResponse> {
        self.base.request(endpoints::POST_COMMENT, request).await
    }

    /// Edit a comment's content and attachments.
    pub async fn edit_comment(&self, request: &EditCommentRequest) -> Result<CommentResponse> {
        self.base.request(endpoints::EDIT_COMMENT, request).await
    }

    /// Delete a comment. The payload is the comment with `deleted_at` set.
    pub async fn delete_comment(&self, comment_id: &str) -> Result<CommentResponse> {
        self.base
            .request(endpoints::DELETE_COMMENT, &CommentIdBody { comment_id })
            .await
    }

    /// List the comments on a document.
    pub async fn get_comments(&self, document_id: &str) -> Result<CommentsResponse> {
        self.base
            .request(endpoints::GET_COMMENTS, &DocumentIdBody { document_id })
            .await
    }

    /// React to a comment with one of the common reactions.
    pub async fn add_reaction(
        &self,
        comment_id: &str,
        reaction: CommentReactionType,
    ) -> Result<ReactionsResponse> {
        self.react_to_comment(&reaction.request_for(comment_id)).await
    }

    /// React to a comment with any emoji.
    pub async fn react_to_comment(
        &self,
        request: &ReactToCommentRequest,
    ) -> Result<ReactionsResponse> {
        self.base.request(endpoints::REACT_TO_COMMENT, request).await
    }
}

impl Resource for Comments {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
