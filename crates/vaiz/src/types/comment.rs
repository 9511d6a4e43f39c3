//! Comments on documents, and reactions to them.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A comment attached to a document (a task description, milestone or
/// standalone document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Document the comment belongs to
    pub document_id: String,

    /// Author member id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    /// HTML content
    pub content: String,

    /// Attached files, as sent by the server
    #[serde(default)]
    pub files: Vec<Value>,

    /// Reactions
    #[serde(default)]
    pub reactions: Vec<CommentReaction>,

    /// Comment this one replies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// Whether attachments were removed since posting
    #[serde(default)]
    pub has_removed_files: bool,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Last edit timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,

    /// Deletion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Whether the comment has been deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// One emoji on a comment and the members who used it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReaction {
    /// Reaction record id
    #[serde(rename = "_id")]
    pub id: String,
    /// Emoji id, e.g. `1f44d`
    #[serde(rename = "id")]
    pub emoji_id: String,
    /// Emoji character
    pub native: String,
    /// Members who reacted
    #[serde(default)]
    pub member_ids: Vec<String>,
}

/// Request body for `postComment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct PostCommentRequest {
    /// HTML content
    pub content: String,

    /// Previously uploaded files to attach
    #[serde(default)]
    #[builder(default)]
    pub file_ids: Vec<String>,

    /// Document to comment on
    pub document_id: String,

    /// Comment to reply to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub reply_to: Option<String>,
}

impl PostCommentRequest {
    /// Create a builder for constructing a PostCommentRequest.
    pub fn builder() -> PostCommentRequestBuilder {
        PostCommentRequestBuilder::default()
    }
}

/// Request body for `editComment`.
///
/// `order_file_ids` lists the attachments to keep, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct EditCommentRequest {
    /// New HTML content
    pub content: String,

    /// Comment to edit
    pub comment_id: String,

    /// Files to attach
    #[serde(default)]
    #[builder(default)]
    pub add_file_ids: Vec<String>,

    /// Attachments to keep, in order
    #[serde(default)]
    #[builder(default)]
    pub order_file_ids: Vec<String>,

    /// Attachments to drop
    #[serde(default)]
    #[builder(default)]
    pub remove_file_ids: Vec<String>,
}

impl EditCommentRequest {
    /// Create a builder for constructing an EditCommentRequest.
    pub fn builder() -> EditCommentRequestBuilder {
        EditCommentRequestBuilder::default()
    }
}

/// Request body for `reactToComment`: the emoji in emoji-picker form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactToCommentRequest {
    /// Comment to react to
    pub comment_id: String,
    /// Emoji id, e.g. `1f44d`
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Emoji character
    pub native: String,
    /// Unicode code point(s)
    pub unified: String,
    /// Search keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Shortcode, e.g. `:thumbsup:`
    pub shortcodes: String,
}

/// Common reactions, with the emoji metadata the server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentReactionType {
    /// 👍
    ThumbsUp,
    /// ❤️
    Heart,
    /// 😂
    Laughing,
    /// 😮
    Wow,
    /// 😢
    Crying,
    /// 😡
    Angry,
    /// 🎉
    Party,
}

impl CommentReactionType {
    /// Build the `reactToComment` body for this reaction on `comment_id`.
    pub fn request_for(self, comment_id: impl Into<String>) -> ReactToCommentRequest {
        let (id, name, native, keywords, shortcodes): (&str, &str, &str, &[&str], &str) =
            match self {
                Self::ThumbsUp => (
                    "1f44d",
                    "Thumbs Up Sign",
                    "\u{1f44d}",
                    &[
                        "thumbsup", "yes", "awesome", "good", "agree", "accept", "cool", "hand",
                        "like",
                    ],
                    ":thumbsup:",
                ),
                Self::Heart => (
                    "2764-fe0f",
                    "Red Heart",
                    "\u{2764}\u{fe0f}",
                    &["love", "like", "affection", "valentines", "infatuation", "crush", "heart"],
                    ":heart:",
                ),
                Self::Laughing => (
                    "1f602",
                    "Face with Tears of Joy",
                    "\u{1f602}",
                    &["face", "tears", "joy", "laugh", "happy", "funny", "haha", "lol"],
                    ":joy:",
                ),
                Self::Wow => (
                    "1f62e",
                    "Face with Open Mouth",
                    "\u{1f62e}",
                    &["face", "surprise", "impressed", "wow", "whoa", "amazed", "gasp"],
                    ":open_mouth:",
                ),
                Self::Crying => (
                    "1f622",
                    "Crying Face",
                    "\u{1f622}",
                    &["face", "tears", "sad", "depressed", "upset", "cry"],
                    ":cry:",
                ),
                Self::Angry => (
                    "1f621",
                    "Pouting Face",
                    "\u{1f621}",
                    &["mad", "face", "annoyed", "frustrated", "pouting", "angry"],
                    ":rage:",
                ),
                Self::Party => (
                    "1f389",
                    "Party Popper",
                    "\u{1f389}",
                    &["party", "congratulations", "birthday", "celebration", "tada"],
                    ":tada:",
                ),
            };

        ReactToCommentRequest {
            comment_id: comment_id.into(),
            id: id.to_string(),
            name: name.to_string(),
            native: native.to_string(),
            unified: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            shortcodes: shortcodes.to_string(),
        }
    }
}

/// Payload of `postComment`, `editComment` and `deleteComment`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentResponse {
    /// The comment after the change
    pub comment: Comment,
}

/// Payload of `getComments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentsResponse {
    /// Comments on the document
    pub comments: Vec<Comment>,
}

/// Payload of `reactToComment`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReactionsResponse {
    /// Every reaction on the comment after the change
    pub reactions: Vec<CommentReaction>,
}
