//! Comment and attachment models

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File attached to a comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Storage file ID
    pub file_id: String,
    /// Original filename
    pub filename: String,
    /// MIME content type
    pub content_type: String,
    /// File size in bytes
    pub size: u64,
}

/// Task comment
///
/// `parent_id == None` marks a root comment. Comments are soft-deleted:
/// `is_active` flips to false and the record stays resolvable as a parent
/// reference for surviving replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Owning task
    pub task_id: Uuid,
    /// Author
    pub author_id: Uuid,
    /// Comment body
    pub content: String,
    /// Parent comment for replies
    pub parent_id: Option<Uuid>,
    /// Attached files
    pub attachments: Vec<Attachment>,
    /// Soft-delete flag
    pub is_active: bool,
    /// Whether the body has been edited
    pub is_edited: bool,
    /// When the body was last edited
    pub edited_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Comment {
    /// Create a root comment
    pub fn new_root(
        task_id: Uuid,
        author_id: Uuid,
        content: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            metadata: Metadata::new(),
            task_id,
            author_id,
            content: content.into(),
            parent_id: None,
            attachments,
            is_active: true,
            is_edited: false,
            edited_at: None,
        }
    }

    /// Create a reply to `parent_id`
    pub fn new_reply(
        task_id: Uuid,
        author_id: Uuid,
        parent_id: Uuid,
        content: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new_root(task_id, author_id, content, attachments)
        }
    }

    /// Get comment ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Whether this is a root comment
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Replace the body and record the edit
    pub fn apply_edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.is_edited = true;
        self.edited_at = Some(chrono::Utc::now());
        self.metadata.touch();
    }

    /// Soft-delete the comment
    pub fn soft_delete(&mut self) {
        self.is_active = false;
        self.metadata.touch();
    }
}
