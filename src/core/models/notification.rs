//! Notification model

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A comment was added to a task thread
    CommentAdded,
    /// A reply landed under a comment
    CommentReply,
    /// A task was assigned
    TaskAssigned,
    /// A task changed
    TaskUpdated,
    /// An invitation to a workspace
    WorkspaceInvite,
}

/// Entities a notification points back at
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedEntities {
    /// Workspace ID
    pub workspace_id: Option<Uuid>,
    /// Project ID
    pub project_id: Option<Uuid>,
    /// Task ID
    pub task_id: Option<Uuid>,
    /// Comment ID
    pub comment_id: Option<Uuid>,
}

impl RelatedEntities {
    /// Reference a task within its project
    pub fn for_task(project_id: Uuid, task_id: Uuid) -> Self {
        Self {
            project_id: Some(project_id),
            task_id: Some(task_id),
            ..Self::default()
        }
    }

    /// Also reference a comment
    pub fn with_comment(mut self, comment_id: Uuid) -> Self {
        self.comment_id = Some(comment_id);
        self
    }
}

/// Persisted notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Recipient user
    pub recipient_id: Uuid,
    /// Kind
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Message body
    pub message: String,
    /// Entities this notification refers to
    pub related: RelatedEntities,
    /// Read flag
    pub read: bool,
}

impl Notification {
    /// Create an unread notification
    pub fn new(
        recipient_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        related: RelatedEntities,
    ) -> Self {
        Self {
            metadata: Metadata::new(),
            recipient_id,
            kind,
            title: title.into(),
            message: message.into(),
            related,
            read: false,
        }
    }

    /// Get notification ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Mark as read
    pub fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
            self.metadata.touch();
        }
    }
}
