//! Core data models for the collaboration core
//!
//! Records mirror what the persistence collaborators store; `Capabilities`
//! (derived, never persisted) lives in [`crate::core::access`].

pub mod comment;
pub mod notification;
pub mod project;
pub mod task;
pub mod user;
pub mod workspace;

pub use comment::{Attachment, Comment};
pub use notification::{Notification, NotificationKind, RelatedEntities};
pub use project::{Category, CategoryMember, CategoryRole, Project};
pub use task::{Task, TaskStatus};
pub use user::{GlobalRole, User, UserStatus, WorkspaceMembership};
pub use workspace::{Workspace, WorkspaceMember, WorkspaceRole};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common metadata for all persisted models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Version for optimistic locking
    pub version: i64,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }
}

impl Metadata {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timestamp and increment version
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}
