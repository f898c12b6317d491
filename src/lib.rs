//! # taskforge-rs
//!
//! Collaboration core for multi-tenant project management. Workspaces hold
//! projects, projects hold categories of members, categories hold tasks,
//! and tasks carry threaded comments with attachments and notifications.
//! This crate owns the part with real design tension and leaves the CRUD
//! shell to its embedder:
//!
//! - **Hierarchical access control**: global, workspace, and category roles
//!   resolved per request into an additive-OR capability snapshot
//! - **Comment thread engine**: assignee-only first comment enforced by an
//!   atomic conditional insert (no count-then-insert window), role-gated
//!   replies, author-only edits and soft-deletes, live reply counts
//! - **Notification dispatch**: persisted records plus best-effort email,
//!   deduplicated and detached from the primary mutation
//!
//! Persistence, file storage, and email delivery are consumed through
//! narrow traits; an in-memory backend and a local attachment store are
//! bundled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskforge_rs::config::Config;
//! use taskforge_rs::storage::StorageLayer;
//! use taskforge_rs::CollaborationCore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let storage = StorageLayer::in_memory(&config.attachments).await?;
//!     let core = CollaborationCore::new(&config, storage)?;
//!
//!     // core.create_comment(user_id, task_id, NewComment::root("...")).await?;
//!     let _ = core;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::access::{Capabilities, MembershipResolver};
pub use crate::core::comments::{CommentEngine, NewComment, RootCommentView};
pub use crate::core::models::{Comment, Notification, NotificationKind, RelatedEntities};
pub use crate::core::notify::{Mailer, NotificationDispatcher};
pub use crate::storage::StorageLayer;
pub use crate::utils::error::{CoreError, Result};

use crate::config::Validate;
use crate::core::notify::{HttpMailer, NoopMailer};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Composition root wiring the resolver, comment engine, and dispatcher
/// over one storage layer.
#[derive(Debug, Clone)]
pub struct CollaborationCore {
    resolver: MembershipResolver,
    comments: CommentEngine,
    notifications: NotificationDispatcher,
}

impl CollaborationCore {
    /// Build the core from configuration and a storage layer.
    ///
    /// The mailer is constructed once here and injected into the
    /// dispatcher; when no email endpoint is configured, notifications
    /// still persist and the email leg becomes a no-op.
    pub fn new(config: &Config, storage: StorageLayer) -> Result<Self> {
        config.validate()?;
        info!("Creating collaboration core");

        let mailer: Arc<dyn Mailer> = match &config.notifications.email {
            Some(email) => Arc::new(HttpMailer::new(email)),
            None => Arc::new(NoopMailer),
        };

        let notifications = NotificationDispatcher::new(
            storage.notifications.clone(),
            storage.records.clone(),
            mailer,
            config.notifications.enabled,
        );
        let resolver = MembershipResolver::new(storage.records.clone());
        let comments = CommentEngine::new(
            resolver.clone(),
            storage.records.clone(),
            storage.comments.clone(),
            storage.attachments.clone(),
            notifications.clone(),
        );

        Ok(Self {
            resolver,
            comments,
            notifications,
        })
    }

    /// Resolve what `user_id` may do regarding `task_id`'s thread
    pub async fn resolve_capabilities(
        &self,
        user_id: Uuid,
        task_id: Uuid,
    ) -> Result<Capabilities> {
        self.resolver.resolve(user_id, task_id).await
    }

    /// Create a root comment or reply on a task
    pub async fn create_comment(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        request: NewComment,
    ) -> Result<Comment> {
        self.comments.create_comment(user_id, task_id, request).await
    }

    /// Edit a comment body (author-only)
    pub async fn edit_comment(
        &self,
        user_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        self.comments.edit_comment(user_id, comment_id, content).await
    }

    /// Soft-delete a comment (author-only)
    pub async fn delete_comment(&self, user_id: Uuid, comment_id: Uuid) -> Result<()> {
        self.comments.delete_comment(user_id, comment_id).await
    }

    /// Active root comments on a task with live reply counts
    pub async fn list_root_comments(&self, task_id: Uuid) -> Result<Vec<RootCommentView>> {
        self.comments.list_root_comments(task_id).await
    }

    /// Active replies under a parent comment
    pub async fn list_replies(&self, parent_id: Uuid) -> Result<Vec<Comment>> {
        self.comments.list_replies(parent_id).await
    }

    /// The notification dispatcher, for embedders firing their own kinds
    pub fn notifications(&self) -> &NotificationDispatcher {
        &self.notifications
    }
}
