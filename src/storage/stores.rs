//! Persistence collaborator contracts
//!
//! The core consumes persistence through these narrow traits; any backend
//! that satisfies them (document store, SQL, the bundled in-memory store)
//! can sit behind the engine.

use crate::core::models::{Comment, Notification, Project, Task, User, Workspace};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Outcome of an atomic root-comment insert
#[derive(Debug, Clone)]
pub enum RootInsert {
    /// Inserted as the first active root comment; the thread was empty
    Opened(Comment),
    /// Inserted into an already-open thread
    Appended(Comment),
    /// Rejected without a write: the thread was empty and `open_only` was set
    EmptyThread,
}

/// Read access to directory records (users, workspaces, projects, tasks)
///
/// Capability resolution is read-only; the core never writes these records.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Find a user by ID
    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Find a workspace by ID
    async fn find_workspace(&self, id: Uuid) -> Result<Option<Workspace>>;

    /// Find a project by ID
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>>;

    /// Find a task by ID
    async fn find_task(&self, id: Uuid) -> Result<Option<Task>>;
}

/// Comment persistence
#[async_trait]
pub trait CommentStore: Send + Sync + std::fmt::Debug {
    /// Insert a reply comment
    async fn insert_reply(&self, comment: Comment) -> Result<Comment>;

    /// Insert a root comment, deciding against the live thread state in one
    /// atomic step.
    ///
    /// The implementation MUST observe the count of active root comments on
    /// the task and perform the insert in the same critical section; a
    /// separate count-then-insert leaves a window in which two concurrent
    /// requests both observe an empty thread. Database-backed
    /// implementations are expected to use a conditional insert or a
    /// partial unique index on (task, first-root); the in-memory backend
    /// serializes through a single lock.
    ///
    /// With `open_only` set, the insert is rejected ([`RootInsert::EmptyThread`],
    /// no write) when the thread has no active roots at the serialization
    /// point.
    async fn insert_root(&self, comment: Comment, open_only: bool) -> Result<RootInsert>;

    /// Persist an in-place mutation (edit or soft-delete)
    async fn update(&self, comment: &Comment) -> Result<()>;

    /// Find a comment by ID; soft-deleted records are returned too, so ids
    /// stay resolvable as parent references
    async fn find(&self, id: Uuid) -> Result<Option<Comment>>;

    /// Live count of active root comments on a task
    async fn count_active_roots(&self, task_id: Uuid) -> Result<u64>;

    /// Live count of active replies under a parent comment
    async fn count_active_replies(&self, parent_id: Uuid) -> Result<u64>;

    /// Active root comments on a task, oldest first
    async fn list_active_roots(&self, task_id: Uuid) -> Result<Vec<Comment>>;

    /// Active replies under a parent comment, oldest first
    async fn list_active_replies(&self, parent_id: Uuid) -> Result<Vec<Comment>>;
}

/// Notification persistence
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug {
    /// Persist a notification
    async fn insert(&self, notification: Notification) -> Result<Notification>;

    /// Notifications for a recipient, newest first
    async fn list_for_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>>;

    /// Mark a notification as read
    async fn mark_read(&self, id: Uuid) -> Result<()>;
}
