//! Bundled in-memory backend
//!
//! Used by the test suites and by embedders that want the core without an
//! external database. Comments live behind one lock so the root-insert
//! decision and the write happen in a single critical section.

use crate::core::models::{Comment, Notification, Project, Task, User, Workspace};
use crate::utils::error::{CoreError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::stores::{CommentStore, NotificationStore, RecordStore, RootInsert};

/// In-memory store implementing every persistence contract
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    workspaces: DashMap<Uuid, Workspace>,
    projects: DashMap<Uuid, Project>,
    tasks: DashMap<Uuid, Task>,
    // Single lock: insert_root must count and insert atomically.
    comments: RwLock<HashMap<Uuid, Comment>>,
    notifications: DashMap<Uuid, Notification>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a user record
    pub fn put_user(&self, user: User) {
        self.users.insert(user.id(), user);
    }

    /// Seed or replace a workspace record
    pub fn put_workspace(&self, workspace: Workspace) {
        self.workspaces.insert(workspace.id(), workspace);
    }

    /// Seed or replace a project record
    pub fn put_project(&self, project: Project) {
        self.projects.insert(project.id(), project);
    }

    /// Seed or replace a task record
    pub fn put_task(&self, task: Task) {
        self.tasks.insert(task.id(), task);
    }

    fn active_root_count(comments: &HashMap<Uuid, Comment>, task_id: Uuid) -> u64 {
        comments
            .values()
            .filter(|c| c.task_id == task_id && c.is_root() && c.is_active)
            .count() as u64
    }

    fn sorted_oldest_first(mut comments: Vec<Comment>) -> Vec<Comment> {
        comments.sort_by(|a, b| {
            a.metadata
                .created_at
                .cmp(&b.metadata.created_at)
                .then_with(|| a.id().cmp(&b.id()))
        });
        comments
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_workspace(&self, id: Uuid) -> Result<Option<Workspace>> {
        Ok(self.workspaces.get(&id).map(|r| r.value().clone()))
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>> {
        Ok(self.projects.get(&id).map(|r| r.value().clone()))
    }

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).map(|r| r.value().clone()))
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert_reply(&self, comment: Comment) -> Result<Comment> {
        debug!("Inserting reply {} on task {}", comment.id(), comment.task_id);
        self.comments.write().insert(comment.id(), comment.clone());
        Ok(comment)
    }

    async fn insert_root(&self, comment: Comment, open_only: bool) -> Result<RootInsert> {
        let mut comments = self.comments.write();
        let existing = Self::active_root_count(&comments, comment.task_id);

        if existing == 0 && open_only {
            debug!(
                "Rejecting root comment on empty thread for task {}",
                comment.task_id
            );
            return Ok(RootInsert::EmptyThread);
        }

        comments.insert(comment.id(), comment.clone());
        if existing == 0 {
            debug!("Opened thread on task {}", comment.task_id);
            Ok(RootInsert::Opened(comment))
        } else {
            Ok(RootInsert::Appended(comment))
        }
    }

    async fn update(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.comments.write();
        match comments.get_mut(&comment.id()) {
            Some(slot) => {
                *slot = comment.clone();
                Ok(())
            }
            None => Err(CoreError::not_found(format!(
                "comment {}",
                comment.id()
            ))),
        }
    }

    async fn find(&self, id: Uuid) -> Result<Option<Comment>> {
        Ok(self.comments.read().get(&id).cloned())
    }

    async fn count_active_roots(&self, task_id: Uuid) -> Result<u64> {
        Ok(Self::active_root_count(&self.comments.read(), task_id))
    }

    async fn count_active_replies(&self, parent_id: Uuid) -> Result<u64> {
        let comments = self.comments.read();
        Ok(comments
            .values()
            .filter(|c| c.parent_id == Some(parent_id) && c.is_active)
            .count() as u64)
    }

    async fn list_active_roots(&self, task_id: Uuid) -> Result<Vec<Comment>> {
        let comments = self.comments.read();
        let roots = comments
            .values()
            .filter(|c| c.task_id == task_id && c.is_root() && c.is_active)
            .cloned()
            .collect();
        Ok(Self::sorted_oldest_first(roots))
    }

    async fn list_active_replies(&self, parent_id: Uuid) -> Result<Vec<Comment>> {
        let comments = self.comments.read();
        let replies = comments
            .values()
            .filter(|c| c.parent_id == Some(parent_id) && c.is_active)
            .cloned()
            .collect();
        Ok(Self::sorted_oldest_first(replies))
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn insert(&self, notification: Notification) -> Result<Notification> {
        self.notifications
            .insert(notification.id(), notification.clone());
        Ok(notification)
    }

    async fn list_for_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>> {
        let mut list: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|entry| entry.value().recipient_id == recipient_id)
            .map(|entry| entry.value().clone())
            .collect();
        list.sort_by(|a, b| {
            b.metadata
                .created_at
                .cmp(&a.metadata.created_at)
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(list)
    }

    async fn mark_read(&self, id: Uuid) -> Result<()> {
        match self.notifications.get_mut(&id) {
            Some(mut entry) => {
                entry.mark_read();
                Ok(())
            }
            None => Err(CoreError::not_found(format!("notification {}", id))),
        }
    }
}
