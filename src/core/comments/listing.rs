//! Thread listings
//!
//! Root comments come back oldest-first ("chat" ordering) with reply
//! counts computed live against the store, never from a stored counter.

use crate::core::models::Comment;
use crate::utils::error::{CoreError, Result};
use serde::Serialize;
use uuid::Uuid;

use super::engine::CommentEngine;

/// Root comment annotated with its live reply count
#[derive(Debug, Clone, Serialize)]
pub struct RootCommentView {
    /// The root comment
    #[serde(flatten)]
    pub comment: Comment,
    /// Active replies under this root
    pub reply_count: u64,
    /// Whether any active reply exists
    pub has_replies: bool,
}

impl CommentEngine {
    /// Active root comments on a task, oldest first, with reply counts.
    pub async fn list_root_comments(&self, task_id: Uuid) -> Result<Vec<RootCommentView>> {
        self.records()
            .find_task(task_id)
            .await?
            .filter(|task| task.is_active)
            .ok_or_else(|| CoreError::not_found(format!("task {}", task_id)))?;

        let roots = self.comments().list_active_roots(task_id).await?;
        let mut views = Vec::with_capacity(roots.len());
        for root in roots {
            let reply_count = self.comments().count_active_replies(root.id()).await?;
            views.push(RootCommentView {
                has_replies: reply_count > 0,
                reply_count,
                comment: root,
            });
        }
        Ok(views)
    }

    /// Active replies under a parent comment, oldest first.
    ///
    /// The parent must be resolvable but may itself be soft-deleted;
    /// deletion does not cascade and surviving replies stay listable.
    pub async fn list_replies(&self, parent_id: Uuid) -> Result<Vec<Comment>> {
        self.comments()
            .find(parent_id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("parent comment {}", parent_id)))?;

        self.comments().list_active_replies(parent_id).await
    }
}
