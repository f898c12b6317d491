//! Comment thread engine
//!
//! Enforces the thread-shape state machine (`Empty -> Open`, assignee-only
//! first root) and permission-gates every comment mutation. Creation is
//! all-or-nothing: no partial comment is ever visible.

use crate::core::access::{AccessContext, MembershipResolver};
use crate::core::models::{Attachment, Comment, NotificationKind, RelatedEntities, Task};
use crate::core::notify::NotificationDispatcher;
use crate::storage::{AttachmentStore, CommentStore, RecordStore, RootInsert};
use crate::utils::error::{CoreError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Upper bound on comment body length, in characters
pub const MAX_CONTENT_LEN: usize = 10_000;
/// Upper bound on attachments per comment
pub const MAX_ATTACHMENTS: usize = 10;

/// Input for creating a comment
///
/// Attachments arrive as already-stored descriptors; the upload path is
/// outside the core.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    /// Comment body
    pub content: String,
    /// Parent comment for replies; `None` creates a root comment
    pub parent_id: Option<Uuid>,
    /// Attached files
    pub attachments: Vec<Attachment>,
}

impl NewComment {
    /// Root comment with the given body
    pub fn root(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Reply to `parent_id` with the given body
    pub fn reply(parent_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }

    /// Attach files
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }
}

/// Comment thread engine
#[derive(Debug, Clone)]
pub struct CommentEngine {
    resolver: MembershipResolver,
    records: Arc<dyn RecordStore>,
    comments: Arc<dyn CommentStore>,
    attachments: Arc<dyn AttachmentStore>,
    dispatcher: NotificationDispatcher,
}

impl CommentEngine {
    /// Create an engine over the given collaborators
    pub fn new(
        resolver: MembershipResolver,
        records: Arc<dyn RecordStore>,
        comments: Arc<dyn CommentStore>,
        attachments: Arc<dyn AttachmentStore>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            resolver,
            records,
            comments,
            attachments,
            dispatcher,
        }
    }

    /// Create a root comment or reply on a task.
    ///
    /// Root comments on an empty thread are assignee-only; everything after
    /// that requires assignee, global admin, or category Lead. The empty-
    /// thread decision is taken atomically inside the comment store, so two
    /// concurrent requests can never both observe an empty thread.
    pub async fn create_comment(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        request: NewComment,
    ) -> Result<Comment> {
        let content = validate_content(&request.content)?;
        if request.attachments.len() > MAX_ATTACHMENTS {
            return Err(CoreError::validation(format!(
                "A comment may carry at most {} attachments",
                MAX_ATTACHMENTS
            )));
        }

        let ctx = self.resolver.resolve_context(user_id, task_id).await?;
        if !ctx.capabilities.can_comment() {
            return Err(CoreError::permission_denied(
                "only the assignee, a category lead, or a global admin may comment on this task",
            ));
        }

        let parent = match request.parent_id {
            Some(parent_id) => Some(self.load_parent(&ctx.task, parent_id).await?),
            None => None,
        };

        let created = match &parent {
            Some(parent) => {
                let comment = Comment::new_reply(
                    ctx.task.id(),
                    user_id,
                    parent.id(),
                    content,
                    request.attachments,
                );
                self.comments.insert_reply(comment).await?
            }
            None => self.create_root(user_id, &ctx, content, request.attachments).await?,
        };

        info!(
            "User {} created comment {} on task {}",
            user_id,
            created.id(),
            task_id
        );
        self.dispatch_created(&ctx.task, &created, parent.as_ref().map(|p| p.author_id));
        Ok(created)
    }

    /// Edit a comment body. Author-only, regardless of any role.
    pub async fn edit_comment(
        &self,
        user_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let content = validate_content(content)?;
        let mut comment = self.load_active(comment_id).await?;

        if comment.author_id != user_id {
            return Err(CoreError::permission_denied(
                "only the author may edit a comment",
            ));
        }

        comment.apply_edit(content);
        self.comments.update(&comment).await?;
        debug!("User {} edited comment {}", user_id, comment_id);
        Ok(comment)
    }

    /// Soft-delete a comment. Author-only, regardless of any role.
    ///
    /// Attachment files are removed best-effort; a storage failure is
    /// logged and never aborts the soft-delete. Replies are not cascaded.
    pub async fn delete_comment(&self, user_id: Uuid, comment_id: Uuid) -> Result<()> {
        let mut comment = self.load_active(comment_id).await?;

        if comment.author_id != user_id {
            return Err(CoreError::permission_denied(
                "only the author may delete a comment",
            ));
        }

        for attachment in &comment.attachments {
            if let Err(e) = self.attachments.delete(&attachment.file_id).await {
                warn!(
                    "Failed to delete attachment {} of comment {}: {}",
                    attachment.file_id, comment_id, e
                );
            }
        }

        comment.soft_delete();
        self.comments.update(&comment).await?;
        info!("User {} deleted comment {}", user_id, comment_id);
        Ok(())
    }

    pub(super) fn records(&self) -> &Arc<dyn RecordStore> {
        &self.records
    }

    pub(super) fn comments(&self) -> &Arc<dyn CommentStore> {
        &self.comments
    }

    async fn create_root(
        &self,
        user_id: Uuid,
        ctx: &AccessContext,
        content: String,
        attachments: Vec<Attachment>,
    ) -> Result<Comment> {
        let comment = Comment::new_root(ctx.task.id(), user_id, content, attachments);
        // Non-assignees may only append to an open thread; the store decides
        // against the live state in one critical section.
        let open_only = !ctx.capabilities.can_open_thread();

        match self.comments.insert_root(comment, open_only).await? {
            RootInsert::Opened(comment) => {
                debug!("User {} opened the thread on task {}", user_id, ctx.task.id());
                Ok(comment)
            }
            RootInsert::Appended(comment) => Ok(comment),
            RootInsert::EmptyThread => Err(CoreError::permission_denied(
                "the first comment on a task must come from its assignee",
            )),
        }
    }

    async fn load_parent(&self, task: &Task, parent_id: Uuid) -> Result<Comment> {
        self.comments
            .find(parent_id)
            .await?
            .filter(|parent| parent.is_active && parent.task_id == task.id())
            .ok_or_else(|| CoreError::not_found(format!("parent comment {}", parent_id)))
    }

    async fn load_active(&self, comment_id: Uuid) -> Result<Comment> {
        self.comments
            .find(comment_id)
            .await?
            .filter(|comment| comment.is_active)
            .ok_or_else(|| CoreError::not_found(format!("comment {}", comment_id)))
    }

    fn dispatch_created(&self, task: &Task, comment: &Comment, parent_author: Option<Uuid>) {
        let mut recipients = vec![task.assignee_id, task.created_by];
        if let Some(author) = parent_author {
            recipients.push(author);
        }
        recipients.retain(|recipient| *recipient != comment.author_id);

        let kind = if comment.is_root() {
            NotificationKind::CommentAdded
        } else {
            NotificationKind::CommentReply
        };
        let related =
            RelatedEntities::for_task(task.project_id, task.id()).with_comment(comment.id());

        self.dispatcher.dispatch(
            recipients,
            kind,
            format!("New comment on \"{}\"", task.title),
            excerpt(&comment.content),
            related,
        );
    }
}

fn validate_content(content: &str) -> Result<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("comment content cannot be empty"));
    }
    if trimmed.chars().count() > MAX_CONTENT_LEN {
        return Err(CoreError::validation(format!(
            "comment content exceeds {} characters",
            MAX_CONTENT_LEN
        )));
    }
    Ok(trimmed.to_string())
}

fn excerpt(content: &str) -> String {
    const LIMIT: usize = 140;
    if content.chars().count() <= LIMIT {
        content.to_string()
    } else {
        let cut: String = content.chars().take(LIMIT).collect();
        format!("{}…", cut.trim_end())
    }
}
