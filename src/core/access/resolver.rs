//! Membership resolver
//!
//! Loads the minimal record set for a (user, task) pair and assembles a
//! [`Capabilities`] snapshot. Read-only: resolution performs no writes and
//! has no side effects.

use crate::core::models::Task;
use crate::storage::RecordStore;
use crate::utils::error::{CoreError, Result};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::capabilities::Capabilities;
use super::roles;

/// Resolution result carrying the task alongside the capabilities, so
/// engine callers don't fetch the task twice.
#[derive(Debug, Clone)]
pub(crate) struct AccessContext {
    pub capabilities: Capabilities,
    pub task: Task,
}

/// Resolves (user, task) pairs to capability snapshots
#[derive(Debug, Clone)]
pub struct MembershipResolver {
    records: Arc<dyn RecordStore>,
}

impl MembershipResolver {
    /// Create a resolver over the given directory records
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }

    /// Resolve the capabilities of `user_id` regarding `task_id`.
    ///
    /// Fails with `NotFound` when the task (or its project/workspace chain,
    /// or the user) cannot be located, and with `Forbidden` when the user
    /// has no standing in the task's workspace at all, so callers can always
    /// tell "no task" apart from "no access". Global admins resolve in any
    /// workspace.
    pub async fn resolve(&self, user_id: Uuid, task_id: Uuid) -> Result<Capabilities> {
        self.resolve_context(user_id, task_id)
            .await
            .map(|ctx| ctx.capabilities)
    }

    pub(crate) async fn resolve_context(
        &self,
        user_id: Uuid,
        task_id: Uuid,
    ) -> Result<AccessContext> {
        debug!("Resolving capabilities for user {} on task {}", user_id, task_id);

        let task = self
            .records
            .find_task(task_id)
            .await?
            .filter(|t| t.is_active)
            .ok_or_else(|| CoreError::not_found(format!("task {}", task_id)))?;

        let project = self
            .records
            .find_project(task.project_id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("project {}", task.project_id)))?;

        let workspace = self
            .records
            .find_workspace(project.workspace_id)
            .await?
            .ok_or_else(|| {
                CoreError::not_found(format!("workspace {}", project.workspace_id))
            })?;

        let user = self
            .records
            .find_user(user_id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("user {}", user_id)))?;

        let is_global_admin = roles::is_global_admin(user.role);

        // Membership may be recorded on either side of the relation.
        let is_workspace_member = user.membership_in(workspace.id()).is_some()
            || workspace.member(user_id).is_some();
        if !is_global_admin && !is_workspace_member {
            return Err(CoreError::forbidden(format!(
                "user {} has no membership in workspace {}",
                user_id,
                workspace.id()
            )));
        }

        let is_category_lead = project
            .category(&task.category)
            .map(|category| roles::is_category_lead(&category.members, user_id))
            .unwrap_or(false);

        let capabilities = Capabilities {
            is_global_admin,
            is_assignee: task.assignee_id == user_id,
            is_category_lead,
            is_creator: task.created_by == user_id,
        };
        debug!(
            "Resolved capabilities for user {} on task {}: {:?}",
            user_id, task_id, capabilities
        );

        Ok(AccessContext { capabilities, task })
    }
}
