//! Role model
//!
//! Pure predicates over already-fetched role values. No I/O lives here;
//! the resolver feeds these from the records it loads.

use crate::core::models::{CategoryMember, CategoryRole, GlobalRole, WorkspaceRole};
use uuid::Uuid;

/// Whether a global role carries administrator rights
pub fn is_global_admin(role: GlobalRole) -> bool {
    matches!(role, GlobalRole::Admin | GlobalRole::SuperAdmin)
}

/// Whether a workspace role carries owner/admin rights
pub fn is_workspace_owner_or_admin(role: WorkspaceRole) -> bool {
    matches!(role, WorkspaceRole::Owner | WorkspaceRole::Admin)
}

/// Whether `user_id` holds the Lead role in the given category member list
pub fn is_category_lead(members: &[CategoryMember], user_id: Uuid) -> bool {
    members
        .iter()
        .any(|m| m.user_id == user_id && m.role == CategoryRole::Lead)
}
