//! User account and workspace membership models

use super::workspace::WorkspaceRole;
use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Global role, spanning all workspaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalRole {
    /// Regular member
    Member,
    /// Administrator
    Admin,
    /// Super administrator
    SuperAdmin,
}

impl std::fmt::Display for GlobalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobalRole::Member => write!(f, "member"),
            GlobalRole::Admin => write!(f, "admin"),
            GlobalRole::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

impl std::str::FromStr for GlobalRole {
    type Err = String;

    // Case-insensitive on purpose: upstream data carries mixed casings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(GlobalRole::Member),
            "admin" => Ok(GlobalRole::Admin),
            "super_admin" | "superadmin" => Ok(GlobalRole::SuperAdmin),
            _ => Err(format!("Invalid global role: {}", s)),
        }
    }
}

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Active user
    Active,
    /// Deactivated user
    Inactive,
    /// Suspended user
    Suspended,
}

/// A user's membership in one workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceMembership {
    /// Workspace ID
    pub workspace_id: Uuid,
    /// Role within that workspace
    pub role: WorkspaceRole,
    /// Joined at
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// Global role
    pub role: GlobalRole,
    /// Account status
    pub status: UserStatus,
    /// Workspace memberships
    pub memberships: Vec<WorkspaceMembership>,
    /// Currently selected workspace
    pub current_workspace: Option<Uuid>,
}

impl User {
    /// Create a new active member-level user
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            username: username.into(),
            email: email.into(),
            display_name: None,
            role: GlobalRole::Member,
            status: UserStatus::Active,
            memberships: vec![],
            current_workspace: None,
        }
    }

    /// Get user ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Check if user is active
    pub fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }

    /// Membership entry for a workspace, if any
    pub fn membership_in(&self, workspace_id: Uuid) -> Option<&WorkspaceMembership> {
        self.memberships
            .iter()
            .find(|m| m.workspace_id == workspace_id)
    }

    /// Record a workspace membership; replaces any existing entry
    pub fn join_workspace(&mut self, workspace_id: Uuid, role: WorkspaceRole) {
        self.leave_workspace(workspace_id);
        self.memberships.push(WorkspaceMembership {
            workspace_id,
            role,
            joined_at: chrono::Utc::now(),
        });
        self.metadata.touch();
    }

    /// Drop a workspace membership
    pub fn leave_workspace(&mut self, workspace_id: Uuid) {
        if let Some(pos) = self
            .memberships
            .iter()
            .position(|m| m.workspace_id == workspace_id)
        {
            self.memberships.remove(pos);
            if self.current_workspace == Some(workspace_id) {
                self.current_workspace = None;
            }
            self.metadata.touch();
        }
    }
}
