//! Workspace and workspace member models

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role within a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    /// Workspace owner
    Owner,
    /// Workspace admin
    Admin,
    /// Workspace lead
    Lead,
    /// Regular member
    Member,
    /// Read-only member
    Viewer,
}

impl std::fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceRole::Owner => write!(f, "owner"),
            WorkspaceRole::Admin => write!(f, "admin"),
            WorkspaceRole::Lead => write!(f, "lead"),
            WorkspaceRole::Member => write!(f, "member"),
            WorkspaceRole::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for WorkspaceRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "owner" => Ok(WorkspaceRole::Owner),
            "admin" => Ok(WorkspaceRole::Admin),
            "lead" => Ok(WorkspaceRole::Lead),
            "member" => Ok(WorkspaceRole::Member),
            "viewer" => Ok(WorkspaceRole::Viewer),
            _ => Err(format!("Invalid workspace role: {}", s)),
        }
    }
}

/// Workspace member entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceMember {
    /// User ID
    pub user_id: Uuid,
    /// Member role
    pub role: WorkspaceRole,
    /// Joined at
    pub joined_at: chrono::DateTime<chrono::Utc>,
    /// Invited by
    pub invited_by: Option<Uuid>,
}

/// Workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Workspace name
    pub name: String,
    /// Member list
    pub members: Vec<WorkspaceMember>,
    /// Archived flag
    pub archived: bool,
}

impl Workspace {
    /// Create a new workspace owned by `owner_id`
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            metadata: Metadata::new(),
            name: name.into(),
            members: vec![WorkspaceMember {
                user_id: owner_id,
                role: WorkspaceRole::Owner,
                joined_at: chrono::Utc::now(),
                invited_by: None,
            }],
            archived: false,
        }
    }

    /// Get workspace ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Member entry for a user, if any
    pub fn member(&self, user_id: Uuid) -> Option<&WorkspaceMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Add a member; replaces any existing entry for the same user
    pub fn add_member(&mut self, user_id: Uuid, role: WorkspaceRole, invited_by: Option<Uuid>) {
        self.remove_member(user_id);
        self.members.push(WorkspaceMember {
            user_id,
            role,
            joined_at: chrono::Utc::now(),
            invited_by,
        });
        self.metadata.touch();
    }

    /// Remove a member
    pub fn remove_member(&mut self, user_id: Uuid) {
        if let Some(pos) = self.members.iter().position(|m| m.user_id == user_id) {
            self.members.remove(pos);
            self.metadata.touch();
        }
    }
}
