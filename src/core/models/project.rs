//! Project, category, and category member models

use super::Metadata;
use crate::utils::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role within a project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRole {
    /// Category lead
    Lead,
    /// Regular member
    Member,
    /// Read-only member
    Viewer,
}

impl std::fmt::Display for CategoryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryRole::Lead => write!(f, "lead"),
            CategoryRole::Member => write!(f, "member"),
            CategoryRole::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for CategoryRole {
    type Err = String;

    // Upstream data mixes "Lead" and "lead"; normalize at the boundary.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lead" => Ok(CategoryRole::Lead),
            "member" => Ok(CategoryRole::Member),
            "viewer" => Ok(CategoryRole::Viewer),
            _ => Err(format!("Invalid category role: {}", s)),
        }
    }
}

/// Category member entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMember {
    /// User ID
    pub user_id: Uuid,
    /// Member role
    pub role: CategoryRole,
}

/// Project category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within the project
    pub name: String,
    /// Member list
    pub members: Vec<CategoryMember>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: vec![],
        }
    }

    /// Member entry for a user, if any
    pub fn member(&self, user_id: Uuid) -> Option<&CategoryMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Add a member; replaces any existing entry for the same user
    pub fn add_member(&mut self, user_id: Uuid, role: CategoryRole) {
        self.members.retain(|m| m.user_id != user_id);
        self.members.push(CategoryMember { user_id, role });
    }
}

/// Project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Owning workspace
    pub workspace_id: Uuid,
    /// Creator
    pub created_by: Uuid,
    /// Project name
    pub name: String,
    /// Ordered category list
    pub categories: Vec<Category>,
}

impl Project {
    /// Create a project with no categories
    pub fn new(workspace_id: Uuid, created_by: Uuid, name: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            workspace_id,
            created_by,
            name: name.into(),
            categories: vec![],
        }
    }

    /// Get project ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Mutable category by name
    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Whether the project carries a category with this name
    pub fn has_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Append a category; names must stay unique within the project
    pub fn add_category(&mut self, category: Category) -> Result<()> {
        if self.has_category(&category.name) {
            return Err(CoreError::validation(format!(
                "Duplicate category name: {}",
                category.name
            )));
        }
        self.categories.push(category);
        self.metadata.touch();
        Ok(())
    }
}
