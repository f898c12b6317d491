//! Task model

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// In review
    Review,
    /// Finished
    Done,
}

/// Task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Owning project
    pub project_id: Uuid,
    /// Category name within the project (validated at creation time)
    pub category: String,
    /// Task title
    pub title: String,
    /// Task description
    pub description: Option<String>,
    /// Assigned user
    pub assignee_id: Uuid,
    /// Creator
    pub created_by: Uuid,
    /// Status
    pub status: TaskStatus,
    /// Active flag
    pub is_active: bool,
}

impl Task {
    /// Create a new task in the `Todo` state
    pub fn new(
        project_id: Uuid,
        category: impl Into<String>,
        title: impl Into<String>,
        assignee_id: Uuid,
        created_by: Uuid,
    ) -> Self {
        Self {
            metadata: Metadata::new(),
            project_id,
            category: category.into(),
            title: title.into(),
            description: None,
            assignee_id,
            created_by,
            status: TaskStatus::Todo,
            is_active: true,
        }
    }

    /// Get task ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
