//! Storage layer for the collaboration core
//!
//! Persistence is consumed through narrow collaborator traits; the crate
//! bundles an in-memory backend and a local attachment store.

pub mod files;
pub mod memory;
pub mod stores;

pub use files::{AttachmentStore, FileMetadata, LocalStorage};
pub use memory::MemoryStore;
pub use stores::{CommentStore, NotificationStore, RecordStore, RootInsert};

use crate::config::AttachmentStorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// The set of collaborators the core operates against
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Directory records (users, workspaces, projects, tasks)
    pub records: Arc<dyn RecordStore>,
    /// Comment persistence
    pub comments: Arc<dyn CommentStore>,
    /// Notification persistence
    pub notifications: Arc<dyn NotificationStore>,
    /// Attachment file storage
    pub attachments: Arc<dyn AttachmentStore>,
}

impl StorageLayer {
    /// Assemble a storage layer from explicit collaborators
    pub fn new(
        records: Arc<dyn RecordStore>,
        comments: Arc<dyn CommentStore>,
        notifications: Arc<dyn NotificationStore>,
        attachments: Arc<dyn AttachmentStore>,
    ) -> Self {
        Self {
            records,
            comments,
            notifications,
            attachments,
        }
    }

    /// Storage layer backed by one shared [`MemoryStore`]
    pub fn backed_by_memory(
        store: Arc<MemoryStore>,
        attachments: Arc<dyn AttachmentStore>,
    ) -> Self {
        Self {
            records: store.clone(),
            comments: store.clone(),
            notifications: store,
            attachments,
        }
    }

    /// In-memory records with the attachment backend named by configuration
    pub async fn in_memory(config: &AttachmentStorageConfig) -> Result<Self> {
        info!("Initializing in-memory storage layer");
        let attachments = files::from_config(config).await?;
        Ok(Self::backed_by_memory(Arc::new(MemoryStore::new()), attachments))
    }
}
