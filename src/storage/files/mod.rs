//! Attachment file storage
//!
//! The comment engine only deletes attachment files (cleanup on comment
//! soft-delete); the upload path shares the same backend from outside the
//! core.

mod local;
mod types;

pub use local::LocalStorage;
pub use types::FileMetadata;

use crate::config::AttachmentStorageConfig;
use crate::utils::error::{CoreError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Attachment storage contract
#[async_trait]
pub trait AttachmentStore: Send + Sync + std::fmt::Debug {
    /// Store a file and return its metadata
    async fn store(&self, filename: &str, content: &[u8]) -> Result<FileMetadata>;

    /// Retrieve file content by ID
    async fn get(&self, file_id: &str) -> Result<Vec<u8>>;

    /// Delete a file by ID
    async fn delete(&self, file_id: &str) -> Result<()>;

    /// Check if a file exists
    async fn exists(&self, file_id: &str) -> Result<bool>;

    /// Get file metadata
    async fn metadata(&self, file_id: &str) -> Result<FileMetadata>;
}

/// Build the attachment backend named by the configuration
pub async fn from_config(config: &AttachmentStorageConfig) -> Result<Arc<dyn AttachmentStore>> {
    match config.storage_type.as_str() {
        "local" => {
            let path = config
                .local_path
                .as_ref()
                .ok_or_else(|| CoreError::config("Local path not specified"))?;
            Ok(Arc::new(LocalStorage::new(path).await?))
        }
        other => Err(CoreError::config(format!(
            "Unsupported attachment storage type: {}",
            other
        ))),
    }
}
