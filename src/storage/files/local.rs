//! Local file system attachment storage

use crate::utils::error::{CoreError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

use super::types::FileMetadata;
use super::AttachmentStore;

/// Local attachment storage
///
/// Files land under `base_path/<first two id chars>/<id>` with a JSON
/// metadata sidecar next to each file.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage instance
    pub async fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                CoreError::file_storage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        info!("Local attachment storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// Get file path for a given file ID
    fn file_path(&self, file_id: &str) -> PathBuf {
        // First two characters as subdirectory for better distribution
        let subdir = &file_id[..2.min(file_id.len())];
        self.base_path.join(subdir).join(file_id)
    }

    /// Get metadata path for a given file ID
    fn metadata_path(&self, file_id: &str) -> PathBuf {
        let subdir = &file_id[..2.min(file_id.len())];
        self.base_path
            .join(subdir)
            .join(format!("{}.meta", file_id))
    }

    async fn write_metadata(&self, file_id: &str, metadata: &FileMetadata) -> Result<()> {
        let metadata_path = self.metadata_path(file_id);
        let content = serde_json::to_string_pretty(metadata)?;
        fs::write(&metadata_path, content)
            .await
            .map_err(|e| CoreError::file_storage(format!("Failed to write metadata: {}", e)))?;
        Ok(())
    }

    /// Detect content type from filename
    pub(crate) fn detect_content_type(filename: &str) -> String {
        match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
            Some("txt") => "text/plain".to_string(),
            Some("md") => "text/markdown".to_string(),
            Some("json") => "application/json".to_string(),
            Some("csv") => "text/csv".to_string(),
            Some("png") => "image/png".to_string(),
            Some("jpg") | Some("jpeg") => "image/jpeg".to_string(),
            Some("gif") => "image/gif".to_string(),
            Some("pdf") => "application/pdf".to_string(),
            Some("zip") => "application/zip".to_string(),
            _ => "application/octet-stream".to_string(),
        }
    }

    /// Calculate file checksum
    fn calculate_checksum(content: &[u8]) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl AttachmentStore for LocalStorage {
    async fn store(&self, filename: &str, content: &[u8]) -> Result<FileMetadata> {
        let file_id = Uuid::new_v4().to_string();
        let file_path = self.file_path(&file_id);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::file_storage(format!("Failed to create directory: {}", e))
            })?;
        }

        let mut file = fs::File::create(&file_path)
            .await
            .map_err(|e| CoreError::file_storage(format!("Failed to create file: {}", e)))?;
        file.write_all(content)
            .await
            .map_err(|e| CoreError::file_storage(format!("Failed to write file: {}", e)))?;

        let metadata = FileMetadata {
            id: file_id.clone(),
            filename: filename.to_string(),
            content_type: Self::detect_content_type(filename),
            size: content.len() as u64,
            created_at: chrono::Utc::now(),
            checksum: Self::calculate_checksum(content),
        };
        self.write_metadata(&file_id, &metadata).await?;

        debug!("File stored: {} -> {}", filename, file_id);
        Ok(metadata)
    }

    async fn get(&self, file_id: &str) -> Result<Vec<u8>> {
        let file_path = self.file_path(file_id);

        if !file_path.exists() {
            return Err(CoreError::not_found(format!("file {}", file_id)));
        }

        fs::read(&file_path)
            .await
            .map_err(|e| CoreError::file_storage(format!("Failed to read file: {}", e)))
    }

    async fn delete(&self, file_id: &str) -> Result<()> {
        let file_path = self.file_path(file_id);
        let metadata_path = self.metadata_path(file_id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| CoreError::file_storage(format!("Failed to delete file: {}", e)))?;
        }

        if metadata_path.exists() {
            fs::remove_file(&metadata_path).await.map_err(|e| {
                CoreError::file_storage(format!("Failed to delete metadata: {}", e))
            })?;
        }

        debug!("File deleted: {}", file_id);
        Ok(())
    }

    async fn exists(&self, file_id: &str) -> Result<bool> {
        Ok(self.file_path(file_id).exists())
    }

    async fn metadata(&self, file_id: &str) -> Result<FileMetadata> {
        let metadata_path = self.metadata_path(file_id);

        if !metadata_path.exists() {
            return Err(CoreError::not_found(format!(
                "file metadata {}",
                file_id
            )));
        }

        let content = fs::read_to_string(&metadata_path)
            .await
            .map_err(|e| CoreError::file_storage(format!("Failed to read metadata: {}", e)))?;
        let metadata: FileMetadata = serde_json::from_str(&content)?;
        Ok(metadata)
    }
}
