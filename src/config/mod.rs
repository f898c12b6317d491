//! Configuration for the collaboration core
//!
//! YAML-backed; every section has serde defaults so an empty document is a
//! valid configuration.

mod models;
mod validation;

pub use models::{
    AttachmentStorageConfig, EmailConfig, LoggingConfig, NotificationConfig,
};
pub use validation::Validate;

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging section
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Notification dispatch section
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Attachment storage section
    #[serde(default)]
    pub attachments: AttachmentStorageConfig,
}

impl Config {
    /// Load and validate configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());

        let content = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.notifications.validate()?;
        self.attachments.validate()?;
        Ok(())
    }
}
