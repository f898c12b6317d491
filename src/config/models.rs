//! Configuration models

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Notification dispatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Master switch for dispatching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Email delivery; `None` disables email (notifications still persist)
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            email: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Transactional email endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// HTTP endpoint of the mail service
    pub endpoint: String,
    /// Sender address
    pub from_address: String,
    /// Bearer token for the mail service
    #[serde(default)]
    pub api_token: Option<String>,
}

/// Attachment file storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentStorageConfig {
    /// Storage backend type
    #[serde(default = "default_storage_type")]
    pub storage_type: String,
    /// Base path for the local backend
    #[serde(default)]
    pub local_path: Option<String>,
}

impl Default for AttachmentStorageConfig {
    fn default() -> Self {
        Self {
            storage_type: default_storage_type(),
            local_path: Some("./data/attachments".to_string()),
        }
    }
}

fn default_storage_type() -> String {
    "local".to_string()
}
