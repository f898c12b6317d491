//! Configuration validation

use super::models::{AttachmentStorageConfig, EmailConfig, LoggingConfig, NotificationConfig};
use crate::utils::error::{CoreError, Result};

/// Validation contract for configuration sections
pub trait Validate {
    /// Check the section for inconsistencies
    fn validate(&self) -> Result<()>;
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if self.level.is_empty() {
            return Err(CoreError::config("Log level cannot be empty"));
        }
        Ok(())
    }
}

impl Validate for EmailConfig {
    fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(CoreError::config("Email endpoint cannot be empty"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(CoreError::config(format!(
                "Email endpoint must be an HTTP(S) URL: {}",
                self.endpoint
            )));
        }
        if !self.from_address.contains('@') {
            return Err(CoreError::config(format!(
                "Invalid from address: {}",
                self.from_address
            )));
        }
        Ok(())
    }
}

impl Validate for NotificationConfig {
    fn validate(&self) -> Result<()> {
        if let Some(email) = &self.email {
            email.validate()?;
        }
        Ok(())
    }
}

impl Validate for AttachmentStorageConfig {
    fn validate(&self) -> Result<()> {
        match self.storage_type.as_str() {
            "local" => {
                match &self.local_path {
                    Some(path) if !path.is_empty() => Ok(()),
                    _ => Err(CoreError::config(
                        "Local attachment storage requires local_path",
                    )),
                }
            }
            other => Err(CoreError::config(format!(
                "Unsupported attachment storage type: {}",
                other
            ))),
        }
    }
}
