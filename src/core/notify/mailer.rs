//! Email delivery channel
//!
//! Email-send is an injected collaborator with an explicit lifecycle: the
//! facade builds one mailer from configuration at startup and hands it to
//! the dispatcher by reference.

use crate::config::EmailConfig;
use crate::utils::error::{CoreError, Result};
use async_trait::async_trait;
use tracing::debug;

/// Outbound email message
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Email delivery contract
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Deliver a message
    async fn send(&self, message: &EmailMessage) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;
}

/// Mailer posting to a transactional-email HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    from_address: String,
    api_token: Option<String>,
}

impl HttpMailer {
    /// Create a mailer for the configured endpoint
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            from_address: config.from_address.clone(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let payload = serde_json::json!({
            "from": self.from_address,
            "to": message.to,
            "subject": message.subject,
            "text": message.body,
        });

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CoreError::email(format!("Failed to reach mail service: {}", e)))?;

        if !response.status().is_success() {
            return Err(CoreError::email(format!(
                "Mail service returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Mailer that drops every message; used when email delivery is disabled
#[derive(Debug, Clone, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        debug!("Email delivery disabled, dropping message to {}", message.to);
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
