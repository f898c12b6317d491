//! Notification dispatcher
//!
//! Persists a notification record per recipient and follows up with a
//! best-effort email. Dispatch runs detached from the primary mutation:
//! a failure here is logged and never fails the caller.

use crate::core::models::{Notification, NotificationKind, RelatedEntities};
use crate::storage::{NotificationStore, RecordStore};
use crate::utils::error::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::mailer::{EmailMessage, Mailer};

/// Dispatches notifications for successful mutations
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    store: Arc<dyn NotificationStore>,
    records: Arc<dyn RecordStore>,
    mailer: Arc<dyn Mailer>,
    enabled: bool,
}

impl NotificationDispatcher {
    /// Create a dispatcher over the given collaborators
    pub fn new(
        store: Arc<dyn NotificationStore>,
        records: Arc<dyn RecordStore>,
        mailer: Arc<dyn Mailer>,
        enabled: bool,
    ) -> Self {
        Self {
            store,
            records,
            mailer,
            enabled,
        }
    }

    /// Persist one notification and follow up with a best-effort email.
    ///
    /// The email leg never fails the call: the primary mutation already
    /// succeeded by the time this runs.
    pub async fn notify(
        &self,
        recipient_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        related: RelatedEntities,
    ) -> Result<Notification> {
        let notification =
            Notification::new(recipient_id, kind, title, message, related);
        let notification = self.store.insert(notification).await?;
        debug!(
            "Persisted {:?} notification {} for {}",
            kind,
            notification.id(),
            recipient_id
        );

        self.send_email_best_effort(&notification).await;
        Ok(notification)
    }

    /// Notify several recipients, deduplicated preserving first occurrence.
    pub async fn notify_many(
        &self,
        recipients: Vec<Uuid>,
        kind: NotificationKind,
        title: &str,
        message: &str,
        related: &RelatedEntities,
    ) -> Result<Vec<Notification>> {
        let mut seen = HashSet::new();
        let mut created = Vec::new();
        for recipient in recipients {
            if !seen.insert(recipient) {
                continue;
            }
            created.push(
                self.notify(recipient, kind, title, message, related.clone())
                    .await?,
            );
        }
        Ok(created)
    }

    /// Fire-and-forget dispatch, detached from the caller's request.
    pub fn dispatch(
        &self,
        recipients: Vec<Uuid>,
        kind: NotificationKind,
        title: String,
        message: String,
        related: RelatedEntities,
    ) {
        if !self.enabled {
            debug!("Notification dispatch disabled, skipping {:?}", kind);
            return;
        }

        let dispatcher = self.clone();
        tokio::spawn(async move {
            if let Err(e) = dispatcher
                .notify_many(recipients, kind, &title, &message, &related)
                .await
            {
                warn!("Notification dispatch failed: {}", e);
            }
        });
    }

    async fn send_email_best_effort(&self, notification: &Notification) {
        let recipient = match self.records.find_user(notification.recipient_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(
                    "Skipping email for notification {}: recipient {} not found",
                    notification.id(),
                    notification.recipient_id
                );
                return;
            }
            Err(e) => {
                warn!(
                    "Skipping email for notification {}: {}",
                    notification.id(),
                    e
                );
                return;
            }
        };

        let message = EmailMessage {
            to: recipient.email,
            subject: notification.title.clone(),
            body: notification.message.clone(),
        };
        if let Err(e) = self.mailer.send(&message).await {
            warn!(
                "Failed to email notification {} via {}: {}",
                notification.id(),
                self.mailer.name(),
                e
            );
        }
    }
}
