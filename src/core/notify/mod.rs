//! Notification dispatch
//!
//! Fire-and-forget side effects of successful mutations: a persisted
//! notification per recipient plus a best-effort email.

mod dispatcher;
mod mailer;

pub use dispatcher::NotificationDispatcher;
pub use mailer::{EmailMessage, HttpMailer, Mailer, NoopMailer};
