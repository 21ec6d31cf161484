//! Notification adapters
//!
//! `TracingNotificationSender` emits each message as a structured log event.
//! Real delivery (SMTP, queues) plugs in behind the same port.

use crate::config::Config;
use crate::domain::ports::NotificationSender;
use crate::error::NotificationError;

/// Sender that records notifications as `tracing` events
#[derive(Debug, Clone)]
pub struct TracingNotificationSender {
    from: String,
    enabled: bool,
}

impl TracingNotificationSender {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            enabled: true,
        }
    }

    /// A disabled sender accepts and discards every message, without
    /// validating the recipient.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.notification_from.clone()).with_enabled(config.notifications_enabled)
    }

    pub fn from_address(&self) -> &str {
        &self.from
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl NotificationSender for TracingNotificationSender {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        if !self.enabled {
            tracing::debug!(to = %to, subject = %subject, "Notifications disabled, message discarded");
            return Ok(());
        }

        if !to.contains('@') {
            return Err(NotificationError::InvalidRecipient(to.to_string()));
        }

        tracing::info!(
            from = %self.from,
            to = %to,
            subject = %subject,
            body_len = body.len(),
            "Notification sent"
        );
        Ok(())
    }
}

/// Sender that discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotificationSender;

impl NotificationSender for NoopNotificationSender {
    fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), NotificationError> {
        Ok(())
    }
}
