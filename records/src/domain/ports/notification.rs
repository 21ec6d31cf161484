//! Notification port trait
//!
//! Defines the interface for delivering messages to students.

use crate::error::NotificationError;

/// Outbound notification channel
pub trait NotificationSender: Send + Sync {
    /// Send an email-style message. Callers treat delivery as best effort.
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError>;
}
