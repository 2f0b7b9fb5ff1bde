//! # Notification Channels
//!
//! Strategy trait for telling the customer about their order.
//! Notifications are sent by the caller, never by [`crate::Order`] itself.

use crate::error::OrderResult;
use crate::reporter::Reporter;
use std::sync::Arc;

/// Core trait for notification channel implementations.
pub trait NotificationChannel: Send + Sync {
    /// Send `message` and report it, prefixed by the channel.
    fn send_notification(&self, message: &str, reporter: &dyn Reporter) -> OrderResult<()> {
        tracing::debug!(channel = self.name(), "sending notification");
        reporter.report(&format!("{}{}", self.prefix(), message));
        Ok(())
    }

    /// Stable machine name, used for selection and logging.
    fn name(&self) -> &'static str;

    /// Text placed before the message.
    fn prefix(&self) -> &'static str;
}

/// Type alias for a shared notification channel (dynamic dispatch)
pub type SharedNotificationChannel = Arc<dyn NotificationChannel>;

/// Email notification
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotification;

impl NotificationChannel for EmailNotification {
    fn name(&self) -> &'static str {
        "email"
    }

    fn prefix(&self) -> &'static str {
        "Email отправлен: "
    }
}

/// SMS notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotification;

impl NotificationChannel for SmsNotification {
    fn name(&self) -> &'static str {
        "sms"
    }

    fn prefix(&self) -> &'static str {
        "SMS отправлено: "
    }
}
