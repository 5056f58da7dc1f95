use super::traits::{Notification, NotificationLevel, Notifier};

/// Notifier for headless use: every notification becomes a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            NotificationLevel::Error => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
        }
    }
}
