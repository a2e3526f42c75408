//! # Notification Hub
//!
//! The user-facing outcome channel: guard failures, validation rejections,
//! and success confirmations all land here as ephemeral notifications.
//!
//! ## Auto-Expiry
//! Each pushed notification schedules its own removal after
//! [`NOTIFICATION_TTL`] (3 seconds). The timer is fire-and-forget: it only
//! runs when a tokio runtime is present, and aborting pending timers on
//! [`NotificationHub::reset`] is advisory cleanup, not correctness-critical.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use storefront_core::{Notification, Severity};

/// How long a notification stays visible before auto-expiring.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Shared notification sink.
///
/// Cheap to clone; all clones share the same underlying list, so every
/// store can hold its own handle.
#[derive(Debug, Clone, Default)]
pub struct NotificationHub {
    notifications: Arc<Mutex<Vec<Notification>>>,
    expiry_tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification and schedules its expiry.
    ///
    /// Returns the stored notification (its generated id included) so
    /// callers can reference or dismiss it.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            severity,
        };

        debug!(id = %notification.id, severity = ?severity, "notification pushed");

        self.notifications
            .lock()
            .expect("notification mutex poisoned")
            .push(notification.clone());

        // Expiry only runs inside a tokio runtime; synchronous callers
        // (and most unit tests) simply get no auto-removal.
        if let Ok(handle) = Handle::try_current() {
            let notifications = Arc::clone(&self.notifications);
            let id = notification.id.clone();

            let task = handle.spawn(async move {
                tokio::time::sleep(NOTIFICATION_TTL).await;
                notifications
                    .lock()
                    .expect("notification mutex poisoned")
                    .retain(|n| n.id != id);
            });

            self.expiry_tasks
                .lock()
                .expect("notification mutex poisoned")
                .push(task);
        }

        notification
    }

    /// Pushes a success notification.
    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.push(message, Severity::Success)
    }

    /// Pushes an error notification.
    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.push(message, Severity::Error)
    }

    /// Pushes a warning notification.
    pub fn warning(&self, message: impl Into<String>) -> Notification {
        self.push(message, Severity::Warning)
    }

    /// Removes a notification by id (explicit user dismissal).
    pub fn dismiss(&self, id: &str) {
        self.notifications
            .lock()
            .expect("notification mutex poisoned")
            .retain(|n| n.id != id);
    }

    /// Returns a snapshot of the currently visible notifications.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }

    /// Clears all notifications and aborts pending expiry timers.
    ///
    /// Abort is best-effort: a timer that already fired is gone, one that
    /// fires between clear and abort removes nothing.
    pub fn reset(&self) {
        for task in self
            .expiry_tasks
            .lock()
            .expect("notification mutex poisoned")
            .drain(..)
        {
            task.abort();
        }

        self.notifications
            .lock()
            .expect("notification mutex poisoned")
            .clear();
    }
}
