//! Transient, stacked user notifications.

use std::time::{Duration, Instant};

use crate::observability::CONTROLLER_NOTIFICATIONS;

/// How long a notification stays visible unless dismissed sooner.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Neutral status information.
    Info,
    /// An operation completed.
    Success,
    /// An operation was rejected or failed.
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier for explicit dismissal.
    pub id: u64,
    /// Severity.
    pub level: Level,
    /// User-facing text.
    pub message: String,
    created: Instant,
}

impl Notification {
    /// True once the auto-dismiss interval has elapsed at `now`.
    pub fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= NOTIFICATION_TTL
    }
}

/// The stack of currently visible notifications.
///
/// Notifications are independent: several may be visible at once, each
/// auto-dismissed five seconds after it was raised, or earlier when the user
/// dismisses it explicitly. A sweep with [`NotificationCenter::expire`]
/// removes everything past its interval.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    /// Creates an empty notification stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a notification and returns its ID.
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u64 {
        CONTROLLER_NOTIFICATIONS.click();
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            level,
            message: message.into(),
            created: Instant::now(),
        });
        id
    }

    /// Dismisses a notification explicitly. Returns false for unknown IDs.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Removes every notification whose interval elapsed by `now`.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|n| !n.expired_at(now));
    }

    /// Currently visible notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Number of visible notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
