//! Notification sink and the toast queue backing the terminal UI

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::constants::{MAX_TOASTS, TOAST_TTL_SECS};
use crate::models::NotificationKind;

/// Receives user-facing outcome messages. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// A notification as shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

/// Bounded, expiring list of toasts
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(TOAST_TTL_SECS), MAX_TOASTS)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        ToastQueue {
            toasts: Mutex::new(VecDeque::with_capacity(capacity)),
            ttl,
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push_at(&self, notification: Notification, now: Instant) {
        let mut toasts = self.lock();
        if toasts.len() >= self.capacity {
            toasts.pop_front();
        }
        toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
    }

    /// Drop expired toasts, returns true if anything changed
    pub fn prune(&self, now: Instant) -> bool {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| now.saturating_duration_since(t.shown_at) < self.ttl);
        toasts.len() != before
    }

    pub fn dismiss_all(&self) {
        self.lock().clear();
    }

    /// Oldest first
    pub fn visible(&self) -> Vec<Notification> {
        self.lock().iter().map(|t| t.notification.clone()).collect()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.push_at(
            Notification {
                kind,
                message: message.to_string(),
            },
            Instant::now(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(message: &str) -> Notification {
        Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let queue = ToastQueue::new(Duration::from_secs(4), 2);
        let now = Instant::now();
        queue.push_at(note("a"), now);
        queue.push_at(note("b"), now);
        queue.push_at(note("c"), now);

        let messages: Vec<_> = queue.visible().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_prune_expired() {
        let queue = ToastQueue::new(Duration::from_secs(4), 3);
        let start = Instant::now();
        queue.push_at(note("old"), start);
        queue.push_at(note("new"), start + Duration::from_secs(3));

        assert!(!queue.prune(start + Duration::from_secs(2)));
        assert!(queue.prune(start + Duration::from_secs(5)));
        assert_eq!(queue.visible(), vec![note("new")]);
    }

    #[test]
    fn test_notify_and_dismiss() {
        let queue = ToastQueue::default();
        queue.notify(NotificationKind::Failure, "Niečo sa pokazilo.");
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].kind, NotificationKind::Failure);

        queue.dismiss_all();
        assert!(queue.visible().is_empty());
    }
}
