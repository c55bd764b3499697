// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::MAX_VISIBLE_NOTIFICATIONS;
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;

/// Key prefix shared by all fetch failure notifications.
const NETWORK_KEY_PREFIX: &str = "notification-network-";

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a new notification to be displayed.
    ///
    /// Shown immediately when fewer than [`MAX_VISIBLE_NOTIFICATIONS`] are
    /// visible, queued otherwise. A notification whose key is already visible
    /// or queued is dropped, so repeated failures do not stack.
    ///
    /// Warnings and errors are logged to diagnostics.
    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.message_key()),
                Severity::Error => handle.log_error(notification.message_key()),
                Severity::Info => {}
            }
        }

        let duplicate = self
            .visible
            .iter()
            .chain(self.queue.iter())
            .any(|n| n.message_key() == notification.message_key());
        if duplicate {
            return;
        }

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose timer has expired.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Removes fetch failure notifications.
    ///
    /// Called after a successful load so an old "server unreachable" toast
    /// does not linger next to fresh content.
    pub fn clear_network_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible
            .retain(|n| !n.message_key().starts_with(NETWORK_KEY_PREFIX));
        self.queue
            .retain(|n| !n.message_key().starts_with(NETWORK_KEY_PREFIX));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::info(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::info("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn duplicate_keys_are_not_stacked() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-network-timeout"));
        manager.push(Notification::error("notification-network-timeout"));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let first = Notification::info("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::info(format!("visible-{i}")));
        }
        manager.push(Notification::info("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::info("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn error_notifications_do_not_auto_dismiss() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-network-unreachable"));

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn clear_network_errors_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-network-unreachable"));
        manager.push(Notification::error("notification-network-timeout"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-network-bad-status"));
        assert_eq!(manager.queued_count(), 1);

        manager.clear_network_errors();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
        let remaining: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(remaining, vec!["notification-config-load-error"]);
    }

    #[test]
    fn warnings_and_errors_are_logged_to_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(Notification::info("ignored"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-network-timeout"));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message_key: "notification-config-load-error".into()
                },
                DiagnosticEventKind::Error {
                    message_key: "notification-network-timeout".into()
                },
            ]
        );
    }
}
