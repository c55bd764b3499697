// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard listener exists only while the lightbox is open, so closing
//! it detaches the listener and repeated open/close cycles never stack
//! handlers.

use super::Message;
use crate::application::query::CloseReason;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window close requests so diagnostics can be flushed first.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Arrow keys and Escape drive the lightbox while it is open.
pub fn create_lightbox_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        lightbox_message(&key).map(Message::Gallery)
    })
}

/// Maps a pressed key onto a lightbox action.
pub fn lightbox_message(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        Key::Named(Named::Escape) => Some(gallery::Message::Close(CloseReason::Escape)),
        _ => None,
    }
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_map_to_lightbox_actions() {
        assert!(matches!(
            lightbox_message(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::Next)
        ));
        assert!(matches!(
            lightbox_message(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::Previous)
        ));
        assert!(matches!(
            lightbox_message(&Key::Named(Named::Escape)),
            Some(gallery::Message::Close(CloseReason::Escape))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(lightbox_message(&Key::Named(Named::Enter)).is_none());
        assert!(lightbox_message(&Key::Character("a".into())).is_none());
    }
}
