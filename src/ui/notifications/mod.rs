// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications surface non-fatal failures (unreachable server, unreadable
//! settings) without blocking the gallery: filters stay clickable while a
//! toast is visible.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::error(error.i18n_key()));
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Toast duration: 3s for info, 5s for warnings, manual dismiss for errors.
//! At most three toasts are visible; the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
