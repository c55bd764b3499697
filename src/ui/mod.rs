// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message` enum and a `view` function, and reports
//! side effects to the application root through an `Effect`.
//!
//! # Screens
//!
//! - [`gallery`] - Filter bar, image grid and lightbox overlay
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized button and container styles
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
