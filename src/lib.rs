// SPDX-License-Identifier: MPL-2.0
//! `community_gallery` is a photo gallery browser built with the Iced GUI
//! framework.
//!
//! It loads categories and images from a remote gallery API, lets the user
//! filter the grid by category, and shows a lightbox with keyboard
//! navigation. The UI is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/community_gallery/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
