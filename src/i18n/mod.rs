// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` bundles (`en-US`, `ta`, `hi`) plus an optional external directory
//! - Runtime language switching
//! - `translate` lookup returning `None` for absent keys, used by category labels

pub mod fluent;

pub use fluent::{I18n, CATEGORY_PREFIX, DEFAULT_LOCALE};
