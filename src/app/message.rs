// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::CategoryKey;
use crate::ui::gallery;
use crate::ui::notifications;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    SwitchScreen(Screen),
    /// Open the gallery filtered by a category (home preview links).
    OpenCategory(CategoryKey),
    LanguageSelected(LanguageIdentifier),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ta`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery API base URL.
    /// Takes precedence over `COMMUNITY_GALLERY_API_BASE` and the config file.
    pub api_base: Option<String>,
    /// Category to open the gallery on (deep link).
    pub category: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COMMUNITY_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics buffer as JSON when the window closes.
    pub dump_diagnostics: Option<String>,
}
