// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Maps the mode onto the built-in Iced theme.
    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
    }
}
