// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface for the header bar and error banners.
///
/// Derived from the active theme background with a slight opacity, so it
/// stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Category badge over a grid tile.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Stand-in for an image that is loading or could not be fetched.
pub fn placeholder(theme: &Theme) -> container::Style {
    let is_dark = theme.extended_palette().is_dark;
    container::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: Some(palette::GRAY_400),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dimmed area behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, 0.0);
                assert!(color.a > 0.5 && color.a < 1.0);
            }
            other => panic!("unexpected background: {other:?}"),
        }
    }
}
