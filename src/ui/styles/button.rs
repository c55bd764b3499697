// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Retry, "view full gallery").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Active filter chip.
pub fn chip_selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Inactive filter chip. Adapts to light/dark theme.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation link in the header; highlighted when `active`.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base;
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette::PRIMARY_500
        } else {
            base.text
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Image tile: no chrome, slight lift on hover.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Lightbox controls drawn over the image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_chip_uses_brand_color() {
        let style = chip_selected(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn overlay_darkens_on_hover() {
        let style = overlay(WHITE, opacity::OVERLAY_SUBTLE, opacity::OVERLAY_MEDIUM);
        let normal = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);

        let alpha = |s: &button::Style| match s.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&hovered) > alpha(&normal));
    }
}
