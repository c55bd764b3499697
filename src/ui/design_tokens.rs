// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the gallery UI.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use community_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Lightbox backdrop
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (warm saffron scale)
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.66, 0.3);
    pub const PRIMARY_500: Color = Color::from_rgb(0.96, 0.55, 0.15);
    pub const PRIMARY_600: Color = Color::from_rgb(0.85, 0.45, 0.08);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Panels and badges over images.
    pub const SURFACE: f32 = 0.95;
    /// Dimmed area behind the lightbox.
    pub const BACKDROP: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// Edge of a square grid tile.
    pub const THUMBNAIL: f32 = 220.0;

    /// Height of a home preview tile.
    pub const PREVIEW_TILE_HEIGHT: f32 = 180.0;

    /// Square hit area of the lightbox prev/next controls (WCAG 2.5.5).
    pub const LIGHTBOX_NAV: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// App name, section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Toast glyphs, lightbox caption
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Category badges, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::LIGHTBOX_NAV >= 44.0);
    assert!(sizing::THUMBNAIL > sizing::PREVIEW_TILE_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
