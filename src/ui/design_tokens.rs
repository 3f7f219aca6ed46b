// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized visual constants for the customizer.

## Organization

- **Palette**: Base colors, including the per-theme accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and preview sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_tee::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
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

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// 3D viewport background (`#f5f5f5`).
    pub const STAGE: Color = Color::from_rgb(0.961, 0.961, 0.961);

    // Brand colors (blue scale), used by the minimal theme
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Modern theme: slate surfaces with a violet accent
    pub const SLATE_950: Color = Color::from_rgb(0.06, 0.07, 0.1);
    pub const SLATE_800: Color = Color::from_rgb(0.12, 0.14, 0.2);
    pub const SLATE_700: Color = Color::from_rgb(0.2, 0.23, 0.3);
    pub const VIOLET_400: Color = Color::from_rgb(0.65, 0.55, 0.98);
    pub const VIOLET_500: Color = Color::from_rgb(0.55, 0.36, 0.96);

    // Retro theme: cream paper with burnt orange and teal
    pub const CREAM_100: Color = Color::from_rgb(0.98, 0.94, 0.86);
    pub const CREAM_200: Color = Color::from_rgb(0.94, 0.88, 0.76);
    pub const CREAM_300: Color = Color::from_rgb(0.88, 0.8, 0.66);
    pub const BROWN_900: Color = Color::from_rgb(0.24, 0.16, 0.1);
    pub const BROWN_700: Color = Color::from_rgb(0.42, 0.3, 0.2);
    pub const ORANGE_600: Color = Color::from_rgb(0.85, 0.42, 0.16);
    pub const ORANGE_700: Color = Color::from_rgb(0.72, 0.33, 0.1);
    pub const TEAL_600: Color = Color::from_rgb(0.1, 0.5, 0.5);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
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
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the drop zone in the uploader.
    pub const DROP_ZONE_HEIGHT: f32 = 120.0;

    /// Upload thumbnail inside the drop zone.
    pub const THUMBNAIL_HEIGHT: f32 = 72.0;
    pub const THUMBNAIL_MAX_WIDTH: f32 = 160.0;

    /// Height of the multi-line print text editor (three lines).
    pub const TEXT_EDITOR_HEIGHT: f32 = 84.0;

    /// Preview surface size. The 2D silhouette keeps a 3:4 ratio.
    pub const PREVIEW_WIDTH: f32 = 420.0;
    pub const PREVIEW_HEIGHT: f32 = 560.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Application header
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Panel headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Printed text on the 2D preview
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Footer keymap, status lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Drop zone outline, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

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

    #[test]
    fn preview_keeps_three_by_four_ratio() {
        assert!((sizing::PREVIEW_WIDTH / sizing::PREVIEW_HEIGHT - 0.75).abs() < 1e-6);
    }
}
