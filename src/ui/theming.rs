// SPDX-License-Identifier: MPL-2.0
//! Theme store: the session-wide visual style and its color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Neutral light scheme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Neutral dark scheme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Slate surfaces with a violet accent.
    #[must_use]
    pub fn modern() -> Self {
        Self {
            surface_primary: palette::SLATE_950,
            surface_secondary: palette::SLATE_800,
            surface_tertiary: palette::SLATE_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::VIOLET_500,
            brand_secondary: palette::VIOLET_400,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::SLATE_950
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Warm paper tones with burnt orange.
    #[must_use]
    pub fn retro() -> Self {
        Self {
            surface_primary: palette::CREAM_100,
            surface_secondary: palette::CREAM_200,
            surface_tertiary: palette::CREAM_300,

            text_primary: palette::BROWN_900,
            text_secondary: palette::BROWN_700,

            brand_primary: palette::ORANGE_600,
            brand_secondary: palette::ORANGE_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::TEAL_600,
            info: palette::TEAL_600,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BROWN_900
            },
            overlay_text: palette::CREAM_100,
        }
    }

    /// Light or dark scheme following the operating system.
    #[must_use]
    pub fn from_system() -> Self {
        if system_prefers_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Detects the OS color mode. Defaults to light when detection fails.
fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// Visual style selected for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    #[default]
    Minimal,
    Modern,
    Retro,
}

impl ThemeStyle {
    pub const ALL: [ThemeStyle; 3] = [ThemeStyle::Minimal, ThemeStyle::Modern, ThemeStyle::Retro];

    /// The next style, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeStyle::Minimal => ThemeStyle::Modern,
            ThemeStyle::Modern => ThemeStyle::Retro,
            ThemeStyle::Retro => ThemeStyle::Minimal,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ThemeStyle::Minimal => "minimal",
            ThemeStyle::Modern => "modern",
            ThemeStyle::Retro => "retro",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeStyle::Minimal => "theme-minimal",
            ThemeStyle::Modern => "theme-modern",
            ThemeStyle::Retro => "theme-retro",
        }
    }

    /// Whether this style renders on dark surfaces.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeStyle::Minimal => system_prefers_dark(),
            ThemeStyle::Modern => true,
            ThemeStyle::Retro => false,
        }
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved theme: the style plus its color scheme.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub style: ThemeStyle,
}

impl AppTheme {
    #[must_use]
    pub fn new(style: ThemeStyle) -> Self {
        let colors = match style {
            ThemeStyle::Minimal => ColorScheme::from_system(),
            ThemeStyle::Modern => ColorScheme::modern(),
            ThemeStyle::Retro => ColorScheme::retro(),
        };

        Self { colors, style }
    }

    /// Builds the Iced theme used for every widget in the window.
    #[must_use]
    pub fn to_iced_theme(&self) -> Theme {
        let base = if self.style.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };

        if self.style == ThemeStyle::Minimal {
            return base;
        }

        let mut iced_palette = base.palette();
        iced_palette.background = self.colors.surface_primary;
        iced_palette.text = self.colors.text_primary;
        iced_palette.primary = self.colors.brand_primary;
        iced_palette.success = self.colors.success;
        iced_palette.danger = self.colors.error;

        let name = match self.style {
            ThemeStyle::Modern => "Tee Modern",
            _ => "Tee Retro",
        };
        Theme::custom(name.to_string(), iced_palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn retro_is_warm() {
        let scheme = ColorScheme::retro();
        assert!(scheme.surface_primary.r > scheme.surface_primary.b);
        assert!(scheme.brand_primary.r > scheme.brand_primary.b);
    }

    #[test]
    fn style_cycle_returns_after_three_steps() {
        for style in ThemeStyle::ALL {
            assert_eq!(style.next().next().next(), style);
            assert_ne!(style.next(), style);
        }
    }

    #[test]
    fn custom_styles_use_their_own_background() {
        let modern = AppTheme::new(ThemeStyle::Modern).to_iced_theme();
        assert_eq!(modern.palette().background, palette::SLATE_950);

        let retro = AppTheme::new(ThemeStyle::Retro).to_iced_theme();
        assert_eq!(retro.palette().background, palette::CREAM_100);
    }

    #[test]
    fn fixed_styles_report_their_mode() {
        assert!(ThemeStyle::Modern.is_dark());
        assert!(!ThemeStyle::Retro.is_dark());
        let _ = ThemeStyle::Minimal.is_dark();
    }

    #[test]
    fn style_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme: ThemeStyle,
        }
        let text = toml::to_string(&Wrapper {
            theme: ThemeStyle::Retro,
        })
        .expect("serialize");
        assert!(text.contains("\"retro\""));
        let back: Wrapper = toml::from_str("theme = \"modern\"").expect("deserialize");
        assert_eq!(back.theme, ThemeStyle::Modern);
    }
}
