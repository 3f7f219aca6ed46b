// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sidebar surface holding the form and uploader.
///
/// Derived from the theme background with a slight transparency so it reads
/// as a panel in light and dark themes alike.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Neutral backdrop behind both previews.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAGE)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Translucent status box drawn over the 3D viewport.
pub fn overlay_status(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Footer strip with the keymap.
pub fn footer(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;
    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        ..Default::default()
    }
}
