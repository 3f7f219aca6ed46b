// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Colors come from the active theme's extended palette so the three theme
//! styles restyle every button.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Main call to action ("Select file").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.extended_palette().primary;

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(primary.base.color)),
            text_color: primary.base.text,
            border: Border {
                color: primary.strong.color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(primary.strong.color)),
            text_color: primary.strong.text,
            border: Border {
                color: primary.base.color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Active entry of a toggle group (current preview mode).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled(theme),
        _ => primary(theme, button::Status::Active),
    }
}

/// Inactive entry of a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = extended.background;

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(background.weak.color)),
            text_color: background.weak.text,
            border: Border {
                color: background.strong.color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(background.strong.color)),
            text_color: background.strong.text,
            border: Border {
                color: extended.primary.base.color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

fn disabled(_theme: &Theme) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
