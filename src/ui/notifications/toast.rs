// SPDX-License-Identifier: MPL-2.0
//! Toast cards for visible notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast: `[glyph] [message] [×]`.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let badge = Container::new(
            Text::new(severity.glyph())
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .width(Length::Fixed(22.0))
        .height(Length::Fixed(22.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: 11.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let message = Text::new(message_text).size(typography::BODY);

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Stacks visible toasts in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text("")).into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover = |alpha: f32| button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_border_uses_severity_accent() {
        let style = toast_container_style(&Theme::Dark, Severity::Warning.color());
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_flat_until_hovered() {
        let active = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }
}
