// SPDX-License-Identifier: MPL-2.0
//! Garment previews.
//!
//! - [`flat`]: 2D composite of base image, upload and text
//! - [`scene`]: 3D load state machine, material and camera
//! - [`orbit`]: damped orbit camera
//! - [`render`]: canvas renderer for the 3D scene

pub mod flat;
pub mod orbit;
pub mod render;
pub mod scene;

pub use flat::FlatComposite;
pub use scene::{LoadState, LoadTicket, Scene};

use crate::error::ModelError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Canvas, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Which preview is on screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Flat,
    Model,
}

impl PreviewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PreviewMode::Flat => PreviewMode::Model,
            PreviewMode::Model => PreviewMode::Flat,
        }
    }

    #[must_use]
    pub fn from_start_in_3d(start_in_3d: bool) -> Self {
        if start_in_3d {
            PreviewMode::Model
        } else {
            PreviewMode::Flat
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PreviewMode::Flat => "preview-mode-2d",
            PreviewMode::Model => "preview-mode-3d",
        }
    }
}

/// Renders the 3D viewport with its status overlay.
pub fn view_scene<'a>(scene: &'a Scene, i18n: &'a I18n) -> Element<'a, scene::Message> {
    let canvas = Canvas::new(render::SceneCanvas { scene })
        .width(Length::Fill)
        .height(Length::Fill);

    let mut status = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center);
    match scene.state() {
        LoadState::Loading => {
            status = status.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(AnimatedSpinner::new(palette::WHITE, scene.elapsed()).into_element())
                    .push(Text::new(i18n.tr("preview-3d-loading")).size(typography::BODY)),
            );
        }
        LoadState::LoadedFallback { .. } => {
            status = status.push(Text::new(i18n.tr("preview-3d-fallback")).size(typography::BODY_SM));
        }
        LoadState::Failed { reason } => {
            status = status
                .push(Text::new(i18n.tr("preview-3d-failed")).size(typography::BODY))
                .push(Text::new(error_message(reason, i18n)).size(typography::BODY_SM));
        }
        LoadState::Idle | LoadState::Loaded => {}
    }
    // The orbit hint needs geometry.
    if scene.state().has_geometry() {
        status = status.push(Text::new(i18n.tr("preview-3d-hint")).size(typography::CAPTION));
    }

    let overlay = Container::new(
        Container::new(status)
            .padding(spacing::XS)
            .style(styles::container::overlay_status),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom);

    Container::new(Stack::new().push(canvas).push(overlay))
        .width(Length::Fixed(sizing::PREVIEW_WIDTH))
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .into()
}

/// Localized description of a model load failure.
#[must_use]
pub fn error_message(reason: &ModelError, i18n: &I18n) -> String {
    i18n.tr_with_args(reason.i18n_key(), &[("detail", &reason.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_mode() {
        let mode = PreviewMode::default();
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(mode.toggled(), PreviewMode::Model);
    }

    #[test]
    fn start_mode_follows_flag() {
        assert_eq!(PreviewMode::from_start_in_3d(true), PreviewMode::Model);
        assert_eq!(PreviewMode::from_start_in_3d(false), PreviewMode::Flat);
    }

    #[test]
    fn error_message_includes_detail() {
        let i18n = I18n::new(Some("en-US".into()), &crate::app::config::Config::default());
        let reason = ModelError::Parse {
            line: 7,
            reason: "bad vertex".into(),
        };
        let message = error_message(&reason, &i18n);
        assert!(message.contains("line 7"));
    }
}
