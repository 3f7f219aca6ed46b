// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while the garment model loads.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;
use std::time::Duration;

/// One full turn per second.
const TURN: Duration = Duration::from_secs(1);

/// Half-circle arc rotating around a faint track.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self {
            rotation: rotation_for(elapsed),
            color,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .into()
    }
}

/// Maps elapsed time onto an angle in `[0, TAU)`.
fn rotation_for(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / TURN.as_secs_f32();
    turns.fract() * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(3.0).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Start at 12 o'clock.
        let start = self.rotation - TAU / 4.0;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + TAU / 2.0),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn rotation_wraps_every_turn() {
        assert_abs_diff_eq!(rotation_for(Duration::ZERO), 0.0);
        assert_abs_diff_eq!(
            rotation_for(Duration::from_millis(250)),
            TAU / 4.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            rotation_for(Duration::from_millis(1250)),
            TAU / 4.0,
            epsilon = 1e-4
        );
    }
}
