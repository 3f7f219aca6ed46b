// SPDX-License-Identifier: MPL-2.0
//! Software rendering of the garment scene onto a canvas.
//!
//! Triangles are projected with the orbit camera, flat shaded with a fixed
//! light rig, and painted back to front. A grid is drawn first so the
//! viewport is never blank, even when the model failed to load.

use super::scene::{Message, Scene, SurfaceMaterial};
use crate::app::config::CAMERA_NEAR;
use crate::media::model::Model;
use crate::ui::design_tokens::palette;
use glam::{Mat4, Vec3, Vec4};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Event, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::PI;

const AMBIENT: f32 = 0.8;

/// Directional lights as (position, intensity). Each shines toward the
/// origin from its position.
const LIGHTS: [([f32; 3], f32); 3] = [
    ([1.0, 1.0, 2.0], 1.2),
    ([-1.0, 1.0, -1.0], 0.6),
    ([0.0, 0.0, 2.0], 0.5),
];

/// Specular color of the garment material (`#111111`).
const SPECULAR: f32 = 0x11 as f32 / 255.0;

const GRID_SIZE: f32 = 10.0;
const GRID_DIVISIONS: usize = 10;
/// Grid lines are split so the parts behind the camera can be dropped.
const GRID_LINE_SEGMENTS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub points: [Point; 3],
    /// Distance along the view axis, larger is farther.
    pub depth: f32,
    pub color: Color,
}

/// Maps a world position to canvas coordinates, with its view depth.
///
/// Returns `None` for points behind the near plane.
fn project(view_projection: &Mat4, position: Vec3, size: Size) -> Option<(Point, f32)> {
    let clip: Vec4 = *view_projection * position.extend(1.0);
    if clip.w < CAMERA_NEAR {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some((
        Point::new(
            (ndc.x + 1.0) * 0.5 * size.width,
            (1.0 - ndc.y) * 0.5 * size.height,
        ),
        clip.w,
    ))
}

/// Blinn-Phong shading of a flat face.
#[must_use]
pub fn shade(material: &SurfaceMaterial, normal: Vec3, position: Vec3, eye: Vec3) -> Color {
    let to_eye = (eye - position).normalize_or_zero();
    let mut normal = normal.normalize_or_zero();
    if material.double_sided && normal.dot(to_eye) < 0.0 {
        normal = -normal;
    }

    let mut diffuse = AMBIENT;
    let mut specular = 0.0;
    for (light_position, intensity) in LIGHTS {
        let to_light = Vec3::from(light_position).normalize();
        diffuse += intensity * normal.dot(to_light).max(0.0);
        let half = (to_light + to_eye).normalize_or_zero();
        specular += intensity * normal.dot(half).max(0.0).powf(material.shininess);
    }

    let [r, g, b] = material.color;
    let channel = |c: f32| (c * diffuse / PI + SPECULAR * specular).clamp(0.0, 1.0);
    Color::from_rgb(channel(r), channel(g), channel(b))
}

/// Projects and shades every triangle of `model`, sorted far to near.
#[must_use]
pub fn project_model(
    model: &Model,
    materials: &[SurfaceMaterial],
    view_projection: &Mat4,
    eye: Vec3,
    size: Size,
) -> Vec<ProjectedTriangle> {
    let mut projected = Vec::with_capacity(model.triangle_count());

    for (mesh, material) in model.meshes.iter().zip(materials) {
        for &[a, b, c] in &mesh.triangles {
            let (Some((pa, da)), Some((pb, db)), Some((pc, dc))) = (
                project(view_projection, a, size),
                project(view_projection, b, size),
                project(view_projection, c, size),
            ) else {
                continue;
            };
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            projected.push(ProjectedTriangle {
                points: [pa, pb, pc],
                depth: (da + db + dc) / 3.0,
                color: shade(material, normal, centroid, eye),
            });
        }
    }

    projected.sort_by(|x, y| y.depth.total_cmp(&x.depth));
    projected
}

/// Visible pieces of the grid on the `y = 0` plane, in canvas coordinates.
#[must_use]
pub fn grid_segments(view_projection: &Mat4, size: Size) -> Vec<(Point, Point)> {
    let half = GRID_SIZE / 2.0;
    let floor = 0.0;
    let step = GRID_SIZE / GRID_DIVISIONS as f32;
    let mut segments = Vec::new();

    for i in 0..=GRID_DIVISIONS {
        let offset = -half + i as f32 * step;
        let lines = [
            (Vec3::new(offset, floor, -half), Vec3::new(offset, floor, half)),
            (Vec3::new(-half, floor, offset), Vec3::new(half, floor, offset)),
        ];
        for (start, end) in lines {
            for k in 0..GRID_LINE_SEGMENTS {
                let t0 = k as f32 / GRID_LINE_SEGMENTS as f32;
                let t1 = (k + 1) as f32 / GRID_LINE_SEGMENTS as f32;
                if let (Some((p0, _)), Some((p1, _))) = (
                    project(view_projection, start.lerp(end, t0), size),
                    project(view_projection, start.lerp(end, t1), size),
                ) {
                    segments.push((p0, p1));
                }
            }
        }
    }

    segments
}

/// Canvas program drawing a [`Scene`] and turning mouse input into orbit
/// messages.
pub struct SceneCanvas<'a> {
    pub scene: &'a Scene,
}

impl canvas::Program<Message> for SceneCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let dragging = self.scene.orbit().is_dragging();
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::DragStarted(position)).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if dragging => {
                let position = cursor.position_from(bounds.position())?;
                Some(Action::publish(Message::Dragged(position, bounds.height)).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
                Some(Action::publish(Message::DragEnded).and_capture())
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / 40.0,
                };
                Some(Action::publish(Message::Zoomed(lines)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);
        frame.fill_rectangle(Point::ORIGIN, size, palette::STAGE);

        // Aspect follows the canvas so resizes never stretch the model.
        let aspect = size.width / size.height.max(1.0);
        let orbit = self.scene.orbit();
        let view_projection = orbit.view_projection(aspect);

        let grid = Stroke::default()
            .with_width(1.0)
            .with_color(palette::GRAY_200);
        for (from, to) in grid_segments(&view_projection, size) {
            frame.stroke(&Path::line(from, to), grid);
        }

        if let Some(model) = self.scene.model() {
            let triangles = project_model(
                model,
                self.scene.materials(),
                &view_projection,
                orbit.eye(),
                size,
            );
            for triangle in triangles {
                let [a, b, c] = triangle.points;
                let path = Path::new(|builder| {
                    builder.move_to(a);
                    builder.line_to(b);
                    builder.line_to(c);
                    builder.close();
                });
                frame.fill(&path, triangle.color);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.scene.orbit().is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
