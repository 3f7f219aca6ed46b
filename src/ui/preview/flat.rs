// SPDX-License-Identifier: MPL-2.0
//! 2D preview: garment base with the uploaded image and print text on top.
//!
//! [`FlatComposite::compose`] decides what to show and is free of I/O; the
//! view only lays the parts out.

use crate::domain::{GarmentColor, PrintText};
use crate::media::{GarmentAssets, ImageData};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{image, Column, Container, Stack, Text};
use iced::{
    alignment, mouse, Background, Color, ContentFit, Element, Length, Point, Rectangle, Renderer,
    Size, Theme,
};
use std::path::PathBuf;

/// Clip polygon of the silhouette, as fractions of a 3:4 box.
const SILHOUETTE: [(f32, f32); 8] = [
    (0.25, 0.0),
    (0.75, 0.0),
    (0.85, 0.15),
    (1.0, 0.25),
    (0.9, 1.0),
    (0.1, 1.0),
    (0.0, 0.25),
    (0.15, 0.15),
];

/// Largest share of the preview the uploaded image may cover.
const OVERLAY_MAX_WIDTH: f32 = 0.6;
const OVERLAY_MAX_HEIGHT: f32 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    /// `images/tshirt-<color>.jpg`, or the navy photo in its place.
    Photo(PathBuf),
    Silhouette(GarmentColor),
}

#[derive(Debug, Clone)]
pub struct FlatComposite<'a> {
    pub base: Base,
    pub color: GarmentColor,
    pub lines: Vec<String>,
    pub overlay: Option<&'a ImageData>,
}

impl<'a> FlatComposite<'a> {
    #[must_use]
    pub fn compose(
        color: GarmentColor,
        text: &PrintText,
        overlay: Option<&'a ImageData>,
        assets: &GarmentAssets,
    ) -> Self {
        let base = match assets.photo_for(color) {
            Some(path) => Base::Photo(path.to_path_buf()),
            None => Base::Silhouette(color),
        };

        Self {
            base,
            color,
            lines: text.lines().map(str::to_string).collect(),
            overlay,
        }
    }
}

/// Display size of an uploaded image: natural size, shrunk to fit within
/// 60% × 80% of the preview while keeping its aspect ratio.
#[must_use]
pub fn overlay_size(image_width: u32, image_height: u32, preview: Size) -> Size {
    let (width, height) = (image_width.max(1) as f32, image_height.max(1) as f32);
    let scale = (preview.width * OVERLAY_MAX_WIDTH / width)
        .min(preview.height * OVERLAY_MAX_HEIGHT / height)
        .min(1.0);
    Size::new(width * scale, height * scale)
}

pub fn view<'a, Message: 'a>(composite: FlatComposite<'a>) -> Element<'a, Message> {
    let preview = Size::new(sizing::PREVIEW_WIDTH, sizing::PREVIEW_HEIGHT);

    let base: Element<'a, Message> = match &composite.base {
        Base::Photo(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Base::Silhouette(color) => Canvas::new(Silhouette { color: *color })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let text_color = if composite.color.is_light() {
        palette::BLACK
    } else {
        palette::WHITE
    };

    let mut design = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    if let Some(upload) = composite.overlay {
        let size = overlay_size(upload.width, upload.height, preview);
        design = design.push(
            Container::new(
                image(upload.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fixed(size.width))
                    .height(Length::Fixed(size.height)),
            )
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(palette::WHITE)),
                ..Default::default()
            }),
        );
    }

    for line in composite.lines {
        design = design.push(
            Text::new(line)
                .size(typography::BODY_LG)
                .color(text_color)
                .align_x(alignment::Horizontal::Center),
        );
    }

    let design_area = Container::new(design)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Container::new(Stack::new().push(base).push(design_area))
        .width(Length::Fixed(preview.width))
        .height(Length::Fixed(preview.height))
        .into()
}

/// Vector t-shirt drawn when no photo is available.
#[derive(Debug, Clone, Copy)]
struct Silhouette {
    color: GarmentColor,
}

/// Largest 3:4 box centered in `bounds`.
fn fit_three_by_four(bounds: Size) -> Rectangle {
    let width = bounds.width.min(bounds.height * 0.75);
    let height = width / 0.75;
    Rectangle {
        x: (bounds.width - width) / 2.0,
        y: (bounds.height - height) / 2.0,
        width,
        height,
    }
}

fn silhouette_points(area: Rectangle) -> impl Iterator<Item = Point> {
    SILHOUETTE
        .into_iter()
        .map(move |(fx, fy)| Point::new(area.x + fx * area.width, area.y + fy * area.height))
}

impl<Message> canvas::Program<Message> for Silhouette {
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
        let area = fit_three_by_four(bounds.size());

        let shape = Path::new(|builder| {
            let mut points = silhouette_points(area);
            if let Some(first) = points.next() {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
                builder.close();
            }
        });

        let [r, g, b] = self.color.rgb();
        frame.fill(&shape, Color::from_rgb(r, g, b));
        if self.color.is_light() {
            // Keep a white garment visible against the light stage.
            frame.stroke(
                &shape,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette::GRAY_200),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hello_world_on_navy_without_photos() {
        let assets = GarmentAssets::empty(std::path::Path::new("/nonexistent"));
        let text = PrintText::new("HELLO\nWORLD");

        let composite = FlatComposite::compose(GarmentColor::Navy, &text, None, &assets);

        assert_eq!(composite.base, Base::Silhouette(GarmentColor::Navy));
        assert_eq!(composite.lines, vec!["HELLO", "WORLD"]);
        assert!(composite.overlay.is_none());
    }

    #[test]
    fn empty_text_has_no_lines() {
        let assets = GarmentAssets::default();
        let composite =
            FlatComposite::compose(GarmentColor::Red, &PrintText::default(), None, &assets);
        assert!(composite.lines.is_empty());
    }

    #[test]
    fn photo_falls_back_to_navy() {
        let dir = tempdir().expect("tempdir");
        let images = dir.path().join("images");
        fs::create_dir_all(&images).expect("mkdir");
        fs::write(images.join("tshirt-navy.jpg"), b"jpg").expect("write");
        let assets = GarmentAssets::scan(dir.path());

        let composite =
            FlatComposite::compose(GarmentColor::Red, &PrintText::default(), None, &assets);

        assert_eq!(composite.base, Base::Photo(images.join("tshirt-navy.jpg")));
    }

    #[test]
    fn overlay_keeps_small_images_at_natural_size() {
        let size = overlay_size(100, 50, Size::new(420.0, 560.0));
        assert_abs_diff_eq!(size.width, 100.0);
        assert_abs_diff_eq!(size.height, 50.0);
    }

    #[test]
    fn overlay_is_bounded_by_width_and_height_shares() {
        let wide = overlay_size(2000, 1000, Size::new(420.0, 560.0));
        assert_abs_diff_eq!(wide.width, 252.0, epsilon = 1e-3);
        assert_abs_diff_eq!(wide.height, 126.0, epsilon = 1e-3);

        let tall = overlay_size(1000, 4000, Size::new(420.0, 560.0));
        assert_abs_diff_eq!(tall.height, 448.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tall.width, 112.0, epsilon = 1e-3);
    }

    #[test]
    fn silhouette_box_is_centered_three_by_four() {
        let area = fit_three_by_four(Size::new(600.0, 400.0));
        assert_abs_diff_eq!(area.width / area.height, 0.75, epsilon = 1e-6);
        assert_abs_diff_eq!(area.height, 400.0);
        assert_abs_diff_eq!(area.x, 150.0);

        let first = silhouette_points(area).next().expect("point");
        assert_abs_diff_eq!(first.x, 150.0 + 0.25 * 300.0);
        assert_abs_diff_eq!(first.y, 0.0);
    }
}
