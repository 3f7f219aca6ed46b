// SPDX-License-Identifier: MPL-2.0
//! Decoding uploaded images (PNG, JPEG, GIF, SVG, etc.) into displayable handles.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates image data from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width over height. Zero-height images report a square ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Decodes the image at `path`.
///
/// SVG files are rasterized with resvg at their intrinsic size; every other
/// format goes through the `image` crate.
///
/// # Errors
///
/// - [`Error::Io`] when the file cannot be read
/// - [`Error::Image`] when raster decoding fails
/// - [`Error::Svg`] when SVG parsing fails or the SVG has no area
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        rasterize_svg(&bytes)
    } else {
        let img = image_rs::load_from_memory(&bytes)?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn rasterize_svg(data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; the image handle expects straight alpha.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}
