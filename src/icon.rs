// SPDX-License-Identifier: MPL-2.0
//! Window icon: the embedded t-shirt SVG rasterized at startup.

use crate::error::{Error, Result};
use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_tee.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Renders `source` into a square RGBA buffer of `size` pixels.
pub fn rasterize_svg(source: &str, size: u32) -> Result<Vec<u8>> {
    let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default())
        .map_err(|err| Error::Svg(err.to_string()))?;

    let natural = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / natural.width(),
        size as f32 / natural.height(),
    );
    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| Error::Svg(format!("cannot allocate a {size}px pixmap")))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap.take())
}

/// The window icon, or `None` (logged) if it cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = match rasterize_svg(SVG_SOURCE, ICON_SIZE) {
        Ok(rgba) => rgba,
        Err(err) => {
            log::warn!("Window icon unavailable: {err}");
            return None;
        }
    };
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE)
        .inspect_err(|err| log::warn!("Window icon rejected: {err}"))
        .ok()
}
