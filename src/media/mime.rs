// SPDX-License-Identifier: MPL-2.0
//! MIME type detection for candidate upload files.

use image_rs::ImageFormat;
use std::path::Path;

pub const SVG_MIME: &str = "image/svg+xml";

/// Fallback type for files that are not recognized images.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
];

/// Guesses the MIME type of `path` from its extension.
///
/// Formats known to the `image` crate map to their registered type, SVG maps
/// to `image/svg+xml`, and everything else to [`UNKNOWN_MIME`].
#[must_use]
pub fn detect(path: &Path) -> String {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        return SVG_MIME.to_string();
    }

    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MIME.to_string())
}

/// Whether `mime` names an image type.
#[must_use]
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_raster_formats() {
        assert_eq!(detect(Path::new("shirt.png")), "image/png");
        assert_eq!(detect(Path::new("shirt.JPG")), "image/jpeg");
        assert_eq!(detect(Path::new("/tmp/a.webp")), "image/webp");
    }

    #[test]
    fn detects_svg() {
        assert_eq!(detect(Path::new("logo.svg")), SVG_MIME);
        assert!(is_image(&detect(Path::new("logo.Svg"))));
    }

    #[test]
    fn non_images_are_not_image_types() {
        for name in ["notes.txt", "archive.zip", "no_extension", "model.obj"] {
            assert!(!is_image(&detect(Path::new(name))), "{name}");
        }
    }

    #[test]
    fn every_picker_extension_is_an_image() {
        for ext in IMAGE_EXTENSIONS {
            let path = format!("file.{ext}");
            assert!(is_image(&detect(Path::new(&path))), "{ext}");
        }
    }
}
