// SPDX-License-Identifier: MPL-2.0
//! The combined customization state owned by the application root.

use super::garment::{Build, GarmentColor};
use super::measurements::{Height, Weight};
use super::print_text::PrintText;
use std::fmt;

/// Opaque, revocable handle to a decoded upload.
///
/// Handles are issued by the asset store and look like `asset://7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetUrl(String);

impl AssetUrl {
    /// Builds the handle for the `id`-th asset.
    #[must_use]
    pub fn from_id(id: u64) -> Self {
        Self(format!("asset://{id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the user has chosen for their garment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Customization {
    pub height: Height,
    pub weight: Weight,
    pub build: Build,
    pub color: GarmentColor,
    pub text: PrintText,
    pub image: Option<AssetUrl>,
}

/// Snapshot of the form fields, pushed on every edit.
///
/// The uploaded image is not part of the form and is never touched by a
/// patch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomizationPatch {
    pub height: Height,
    pub weight: Weight,
    pub build: Build,
    pub color: GarmentColor,
    pub text: PrintText,
}

impl Customization {
    /// Merges a form snapshot into this customization.
    pub fn apply_patch(&mut self, patch: CustomizationPatch) {
        self.height = patch.height;
        self.weight = patch.weight;
        self.build = patch.build;
        self.color = patch.color;
        self.text = patch.text;
    }

    /// Advances the garment color to the next one in the cycle.
    pub fn cycle_color(&mut self) -> GarmentColor {
        self.color = self.color.next();
        self.color
    }

    /// Replaces the uploaded image, returning the handle it supersedes.
    pub fn replace_image(&mut self, url: AssetUrl) -> Option<AssetUrl> {
        self.image.replace(url)
    }

    /// The form-visible part of this customization.
    #[must_use]
    pub fn to_patch(&self) -> CustomizationPatch {
        CustomizationPatch {
            height: self.height,
            weight: self.weight,
            build: self.build,
            color: self.color,
            text: self.text.clone(),
        }
    }
}
