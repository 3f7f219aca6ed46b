// SPDX-License-Identifier: MPL-2.0
//! Registry of decoded uploads, addressed by revocable [`AssetUrl`]s.
//!
//! A handle stays valid until it is revoked. Revoking drops the decoded
//! pixels, so superseded uploads do not linger in memory.

use super::image::ImageData;
use crate::domain::AssetUrl;
use std::collections::HashMap;
use std::path::PathBuf;

/// A file picked or dropped by the user, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub path: PathBuf,
    pub mime: String,
}

impl PendingFile {
    /// Describes `path`, detecting its MIME type from the extension.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let mime = super::mime::detect(&path);
        Self { path, mime }
    }

    /// File name for display, or the whole path if it has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// An accepted upload together with its live preview handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub file: PendingFile,
    pub url: AssetUrl,
}

#[derive(Debug, Default)]
pub struct AssetStore {
    entries: HashMap<AssetUrl, ImageData>,
    next_id: u64,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `image` and returns a fresh handle for it.
    pub fn create(&mut self, image: ImageData) -> AssetUrl {
        self.next_id += 1;
        let url = AssetUrl::from_id(self.next_id);
        self.entries.insert(url.clone(), image);
        url
    }

    #[must_use]
    pub fn get(&self, url: &AssetUrl) -> Option<&ImageData> {
        self.entries.get(url)
    }

    /// Releases `url`. Returns `false` if it was not live.
    pub fn revoke(&mut self, url: &AssetUrl) -> bool {
        let removed = self.entries.remove(url).is_some();
        if removed {
            log::debug!("Revoked {url}");
        }
        removed
    }

    #[must_use]
    pub fn is_live(&self, url: &AssetUrl) -> bool {
        self.entries.contains_key(url)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    /// Releases every live handle. Returns how many were released.
    pub fn revoke_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}
