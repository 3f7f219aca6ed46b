// SPDX-License-Identifier: MPL-2.0
//! Locating the garment photos and 3D model inside the assets directory.
//!
//! Layout:
//!
//! ```text
//! <assets>/images/tshirt-<color>.jpg
//! <assets>/models/Male_Tshirt.obj
//! <assets>/models/Male_Tshirt.mtl
//! ```

use crate::domain::GarmentColor;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const MODEL_OBJ: &str = "Male_Tshirt.obj";
pub const MODEL_MTL: &str = "Male_Tshirt.mtl";

/// Paths of the garment model files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub obj: PathBuf,
    pub mtl: PathBuf,
}

/// Garment assets discovered under one root directory.
///
/// Photo availability is checked once, so views never touch the disk.
#[derive(Debug, Clone, Default)]
pub struct GarmentAssets {
    root: PathBuf,
    photos: HashMap<GarmentColor, PathBuf>,
}

impl GarmentAssets {
    /// Probes `root` for the per-color photos.
    #[must_use]
    pub fn scan(root: &Path) -> Self {
        let photos: HashMap<_, _> = GarmentColor::ALL
            .into_iter()
            .filter_map(|color| {
                let path = photo_path(root, color);
                path.is_file().then_some((color, path))
            })
            .collect();

        log::info!(
            "Garment assets in {}: {} of {} photos",
            root.display(),
            photos.len(),
            GarmentColor::ALL.len()
        );

        Self {
            root: root.to_path_buf(),
            photos,
        }
    }

    /// An assets set with no photos, which always renders the silhouette.
    #[must_use]
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            photos: HashMap::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Photo for `color`, falling back to the navy photo.
    #[must_use]
    pub fn photo_for(&self, color: GarmentColor) -> Option<&Path> {
        self.photos
            .get(&color)
            .or_else(|| self.photos.get(&GarmentColor::Navy))
            .map(PathBuf::as_path)
    }

    #[must_use]
    pub fn model_paths(&self) -> ModelPaths {
        let models = self.root.join("models");
        ModelPaths {
            obj: models.join(MODEL_OBJ),
            mtl: models.join(MODEL_MTL),
        }
    }
}

fn photo_path(root: &Path, color: GarmentColor) -> PathBuf {
    root.join("images")
        .join(format!("tshirt-{}.jpg", color.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch_photo(root: &Path, color: GarmentColor) {
        let path = photo_path(root, color);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, b"jpg").expect("write photo");
    }

    #[test]
    fn own_photo_is_preferred() {
        let dir = tempdir().expect("tempdir");
        touch_photo(dir.path(), GarmentColor::Navy);
        touch_photo(dir.path(), GarmentColor::Red);

        let assets = GarmentAssets::scan(dir.path());
        let photo = assets.photo_for(GarmentColor::Red).expect("photo");
        assert!(photo.ends_with("tshirt-red.jpg"));
    }

    #[test]
    fn missing_photo_falls_back_to_navy() {
        let dir = tempdir().expect("tempdir");
        touch_photo(dir.path(), GarmentColor::Navy);

        let assets = GarmentAssets::scan(dir.path());
        let photo = assets.photo_for(GarmentColor::Gray).expect("photo");
        assert!(photo.ends_with("tshirt-navy.jpg"));
    }

    #[test]
    fn no_photos_means_no_photo() {
        let dir = tempdir().expect("tempdir");
        let assets = GarmentAssets::scan(dir.path());
        assert!(assets.photo_for(GarmentColor::White).is_none());
    }

    #[test]
    fn model_paths_live_under_models() {
        let assets = GarmentAssets::empty(Path::new("/srv/tee"));
        let paths = assets.model_paths();
        assert_eq!(paths.obj, PathBuf::from("/srv/tee/models/Male_Tshirt.obj"));
        assert_eq!(paths.mtl, PathBuf::from("/srv/tee/models/Male_Tshirt.mtl"));
    }
}
