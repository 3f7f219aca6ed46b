// SPDX-License-Identifier: MPL-2.0
//! Loading the garment model with a material-less fallback.
//!
//! The full path reads the MTL library, then the OBJ geometry that uses it.
//! If either step fails, the OBJ is read again on its own. Only when that
//! also fails does the load fail.

use super::{mtl, obj, MaterialLibrary, Model};
use crate::app::config::{MODEL_FIT_SIZE, MODEL_TILT_RADIANS};
use crate::error::ModelError;
use crate::media::garment_assets::ModelPaths;
use std::fs;
use std::path::Path;

/// A successfully loaded garment.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Geometry and materials loaded.
    Full(Model),
    /// Materials or the first geometry read failed; geometry loaded alone.
    Fallback { model: Model, reason: ModelError },
}

impl LoadOutcome {
    #[must_use]
    pub fn model(&self) -> &Model {
        match self {
            LoadOutcome::Full(model) | LoadOutcome::Fallback { model, .. } => model,
        }
    }

    #[must_use]
    pub fn into_model(self) -> Model {
        match self {
            LoadOutcome::Full(model) | LoadOutcome::Fallback { model, .. } => model,
        }
    }
}

/// Loads the garment model from `paths`.
///
/// The result is centered and scaled to [`MODEL_FIT_SIZE`]. The full path
/// also tilts the model forward by [`MODEL_TILT_RADIANS`].
///
/// # Errors
///
/// Returns the fallback's error when the OBJ cannot be loaded even without
/// materials.
pub fn load_garment(paths: &ModelPaths) -> Result<LoadOutcome, ModelError> {
    match load_with_materials(paths) {
        Ok(mut model) => {
            model.normalize(MODEL_FIT_SIZE);
            model.rotate_x(MODEL_TILT_RADIANS);
            log::info!(
                "Loaded garment model: {} meshes, {} triangles, {} materials",
                model.meshes.len(),
                model.triangle_count(),
                model.materials.len()
            );
            Ok(LoadOutcome::Full(model))
        }
        Err(reason) => {
            log::warn!("Garment model with materials failed ({reason}); loading geometry only");
            let mut model = load_geometry(&paths.obj, MaterialLibrary::default()).map_err(|err| {
                log::warn!("Garment model fallback failed: {err}");
                err
            })?;
            model.normalize(MODEL_FIT_SIZE);
            Ok(LoadOutcome::Fallback { model, reason })
        }
    }
}

fn load_with_materials(paths: &ModelPaths) -> Result<Model, ModelError> {
    let library = mtl::parse(&read_source(&paths.mtl)?)?;
    load_geometry(&paths.obj, library)
}

fn load_geometry(path: &Path, library: MaterialLibrary) -> Result<Model, ModelError> {
    obj::parse(&read_source(path)?, library)
}

fn read_source(path: &Path) -> Result<String, ModelError> {
    fs::read_to_string(path).map_err(|err| ModelError::Missing {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
