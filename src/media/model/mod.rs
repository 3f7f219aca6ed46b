// SPDX-License-Identifier: MPL-2.0
//! Garment geometry: Wavefront OBJ/MTL parsing, fitting, and loading.
//!
//! Geometry is kept as flat triangle lists. Normals are derived per face at
//! render time, so `vn` records in the source file are ignored.

pub mod loader;
pub mod mtl;
pub mod obj;

pub use loader::{load_garment, LoadOutcome};
pub use mtl::{Material, MaterialLibrary};

use glam::{Mat3, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }
}

/// One group of triangles sharing a material.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub material: Option<String>,
    pub triangles: Vec<[Vec3; 3]>,
}

impl Mesh {
    pub(crate) fn new(name: &str, material: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            material,
            triangles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub meshes: Vec<Mesh>,
    pub materials: MaterialLibrary,
}

impl Model {
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|mesh| mesh.triangles.len()).sum()
    }

    fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.meshes
            .iter()
            .flat_map(|mesh| mesh.triangles.iter().flatten().copied())
    }

    /// Bounding box of every vertex, or `None` for an empty model.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut vertices = self.vertices();
        let first = vertices.next()?;
        let (min, max) = vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Some(Bounds { min, max })
    }

    /// Centers the model on the origin and scales it so its largest
    /// dimension equals `fit_size`.
    ///
    /// Degenerate models (all vertices on one point) are only centered.
    pub fn normalize(&mut self, fit_size: f32) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let center = bounds.center();
        let max_dim = bounds.max_dimension();
        let scale = if max_dim > f32::EPSILON {
            fit_size / max_dim
        } else {
            1.0
        };
        self.transform(|v| (v - center) * scale);
    }

    /// Rotates the model around the X axis by `radians`.
    pub fn rotate_x(&mut self, radians: f32) {
        let rotation = Mat3::from_rotation_x(radians);
        self.transform(|v| rotation * v);
    }

    fn transform(&mut self, f: impl Fn(Vec3) -> Vec3) {
        for mesh in &mut self.meshes {
            for triangle in &mut mesh.triangles {
                for vertex in triangle.iter_mut() {
                    *vertex = f(*vertex);
                }
            }
        }
    }
}
