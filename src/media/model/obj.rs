// SPDX-License-Identifier: MPL-2.0
//! Wavefront OBJ geometry parser.
//!
//! Supported statements: `v`, `f` (with `v`, `v/vt`, `v//vn` and `v/vt/vn`
//! references, negative indices included), `o`, `g` and `usemtl`. Polygons
//! are triangulated as fans. Other statements are skipped.

use super::{MaterialLibrary, Mesh, Model};
use crate::error::ModelError;
use glam::Vec3;

/// Parses the text of an OBJ file.
///
/// `materials` resolves `usemtl` names; unknown names are kept on the mesh
/// and rendered with the default material.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] for malformed statements and
/// [`ModelError::Empty`] if the file yields no triangles.
pub fn parse(source: &str, materials: MaterialLibrary) -> Result<Model, ModelError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut meshes: Vec<Mesh> = Vec::new();
    let mut group = String::from("default");
    let mut current_material: Option<String> = None;

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let coords = parts
                    .take(3)
                    .map(|token| parse_f32(token, line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                let [x, y, z] = coords[..] else {
                    return Err(parse_error(line_no, "vertex needs three coordinates"));
                };
                positions.push(Vec3::new(x, y, z));
            }
            "o" | "g" => {
                group = parts.collect::<Vec<_>>().join(" ");
                if group.is_empty() {
                    group = String::from("default");
                }
            }
            "usemtl" => {
                let name = parts.collect::<Vec<_>>().join(" ");
                if !name.is_empty() && materials.get(&name).is_none() {
                    log::debug!("OBJ line {line_no}: unknown material '{name}'");
                }
                current_material = (!name.is_empty()).then_some(name);
            }
            "f" => {
                let corners = parts
                    .map(|token| resolve_index(token, positions.len(), line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(parse_error(line_no, "face needs at least three vertices"));
                }

                let mesh = current_mesh(&mut meshes, &group, current_material.as_deref());
                for window in 1..corners.len() - 1 {
                    mesh.triangles.push([
                        positions[corners[0]],
                        positions[corners[window]],
                        positions[corners[window + 1]],
                    ]);
                }
            }
            _ => {}
        }
    }

    meshes.retain(|mesh| !mesh.triangles.is_empty());
    if meshes.is_empty() {
        return Err(ModelError::Empty);
    }

    Ok(Model { meshes, materials })
}

/// Returns the mesh for the current group and material, starting a new one
/// whenever either changes.
fn current_mesh<'a>(
    meshes: &'a mut Vec<Mesh>,
    group: &str,
    material: Option<&str>,
) -> &'a mut Mesh {
    let reuse = meshes
        .last()
        .is_some_and(|mesh| mesh.name == group && mesh.material.as_deref() == material);
    if !reuse {
        meshes.push(Mesh::new(group, material.map(str::to_string)));
    }
    let last = meshes.len() - 1;
    &mut meshes[last]
}

/// Converts a face corner such as `12/4/7` or `-1` into a zero-based index.
fn resolve_index(token: &str, vertex_count: usize, line_no: usize) -> Result<usize, ModelError> {
    let position = token.split('/').next().unwrap_or("");
    let raw: i64 = position
        .parse()
        .map_err(|_| parse_error(line_no, &format!("invalid face index '{token}'")))?;

    let resolved = match raw {
        0 => None,
        n if n > 0 => usize::try_from(n - 1).ok(),
        n => usize::try_from(n.unsigned_abs())
            .ok()
            .and_then(|back| vertex_count.checked_sub(back)),
    };

    resolved
        .filter(|&i| i < vertex_count)
        .ok_or_else(|| parse_error(line_no, &format!("face index {raw} out of range")))
}

fn parse_f32(token: &str, line_no: usize) -> Result<f32, ModelError> {
    token
        .parse::<f32>()
        .map_err(|_| parse_error(line_no, &format!("invalid number '{token}'")))
}

fn parse_error(line: usize, reason: &str) -> ModelError {
    ModelError::Parse {
        line,
        reason: reason.to_string(),
    }
}
