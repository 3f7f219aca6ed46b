// SPDX-License-Identifier: MPL-2.0
//! Wavefront MTL material library parser.
//!
//! Only the statements that affect flat shading are read: `newmtl`, `Kd`,
//! `Ns` and `d`. Texture maps and other statements are skipped.

use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Diffuse color in linear `0.0..=1.0` components.
    pub diffuse: [f32; 3],
    pub shininess: f32,
    /// Opacity, where 1.0 is fully opaque.
    pub dissolve: f32,
}

impl Material {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            diffuse: [0.8, 0.8, 0.8],
            shininess: 0.0,
            dissolve: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

impl MaterialLibrary {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Parses the text of an MTL file.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] for malformed numbers, a property that
/// appears before any `newmtl`, or a `newmtl` without a name.
pub fn parse(source: &str) -> Result<MaterialLibrary, ModelError> {
    let mut materials: Vec<Material> = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        if keyword == "newmtl" {
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err(parse_error(line_no, "newmtl without a name"));
            }
            materials.push(Material::named(&name));
            continue;
        }

        if !matches!(keyword, "Kd" | "Ns" | "d") {
            continue;
        }

        let current = materials
            .last_mut()
            .ok_or_else(|| parse_error(line_no, &format!("{keyword} before newmtl")))?;
        let values = parse_floats(parts, line_no)?;

        match keyword {
            "Kd" => {
                let [r, g, b] = values[..] else {
                    return Err(parse_error(line_no, "Kd expects three values"));
                };
                current.diffuse = [r, g, b];
            }
            "Ns" => current.shininess = single(&values, line_no, "Ns")?,
            _ => current.dissolve = single(&values, line_no, "d")?,
        }
    }

    Ok(MaterialLibrary { materials })
}

fn parse_floats<'a>(
    parts: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<Vec<f32>, ModelError> {
    parts
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| parse_error(line_no, &format!("invalid number '{token}'")))
        })
        .collect()
}

fn single(values: &[f32], line_no: usize, keyword: &str) -> Result<f32, ModelError> {
    match values {
        [value] => Ok(*value),
        _ => Err(parse_error(line_no, &format!("{keyword} expects one value"))),
    }
}

fn parse_error(line: usize, reason: &str) -> ModelError {
    ModelError::Parse {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Exported material
newmtl Shirt_Body
Ns 30.000000
Ka 1.000000 1.000000 1.000000
Kd 0.100000 0.200000 0.300000
d 1.000000
map_Kd shirt.png

newmtl Collar
Kd 1 1 1
";

    #[test]
    fn parses_materials_in_order() {
        let library = parse(SAMPLE).expect("valid mtl");
        assert_eq!(library.len(), 2);

        let body = library.get("Shirt_Body").expect("body material");
        assert_eq!(body.diffuse, [0.1, 0.2, 0.3]);
        assert_eq!(body.shininess, 30.0);

        let collar = library.get("Collar").expect("collar material");
        assert_eq!(collar.diffuse, [1.0, 1.0, 1.0]);
        assert_eq!(collar.dissolve, 1.0);
    }

    #[test]
    fn empty_source_is_an_empty_library() {
        assert!(parse("").expect("empty mtl").is_empty());
    }

    #[test]
    fn property_before_newmtl_is_rejected() {
        let err = parse("Kd 1 1 1\n").expect_err("must fail");
        assert!(matches!(err, ModelError::Parse { line: 1, .. }));
    }

    #[test]
    fn bad_number_reports_its_line() {
        let err = parse("newmtl a\nKd 1 x 1\n").expect_err("must fail");
        match err {
            ModelError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains('x'));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
