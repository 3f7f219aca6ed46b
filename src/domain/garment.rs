// SPDX-License-Identifier: MPL-2.0
//! Garment options: the fixed color set and body builds.

use std::fmt;

/// Garment colors in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GarmentColor {
    #[default]
    Navy,
    White,
    Black,
    Gray,
    Blue,
    Red,
}

impl GarmentColor {
    /// All colors, in the order the cycle shortcut walks through them.
    pub const ALL: [GarmentColor; 6] = [
        GarmentColor::Navy,
        GarmentColor::White,
        GarmentColor::Black,
        GarmentColor::Gray,
        GarmentColor::Blue,
        GarmentColor::Red,
    ];

    /// Position of this color in [`GarmentColor::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            GarmentColor::Navy => 0,
            GarmentColor::White => 1,
            GarmentColor::Black => 2,
            GarmentColor::Gray => 3,
            GarmentColor::Blue => 4,
            GarmentColor::Red => 5,
        }
    }

    /// Color at `index`, wrapping modulo the set size.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The next color in the cycle, wrapping from red back to navy.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lowercase name used in asset paths and configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GarmentColor::Navy => "navy",
            GarmentColor::White => "white",
            GarmentColor::Black => "black",
            GarmentColor::Gray => "gray",
            GarmentColor::Blue => "blue",
            GarmentColor::Red => "red",
        }
    }

    /// Parses a color name, case-insensitively. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|color| color.name() == lower)
    }

    /// Parses a color name, falling back to navy for unknown names.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// sRGB components in `0.0..=1.0`, matching the CSS named colors.
    #[must_use]
    pub fn rgb(self) -> [f32; 3] {
        match self {
            GarmentColor::Navy => [0.0, 0.0, 128.0 / 255.0],
            GarmentColor::White => [1.0, 1.0, 1.0],
            GarmentColor::Black => [0.0, 0.0, 0.0],
            GarmentColor::Gray => [128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0],
            GarmentColor::Blue => [0.0, 0.0, 1.0],
            GarmentColor::Red => [1.0, 0.0, 0.0],
        }
    }

    /// Whether text printed on this color should be dark to stay readable.
    #[must_use]
    pub fn is_light(self) -> bool {
        matches!(self, GarmentColor::White)
    }

    /// The i18n key of the color's display label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            GarmentColor::Navy => "color-navy",
            GarmentColor::White => "color-white",
            GarmentColor::Black => "color-black",
            GarmentColor::Gray => "color-gray",
            GarmentColor::Blue => "color-blue",
            GarmentColor::Red => "color-red",
        }
    }
}

impl fmt::Display for GarmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body-type category used for garment fit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Build::Lean => "lean",
            Build::Regular => "regular",
            Build::Athletic => "athletic",
            Build::Big => "big",
        }
    }

    /// Parses a build name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|build| build.name() == lower)
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Build::Lean => "build-lean",
            Build::Regular => "build-regular",
            Build::Athletic => "build-athletic",
            Build::Big => "build-big",
        }
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
