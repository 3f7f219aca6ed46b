// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the customizer.
//!
//! Nothing in the application is fatal: every variant ends up either in a log
//! line, an inline status message (3D preview), or a toast notification.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("SVG Error: {0}")]
    Svg(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Model Error: {0}")]
    Model(#[from] ModelError),
}

/// Failures while reading or parsing the 3D garment assets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The asset file could not be read.
    #[error("cannot read {}: {reason}", path.display())]
    Missing { path: PathBuf, reason: String },

    /// A line of an OBJ or MTL file could not be understood.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The geometry parsed but contains no triangles.
    #[error("model contains no faces")]
    Empty,
}

impl ModelError {
    /// Returns the i18n message key used by the 3D overlay for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ModelError::Missing { .. } => "preview-3d-error-missing",
            ModelError::Parse { .. } => "preview-3d-error-parse",
            ModelError::Empty => "preview-3d-error-empty",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn model_error_wraps_into_error() {
        let err: Error = ModelError::Empty.into();
        assert!(matches!(err, Error::Model(ModelError::Empty)));
        assert_eq!(format!("{}", err), "Model Error: model contains no faces");
    }

    #[test]
    fn model_parse_error_mentions_line() {
        let err = ModelError::Parse {
            line: 12,
            reason: "bad vertex".into(),
        };
        assert_eq!(err.to_string(), "line 12: bad vertex");
    }

    #[test]
    fn model_error_i18n_keys() {
        let missing = ModelError::Missing {
            path: PathBuf::from("x.obj"),
            reason: "not found".into(),
        };
        assert_eq!(missing.i18n_key(), "preview-3d-error-missing");
        assert_eq!(ModelError::Empty.i18n_key(), "preview-3d-error-empty");
    }
}
