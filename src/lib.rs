// SPDX-License-Identifier: MPL-2.0
//! `iced_tee` is a t-shirt customizer built with the Iced GUI framework.
//!
//! The user enters body measurements, picks a build and a garment color,
//! types up to three lines of print text and uploads an image. A live
//! preview shows the result either as a flat 2D composite or as a 3D
//! garment model that can be orbited with the mouse.
//!
//! # Layout
//!
//! - [`domain`]: customization value types and their rules
//! - [`media`]: upload decoding, the asset registry, and the OBJ/MTL model
//! - [`ui`]: form, uploader, previews, notifications and theming
//! - [`app`]: the composition root, keymap, config and persistence

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
