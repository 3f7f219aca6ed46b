// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its `Message`s and reports an `Event` to the
//! application root, which alone mutates the customization.
//!
//! # Components
//!
//! - [`form`] - Measurements, build, color and print text
//! - [`uploader`] - Drop zone and file picker for the print image
//! - [`preview`] - 2D composite and 3D garment previews
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Minimal/Modern/Retro theme styles

pub mod design_tokens;
pub mod form;
pub mod notifications;
pub mod preview;
pub mod styles;
pub mod theming;
pub mod uploader;
pub mod widgets;
