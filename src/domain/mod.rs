// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core customization types with ZERO external dependencies.
//!
//! This module contains pure value objects and business rules. It depends on
//! nothing but `std`, so every rule here is testable without a window.
//!
//! # Modules
//!
//! - [`customization`]: The combined state ([`Customization`], [`CustomizationPatch`], [`AssetUrl`])
//! - [`garment`]: Garment options ([`GarmentColor`], [`Build`])
//! - [`measurements`]: Body measurements ([`Height`], [`Weight`])
//! - [`print_text`]: Custom text with its line cap ([`PrintText`])

pub mod customization;
pub mod garment;
pub mod measurements;
pub mod print_text;

pub use customization::{AssetUrl, Customization, CustomizationPatch};
pub use garment::{Build, GarmentColor};
pub use measurements::{Height, MeasurementInputError, Weight};
pub use print_text::PrintText;
