// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files live in `assets/i18n/<locale>.ftl` and are embedded at
//! build time. The starting locale comes from the `--lang` flag, then the
//! config file, then the OS, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
