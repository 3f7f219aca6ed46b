// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Theme and language are the only preferences changed from inside the app,
//! and both are written as soon as they change.

use crate::app::config::{self, Config};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeStyle;
use unic_langid::LanguageIdentifier;

/// Writes `config` to disk.
///
/// Guarded during unit tests to keep isolation: tests exercise the logic by
/// inspecting the in-memory config instead.
fn save(config: &Config) -> Result<()> {
    if cfg!(test) {
        return Ok(());
    }
    config::save(config)
}

/// Records the new theme style and persists it.
pub fn persist_theme(config: &mut Config, style: ThemeStyle) -> Result<()> {
    config.general.theme = style;
    save(config)
}

/// Applies the newly selected locale and persists it.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> Result<()> {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    save(config)
}
