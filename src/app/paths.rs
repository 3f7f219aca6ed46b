// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Config directory:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_TEE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Assets directory:
//! 1. **CLI argument** (`--assets-dir`)
//! 2. **Environment variable** (`ICED_TEE_ASSETS_DIR`)
//! 3. **Config value** (`[assets] dir`)
//! 4. `./assets`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedTee";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TEE_CONFIG_DIR";

/// Environment variable to override the garment assets directory.
pub const ENV_ASSETS_DIR: &str = "ICED_TEE_ASSETS_DIR";

/// Assets directory used when nothing else is configured.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for assets directory (set once at startup).
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and assets directories.
///
/// Must be called once at startup, before any path resolution. Later calls
/// are ignored with a warning.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI path overrides already initialized; ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`:
/// - Linux: `~/.config/IcedTee/`
/// - macOS: `~/Library/Application Support/IcedTee/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedTee\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The override takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Resolves the directory holding garment photos and the 3D model.
///
/// `config_dir` is the `[assets] dir` value from `settings.toml`, if any.
pub fn resolve_assets_dir(config_dir: Option<&str>) -> PathBuf {
    resolve_assets_dir_from(get_cli_assets_dir(), config_dir)
}

fn resolve_assets_dir_from(cli: Option<PathBuf>, config_dir: Option<&str>) -> PathBuf {
    cli.or_else(|| non_empty_env(ENV_ASSETS_DIR))
        .or_else(|| {
            config_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::env_lock;

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = env_lock();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = env_lock();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_prefers_cli_then_env_then_config() {
        let _lock = env_lock();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        assert_eq!(
            resolve_assets_dir_from(Some(PathBuf::from("/cli/assets")), Some("/cfg")),
            PathBuf::from("/cli/assets")
        );
        assert_eq!(
            resolve_assets_dir_from(None, Some("/cfg")),
            PathBuf::from("/env/assets")
        );

        std::env::remove_var(ENV_ASSETS_DIR);

        assert_eq!(
            resolve_assets_dir_from(None, Some("/cfg")),
            PathBuf::from("/cfg")
        );
        assert_eq!(
            resolve_assets_dir_from(None, Some("  ")),
            PathBuf::from(DEFAULT_ASSETS_DIR)
        );
        assert_eq!(
            resolve_assets_dir_from(None, None),
            PathBuf::from(DEFAULT_ASSETS_DIR)
        );
    }
}
