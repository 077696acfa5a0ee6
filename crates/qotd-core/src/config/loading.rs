//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **Config file** - `--config <path>` if given, otherwise
//!    `$XDG_CONFIG_HOME/qotd/config.toml`
//! 3. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{DeskletSettings, QotdConfig};
use crate::config::validation::validate_settings;
use crate::errors::ConfigError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the per-user config file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qotd").join("config.toml"))
}

/// Load the file layer of the configuration hierarchy.
///
/// An explicit path must exist. The per-user file is optional: when it is
/// missing the empty layer is returned.
///
/// # Errors
///
/// Returns `ConfigNotFound` for a missing explicit file and
/// `ConfigParseError` for malformed TOML in either file.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<QotdConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let Some(path) = user_config_path() else {
        debug!(event = "core.config.user_dir_unavailable");
        return Ok(QotdConfig::default());
    };

    match load_config_file(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ConfigNotFound { .. }) => {
            debug!(
                event = "core.config.user_config_missing",
                path = %path.display()
            );
            Ok(QotdConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<QotdConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

/// Merge two configuration layers, with `override_config` taking precedence.
///
/// Each key is taken from the override layer if it is set there, otherwise
/// from the base layer.
pub fn merge_configs(base: QotdConfig, override_config: QotdConfig) -> QotdConfig {
    QotdConfig {
        file: override_config.file.or(base.file),
        delay: override_config.delay.or(base.delay),
        fortune_params: override_config.fortune_params.or(base.fortune_params),
        ignore_input_file: override_config.ignore_input_file.or(base.ignore_input_file),
        font_size: override_config.font_size.or(base.font_size),
        text_color: override_config.text_color.or(base.text_color),
        horizontal_shadow: override_config
            .horizontal_shadow
            .or(base.horizontal_shadow),
        vertical_shadow: override_config.vertical_shadow.or(base.vertical_shadow),
        shadow_blur: override_config.shadow_blur.or(base.shadow_blur),
        shadow_color: override_config.shadow_color.or(base.shadow_color),
    }
}

/// Load, merge and validate the full settings.
///
/// `overrides` is the command-line layer and wins over the file layer.
pub fn load_settings(
    explicit: Option<&Path>,
    overrides: QotdConfig,
) -> Result<DeskletSettings, ConfigError> {
    let file_layer = load_hierarchy(explicit)?;
    let settings = merge_configs(file_layer, overrides).into_settings();
    validate_settings(&settings)?;
    Ok(settings)
}
