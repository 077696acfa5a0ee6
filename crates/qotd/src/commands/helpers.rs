use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::warn;

use qotd_core::config::{self, DeskletSettings, QotdConfig};
use qotd_core::errors::ConfigError;

/// Where settings come from: an optional config file plus the command-line
/// layer on top of it.
#[derive(Debug, Clone)]
pub struct SettingsSource {
    explicit: Option<PathBuf>,
    overrides: QotdConfig,
}

impl SettingsSource {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            explicit: matches.get_one::<PathBuf>("config").cloned(),
            overrides: overrides_from_matches(matches),
        }
    }

    /// The config file whose edits should reload settings.
    pub fn watch_path(&self) -> Option<PathBuf> {
        self.explicit.clone().or_else(config::user_config_path)
    }

    /// Load settings, failing on any config error.
    pub fn reload(&self) -> Result<DeskletSettings, ConfigError> {
        config::load_settings(self.explicit.as_deref(), self.overrides.clone())
    }

    /// Load settings with warning on config file errors.
    ///
    /// Falls back to defaults plus command-line overrides if the config file
    /// cannot be used, but notifies the user via:
    /// - stderr message for immediate visibility
    /// - structured log event `cli.config.load_failed` for debugging
    ///
    /// Invalid command-line values are still an error.
    pub fn load_with_warning(&self) -> Result<DeskletSettings, ConfigError> {
        match self.reload() {
            Ok(settings) => Ok(settings),
            Err(e) => {
                eprintln!(
                    "Warning: Could not load config: {}. Using defaults.\n\
                     Tip: Check {} for syntax errors.",
                    e,
                    describe_config_path(self.watch_path().as_deref())
                );
                warn!(
                    event = "cli.config.load_failed",
                    error = %e,
                    "Config load failed, using defaults"
                );
                let settings = self.overrides.clone().into_settings();
                config::validate_settings(&settings)?;
                Ok(settings)
            }
        }
    }
}

fn describe_config_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "your qotd config file".to_string(),
    }
}

/// Build the command-line configuration layer.
fn overrides_from_matches(matches: &ArgMatches) -> QotdConfig {
    QotdConfig {
        file: matches.get_one::<String>("file").cloned(),
        delay: matches.get_one::<f64>("delay").copied(),
        fortune_params: matches.get_one::<String>("params").cloned(),
        // Only an explicit flag overrides the file; absence means "not set".
        ignore_input_file: matches.get_flag("ignore-input-file").then_some(true),
        ..Default::default()
    }
}
