//! # Configuration System
//!
//! TOML configuration for the desklet, keyed exactly like the desklet's
//! settings schema (`file`, `delay`, `fortune-params`, ...).
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use qotd_core::config::{QotdConfig, load_settings};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = load_settings(None, QotdConfig::default())?;
//!     let refresh = settings.refresh_config();
//!     println!("refreshing every {} minutes", refresh.interval_minutes);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod keys;
pub mod loading;
pub mod types;
pub mod validation;

pub use keys::{SettingsGroup, SettingsKey, changed_keys};
pub use loading::{load_config_file, load_hierarchy, load_settings, merge_configs, user_config_path};
pub use types::{DeskletSettings, QotdConfig};
pub use validation::validate_settings;

use crate::refresher::RefreshConfig;
use crate::style::LabelStyle;

impl DeskletSettings {
    /// The subset of settings that drives the quote refresh cycle.
    pub fn refresh_config(&self) -> RefreshConfig {
        RefreshConfig {
            quote_file: self.file.clone(),
            ignore_input_file: self.ignore_input_file,
            extra_args: self.fortune_params.clone(),
            interval_minutes: self.delay,
        }
    }

    /// The subset of settings that styles the quote label.
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            font_size: self.font_size,
            text_color: self.text_color.clone(),
            horizontal_shadow: self.horizontal_shadow,
            vertical_shadow: self.vertical_shadow,
            shadow_blur: self.shadow_blur,
            shadow_color: self.shadow_color.clone(),
        }
    }
}
