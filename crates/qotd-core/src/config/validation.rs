//! Configuration validation logic.

use crate::config::types::DeskletSettings;
use crate::errors::ConfigError;

/// Validate resolved settings before they reach the refresher.
///
/// # Validation Rules
///
/// - `delay` must be a finite number of minutes greater than zero
/// - `font-size` must be greater than zero
/// - `text-color` and `shadow-color` must not be blank
pub fn validate_settings(settings: &DeskletSettings) -> Result<(), ConfigError> {
    if !settings.delay.is_finite() || settings.delay <= 0.0 {
        return Err(ConfigError::InvalidValue {
            key: "delay".to_string(),
            message: format!(
                "must be a positive number of minutes, got {}",
                settings.delay
            ),
        });
    }

    if settings.font_size == 0 {
        return Err(ConfigError::InvalidValue {
            key: "font-size".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    for (key, value) in [
        ("text-color", &settings.text_color),
        ("shadow-color", &settings.shadow_color),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
