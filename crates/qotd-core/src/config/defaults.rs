//! Default values for desklet settings.
//!
//! These match the defaults shipped in the desklet's settings schema.

use crate::config::types::{DeskletSettings, QotdConfig};

/// Default minutes between refreshes.
pub const DEFAULT_DELAY_MINUTES: f64 = 5.0;

pub const DEFAULT_FONT_SIZE: u32 = 12;

pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

pub const DEFAULT_HORIZONTAL_SHADOW: i32 = 1;

pub const DEFAULT_VERTICAL_SHADOW: i32 = 1;

pub const DEFAULT_SHADOW_BLUR: u32 = 2;

pub const DEFAULT_SHADOW_COLOR: &str = "#000000";

impl Default for DeskletSettings {
    fn default() -> Self {
        QotdConfig::default().into_settings()
    }
}

impl QotdConfig {
    /// Resolve this layer into concrete settings, filling unset keys with
    /// the built-in defaults.
    pub fn into_settings(self) -> DeskletSettings {
        DeskletSettings {
            file: self.file,
            delay: self.delay.unwrap_or(DEFAULT_DELAY_MINUTES),
            fortune_params: self.fortune_params.unwrap_or_default(),
            ignore_input_file: self.ignore_input_file.unwrap_or(false),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            text_color: self
                .text_color
                .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
            horizontal_shadow: self
                .horizontal_shadow
                .unwrap_or(DEFAULT_HORIZONTAL_SHADOW),
            vertical_shadow: self.vertical_shadow.unwrap_or(DEFAULT_VERTICAL_SHADOW),
            shadow_blur: self.shadow_blur.unwrap_or(DEFAULT_SHADOW_BLUR),
            shadow_color: self
                .shadow_color
                .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_string()),
        }
    }
}
