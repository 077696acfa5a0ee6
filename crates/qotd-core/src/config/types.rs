//! Configuration type definitions for the Quote of the Day desklet.
//!
//! Keys mirror the desklet's settings schema, so a config file reads like the
//! host's own settings store:
//!
//! ```toml
//! file = "file:///usr/share/games/fortunes/fortunes"
//! delay = 5
//! fortune-params = "-s"
//! ignore-input-file = false
//!
//! font-size = 12
//! text-color = "#ffffff"
//! horizontal-shadow = 1
//! vertical-shadow = 1
//! shadow-blur = 2
//! shadow-color = "#000000"
//! ```

use serde::{Deserialize, Serialize};

/// One layer of configuration as read from a TOML file or the command line.
///
/// Every field is optional so layers can be merged with
/// [`merge_configs`](super::loading::merge_configs); unset fields fall
/// through to the layer below and finally to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QotdConfig {
    /// Quote database passed to fortune, as a `file://` URI or a local path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Minutes between refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,

    /// Extra whitespace-separated arguments passed to fortune.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fortune_params: Option<String>,

    /// Run fortune without the configured file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_input_file: Option<bool>,

    /// Label font size in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    /// Horizontal text-shadow offset in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_shadow: Option<i32>,

    /// Vertical text-shadow offset in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_shadow: Option<i32>,

    /// Text-shadow blur radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
}

/// Fully resolved desklet settings.
///
/// This is what the host settings service hands to the desklet: every key has
/// a concrete value. Built from a merged [`QotdConfig`] via
/// [`QotdConfig::into_settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeskletSettings {
    pub file: Option<String>,
    pub delay: f64,
    pub fortune_params: String,
    pub ignore_input_file: bool,
    pub font_size: u32,
    pub text_color: String,
    pub horizontal_shadow: i32,
    pub vertical_shadow: i32,
    pub shadow_blur: u32,
    pub shadow_color: String,
}
