//! Settings keys and change routing.
//!
//! The host reports settings changes per key. Refresh keys restart the quote
//! cycle; style keys only restyle the label.

use crate::config::types::DeskletSettings;
use std::fmt;

/// A key in the desklet's settings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    File,
    Delay,
    FortuneParams,
    IgnoreInputFile,
    FontSize,
    TextColor,
    HorizontalShadow,
    VerticalShadow,
    ShadowBlur,
    ShadowColor,
}

/// Which desklet callback a settings key is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsGroup {
    /// Bound to `on_config_changed`.
    Refresh,
    /// Bound to `on_style_changed`.
    Style,
}

impl SettingsKey {
    pub const ALL: [SettingsKey; 10] = [
        SettingsKey::File,
        SettingsKey::Delay,
        SettingsKey::FortuneParams,
        SettingsKey::IgnoreInputFile,
        SettingsKey::FontSize,
        SettingsKey::TextColor,
        SettingsKey::HorizontalShadow,
        SettingsKey::VerticalShadow,
        SettingsKey::ShadowBlur,
        SettingsKey::ShadowColor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsKey::File => "file",
            SettingsKey::Delay => "delay",
            SettingsKey::FortuneParams => "fortune-params",
            SettingsKey::IgnoreInputFile => "ignore-input-file",
            SettingsKey::FontSize => "font-size",
            SettingsKey::TextColor => "text-color",
            SettingsKey::HorizontalShadow => "horizontal-shadow",
            SettingsKey::VerticalShadow => "vertical-shadow",
            SettingsKey::ShadowBlur => "shadow-blur",
            SettingsKey::ShadowColor => "shadow-color",
        }
    }

    pub fn group(&self) -> SettingsGroup {
        match self {
            SettingsKey::File
            | SettingsKey::Delay
            | SettingsKey::FortuneParams
            | SettingsKey::IgnoreInputFile => SettingsGroup::Refresh,
            SettingsKey::FontSize
            | SettingsKey::TextColor
            | SettingsKey::HorizontalShadow
            | SettingsKey::VerticalShadow
            | SettingsKey::ShadowBlur
            | SettingsKey::ShadowColor => SettingsGroup::Style,
        }
    }

    fn differs(&self, old: &DeskletSettings, new: &DeskletSettings) -> bool {
        match self {
            SettingsKey::File => old.file != new.file,
            SettingsKey::Delay => old.delay != new.delay,
            SettingsKey::FortuneParams => old.fortune_params != new.fortune_params,
            SettingsKey::IgnoreInputFile => old.ignore_input_file != new.ignore_input_file,
            SettingsKey::FontSize => old.font_size != new.font_size,
            SettingsKey::TextColor => old.text_color != new.text_color,
            SettingsKey::HorizontalShadow => old.horizontal_shadow != new.horizontal_shadow,
            SettingsKey::VerticalShadow => old.vertical_shadow != new.vertical_shadow,
            SettingsKey::ShadowBlur => old.shadow_blur != new.shadow_blur,
            SettingsKey::ShadowColor => old.shadow_color != new.shadow_color,
        }
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys whose values differ between `old` and `new`, in schema order.
pub fn changed_keys(old: &DeskletSettings, new: &DeskletSettings) -> Vec<SettingsKey> {
    SettingsKey::ALL
        .into_iter()
        .filter(|key| key.differs(old, new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_changes() {
        let settings = DeskletSettings::default();
        assert!(changed_keys(&settings, &settings.clone()).is_empty());
    }

    #[test]
    fn test_changed_keys_in_schema_order() {
        let old = DeskletSettings::default();
        let new = DeskletSettings {
            shadow_blur: 9,
            file: Some("/tmp/quotes".to_string()),
            ..Default::default()
        };

        assert_eq!(
            changed_keys(&old, &new),
            vec![SettingsKey::File, SettingsKey::ShadowBlur]
        );
    }

    #[test]
    fn test_groups() {
        let refresh: Vec<_> = SettingsKey::ALL
            .into_iter()
            .filter(|k| k.group() == SettingsGroup::Refresh)
            .map(|k| k.as_str())
            .collect();
        assert_eq!(
            refresh,
            vec!["file", "delay", "fortune-params", "ignore-input-file"]
        );
    }

    #[test]
    fn test_display_uses_schema_name() {
        assert_eq!(SettingsKey::IgnoreInputFile.to_string(), "ignore-input-file");
    }
}
