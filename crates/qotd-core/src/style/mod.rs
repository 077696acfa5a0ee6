//! Label styling.
//!
//! Renders the desklet's font and text-shadow settings into the inline CSS
//! the host applies to the quote label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Font size in points.
    pub font_size: u32,
    pub text_color: String,
    /// Horizontal shadow offset in pixels.
    pub horizontal_shadow: i32,
    /// Vertical shadow offset in pixels.
    pub vertical_shadow: i32,
    /// Shadow blur radius in pixels.
    pub shadow_blur: u32,
    pub shadow_color: String,
}

impl LabelStyle {
    /// The `text-shadow` value, including its terminating semicolon.
    pub fn text_shadow(&self) -> String {
        format!(
            "{}px {}px {}px {};",
            self.horizontal_shadow, self.vertical_shadow, self.shadow_blur, self.shadow_color
        )
    }

    /// Inline CSS for the quote label.
    pub fn to_css(&self) -> String {
        format!(
            "font-size: {}pt;\ncolor: {};\ntext-shadow: {}",
            self.font_size,
            self.text_color,
            self.text_shadow()
        )
    }
}
