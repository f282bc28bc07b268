use serde::Serialize;
use utoipa::ToSchema;

const ICON_FONT_MARKER: &str = "fa-";

/// How a skill icon string is drawn.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// The string is a set of icon-font classes, e.g. `"fab fa-react"`.
    GlyphFont,
    /// The string is shown as-is (emoji, short text, or nothing).
    LiteralText,
}

impl IconMode {
    pub fn classify(icon: &str) -> Self {
        if icon.contains(ICON_FONT_MARKER) {
            IconMode::GlyphFont
        } else {
            IconMode::LiteralText
        }
    }
}
