//! Speaker style labels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Style labels the base-speaker checkpoints enumerate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Default,
    Whispering,
    Cheerful,
    Terrified,
    Angry,
    Sad,
    Friendly,
}

impl Style {
    /// Label passed to the synthesizer and used in scratch file names.
    pub fn label(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Whispering => "whispering",
            Style::Cheerful => "cheerful",
            Style::Terrified => "terrified",
            Style::Angry => "angry",
            Style::Sad => "sad",
            Style::Friendly => "friendly",
        }
    }

    /// Source-embedding asset kind for this style.
    ///
    /// The checkpoint set ships exactly two source embeddings per
    /// language: `default` and one shared `style` asset. Every
    /// non-default style collapses to the latter; styles are not
    /// distinguished at the embedding level.
    pub fn asset_kind(self) -> &'static str {
        match self {
            Style::Default => "default",
            _ => "style",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod style_tests {
    use super::*;

    #[test]
    fn test_default_keeps_its_own_asset() {
        assert_eq!(Style::Default.asset_kind(), "default");
    }

    #[test]
    fn test_non_default_styles_collapse_to_style_asset() {
        for style in [
            Style::Whispering,
            Style::Cheerful,
            Style::Terrified,
            Style::Angry,
            Style::Sad,
            Style::Friendly,
        ] {
            assert_eq!(style.asset_kind(), "style", "style {style}");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        for style in [Style::Default, Style::Cheerful, Style::Sad] {
            let encoded = serde_json::to_value(style).unwrap();
            assert_eq!(encoded, serde_json::json!(style.label()));
        }
        let decoded: Result<Style, _> = serde_json::from_value(serde_json::json!("shouting"));
        assert!(decoded.is_err());
    }
}
