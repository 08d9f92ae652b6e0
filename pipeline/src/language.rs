//! Supported languages and their checkpoint markers.

use crate::PipelineError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the base-speaker checkpoints ship for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    /// Checkpoint directory marker for this language.
    pub fn marker(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Chinese => "ZH",
        }
    }

    /// Display name passed through to the base synthesizer.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
        }
    }
}

impl FromStr for Language {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "chinese" => Ok(Language::Chinese),
            _ => Err(PipelineError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod language_tests {
    use super::*;

    #[test]
    fn test_markers_are_deterministic() {
        assert_eq!(Language::English.marker(), "EN");
        assert_eq!(Language::Chinese.marker(), "ZH");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("chinese".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("CHINESE".parse::<Language>().unwrap(), Language::Chinese);
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedLanguage(l) if l == "Klingon"));
    }
}
