//! Host-facing request and response types.
//!
//! Rust rendition of the node input schema a graph-execution host
//! consumes: serde-(de)serializable requests with JSON-schema derives,
//! plus the input-directory enumeration presented as the voice-file
//! choices.

use crate::PipelineError;
use crate::language::Language;
use crate::style::Style;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_speed() -> f32 {
    1.0
}

/// Text-to-speech request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TtsRequest {
    /// Text to synthesize; may span multiple lines.
    #[serde(default)]
    pub text: String,
    /// Language of the text; selects the base-speaker checkpoint.
    pub lang: Language,
    /// Speaker style label.
    #[serde(default)]
    pub style: Style,
    /// Multiplicative tempo factor in [0, 10] (hosts typically step by
    /// 0.1).
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Reference voice file name, selected from the input directory.
    pub ref_voice: String,
}

/// Speech-to-speech conversion request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StsRequest {
    /// Source voice file name, selected from the input directory.
    pub src_voice: String,
    /// Reference voice file name, selected from the input directory.
    pub ref_voice: String,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PipelineOutput {
    /// Audio sample values in [-1, 1]; interleaved when multi-channel.
    pub audio: Vec<f64>,
    /// Samples per second.
    pub sample_rate: u32,
}

/// File names a host may offer for the `ref_voice`/`src_voice` inputs.
pub fn input_choices(input_dir: &Path) -> Result<Vec<String>, PipelineError> {
    Ok(openvoice_audio::list_audio_files(input_dir)?)
}

#[cfg(test)]
mod node_tests {
    use super::*;

    #[test]
    fn test_tts_request_defaults() {
        let request: TtsRequest = serde_json::from_value(serde_json::json!({
            "text": "hello",
            "lang": "English",
            "ref_voice": "ref.wav",
        }))
        .unwrap();

        assert_eq!(request.style, Style::Default);
        assert_eq!(request.speed, 1.0);
    }

    #[test]
    fn test_style_uses_lowercase_labels() {
        let request: TtsRequest = serde_json::from_value(serde_json::json!({
            "text": "hi",
            "lang": "Chinese",
            "style": "cheerful",
            "ref_voice": "ref.wav",
        }))
        .unwrap();

        assert_eq!(request.style, Style::Cheerful);
    }

    #[test]
    fn test_unknown_language_is_rejected_at_decode() {
        let result: Result<TtsRequest, _> = serde_json::from_value(serde_json::json!({
            "text": "hi",
            "lang": "Spanish",
            "ref_voice": "ref.wav",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_input_choices_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["z.wav", "a.mp3", "skip.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let choices = input_choices(dir.path()).unwrap();
        assert_eq!(choices, vec!["a.mp3", "z.wav"]);
    }
}
