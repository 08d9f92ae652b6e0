//! Tone color conversion and speaker-embedding extraction.

use crate::{ModelError, SpeakerEmbedding};
use async_trait::async_trait;
use std::path::Path;

/// A loaded tone-color converter bundle.
///
/// Embedding extraction is part of this trait on purpose: an embedding
/// is only compatible with the bundle that produced it, so extraction
/// and conversion have to go through the same instance.
///
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait ToneConverter: Send + Sync {
    /// Extracts the speaker embedding from an audio file.
    ///
    /// Accepts wav, mp3, and flac inputs; other formats may fail with
    /// [`ModelError::UnsupportedFormat`]. `workspace_dir` receives
    /// scratch segments. `use_vad` trims non-speech audio before
    /// extraction; it is a quality knob, not a correctness requirement.
    ///
    /// Returns the embedding and a label derived from the audio file.
    async fn extract_embedding(
        &self,
        audio_path: &Path,
        workspace_dir: &Path,
        use_vad: bool,
    ) -> Result<(SpeakerEmbedding, String), ModelError>;

    /// Loads a precomputed speaker-embedding asset (`*_se.pth`).
    async fn load_speaker_embedding(
        &self,
        path: &Path,
    ) -> Result<SpeakerEmbedding, ModelError>;

    /// Rewrites the vocal timbre of `source_path` from `source_se`
    /// toward `target_se`, preserving linguistic and prosodic content,
    /// and writes the result to `output_path`.
    ///
    /// `watermark` is an opaque payload embedded into the output audio.
    /// Fails with [`ModelError::Conversion`] on malformed input audio
    /// or an embedding-dimension mismatch.
    async fn convert(
        &self,
        source_path: &Path,
        source_se: &SpeakerEmbedding,
        target_se: &SpeakerEmbedding,
        output_path: &Path,
        watermark: &str,
    ) -> Result<(), ModelError>;
}
