//! Base text-to-speech synthesis.

use crate::ModelError;
use async_trait::async_trait;
use std::path::Path;

/// A loaded base-speaker synthesizer bundle.
///
/// Writes a waveform file in the checkpoint's source voice; the tone
/// converter then moves its timbre toward the target speaker.
///
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait BaseSynthesizer: Send + Sync {
    /// Synthesizes `text` to a waveform file at `output_path`.
    ///
    /// `style` is the speaker style label and `language` the display
    /// name the checkpoint was trained for; unsupported language/style
    /// combinations are a best-effort concern of the checkpoint.
    /// `speed` is a multiplicative tempo factor, validated upstream.
    async fn synthesize(
        &self,
        text: &str,
        output_path: &Path,
        style: &str,
        language: &str,
        speed: f32,
    ) -> Result<(), ModelError>;
}
