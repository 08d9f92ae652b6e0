//! Speaker embeddings.

/// Fixed-dimension vector encoding a voice's timbral/style identity.
///
/// Produced by a [`ToneConverter`](crate::ToneConverter) bundle, either
/// from audio or from a precomputed asset, and only meaningful to
/// bundles sharing that checkpoint's dimensionality and normalization
/// convention. Immutable once produced; owned by a single pipeline
/// invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerEmbedding(Vec<f32>);

impl SpeakerEmbedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Dimensionality of the embedding vector.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for SpeakerEmbedding {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}
