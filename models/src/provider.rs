//! Model bundle construction.

use crate::{BaseSynthesizer, BundlePaths, Device, ModelError, ToneConverter};
use async_trait::async_trait;
use std::sync::Arc;

/// Constructs model bundles from checkpoint paths.
///
/// Construction is expensive (disk read, device placement) and
/// request-scoped: pipelines rebuild their bundles on every invocation,
/// and a bundle is only valid for the checkpoint paths it was built
/// from. Construction only reads checkpoint files, so concurrent
/// construction over a shared root needs no locking.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Loads a base synthesizer from its checkpoint.
    async fn load_synthesizer(
        &self,
        paths: &BundlePaths,
        device: Device,
    ) -> Result<Arc<dyn BaseSynthesizer>, ModelError>;

    /// Loads a tone converter from its checkpoint.
    async fn load_converter(
        &self,
        paths: &BundlePaths,
        device: Device,
    ) -> Result<Arc<dyn ToneConverter>, ModelError>;
}
