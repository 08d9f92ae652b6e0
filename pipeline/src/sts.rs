//! Speech-to-speech voice conversion pipeline.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::node::{PipelineOutput, StsRequest};
use crate::tts::WATERMARK_MESSAGE;
use crate::util::resolve_input;
use crate::workspace::{crosslingual_name, run_prefix};
use openvoice_audio::read_wav;
use openvoice_models::{
    CheckpointLayout, Device, HubFetcher, ModelProvider, ModelStore, SnapshotFetcher,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates speech-to-speech voice conversion.
///
/// No synthesizer is involved: the source file's tone color is moved
/// directly toward the reference voice's embedding. Only the converter
/// bundle is constructed, fresh on every run.
pub struct StsPipeline<F = HubFetcher> {
    config: PipelineConfig,
    store: ModelStore<F>,
    provider: Arc<dyn ModelProvider>,
}

impl StsPipeline<HubFetcher> {
    /// Pipeline using the hub-backed model store.
    pub fn new(config: PipelineConfig, provider: Arc<dyn ModelProvider>) -> Self {
        let store = ModelStore::new(config.repo_id.clone());
        Self {
            config,
            store,
            provider,
        }
    }
}

impl<F: SnapshotFetcher> StsPipeline<F> {
    /// Pipeline with a custom snapshot fetcher.
    pub fn with_fetcher(
        config: PipelineConfig,
        provider: Arc<dyn ModelProvider>,
        fetcher: F,
    ) -> Self {
        let store = ModelStore::with_fetcher(config.repo_id.clone(), fetcher);
        Self {
            config,
            store,
            provider,
        }
    }

    /// Runs the pipeline, returning the converted waveform in memory.
    pub async fn run(&self, request: &StsRequest) -> Result<PipelineOutput, PipelineError> {
        let source = resolve_input(&self.config.input_dir, &request.src_voice)?;
        let reference = resolve_input(&self.config.input_dir, &request.ref_voice)?;

        self.store.resolve(&self.config.checkpoint_root).await?;

        let layout = CheckpointLayout::new(&self.config.checkpoint_root);
        let device = Device::select(self.config.device_preference);
        info!(
            src = %request.src_voice,
            reference = %request.ref_voice,
            %device,
            "loading converter bundle"
        );
        let converter = self
            .provider
            .load_converter(&layout.converter(), device)
            .await?;

        let (source_se, _) = converter
            .extract_embedding(&source, &self.config.workspace_dir, true)
            .await?;
        let (target_se, _) = converter
            .extract_embedding(&reference, &self.config.workspace_dir, true)
            .await?;

        let prefix = run_prefix();
        let output_path = self.config.workspace_dir.join(crosslingual_name(&prefix));

        converter
            .convert(
                &source,
                &source_se,
                &target_se,
                &output_path,
                WATERMARK_MESSAGE,
            )
            .await?;

        let buffer = read_wav(&output_path)?;
        debug!(
            samples = buffer.samples.len(),
            sample_rate = buffer.sample_rate,
            "pipeline finished"
        );
        Ok(PipelineOutput {
            audio: buffer.samples,
            sample_rate: buffer.sample_rate,
        })
    }
}
