//! Text-to-speech pipeline with voice cloning.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::node::{PipelineOutput, TtsRequest};
use crate::util::{resolve_input, validate_speed};
use crate::workspace::{run_prefix, scratch_name};
use openvoice_audio::read_wav;
use openvoice_models::{
    CheckpointLayout, Device, HubFetcher, ModelProvider, ModelStore, SnapshotFetcher,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Watermark payload embedded into every converted waveform.
pub(crate) const WATERMARK_MESSAGE: &str = "@MyShell";

/// Orchestrates text-to-speech with voice cloning.
///
/// Each run resolves the checkpoint root, constructs fresh synthesizer
/// and converter bundles, synthesizes a base waveform from the text,
/// and converts its tone color toward the reference voice. Bundles are
/// request-scoped; nothing is cached across runs.
pub struct TtsPipeline<F = HubFetcher> {
    config: PipelineConfig,
    store: ModelStore<F>,
    provider: Arc<dyn ModelProvider>,
}

impl TtsPipeline<HubFetcher> {
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

impl<F: SnapshotFetcher> TtsPipeline<F> {
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
    ///
    /// Any failure aborts the run; no partial result is returned.
    pub async fn run(&self, request: &TtsRequest) -> Result<PipelineOutput, PipelineError> {
        // Everything cheap is validated before any checkpoint is
        // touched.
        validate_speed(request.speed)?;
        let marker = request.lang.marker();
        let reference = resolve_input(&self.config.input_dir, &request.ref_voice)?;

        self.store.resolve(&self.config.checkpoint_root).await?;

        let layout = CheckpointLayout::new(&self.config.checkpoint_root);
        let device = Device::select(self.config.device_preference);
        info!(
            lang = %request.lang,
            style = %request.style,
            %device,
            "loading synthesizer and converter bundles"
        );
        let synthesizer = self
            .provider
            .load_synthesizer(&layout.base_speaker(marker), device)
            .await?;
        let converter = self
            .provider
            .load_converter(&layout.converter(), device)
            .await?;

        let source_se = converter
            .load_speaker_embedding(&layout.style_embedding(marker, request.style.asset_kind()))
            .await?;
        let (target_se, reference_label) = converter
            .extract_embedding(&reference, &self.config.workspace_dir, true)
            .await?;
        debug!(
            reference = %reference_label,
            dimension = target_se.dimension(),
            "extracted target embedding"
        );

        let prefix = run_prefix();
        let base_path = self
            .config
            .workspace_dir
            .join(scratch_name(&prefix, "base", marker, request.style.label()));
        let output_path = self
            .config
            .workspace_dir
            .join(scratch_name(&prefix, "output", marker, request.style.label()));

        synthesizer
            .synthesize(
                &request.text,
                &base_path,
                request.style.label(),
                request.lang.name(),
                request.speed,
            )
            .await?;
        converter
            .convert(
                &base_path,
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
