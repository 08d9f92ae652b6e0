//! Voice-cloning pipelines over opaque pretrained model bundles.
//!
//! Two operations are exposed:
//! - [`TtsPipeline`]: text → base synthesis → tone-color conversion
//!   toward a reference voice
//! - [`StsPipeline`]: source audio → tone-color conversion toward a
//!   reference voice
//!
//! Both return the converted waveform as an in-memory
//! [`PipelineOutput`]. The heavy lifting (synthesis, embedding
//! extraction, conversion) happens inside bundles supplied by a
//! [`ModelProvider`](openvoice_models::ModelProvider); this crate only
//! sequences them, names scratch files, and validates requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use openvoice_pipeline::{PipelineConfig, TtsPipeline, TtsRequest};
//!
//! let config = PipelineConfig::new("models/openvoice", "input", "temp");
//! let pipeline = TtsPipeline::new(config, provider);
//! let output = pipeline.run(&request).await?;
//! println!("{} samples at {} Hz", output.audio.len(), output.sample_rate);
//! ```

mod config;
mod error;
mod language;
mod node;
mod sts;
mod style;
mod tts;
mod util;
mod workspace;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use language::Language;
pub use node::{PipelineOutput, StsRequest, TtsRequest, input_choices};
pub use sts::StsPipeline;
pub use style::Style;
pub use tts::TtsPipeline;
pub use workspace::{crosslingual_name, run_prefix, scratch_name};
