//! Model resolution and pretrained-model capability interfaces.
//!
//! This crate provides:
//! - [`ModelStore`]: download-if-missing resolution of the local
//!   checkpoint root, with the registry fetch behind [`SnapshotFetcher`]
//! - [`CheckpointLayout`]: path arithmetic over a fetched snapshot
//! - [`Device`] selection for bundle placement
//! - The opaque model capabilities: [`BaseSynthesizer`],
//!   [`ToneConverter`], and the [`ModelProvider`] that constructs them
//!
//! The synthesis, conversion, and embedding-extraction algorithms live
//! entirely inside externally trained checkpoints; everything here is
//! specified at the boundary so tests can substitute deterministic
//! fakes.

mod checkpoints;
mod converter;
mod device;
mod embedding;
mod error;
mod provider;
mod store;
mod synthesizer;

pub use checkpoints::{BundlePaths, CheckpointLayout};
pub use converter::ToneConverter;
pub use device::{Device, DevicePreference};
pub use embedding::SpeakerEmbedding;
pub use error::{ModelError, StoreError};
pub use provider::ModelProvider;
pub use store::{DEFAULT_REPO_ID, HubFetcher, ModelStore, SnapshotFetcher};
pub use synthesizer::BaseSynthesizer;
