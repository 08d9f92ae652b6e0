//! Audio file I/O for pipeline inputs and outputs.
//!
//! This crate covers the file-level audio concerns of the pipelines:
//! - [`list_audio_files`]: enumerating selectable input files
//! - [`read_wav`] / [`write_wav`]: moving waveforms between disk and
//!   in-memory [`AudioBuffer`]s

mod error;
mod files;
mod wav;

pub use error::AudioError;
pub use files::{AUDIO_EXTENSIONS, is_audio_file, list_audio_files};
pub use wav::{AudioBuffer, read_wav, write_wav};
