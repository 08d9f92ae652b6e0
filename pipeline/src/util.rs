//! Request validation helpers shared by both pipelines.

use crate::PipelineError;
use std::path::{Path, PathBuf};

/// Inclusive speed domain accepted by the synthesizer.
pub(crate) const SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.0..=10.0;

/// Rejects out-of-range speed factors before any model loading.
pub(crate) fn validate_speed(speed: f32) -> Result<(), PipelineError> {
    if !SPEED_RANGE.contains(&speed) {
        return Err(PipelineError::InvalidParameter(format!(
            "speed {speed} outside [0, 10]"
        )));
    }
    Ok(())
}

/// Resolves a selected file name against the input directory.
///
/// The name must carry an accepted audio extension and exist as a file
/// in `input_dir`, mirroring the enumeration a host presents.
pub(crate) fn resolve_input(input_dir: &Path, name: &str) -> Result<PathBuf, PipelineError> {
    if !openvoice_audio::is_audio_file(name) {
        return Err(PipelineError::InvalidParameter(format!(
            "{name} is not a selectable audio file"
        )));
    }
    let path = input_dir.join(name);
    if !path.is_file() {
        return Err(PipelineError::InvalidParameter(format!(
            "{name} not found in input directory {}",
            input_dir.display()
        )));
    }
    Ok(path)
}

#[cfg(test)]
mod util_tests {
    use super::*;

    #[test]
    fn test_speed_domain() {
        for speed in [0.0, 0.1, 1.0, 9.9, 10.0] {
            assert!(validate_speed(speed).is_ok(), "speed {speed}");
        }
        for speed in [-0.1, -1.0, 10.1, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(
                    validate_speed(speed),
                    Err(PipelineError::InvalidParameter(_))
                ),
                "speed {speed}"
            );
        }
    }

    #[test]
    fn test_resolve_input() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ref.wav"), b"x").unwrap();

        let path = resolve_input(dir.path(), "ref.wav").unwrap();
        assert_eq!(path, dir.path().join("ref.wav"));

        assert!(resolve_input(dir.path(), "missing.wav").is_err());
        assert!(resolve_input(dir.path(), "notes.txt").is_err());
    }
}
