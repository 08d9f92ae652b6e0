//! Wav file reading and writing.

use crate::AudioError;
use std::path::Path;

/// An in-memory waveform: sample values plus sample rate.
///
/// Samples are f64 in [-1, 1]; multi-channel files keep their
/// interleaving.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

fn malformed(path: &Path, e: hound::Error) -> AudioError {
    match e {
        hound::Error::IoError(e) => AudioError::Io(e),
        other => AudioError::Malformed {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// Reads a wav file fully into memory.
///
/// Integer samples are normalized to [-1, 1] by their bit depth.
/// Only the wav container is decoded; files carrying another extension
/// are rejected up front.
pub fn read_wav(path: &Path) -> Result<AudioBuffer, AudioError> {
    if let Some(ext) = path.extension().and_then(|e| e.to_str())
        && !ext.eq_ignore_ascii_case("wav")
    {
        return Err(AudioError::UnsupportedFormat(path.to_path_buf()));
    }
    let mut reader = hound::WavReader::open(path).map_err(|e| malformed(path, e))?;
    let spec = reader.spec();

    let samples: Result<Vec<f64>, hound::Error> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect(),
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect()
        }
    };
    let samples = samples.map_err(|e| malformed(path, e))?;

    Ok(AudioBuffer {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Writes mono f64 samples to a 16-bit PCM wav file.
pub fn write_wav(path: &Path, samples: &[f64], sample_rate: u32) -> Result<(), AudioError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| malformed(path, e))?;
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16;
        writer.write_sample(value).map_err(|e| malformed(path, e))?;
    }
    writer.finalize().map_err(|e| malformed(path, e))
}

#[cfg(test)]
mod wav_tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples = vec![0.0, 0.5, -0.5, 1.0, -1.0];

        write_wav(&path, &samples, 24000).unwrap();
        let buffer = read_wav(&path).unwrap();

        assert_eq!(buffer.sample_rate, 24000);
        assert_eq!(buffer.samples.len(), samples.len());
        for (got, want) in buffer.samples.iter().zip(&samples) {
            assert!((got - want).abs() < 1e-3, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_read_same_file_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ref.wav");
        write_wav(&path, &[0.25, -0.25, 0.75], 16000).unwrap();

        assert_eq!(read_wav(&path).unwrap(), read_wav(&path).unwrap());
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.wav");
        std::fs::write(&path, b"not a riff header").unwrap();

        let result = read_wav(&path);
        assert!(matches!(result, Err(AudioError::Malformed { .. })));
    }

    #[test]
    fn test_read_rejects_non_wav_extension() {
        let result = read_wav(Path::new("/tmp/voice.mp3"));
        assert!(matches!(result, Err(AudioError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_wav(Path::new("/nonexistent/missing.wav"));
        assert!(matches!(result, Err(AudioError::Io(_))));
    }
}
