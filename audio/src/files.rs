//! Input-directory enumeration.

use crate::AudioError;
use std::path::Path;

/// File extensions accepted as pipeline input audio.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["wav", "mp3", "flac"];

/// Whether a file name carries an accepted audio extension
/// (case-insensitive).
pub fn is_audio_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Lists the audio files directly inside `dir`, sorted by name.
///
/// Only plain files with an extension in [`AUDIO_EXTENSIONS`] are
/// returned; subdirectories and other files are skipped.
pub fn list_audio_files(dir: &Path) -> Result<Vec<String>, AudioError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if is_audio_file(name) {
            files.push(name.to_string());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod files_tests {
    use super::*;

    #[test]
    fn test_extension_filter() {
        assert!(is_audio_file("voice.wav"));
        assert!(is_audio_file("voice.MP3"));
        assert!(is_audio_file("a.b.flac"));
        assert!(!is_audio_file("voice.ogg"));
        assert!(!is_audio_file("wav"));
        assert!(!is_audio_file("notes.txt"));
    }

    #[test]
    fn test_list_audio_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.wav", "a.flac", "c.mp3", "readme.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.wav")).unwrap();

        let files = list_audio_files(dir.path()).unwrap();
        assert_eq!(files, vec!["a.flac", "b.wav", "c.mp3"]);
    }

    #[test]
    fn test_list_audio_files_missing_dir() {
        let result = list_audio_files(Path::new("/nonexistent/input"));
        assert!(matches!(result, Err(AudioError::Io(_))));
    }
}
