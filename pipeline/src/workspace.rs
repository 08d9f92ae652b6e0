//! Scratch-file naming.
//!
//! Concurrent pipeline runs may share one workspace directory; the
//! random per-run prefix is the only concurrency control needed, since
//! everything else the runs touch is read-only.

use rand::Rng;

/// Characters drawn for run prefixes. Charset and length are tunables,
/// not part of the file-name contract.
const PREFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const PREFIX_LEN: usize = 5;

/// Random per-invocation prefix namespacing scratch files.
pub fn run_prefix() -> String {
    let mut rng = rand::thread_rng();
    (0..PREFIX_LEN)
        .map(|_| PREFIX_CHARSET[rng.gen_range(0..PREFIX_CHARSET.len())] as char)
        .collect()
}

/// Scratch file name for a TTS pipeline role (`base` or `output`).
pub fn scratch_name(prefix: &str, role: &str, marker: &str, style: &str) -> String {
    format!("{prefix}_{role}_{}_{style}.wav", marker.to_lowercase())
}

/// Output file name for the speech-to-speech pipeline.
pub fn crosslingual_name(prefix: &str) -> String {
    format!("{prefix}_output_crosslingual.wav")
}

#[cfg(test)]
mod workspace_tests {
    use super::*;

    #[test]
    fn test_prefix_shape() {
        let prefix = run_prefix();
        assert_eq!(prefix.len(), PREFIX_LEN);
        assert!(prefix.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_scratch_name_lowercases_marker() {
        assert_eq!(
            scratch_name("abcde", "base", "EN", "cheerful"),
            "abcde_base_en_cheerful.wav"
        );
        assert_eq!(
            scratch_name("abcde", "output", "ZH", "default"),
            "abcde_output_zh_default.wav"
        );
    }

    #[test]
    fn test_crosslingual_name() {
        assert_eq!(crosslingual_name("qwert"), "qwert_output_crosslingual.wav");
    }
}
