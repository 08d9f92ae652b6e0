//! Checkpoint directory layout.
//!
//! A fetched snapshot is laid out as:
//!
//! ```text
//! <root>/checkpoints/base_speakers/<MARKER>/config.json
//! <root>/checkpoints/base_speakers/<MARKER>/checkpoint.pth
//! <root>/checkpoints/base_speakers/<MARKER>/<marker>_{default|style}_se.pth
//! <root>/checkpoints/converter/config.json
//! <root>/checkpoints/converter/checkpoint.pth
//! ```

use std::path::{Path, PathBuf};

/// Path arithmetic over a local checkpoint root.
#[derive(Debug, Clone)]
pub struct CheckpointLayout {
    root: PathBuf,
}

/// The two files a bundle is constructed from.
#[derive(Debug, Clone)]
pub struct BundlePaths {
    pub config: PathBuf,
    pub checkpoint: PathBuf,
}

impl BundlePaths {
    fn in_dir(dir: PathBuf) -> Self {
        Self {
            config: dir.join("config.json"),
            checkpoint: dir.join("checkpoint.pth"),
        }
    }
}

impl CheckpointLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn base_speaker_dir(&self, marker: &str) -> PathBuf {
        self.root
            .join("checkpoints")
            .join("base_speakers")
            .join(marker)
    }

    /// Bundle paths of the base synthesizer for a language marker.
    pub fn base_speaker(&self, marker: &str) -> BundlePaths {
        BundlePaths::in_dir(self.base_speaker_dir(marker))
    }

    /// Bundle paths of the shared tone converter.
    pub fn converter(&self) -> BundlePaths {
        BundlePaths::in_dir(self.root.join("checkpoints").join("converter"))
    }

    /// Precomputed source-style embedding asset for a language marker.
    ///
    /// `kind` is `"default"` or `"style"`; the checkpoint set ships
    /// exactly those two assets per language.
    pub fn style_embedding(&self, marker: &str, kind: &str) -> PathBuf {
        self.base_speaker_dir(marker)
            .join(format!("{}_{kind}_se.pth", marker.to_lowercase()))
    }
}

#[cfg(test)]
mod checkpoints_tests {
    use super::*;

    #[test]
    fn test_base_speaker_paths() {
        let layout = CheckpointLayout::new("/models/openvoice");
        let bundle = layout.base_speaker("EN");
        assert_eq!(
            bundle.config,
            Path::new("/models/openvoice/checkpoints/base_speakers/EN/config.json")
        );
        assert_eq!(
            bundle.checkpoint,
            Path::new("/models/openvoice/checkpoints/base_speakers/EN/checkpoint.pth")
        );
    }

    #[test]
    fn test_converter_paths() {
        let layout = CheckpointLayout::new("/models/openvoice");
        let bundle = layout.converter();
        assert_eq!(
            bundle.config,
            Path::new("/models/openvoice/checkpoints/converter/config.json")
        );
    }

    #[test]
    fn test_style_embedding_marker_lowercased() {
        let layout = CheckpointLayout::new("/models/openvoice");
        assert_eq!(
            layout.style_embedding("ZH", "default"),
            Path::new("/models/openvoice/checkpoints/base_speakers/ZH/zh_default_se.pth")
        );
        assert_eq!(
            layout.style_embedding("EN", "style"),
            Path::new("/models/openvoice/checkpoints/base_speakers/EN/en_style_se.pth")
        );
    }
}
