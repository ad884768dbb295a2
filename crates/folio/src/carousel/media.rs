use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const MOTION_SUFFIXES: &[&str] = &["mp4", "webm", "mov", "m4v"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Looping, autoplaying clip.
    Motion,
    Still,
}

impl MediaKind {
    pub fn classify(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if MOTION_SUFFIXES.contains(&extension.as_str()) {
            MediaKind::Motion
        } else {
            MediaKind::Still
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Motion => "motion (loop)",
            MediaKind::Still => "still",
        }
    }
}

/// What the modal shows for the current item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaView {
    /// The project has no screenshots.
    Placeholder,
    Ready {
        kind: MediaKind,
        filename: String,
        source: PathBuf,
        bytes: u64,
    },
    Failed {
        source: PathBuf,
    },
}

/// Loads a media item, returning its size in bytes.
pub trait MediaProbe {
    fn probe(&self, source: &Path) -> io::Result<u64>;
}

/// Probes the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl MediaProbe for FsProbe {
    fn probe(&self, source: &Path) -> io::Result<u64> {
        let meta = fs::metadata(source)?;
        if !meta.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a file"));
        }
        Ok(meta.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{FsProbe, MediaKind, MediaProbe};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn classify_by_suffix() {
        assert_eq!(MediaKind::classify("s1.png"), MediaKind::Still);
        assert_eq!(MediaKind::classify("s2.mp4"), MediaKind::Motion);
        assert_eq!(MediaKind::classify("TRAILER.MP4"), MediaKind::Motion);
        assert_eq!(MediaKind::classify("loop.webm"), MediaKind::Motion);
        assert_eq!(MediaKind::classify("anim.gif"), MediaKind::Still);
        assert_eq!(MediaKind::classify("notes_mp4"), MediaKind::Still);
    }

    #[test]
    fn fs_probe_reports_size_and_rejects_directories() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("shot.png");
        fs::write(&file, [0u8; 16]).expect("write");
        assert_eq!(FsProbe.probe(&file).expect("probe"), 16);
        assert!(FsProbe.probe(dir.path()).is_err());
        assert!(FsProbe.probe(&dir.path().join("missing.png")).is_err());
    }
}
