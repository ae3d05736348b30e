//! Export parts — the video and audio halves of an export bundle.
//!
//! Each part is prepared with raw media data, then exported to a folder through
//! a [`DestinationStore`]. Preparation records the byte count and a BLAKE3
//! content hash; the exported [`ExportArtifact`] carries both.
//!
//! Exporting an unprepared part is allowed. The artifact is flagged
//! `prepared: false` and a warning is logged, but no ordering is enforced.

pub mod codecs;
pub mod store;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use codecs::{Aac, H264Baseline, H264Hi422P, Lossless, Wav};
pub use store::{DestinationStore, DirectoryStore, MemoryStore};

/// Which half of a bundle a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// Summary of the data handed to `prepare`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMedia {
    pub bytes: usize,
    pub content_hash: String,
}

impl PreparedMedia {
    pub fn from_data(data: &[u8]) -> Self {
        Self {
            bytes: data.len(),
            content_hash: blake3::hash(data).to_hex().to_string(),
        }
    }
}

/// What a part hands to the destination store on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub codec: String,
    pub kind: MediaKind,
    pub folder: PathBuf,
    pub prepared: bool,
    pub bytes: usize,
    pub content_hash: Option<String>,
}

/// Video exporting codec.
pub trait VideoExporter: Send + Sync {
    /// Short codec id (e.g., "h264_bp").
    fn codec(&self) -> &str;

    fn prepare(&mut self, video_data: &[u8]);

    /// `None` until `prepare` has been called.
    fn prepared(&self) -> Option<&PreparedMedia>;

    fn export(&self, folder: &Path, store: &mut dyn DestinationStore) -> Result<ExportArtifact> {
        export_part(self.codec(), MediaKind::Video, self.prepared(), folder, store)
    }
}

/// Audio exporting codec.
pub trait AudioExporter: Send + Sync {
    /// Short codec id (e.g., "aac").
    fn codec(&self) -> &str;

    fn prepare(&mut self, audio_data: &[u8]);

    /// `None` until `prepare` has been called.
    fn prepared(&self) -> Option<&PreparedMedia>;

    fn export(&self, folder: &Path, store: &mut dyn DestinationStore) -> Result<ExportArtifact> {
        export_part(self.codec(), MediaKind::Audio, self.prepared(), folder, store)
    }
}

fn export_part(
    codec: &str,
    kind: MediaKind,
    prepared: Option<&PreparedMedia>,
    folder: &Path,
    store: &mut dyn DestinationStore,
) -> Result<ExportArtifact> {
    if prepared.is_none() {
        tracing::warn!(codec, %kind, "exporting before prepare; artifact is unprepared");
    }
    let artifact = ExportArtifact {
        codec: codec.to_string(),
        kind,
        folder: folder.to_path_buf(),
        prepared: prepared.is_some(),
        bytes: prepared.map_or(0, |p| p.bytes),
        content_hash: prepared.map(|p| p.content_hash.clone()),
    };
    store.write(folder, &artifact)?;
    tracing::info!(codec, %kind, folder = %folder.display(), "exported");
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepared_media_hashes_content() {
        let a = PreparedMedia::from_data(b"frames");
        let b = PreparedMedia::from_data(b"frames");
        let c = PreparedMedia::from_data(b"other");
        assert_eq!(a, b);
        assert_ne!(a.content_hash, c.content_hash);
        assert_eq!(a.bytes, 6);
    }

    #[test]
    fn export_after_prepare_carries_hash() {
        let mut part = Wav::default();
        part.prepare(b"pcm");
        let mut store = MemoryStore::default();
        let artifact = part.export(Path::new("/tmp/out"), &mut store).unwrap();
        assert!(artifact.prepared);
        assert_eq!(artifact.bytes, 3);
        assert_eq!(
            artifact.content_hash.as_deref(),
            Some(blake3::hash(b"pcm").to_hex().as_str())
        );
        assert_eq!(store.artifacts(), &[artifact]);
    }

    #[test]
    fn export_before_prepare_is_flagged_unprepared() {
        let part = Lossless::default();
        let mut store = MemoryStore::default();
        let artifact = part.export(Path::new("/tmp/out"), &mut store).unwrap();
        assert!(!artifact.prepared);
        assert_eq!(artifact.bytes, 0);
        assert_eq!(artifact.content_hash, None);
        assert_eq!(artifact.kind, MediaKind::Video);
    }
}
