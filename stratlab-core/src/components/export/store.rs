//! Destination stores — where exported artifacts end up.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StratlabError};

use super::ExportArtifact;

/// Receives one `write` per exported part. The folder is an opaque reference.
pub trait DestinationStore {
    fn write(&mut self, folder: &Path, artifact: &ExportArtifact) -> Result<()>;
}

/// Keeps every artifact in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    artifacts: Vec<ExportArtifact>,
}

impl MemoryStore {
    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.artifacts
    }
}

impl DestinationStore for MemoryStore {
    fn write(&mut self, _folder: &Path, artifact: &ExportArtifact) -> Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

/// Writes a JSON manifest per artifact: `<folder>/<codec>.<kind>.json`.
///
/// The folder is created if missing.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    written: Vec<PathBuf>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifest paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn manifest_path(folder: &Path, artifact: &ExportArtifact) -> PathBuf {
        folder.join(format!("{}.{}.json", artifact.codec, artifact.kind))
    }
}

impl DestinationStore for DirectoryStore {
    fn write(&mut self, folder: &Path, artifact: &ExportArtifact) -> Result<()> {
        fs::create_dir_all(folder).map_err(|source| StratlabError::Io {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = Self::manifest_path(folder, artifact);
        let json = serde_json::to_string_pretty(artifact)
            .map_err(|e| StratlabError::Serialization(e.to_string()))?;
        fs::write(&path, json).map_err(|source| StratlabError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "manifest written");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::export::MediaKind;

    fn artifact(folder: &Path) -> ExportArtifact {
        ExportArtifact {
            codec: "aac".into(),
            kind: MediaKind::Audio,
            folder: folder.to_path_buf(),
            prepared: true,
            bytes: 4,
            content_hash: Some("abcd".into()),
        }
    }

    #[test]
    fn directory_store_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested").join("video");
        let mut store = DirectoryStore::new();
        let written = artifact(&folder);
        store.write(&folder, &written).unwrap();

        let path = folder.join("aac.audio.json");
        assert_eq!(store.written(), &[path.clone()]);
        let read: ExportArtifact =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(read, written);
    }

    #[test]
    fn directory_store_reports_io_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let folder = blocker.join("sub");
        let err = DirectoryStore::new()
            .write(&folder, &artifact(&folder))
            .err()
            .unwrap();
        match err {
            StratlabError::Io { path, .. } => assert_eq!(path, folder),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
