//! Filesystem snapshot store.
//!
//! Persists a memory snapshot as exactly two artifacts in one directory:
//! `newsletter_index.bin` (bincode blob of the flat vector buffer) and
//! `newsletter_metadata.json` (JSON array of records). Both are rewritten
//! in full on every save via temp-file + rename, so a crash never leaves a
//! torn file behind.
//!
//! A directory with neither file loads as `None` (fresh store). A
//! directory with only one of the pair, or with unparsable content, is
//! corrupt and surfaces as an error rather than silently resetting the
//! store to empty.

use std::path::{Path, PathBuf};

use lettermind_core::snapshot::SnapshotStore;
use lettermind_types::error::PersistenceError;
use lettermind_types::newsletter::NewsletterRecord;
use lettermind_types::snapshot::{IndexSnapshot, MemorySnapshot};

/// Name of the binary index blob.
const INDEX_FILE: &str = "newsletter_index.bin";

/// Name of the JSON metadata document.
const METADATA_FILE: &str = "newsletter_metadata.json";

/// Snapshot store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    index_path: PathBuf,
    metadata_path: PathBuf,
}

impl FsSnapshotStore {
    /// Create a snapshot store rooted at `data_dir`, creating the
    /// directory if needed.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let dir = data_dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        Ok(Self {
            index_path: dir.join(INDEX_FILE),
            metadata_path: dir.join(METADATA_FILE),
        })
    }

    async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

impl SnapshotStore for FsSnapshotStore {
    async fn load(&self) -> Result<Option<MemorySnapshot>, PersistenceError> {
        let index_bytes = read_optional(&self.index_path).await?;
        let metadata_bytes = read_optional(&self.metadata_path).await?;

        match (index_bytes, metadata_bytes) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(PersistenceError::Corrupt(format!(
                "{INDEX_FILE} exists without {METADATA_FILE}"
            ))),
            (None, Some(_)) => Err(PersistenceError::Corrupt(format!(
                "{METADATA_FILE} exists without {INDEX_FILE}"
            ))),
            (Some(index_bytes), Some(metadata_bytes)) => {
                let index: IndexSnapshot = bincode::deserialize(&index_bytes)
                    .map_err(|e| PersistenceError::Corrupt(format!("unreadable index blob: {e}")))?;
                if index.dimension == 0 || index.vectors.len() % index.dimension != 0 {
                    return Err(PersistenceError::Corrupt(format!(
                        "index blob of {} floats is not a whole number of dimension-{} vectors",
                        index.vectors.len(),
                        index.dimension
                    )));
                }

                let records: Vec<NewsletterRecord> = serde_json::from_slice(&metadata_bytes)
                    .map_err(|e| {
                        PersistenceError::Corrupt(format!("unreadable metadata document: {e}"))
                    })?;

                tracing::debug!(
                    vectors = index.count(),
                    records = records.len(),
                    "loaded snapshot from {}",
                    self.index_path.display()
                );
                Ok(Some(MemorySnapshot { index, records }))
            }
        }
    }

    async fn save(&self, snapshot: &MemorySnapshot) -> Result<(), PersistenceError> {
        let blob = bincode::serialize(&snapshot.index)
            .map_err(|e| PersistenceError::Encode(format!("index blob: {e}")))?;
        let document = serde_json::to_vec_pretty(&snapshot.records)
            .map_err(|e| PersistenceError::Encode(format!("metadata document: {e}")))?;

        Self::write_atomic(&self.index_path, &blob).await?;
        Self::write_atomic(&self.metadata_path, &document).await?;
        Ok(())
    }

    async fn storage_size(&self) -> u64 {
        file_size(&self.index_path).await + file_size(&self.metadata_path).await
    }
}

async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, PersistenceError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn file_size(path: &Path) -> u64 {
    tokio::fs::metadata(path).await.map_or(0, |m| m.len())
}
