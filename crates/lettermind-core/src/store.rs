//! Newsletter memory store orchestrator.
//!
//! Owns one flat vector index and one metadata catalog as a single unit,
//! persists both together after every successful `add`, and exposes
//! add/search/stats to the application layer.
//!
//! # Locking discipline
//!
//! `add` mutates the index and the catalog as two separate steps per item,
//! so the pair lives behind one `RwLock`: `add` holds the write guard for
//! its entire batch (through the final save), while `search` and `stats`
//! take read guards. A reader can therefore never observe a vector without
//! its record, and two `add` batches against the same store instance
//! cannot interleave their read-modify-persist sequences.

use tokio::sync::RwLock;

use lettermind_types::error::{EmbedError, MemoryError, PersistenceError};
use lettermind_types::newsletter::{MemoryStats, NewsletterItem, NewsletterRecord, SearchHit};
use lettermind_types::snapshot::MemorySnapshot;

use crate::box_embedder::BoxEmbedder;
use crate::catalog::MetadataCatalog;
use crate::index::FlatIndex;
use crate::snapshot::SnapshotStore;

/// The index/catalog pair, guarded as one unit.
struct MemoryState {
    index: FlatIndex,
    catalog: MetadataCatalog,
}

/// Persistent similarity-search memory over newsletter content.
///
/// Constructed by loading the persisted snapshot from the snapshot store
/// if one exists, else initialized empty at the embedder's dimension.
/// Mutated only by [`add`](Self::add); persisted after every successful
/// `add` as a full rewrite of both artifacts.
pub struct NewsletterMemory<S: SnapshotStore> {
    embedder: BoxEmbedder,
    snapshots: S,
    state: RwLock<MemoryState>,
}

impl<S: SnapshotStore> std::fmt::Debug for NewsletterMemory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterMemory").finish_non_exhaustive()
    }
}

impl<S: SnapshotStore> NewsletterMemory<S> {
    /// Open a store, loading the persisted snapshot if one exists.
    ///
    /// # Errors
    ///
    /// - [`PersistenceError::Corrupt`] when a snapshot exists but its two
    ///   halves disagree on count (or the medium reports it corrupt).
    /// - [`EmbedError::DimensionMismatch`] when a snapshot's dimension
    ///   differs from the embedder's.
    pub async fn open(embedder: BoxEmbedder, snapshots: S) -> Result<Self, MemoryError> {
        let dimension = embedder.dimension();

        let state = match snapshots.load().await? {
            Some(snapshot) => {
                let count = snapshot.index.count();
                if snapshot.records.len() != count {
                    return Err(PersistenceError::Corrupt(format!(
                        "index holds {count} vectors but metadata holds {} records",
                        snapshot.records.len()
                    ))
                    .into());
                }
                if snapshot.index.dimension != dimension {
                    return Err(EmbedError::DimensionMismatch {
                        expected: dimension,
                        actual: snapshot.index.dimension,
                    }
                    .into());
                }
                tracing::debug!(count, "loaded persisted newsletter memory");
                MemoryState {
                    index: FlatIndex::from_snapshot(snapshot.index),
                    catalog: MetadataCatalog::from_records(snapshot.records),
                }
            }
            None => {
                tracing::debug!(dimension, "no persisted store found, starting empty");
                MemoryState {
                    index: FlatIndex::new(dimension),
                    catalog: MetadataCatalog::new(),
                }
            }
        };

        Ok(Self {
            embedder,
            snapshots,
            state: RwLock::new(state),
        })
    }

    /// Add newsletters to the store, embedding each item's content in
    /// order, then persist once after the full batch.
    ///
    /// Items commit to the in-memory pair one at a time: an embedding
    /// failure aborts the remainder of the batch and surfaces the error,
    /// leaving earlier items of the same call in memory (they reach disk
    /// on the next successful `add`). No deduplication happens -- adding
    /// the same content twice yields two positions and two records.
    ///
    /// Returns the number of items added.
    pub async fn add(&self, items: &[NewsletterItem]) -> Result<usize, MemoryError> {
        let mut state = self.state.write().await;

        for item in items {
            let texts = [item.content.clone()];
            let mut vectors = self.embedder.embed(&texts).await?;
            let vector = if vectors.is_empty() {
                return Err(EmbedError::Provider(
                    "provider returned no vectors".to_string(),
                )
                .into());
            } else {
                vectors.swap_remove(0)
            };

            let position = state.index.insert(&vector)?;
            state.catalog.append(NewsletterRecord::from_item(item));
            debug_assert_eq!(position + 1, state.catalog.len());
        }

        let snapshot = MemorySnapshot {
            index: state.index.to_snapshot(),
            records: state.catalog.records().to_vec(),
        };
        self.snapshots.save(&snapshot).await?;

        tracing::info!(
            added = items.len(),
            total = state.catalog.len(),
            "persisted newsletter memory"
        );
        Ok(items.len())
    }

    /// Return the `k` stored newsletters closest to `query`, ascending by
    /// squared-L2 distance (best match first).
    ///
    /// An empty store yields an empty result without touching the
    /// embedding provider.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchHit>, MemoryError> {
        let state = self.state.read().await;

        if state.index.is_empty() {
            return Ok(Vec::new());
        }

        let texts = [query.to_string()];
        let mut vectors = self.embedder.embed(&texts).await?;
        let vector = if vectors.is_empty() {
            return Err(EmbedError::Provider(
                "provider returned no vectors".to_string(),
            )
            .into());
        } else {
            vectors.swap_remove(0)
        };

        let neighbors = state.index.search(&vector, k)?;
        let mut hits = Vec::with_capacity(neighbors.len());
        for (position, distance) in neighbors {
            let record = state.catalog.get(position)?.clone();
            hits.push(SearchHit { record, distance });
        }
        Ok(hits)
    }

    /// Read-only statistics about the store.
    ///
    /// `total_items` always equals `metadata_count` after any successful
    /// mutating operation; the pair is exposed separately so callers (and
    /// tests) can assert the invariant.
    pub async fn stats(&self) -> MemoryStats {
        let state = self.state.read().await;
        let storage_size_bytes = self.snapshots.storage_size().await;
        MemoryStats {
            total_items: state.index.len(),
            storage_size_bytes,
            metadata_count: state.catalog.len(),
        }
    }
}
