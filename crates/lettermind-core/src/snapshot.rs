//! Persistence port for the memory store.
//!
//! The store persists its index and catalog together as one
//! [`MemorySnapshot`]; the format behind this trait is opaque to the rest
//! of the application. The filesystem implementation (binary index blob +
//! JSON metadata document) lives in lettermind-infra.

use lettermind_types::error::PersistenceError;
use lettermind_types::snapshot::MemorySnapshot;

/// Trait for loading and saving a complete memory snapshot.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait SnapshotStore: Send + Sync {
    /// Load the persisted snapshot.
    ///
    /// Returns `Ok(None)` when no store has ever been saved -- a fresh
    /// start, not an error. A store that exists but cannot be read back is
    /// [`PersistenceError::Corrupt`]; it must never silently reset to
    /// empty.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<MemorySnapshot>, PersistenceError>> + Send;

    /// Persist the snapshot, fully rewriting both artifacts as one unit.
    fn save(
        &self,
        snapshot: &MemorySnapshot,
    ) -> impl std::future::Future<Output = Result<(), PersistenceError>> + Send;

    /// Current size of the persisted store in bytes (0 when absent).
    fn storage_size(&self) -> impl std::future::Future<Output = u64> + Send;
}
