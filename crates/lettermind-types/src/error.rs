use thiserror::Error;

/// Errors from the embedding provider boundary.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The backing service is unreachable or unconfigured. Fatal to the
    /// current call; retry policy belongs to the caller, never to the core.
    #[error("embedding provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// A single embedding call failed (rate limit, malformed response).
    #[error("embedding provider error: {0}")]
    Provider(String),

    /// A returned vector's length differs from the configured dimension.
    /// Always fatal -- never truncated or padded to fit.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors from the persistence medium.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot failed to serialize before it reached the medium.
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    /// A persisted store exists but cannot be read back. A missing store
    /// is not corrupt -- it loads as empty; a partial or unparsable one
    /// surfaces here instead of silently resetting to empty.
    #[error("corrupt memory store: {0}")]
    Corrupt(String),
}

/// Errors surfaced by the memory store orchestrator.
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("embedding failed: {0}")]
    Embed(#[from] EmbedError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    /// Positional join failure between the vector index and the metadata
    /// catalog. The two grow in lockstep, so this is a bug signal rather
    /// than a user-facing condition.
    #[error("position {position} out of range (catalog holds {len})")]
    OutOfRange { position: usize, len: usize },
}
