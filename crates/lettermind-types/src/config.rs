//! Memory subsystem configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the newsletter memory store.
///
/// Loaded from `{data_dir}/memory.toml` by `lettermind-infra`. Every field
/// has a default, so a missing file yields a usable store. Provider
/// credentials are deliberately not part of this struct -- they are passed
/// explicitly into the embedder constructor, never read from ambient
/// environment inside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Directory holding the index blob and metadata document.
    pub data_dir: PathBuf,
    /// Embedding dimension D. Every vector ever inserted into the store
    /// has exactly this length.
    pub dimension: usize,
    /// Embedding model requested from the provider.
    pub embedding_model: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            dimension: 1536,
            embedding_model: "text-embedding-3-small".to_string(),
        }
    }
}
