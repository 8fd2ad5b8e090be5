//! Wires configuration, the OpenAI provider, and the filesystem snapshot
//! store into a ready [`NewsletterMemory`].

use secrecy::SecretString;

use lettermind_core::box_embedder::BoxEmbedder;
use lettermind_core::store::NewsletterMemory;
use lettermind_types::config::MemoryConfig;
use lettermind_types::error::MemoryError;

use crate::embedding::openai::OpenAiEmbedder;
use crate::snapshot::fs::FsSnapshotStore;

/// Open a newsletter memory store backed by OpenAI embeddings and the
/// filesystem, per the given configuration.
///
/// The API key is passed explicitly rather than read from the environment
/// here, so callers decide where credentials come from.
pub async fn open_newsletter_memory(
    config: &MemoryConfig,
    api_key: SecretString,
) -> Result<NewsletterMemory<FsSnapshotStore>, MemoryError> {
    let embedder = OpenAiEmbedder::new(api_key, config.embedding_model.clone(), config.dimension);
    let snapshots = FsSnapshotStore::new(&config.data_dir).await?;
    NewsletterMemory::open(BoxEmbedder::new(embedder), snapshots).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_fresh_store_needs_no_network() {
        let tmp = TempDir::new().unwrap();
        let config = MemoryConfig {
            data_dir: tmp.path().join("data"),
            ..MemoryConfig::default()
        };

        let store = open_newsletter_memory(&config, SecretString::from("test-key-not-real"))
            .await
            .unwrap();

        let stats = store.stats().await;
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.metadata_count, 0);

        // Empty store short-circuits before the provider is ever called.
        let hits = store.search("anything", 5).await.unwrap();
        assert!(hits.is_empty());
    }
}
