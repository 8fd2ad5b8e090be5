//! Memory configuration loader.
//!
//! Reads `memory.toml` from the data directory and deserializes it into
//! [`MemoryConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use lettermind_types::config::MemoryConfig;

/// Load memory configuration from `{data_dir}/memory.toml`.
///
/// - If the file does not exist, returns [`MemoryConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
/// - Otherwise returns the parsed config.
pub async fn load_memory_config(data_dir: &Path) -> MemoryConfig {
    let config_path = data_dir.join("memory.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No memory.toml found at {}, using defaults",
                config_path.display()
            );
            return MemoryConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return MemoryConfig::default();
        }
    };

    match toml::from_str::<MemoryConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            MemoryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_memory_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_memory_config(tmp.path()).await;
        assert_eq!(config.dimension, 1536);
        assert_eq!(config.embedding_model, "text-embedding-3-small");
    }

    #[tokio::test]
    async fn load_memory_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("memory.toml"),
            r#"
dimension = 768
embedding_model = "text-embedding-3-large"
"#,
        )
        .await
        .unwrap();

        let config = load_memory_config(tmp.path()).await;
        assert_eq!(config.dimension, 768);
        assert_eq!(config.embedding_model, "text-embedding-3-large");
    }

    #[tokio::test]
    async fn load_memory_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("memory.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_memory_config(tmp.path()).await;
        assert_eq!(config.dimension, 1536);
    }
}
