//! OpenAiEmbedder -- concrete [`Embedder`] implementation for the OpenAI
//! embeddings API.
//!
//! Sends requests to `/v1/embeddings` with bearer authentication. The API
//! key is wrapped in [`secrecy::SecretString`] and is never logged or
//! included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use lettermind_core::embedder::Embedder;
use lettermind_types::error::EmbedError;

use super::types::{EmbeddingRequest, EmbeddingResponse};

/// OpenAI embedding provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the authorization header. The struct intentionally does
/// NOT derive Debug so the key can never leak through formatting.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedder {
    /// Default embedding model.
    pub const DEFAULT_MODEL: &'static str = "text-embedding-3-small";

    /// Output dimension of the default model.
    pub const DEFAULT_DIMENSION: usize = 1536;

    /// Create a provider for an arbitrary model/dimension pair.
    ///
    /// The dimension is the contract the provider is held to: any response
    /// vector of a different length surfaces as
    /// [`EmbedError::DimensionMismatch`].
    pub fn new(api_key: SecretString, model: String, dimension: usize) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
            model,
            dimension,
        }
    }

    /// Create a provider for the default model at 1536 dimensions.
    pub fn openai(api_key: SecretString) -> Self {
        Self::new(
            api_key,
            Self::DEFAULT_MODEL.to_string(),
            Self::DEFAULT_DIMENSION,
        )
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        let body = EmbeddingRequest {
            model: self.model.clone(),
            input: texts.to_vec(),
        };
        let url = self.url("/v1/embeddings");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    EmbedError::ProviderUnavailable(format!("HTTP request failed: {e}"))
                } else {
                    EmbedError::Provider(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => {
                    EmbedError::ProviderUnavailable(format!("authentication failed: HTTP {status}"))
                }
                429 => EmbedError::Provider(format!("rate limited: {error_body}")),
                _ => EmbedError::Provider(format!("HTTP {status}: {error_body}")),
            });
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbedError::Provider(format!("failed to parse response: {e}")))?;

        if parsed.data.len() != texts.len() {
            return Err(EmbedError::Provider(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                parsed.data.len()
            )));
        }

        // Entries may arrive out of input order; restore it by index.
        let mut data = parsed.data;
        data.sort_by_key(|d| d.index);

        let mut vectors = Vec::with_capacity(data.len());
        for entry in data {
            if entry.embedding.len() != self.dimension {
                return Err(EmbedError::DimensionMismatch {
                    expected: self.dimension,
                    actual: entry.embedding.len(),
                });
            }
            vectors.push(entry.embedding);
        }
        Ok(vectors)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
