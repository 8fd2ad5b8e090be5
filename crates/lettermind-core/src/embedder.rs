//! Embedder trait for text-to-vector conversion.
//!
//! Defines the interface for embedding newsletter text into fixed-length
//! vectors. Implementations (the OpenAI HTTP provider, deterministic test
//! stubs) live in lettermind-infra and in test code.

use lettermind_types::error::EmbedError;

/// Trait for converting text into embedding vectors.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
///
/// The memory store is agnostic to which model or vendor produced a vector
/// as long as the dimension holds: a wrong-length vector is a fatal
/// [`EmbedError::DimensionMismatch`], never coerced. Implementations must
/// not retry internally -- retry policy belongs to the caller.
pub trait Embedder: Send + Sync {
    /// Embed one or more texts into vectors.
    ///
    /// Returns one vector per input text, in input order.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbedError>> + Send;

    /// The model name used for embeddings (e.g., "text-embedding-3-small").
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}
