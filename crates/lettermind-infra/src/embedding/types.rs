//! OpenAI embeddings API wire types.
//!
//! These are OpenAI-specific request/response structures used for HTTP
//! communication with the embeddings endpoint. They are NOT the generic
//! types from lettermind-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/embeddings`.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: Vec<String>,
}

/// Response body from the embeddings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
    pub model: String,
    #[serde(default)]
    pub usage: Option<EmbeddingUsage>,
}

/// One embedding in the response. The API may return entries out of input
/// order; `index` ties each vector back to its input text.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    pub index: usize,
    pub embedding: Vec<f32>,
}

/// Token accounting for the request.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}
