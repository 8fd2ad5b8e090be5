//! Embedding provider implementations.

pub mod openai;
pub mod types;
