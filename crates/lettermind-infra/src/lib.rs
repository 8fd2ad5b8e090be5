//! Infrastructure layer for Lettermind.
//!
//! Contains implementations of the ports defined in `lettermind-core`:
//! the OpenAI embeddings HTTP provider, the filesystem snapshot store
//! (binary index blob + JSON metadata document), the TOML config loader,
//! and a builder that wires the pieces into a ready
//! [`lettermind_core::store::NewsletterMemory`].

pub mod builder;
pub mod config;
pub mod embedding;
pub mod snapshot;
