//! Shared domain types for Lettermind.
//!
//! This crate contains the domain types used across the newsletter memory
//! subsystem: incoming items, stored records, search hits, store statistics,
//! persistence snapshots, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod newsletter;
pub mod snapshot;
