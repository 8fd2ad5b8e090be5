//! Memory engine and port definitions for Lettermind.
//!
//! This crate defines the "ports" that the infrastructure layer implements
//! -- the [`embedder::Embedder`] and [`snapshot::SnapshotStore`] traits --
//! and the engine itself: the flat vector index, the metadata catalog, and
//! the [`store::NewsletterMemory`] orchestrator. It depends only on
//! `lettermind-types`, never on any HTTP or filesystem crate.

pub mod box_embedder;
pub mod catalog;
pub mod embedder;
pub mod index;
pub mod snapshot;
pub mod store;
