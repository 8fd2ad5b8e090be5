//! Persistence snapshot shapes for the newsletter memory store.
//!
//! A persisted store is exactly two artifacts saved as one unit: a binary
//! index blob (the vectors) and a JSON metadata document (the records).
//! These types describe that shape; the actual IO lives in
//! `lettermind-infra`.

use serde::{Deserialize, Serialize};

use crate::newsletter::NewsletterRecord;

/// Serialized form of the flat vector index.
///
/// Vectors are stored row-major in one flat buffer; `dimension` recovers
/// the row boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub dimension: usize,
    pub vectors: Vec<f32>,
}

impl IndexSnapshot {
    /// Number of vectors in the snapshot.
    pub fn count(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.vectors.len() / self.dimension
        }
    }
}

/// A complete persisted store: index blob plus metadata document.
///
/// The record at position `i` describes the `i`-th vector; loaders reject
/// snapshots where the two halves disagree on count.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySnapshot {
    pub index: IndexSnapshot,
    pub records: Vec<NewsletterRecord>,
}
