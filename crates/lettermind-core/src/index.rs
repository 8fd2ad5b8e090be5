//! Brute-force flat vector index.
//!
//! Exact k-nearest-neighbor search by squared Euclidean (L2) distance over
//! a row-major flat buffer. At newsletter scale recall accuracy matters
//! more than query latency, so there is no approximate structure: every
//! query scans every stored vector.

use lettermind_types::error::{EmbedError, MemoryError};
use lettermind_types::snapshot::IndexSnapshot;

/// Append-only exact nearest-neighbor index over fixed-dimension vectors.
///
/// Positions are sequential integers from 0 in insertion order and stay
/// stable for the life of the index; they are the sole join key to the
/// metadata catalog.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    /// Row-major storage: vector `i` occupies
    /// `vectors[i * dimension .. (i + 1) * dimension]`.
    vectors: Vec<f32>,
}

impl FlatIndex {
    /// Create an empty index for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    /// Rebuild an index from a persisted snapshot.
    ///
    /// The caller is responsible for having validated the snapshot (buffer
    /// length a multiple of the dimension).
    pub fn from_snapshot(snapshot: IndexSnapshot) -> Self {
        Self {
            dimension: snapshot.dimension,
            vectors: snapshot.vectors,
        }
    }

    /// Capture the index as a persistable snapshot.
    pub fn to_snapshot(&self) -> IndexSnapshot {
        IndexSnapshot {
            dimension: self.dimension,
            vectors: self.vectors.clone(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of vectors stored.
    pub fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.vectors.len() / self.dimension
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append a vector and return its assigned position.
    ///
    /// O(1) amortized, independent of search cost. Rejects wrong-length
    /// vectors instead of truncating or padding them.
    pub fn insert(&mut self, vector: &[f32]) -> Result<usize, MemoryError> {
        if vector.len() != self.dimension {
            return Err(EmbedError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            }
            .into());
        }
        let position = self.len();
        self.vectors.extend_from_slice(vector);
        Ok(position)
    }

    /// Return the `min(k, len)` stored vectors closest to `query`,
    /// ascending by squared L2 distance.
    ///
    /// An empty index yields an empty result rather than an error. Ties
    /// keep insertion order (the scan-then-stable-sort preserves it).
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>, MemoryError> {
        if query.len() != self.dimension {
            return Err(EmbedError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            }
            .into());
        }

        let mut scored: Vec<(usize, f32)> = (0..self.len())
            .map(|position| (position, squared_l2(self.row(position), query)))
            .collect();

        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }

    fn row(&self, position: usize) -> &[f32] {
        let start = position * self.dimension;
        &self.vectors[start..start + self.dimension]
    }
}

/// Squared Euclidean distance over the full dimension.
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
