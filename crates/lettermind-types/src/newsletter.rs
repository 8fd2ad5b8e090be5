//! Newsletter memory types.
//!
//! These types model what the memory store ingests and returns: items
//! handed over by the mail collaborator, the per-item records kept in the
//! metadata catalog, and the annotated results of a similarity search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newsletter handed to the memory store by the mail retrieval
/// collaborator.
///
/// Fields arrive pre-parsed; the store does no message-format handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterItem {
    /// External message identifier. Not guaranteed unique across re-adds.
    pub source_id: String,
    pub subject: String,
    pub sender: String,
    /// Publication date as supplied by the source (ISO-8601).
    pub date: String,
    /// The text that gets embedded.
    pub content: String,
}

/// A per-item display/provenance record, created at add time.
///
/// Records are immutable and append-only; a record's position in the
/// catalog is the sole join key to its vector in the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterRecord {
    pub source_id: String,
    pub subject: String,
    pub sender: String,
    pub date: String,
    pub inserted_at: DateTime<Utc>,
}

impl NewsletterRecord {
    /// Build a record from an incoming item, stamping `inserted_at` now.
    pub fn from_item(item: &NewsletterItem) -> Self {
        Self {
            source_id: item.source_id.clone(),
            subject: item.subject.clone(),
            sender: item.sender.clone(),
            date: item.date.clone(),
            inserted_at: Utc::now(),
        }
    }
}

/// A search result: a stored record annotated with its squared-L2 distance
/// from the query embedding. Smaller means closer.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub record: NewsletterRecord,
    pub distance: f32,
}

/// Read-only store statistics.
///
/// `total_items` counts vectors in the index, `metadata_count` counts
/// records in the catalog; the two are equal whenever the store is
/// consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub total_items: usize,
    pub storage_size_bytes: u64,
    pub metadata_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(source_id: &str) -> NewsletterItem {
        NewsletterItem {
            source_id: source_id.to_string(),
            subject: "Weekly Rust digest".to_string(),
            sender: "digest@example.com".to_string(),
            date: "2026-08-17T09:00:00Z".to_string(),
            content: "This week in Rust: ...".to_string(),
        }
    }

    #[test]
    fn test_record_from_item_copies_display_fields() {
        let item = make_item("msg-42");
        let record = NewsletterRecord::from_item(&item);
        assert_eq!(record.source_id, "msg-42");
        assert_eq!(record.subject, item.subject);
        assert_eq!(record.sender, item.sender);
        assert_eq!(record.date, item.date);
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = NewsletterRecord::from_item(&make_item("msg-1"));
        let json = serde_json::to_string(&record).unwrap();
        let parsed: NewsletterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_search_hit_serializes_distance() {
        let hit = SearchHit {
            record: NewsletterRecord::from_item(&make_item("msg-1")),
            distance: 0.25,
        };
        let json = serde_json::to_string(&hit).unwrap();
        assert!(json.contains("\"distance\":0.25"));
    }
}
