//! Append-only metadata catalog.
//!
//! An ordered sequence of [`NewsletterRecord`]s, one per inserted vector,
//! in the same positional order as the index. Append-only growth is what
//! keeps the positional join valid without a separate ID-remapping layer:
//! there are no update or delete operations by design.

use lettermind_types::error::MemoryError;
use lettermind_types::newsletter::NewsletterRecord;

/// Ordered, append-only sequence of per-item records.
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    records: Vec<NewsletterRecord>,
}

impl MetadataCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from persisted records, preserving order.
    pub fn from_records(records: Vec<NewsletterRecord>) -> Self {
        Self { records }
    }

    /// Append a record to the end of the sequence.
    pub fn append(&mut self, record: NewsletterRecord) {
        self.records.push(record);
    }

    /// Fetch the record at `position`.
    ///
    /// A position past the end means the index/catalog pair fell out of
    /// step -- a bug signal, surfaced as [`MemoryError::OutOfRange`].
    pub fn get(&self, position: usize) -> Result<&NewsletterRecord, MemoryError> {
        self.records.get(position).ok_or(MemoryError::OutOfRange {
            position,
            len: self.records.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in positional order.
    pub fn records(&self) -> &[NewsletterRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettermind_types::newsletter::NewsletterItem;

    fn make_record(source_id: &str) -> NewsletterRecord {
        NewsletterRecord::from_item(&NewsletterItem {
            source_id: source_id.to_string(),
            subject: "subject".to_string(),
            sender: "sender@example.com".to_string(),
            date: "2026-08-01T00:00:00Z".to_string(),
            content: "body".to_string(),
        })
    }

    #[test]
    fn test_append_preserves_order() {
        let mut catalog = MetadataCatalog::new();
        catalog.append(make_record("a"));
        catalog.append(make_record("b"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().source_id, "a");
        assert_eq!(catalog.get(1).unwrap().source_id, "b");
    }

    #[test]
    fn test_get_past_end_is_out_of_range() {
        let catalog = MetadataCatalog::new();
        let err = catalog.get(0).unwrap_err();
        assert!(matches!(
            err,
            MemoryError::OutOfRange { position: 0, len: 0 }
        ));
    }

    #[test]
    fn test_from_records_roundtrip() {
        let records = vec![make_record("x"), make_record("y")];
        let catalog = MetadataCatalog::from_records(records.clone());
        assert_eq!(catalog.records(), records.as_slice());
    }
}
