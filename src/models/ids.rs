//! Strongly-typed identifier for journal records
//!
//! A record's id is assigned once at construction and never changes, even
//! though the record itself is only ever addressed by position in the table.

use std::fmt;
use uuid::Uuid;

/// Immutable identity of a [`Record`](super::Record)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    const DISPLAY_PREFIX: &'static str = "rec-";

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_creation() {
        let id = RecordId::new();
        let copy = id;
        assert_eq!(copy, id);
        assert_ne!(id, RecordId::new());
    }

    #[test]
    fn test_id_display() {
        let display = RecordId::new().to_string();
        assert!(display.starts_with("rec-"));
        assert_eq!(display.len(), 12); // "rec-" + 8 chars
    }
}
