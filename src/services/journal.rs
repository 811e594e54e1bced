//! Journal service
//!
//! Business logic for adding trades to the journal: validate the raw form
//! input, append the record, and report what changed.

use tracing::{info, warn};

use crate::error::JournalResult;
use crate::models::RecordDraft;
use crate::storage::{RecordStore, StoreChange};

/// Service for journal record management
pub struct JournalService<'a> {
    store: &'a mut RecordStore,
}

impl<'a> JournalService<'a> {
    /// Create a new journal service over the application's store
    pub fn new(store: &'a mut RecordStore) -> Self {
        Self { store }
    }

    /// Validate a draft and append the resulting record
    ///
    /// On a validation error the store is left untouched.
    pub fn add(&mut self, draft: &RecordDraft) -> JournalResult<StoreChange> {
        let record = draft.parse().map_err(|err| {
            warn!(field = err.field_name(), input = %err.input, "rejected journal entry");
            err
        })?;

        info!(
            id = %record.id,
            ticker = %record.ticker,
            entry = record.entry,
            "adding journal entry"
        );

        Ok(self.store.append(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{project, ReturnCategory};
    use crate::models::NumericField;

    fn draft(entry: &str) -> RecordDraft {
        RecordDraft {
            date: "2024-01-01".into(),
            ticker: "AAPL".into(),
            entry: entry.into(),
            stop_loss: "10.00".into(),
            notes: "test".into(),
            return_percentage: "-0.05".into(),
        }
    }

    #[test]
    fn test_add_appends_one_record() {
        let mut store = RecordStore::new();
        let change = JournalService::new(&mut store).add(&draft("12.50")).unwrap();

        assert!(matches!(change, StoreChange::Appended { index: 0, .. }));
        assert_eq!(store.len(), 1);

        let rows = project(store.records());
        assert_eq!(rows[0].entry, "12.50");
        assert_eq!(rows[0].return_pct, "-0.05");
        assert_eq!(rows[0].return_category, ReturnCategory::Negative);
    }

    #[test]
    fn test_invalid_entry_leaves_store_untouched() {
        let mut store = RecordStore::new();
        let err = JournalService::new(&mut store)
            .add(&draft("abc"))
            .unwrap_err();

        assert_eq!(err.invalid_field(), Some(NumericField::Entry));
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_two_adds_keep_insertion_order() {
        let mut store = RecordStore::new();
        let mut service = JournalService::new(&mut store);

        let mut first = draft("1");
        first.ticker = "FIRST".into();
        let mut second = draft("2");
        second.ticker = "SECOND".into();

        service.add(&first).unwrap();
        service.add(&second).unwrap();

        let rows = project(store.records());
        assert_eq!(rows[0].ticker, "FIRST");
        assert_eq!(rows[1].ticker, "SECOND");
    }
}
