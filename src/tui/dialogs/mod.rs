//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the journal table

pub mod add_record;
pub mod help;

pub use add_record::{AddRecordFormState, RecordField};
