//! Service layer for the trade journal
//!
//! The service layer sits between the UI and the record store, handling
//! validation of user input before anything is stored.

pub mod journal;

pub use journal::JournalService;
