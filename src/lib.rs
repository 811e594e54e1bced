//! Trade Journal - a terminal trade journal
//!
//! Records trades (date, ticker, entry, stop loss, notes, return) in an
//! in-memory, append-only store and shows them in a table whose Return
//! column is colored by sign.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Trade records and the unvalidated form draft
//! - `storage`: The append-only record store
//! - `services`: Validation and insertion
//! - `display`: Table projection and return classification
//! - `tui`: The interactive journal window
//!
//! # Example
//!
//! ```rust
//! use journal::models::RecordDraft;
//! use journal::services::JournalService;
//! use journal::storage::RecordStore;
//!
//! let mut store = RecordStore::new();
//! let draft = RecordDraft {
//!     date: "2024-01-01".into(),
//!     ticker: "AAPL".into(),
//!     entry: "12.50".into(),
//!     stop_loss: "10.00".into(),
//!     notes: "test".into(),
//!     return_percentage: "-0.05".into(),
//! };
//! JournalService::new(&mut store).add(&draft)?;
//!
//! let rows = journal::display::project(store.records());
//! assert_eq!(rows[0].entry, "12.50");
//! # Ok::<(), journal::JournalError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{JournalError, JournalResult, ValidationError};
