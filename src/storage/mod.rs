//! Storage layer for the trade journal
//!
//! Records live in memory only; the store is created empty at startup and
//! dropped at exit.

pub mod records;

pub use records::{RecordStore, StoreChange};
