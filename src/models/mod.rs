//! Core data models for the trade journal
//!
//! This module contains the journal record and the raw form input it is
//! built from.

pub mod ids;
pub mod record;

pub use ids::RecordId;
pub use record::{parse_decimal, NumericField, Record, RecordDraft};
