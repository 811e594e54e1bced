//! Journal record model
//!
//! A record is one discretionary trade: when it was taken, what was bought,
//! the entry and stop prices, free-form notes, and the realized return.

use std::fmt;

use super::ids::RecordId;
use crate::error::ValidationError;

/// One journal entry
///
/// Text fields are stored exactly as entered. The return is kept as the user
/// typed it; no percent conversion is applied anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Trade date (free-form, not parsed)
    pub date: String,

    /// Ticker symbol (free-form)
    pub ticker: String,

    /// Entry price
    pub entry: f64,

    /// Stop-loss or trailing-loss price
    pub stop_loss: f64,

    /// Notes, may be empty
    pub notes: String,

    /// Realized return as entered
    pub return_percentage: f64,
}

impl Record {
    /// Create a new record with a fresh id
    pub fn new(
        date: impl Into<String>,
        ticker: impl Into<String>,
        entry: f64,
        stop_loss: f64,
        notes: impl Into<String>,
        return_percentage: f64,
    ) -> Self {
        Self {
            id: RecordId::new(),
            date: date.into(),
            ticker: ticker.into(),
            entry,
            stop_loss,
            notes: notes.into(),
            return_percentage,
        }
    }
}

/// The numeric inputs of the add form, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Entry,
    StopLoss,
    ReturnPercentage,
}

impl NumericField {
    /// Machine name of the field
    pub fn name(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::StopLoss => "stop_loss",
            Self::ReturnPercentage => "return_percentage",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::StopLoss => "Stop Loss",
            Self::ReturnPercentage => "Return",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw text collected by the add form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub date: String,
    pub ticker: String,
    pub entry: String,
    pub stop_loss: String,
    pub notes: String,
    pub return_percentage: String,
}

impl RecordDraft {
    /// Validate the numeric fields and build a record
    ///
    /// Fields are checked entry, stop loss, return; the first one that does
    /// not parse is reported.
    pub fn parse(&self) -> Result<Record, ValidationError> {
        let entry = parse_decimal(NumericField::Entry, &self.entry)?;
        let stop_loss = parse_decimal(NumericField::StopLoss, &self.stop_loss)?;
        let return_percentage =
            parse_decimal(NumericField::ReturnPercentage, &self.return_percentage)?;

        Ok(Record::new(
            self.date.clone(),
            self.ticker.clone(),
            entry,
            stop_loss,
            self.notes.clone(),
            return_percentage,
        ))
    }
}

/// Parse a decimal number typed by the user
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected since
/// they are not prices.
pub fn parse_decimal(field: NumericField, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::new(field, input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(entry: &str, stop_loss: &str, ret: &str) -> RecordDraft {
        RecordDraft {
            date: "2024-01-01".into(),
            ticker: "AAPL".into(),
            entry: entry.into(),
            stop_loss: stop_loss.into(),
            notes: "test".into(),
            return_percentage: ret.into(),
        }
    }

    #[test]
    fn test_parse_valid_draft() {
        let record = draft("12.50", "10.00", "-0.05").parse().unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.ticker, "AAPL");
        assert_eq!(record.entry, 12.5);
        assert_eq!(record.stop_loss, 10.0);
        assert_eq!(record.notes, "test");
        assert_eq!(record.return_percentage, -0.05);
    }

    #[test]
    fn test_parse_reports_first_bad_field() {
        let err = draft("abc", "10", "1").parse().unwrap_err();
        assert_eq!(err.field, NumericField::Entry);
        assert_eq!(err.input, "abc");

        let err = draft("1", "", "1").parse().unwrap_err();
        assert_eq!(err.field, NumericField::StopLoss);

        let err = draft("1", "2", "5%").parse().unwrap_err();
        assert_eq!(err.field, NumericField::ReturnPercentage);

        let err = draft("x", "y", "z").parse().unwrap_err();
        assert_eq!(err.field, NumericField::Entry);
    }

    #[test]
    fn test_text_fields_kept_verbatim() {
        let mut d = draft("1", "1", "0");
        d.date = String::new();
        d.ticker = " msft ".into();
        d.notes = String::new();

        let record = d.parse().unwrap();
        assert_eq!(record.date, "");
        assert_eq!(record.ticker, " msft ");
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_parse_decimal_syntax() {
        assert_eq!(parse_decimal(NumericField::Entry, " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_decimal(NumericField::Entry, "1e3").unwrap(), 1000.0);
        assert_eq!(parse_decimal(NumericField::Entry, ".5").unwrap(), 0.5);
        assert_eq!(parse_decimal(NumericField::Entry, "-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_decimal_rejects_non_finite() {
        assert!(parse_decimal(NumericField::Entry, "NaN").is_err());
        assert!(parse_decimal(NumericField::Entry, "inf").is_err());
        assert!(parse_decimal(NumericField::Entry, "-infinity").is_err());
        assert!(parse_decimal(NumericField::Entry, "1e400").is_err());
    }

    #[test]
    fn test_each_record_gets_fresh_id() {
        let a = draft("1", "1", "1").parse().unwrap();
        let b = draft("1", "1", "1").parse().unwrap();
        assert_ne!(a.id, b.id);
    }
}
