//! Journal table projection
//!
//! Turns the store contents into display rows. The projection is recomputed
//! from the full record list every time the table is drawn.

use crate::models::Record;

use super::returns::ReturnCategory;

/// Column headers, in display order
pub const COLUMNS: [&str; 6] = ["Date", "Ticker", "Entry", "Stop Loss", "Notes", "Return (%)"];

/// Index of the Return (%) column
pub const RETURN_COLUMN: usize = 5;

/// One display row of the journal table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub ticker: String,
    pub entry: String,
    pub stop_loss: String,
    pub notes: String,
    pub return_pct: String,
    /// Category of the displayed return, drives the cell color
    pub return_category: ReturnCategory,
}

impl TableRow {
    /// Build the display row for a record
    pub fn from_record(record: &Record) -> Self {
        let return_pct = format_decimal(record.return_percentage);
        // Digits, NaN or inf; all of them parse
        let return_category =
            ReturnCategory::from_display(&return_pct).unwrap_or(ReturnCategory::Neutral);

        Self {
            date: record.date.clone(),
            ticker: record.ticker.clone(),
            entry: format_decimal(record.entry),
            stop_loss: format_decimal(record.stop_loss),
            notes: record.notes.clone(),
            return_pct,
            return_category,
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.ticker.as_str(),
            self.entry.as_str(),
            self.stop_loss.as_str(),
            self.notes.as_str(),
            self.return_pct.as_str(),
        ]
    }
}

/// Project every record into a display row, preserving order
pub fn project(records: &[Record]) -> Vec<TableRow> {
    records.iter().map(TableRow::from_record).collect()
}

/// Format a number with exactly two decimal places
///
/// A value that rounds to zero is shown as `0.00`, never `-0.00`.
/// Non-finite values come out as `NaN`, `inf` or `-inf`.
pub fn format_decimal(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entry: f64, stop_loss: f64, ret: f64) -> Record {
        Record::new("2024-01-01", "AAPL", entry, stop_loss, "test", ret)
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(12.5), "12.50");
        assert_eq!(format_decimal(10.0), "10.00");
        assert_eq!(format_decimal(-0.05), "-0.05");
        assert_eq!(format_decimal(1.005), "1.00"); // 1.005 is stored just below
        assert_eq!(format_decimal(0.0), "0.00");
        assert_eq!(format_decimal(-0.001), "0.00");
        assert_eq!(format_decimal(-0.0), "0.00");
    }

    #[test]
    fn test_format_decimal_non_finite() {
        assert_eq!(format_decimal(f64::NAN), "NaN");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_decimal_idempotent() {
        let samples = [
            0.0, -0.0, 0.004, -0.004, 0.005, 1.005, 12.5, -0.05, 99.999, 1234.5678, -1e9, 3.14159,
        ];
        for value in samples {
            let once = format_decimal(value);
            let twice = format_decimal(once.parse().unwrap());
            assert_eq!(once, twice, "not idempotent for {}", value);
        }
    }

    #[test]
    fn test_row_projection() {
        let row = TableRow::from_record(&record(12.5, 10.0, -0.05));
        assert_eq!(
            row.cells(),
            ["2024-01-01", "AAPL", "12.50", "10.00", "test", "-0.05"]
        );
        assert_eq!(row.return_category, ReturnCategory::Negative);
    }

    #[test]
    fn test_return_is_not_scaled() {
        let row = TableRow::from_record(&record(1.0, 1.0, 0.05));
        assert_eq!(row.return_pct, "0.05");

        let row = TableRow::from_record(&record(1.0, 1.0, 5.0));
        assert_eq!(row.return_pct, "5.00");
    }

    #[test]
    fn test_category_follows_displayed_value() {
        let row = TableRow::from_record(&record(1.0, 1.0, 0.004));
        assert_eq!(row.return_pct, "0.00");
        assert_eq!(row.return_category, ReturnCategory::Neutral);

        let row = TableRow::from_record(&record(1.0, 1.0, -0.004));
        assert_eq!(row.return_category, ReturnCategory::Neutral);
    }

    #[test]
    fn test_projection_of_odd_values_does_not_panic() {
        let row = TableRow::from_record(&record(f64::NAN, f64::INFINITY, f64::NAN));
        assert_eq!(row.entry, "NaN");
        assert_eq!(row.stop_loss, "inf");
        assert_eq!(row.return_category, ReturnCategory::Neutral);

        let row = TableRow::from_record(&record(1e300, -1e300, f64::NEG_INFINITY));
        assert_eq!(row.return_category, ReturnCategory::Negative);
    }

    #[test]
    fn test_project_row_count_and_order() {
        let records = vec![
            Record::new("d1", "AAPL", 1.0, 1.0, "", 1.0),
            Record::new("d2", "MSFT", 2.0, 2.0, "", -1.0),
            Record::new("d3", "TSLA", 3.0, 3.0, "", 0.0),
        ];
        let rows = project(&records);
        assert_eq!(rows.len(), records.len());
        let tickers: Vec<_> = rows.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["AAPL", "MSFT", "TSLA"]);
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn test_column_order() {
        assert_eq!(
            COLUMNS,
            ["Date", "Ticker", "Entry", "Stop Loss", "Notes", "Return (%)"]
        );
        assert_eq!(COLUMNS[RETURN_COLUMN], "Return (%)");
    }
}
