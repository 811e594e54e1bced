//! Display formatting for the trade journal
//!
//! Pure functions that turn records into table rows and classify returns.
//! Nothing here depends on the terminal UI.

pub mod returns;
pub mod table;

pub use returns::ReturnCategory;
pub use table::{format_decimal, project, TableRow, COLUMNS, RETURN_COLUMN};
