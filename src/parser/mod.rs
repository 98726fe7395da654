//! Timecard file parsing.
//!
//! Lines are split on commas outside double quotes, fields are looked up
//! by column name through the configured [`ColumnMap`](crate::config::ColumnMap),
//! and timestamps are parsed with the configured chrono format.

mod record;
mod row;

pub use record::{LineDiagnostic, ParseOutcome, RecordParser};
pub use row::{CsvRow, split_fields};
