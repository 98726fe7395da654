//! Shift record model.
//!
//! This module defines [`ShiftRecord`], one clock-in/clock-out interval
//! read from a timecard file.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::hours_between;

/// Represents one worked shift.
///
/// Records are created once by the parser and never mutated afterwards.
/// `time_out` is expected to be later than `time_in` but this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Employee name, used verbatim as the grouping key.
    pub employee_name: String,
    /// Position identifier. Carried through, not used by any rule.
    pub position_id: String,
    /// Clock-in time (local wall clock).
    pub time_in: NaiveDateTime,
    /// Clock-out time (local wall clock).
    pub time_out: NaiveDateTime,
}

impl ShiftRecord {
    /// Returns the shift length in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_audit::models::ShiftRecord;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftRecord {
    ///     employee_name: "Jane Doe".to_string(),
    ///     position_id: "WFS000001".to_string(),
    ///     time_in: NaiveDateTime::parse_from_str("2023-01-01 08:00", "%Y-%m-%d %H:%M").unwrap(),
    ///     time_out: NaiveDateTime::parse_from_str("2023-01-01 16:30", "%Y-%m-%d %H:%M").unwrap(),
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(85, 1));
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        hours_between(self.time_in, self.time_out)
    }

    /// Returns the calendar day the shift starts on.
    pub fn start_day(&self) -> NaiveDate {
        self.time_in.date()
    }
}
