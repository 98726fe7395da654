//! Exact hour arithmetic between timestamps.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Returns the elapsed time from `start` to `end` in hours.
///
/// The result is negative when `end` precedes `start`. Whole-minute inputs
/// produce exact values at every hour and half-hour boundary.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::hours_between;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let out = NaiveDateTime::parse_from_str("2023-01-01 18:00", "%Y-%m-%d %H:%M").unwrap();
/// let next_in = NaiveDateTime::parse_from_str("2023-01-02 03:00", "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(hours_between(out, next_in), Decimal::from(9));
/// ```
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}
