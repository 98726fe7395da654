//! Detection of single shifts that exceed a maximum length.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::ShiftRecord;

/// Evidence for a triggered long-shift rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongShiftDetection {
    /// Clock-in of the offending shift.
    pub time_in: NaiveDateTime,
    /// Length of the shift in hours.
    pub duration_hours: Decimal,
}

/// Returns the first shift whose length is strictly greater than `max_hours`.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::detect_long_shift;
/// use timecard_audit::models::ShiftRecord;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = vec![ShiftRecord {
///     employee_name: "Jane Doe".to_string(),
///     position_id: "P1".to_string(),
///     time_in: at("2023-01-01 08:00"),
///     time_out: at("2023-01-01 23:00"),
/// }];
///
/// let detection = detect_long_shift(&shifts, Decimal::from(14)).unwrap();
/// assert_eq!(detection.duration_hours, Decimal::from(15));
/// ```
pub fn detect_long_shift(shifts: &[ShiftRecord], max_hours: Decimal) -> Option<LongShiftDetection> {
    shifts.iter().find_map(|shift| {
        let duration_hours = shift.duration_hours();
        (duration_hours > max_hours).then_some(LongShiftDetection {
            time_in: shift.time_in,
            duration_hours,
        })
    })
}
