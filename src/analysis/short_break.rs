//! Short break detection between consecutive shifts.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::ShiftRecord;

use super::hours::hours_between;

/// Evidence for a triggered short-break rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortBreakDetection {
    /// Clock-out of the earlier shift.
    pub previous_time_out: NaiveDateTime,
    /// Clock-in of the following shift.
    pub next_time_in: NaiveDateTime,
    /// Gap between the two in hours.
    pub gap_hours: Decimal,
}

/// Detects a gap between adjacent shifts that is strictly inside
/// `(min_hours, max_hours)`.
///
/// `shifts` must be sorted ascending by `time_in`. Only the first such gap
/// is returned. Gaps exactly equal to either bound do not count, and
/// negative gaps (overlapping shifts) never count.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::detect_short_break;
/// use timecard_audit::models::ShiftRecord;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = vec![
///     ShiftRecord {
///         employee_name: "John Smith".to_string(),
///         position_id: "P1".to_string(),
///         time_in: at("2023-01-01 09:00"),
///         time_out: at("2023-01-01 18:00"),
///     },
///     ShiftRecord {
///         employee_name: "John Smith".to_string(),
///         position_id: "P1".to_string(),
///         time_in: at("2023-01-02 03:00"),
///         time_out: at("2023-01-02 11:00"),
///     },
/// ];
///
/// let detection = detect_short_break(&shifts, Decimal::ONE, Decimal::TEN).unwrap();
/// assert_eq!(detection.gap_hours, Decimal::from(9));
/// ```
pub fn detect_short_break(
    shifts: &[ShiftRecord],
    min_hours: Decimal,
    max_hours: Decimal,
) -> Option<ShortBreakDetection> {
    shifts.windows(2).find_map(|pair| {
        let gap_hours = hours_between(pair[0].time_out, pair[1].time_in);
        (gap_hours > min_hours && gap_hours < max_hours).then_some(ShortBreakDetection {
            previous_time_out: pair[0].time_out,
            next_time_in: pair[1].time_in,
            gap_hours,
        })
    })
}
