//! Consecutive worked days detection.
//!
//! Walks an employee's shifts in clock-in order and counts a streak of
//! calendar days where each day immediately follows the previous one.
//! Several shifts starting on the same day neither extend nor break the
//! streak.

use chrono::NaiveDate;

use crate::models::ShiftRecord;

/// Default number of consecutive days that triggers the rule.
pub const DEFAULT_CONSECUTIVE_DAYS: usize = 7;

/// Evidence for a triggered consecutive-days rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsecutiveDaysDetection {
    /// First calendar day of the streak.
    pub first_day: NaiveDate,
    /// Day on which the streak reached the threshold.
    pub last_day: NaiveDate,
    /// Length of the streak in days.
    pub days: usize,
}

/// Detects a streak of `threshold` consecutive worked calendar days.
///
/// `shifts` must be sorted ascending by `time_in`. Returns the first streak
/// that reaches the threshold, or `None`. Employees with fewer shifts than
/// `threshold` cannot trigger the rule and are not scanned.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::detect_consecutive_days;
/// use timecard_audit::models::ShiftRecord;
/// use chrono::{Duration, NaiveDateTime};
///
/// let start = NaiveDateTime::parse_from_str("2023-01-01 09:00", "%Y-%m-%d %H:%M").unwrap();
/// let shifts: Vec<ShiftRecord> = (0..7)
///     .map(|day| ShiftRecord {
///         employee_name: "Jane Doe".to_string(),
///         position_id: "P1".to_string(),
///         time_in: start + Duration::days(day),
///         time_out: start + Duration::days(day) + Duration::hours(8),
///     })
///     .collect();
///
/// let detection = detect_consecutive_days(&shifts, 7).unwrap();
/// assert_eq!(detection.days, 7);
/// assert!(detect_consecutive_days(&shifts[..6], 7).is_none());
/// ```
pub fn detect_consecutive_days(
    shifts: &[ShiftRecord],
    threshold: usize,
) -> Option<ConsecutiveDaysDetection> {
    if shifts.len() < threshold {
        return None;
    }

    let (first, rest) = shifts.split_first()?;
    let mut streak = 1;
    let mut first_day = first.start_day();
    let mut last_day = first_day;

    for shift in rest {
        let day = shift.start_day();

        if last_day.succ_opt() == Some(day) {
            streak += 1;
            if streak >= threshold {
                return Some(ConsecutiveDaysDetection {
                    first_day,
                    last_day: day,
                    days: streak,
                });
            }
        } else if day != last_day {
            streak = 1;
            first_day = day;
        }

        last_day = day;
    }

    None
}
