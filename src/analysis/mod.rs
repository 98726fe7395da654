//! Compliance analysis for grouped timecards.
//!
//! This module groups shift records by employee, sorts each group by
//! clock-in time, and evaluates the three compliance rules: consecutive
//! worked days, short breaks between shifts, and overly long shifts.

mod consecutive_days;
mod grouping;
mod hours;
mod long_shift;
mod scanner;
mod short_break;

pub use consecutive_days::{
    ConsecutiveDaysDetection, DEFAULT_CONSECUTIVE_DAYS, detect_consecutive_days,
};
pub use grouping::EmployeeShifts;
pub use hours::hours_between;
pub use long_shift::{LongShiftDetection, detect_long_shift};
pub use scanner::{EmployeeScan, scan_all, scan_employee};
pub use short_break::{ShortBreakDetection, detect_short_break};
