//! Per-employee compliance scan.
//!
//! Runs all three rule checks over each employee's sorted shifts and
//! collects the rules that fired.

use tracing::debug;

use crate::config::RuleThresholds;
use crate::models::{Finding, RuleKind, ShiftRecord};

use super::consecutive_days::{ConsecutiveDaysDetection, detect_consecutive_days};
use super::grouping::EmployeeShifts;
use super::long_shift::{LongShiftDetection, detect_long_shift};
use super::short_break::{ShortBreakDetection, detect_short_break};

/// The outcome of scanning one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeScan {
    /// The employee scanned.
    pub employee_name: String,
    /// Number of shifts considered.
    pub shift_count: usize,
    /// Evidence for the consecutive-days rule, if it fired.
    pub consecutive_days: Option<ConsecutiveDaysDetection>,
    /// Evidence for the short-break rule, if it fired.
    pub short_break: Option<ShortBreakDetection>,
    /// Evidence for the long-shift rule, if it fired.
    pub long_shift: Option<LongShiftDetection>,
}

impl EmployeeScan {
    /// Returns the rules that fired, in report order.
    pub fn fired_rules(&self) -> Vec<RuleKind> {
        RuleKind::ALL
            .into_iter()
            .filter(|rule| match rule {
                RuleKind::ConsecutiveDays => self.consecutive_days.is_some(),
                RuleKind::ShortBreak => self.short_break.is_some(),
                RuleKind::LongShift => self.long_shift.is_some(),
            })
            .collect()
    }

    /// Returns one finding per fired rule, in report order.
    pub fn findings(&self) -> Vec<Finding> {
        self.fired_rules()
            .into_iter()
            .map(|rule| Finding::new(self.employee_name.clone(), rule))
            .collect()
    }
}

/// Evaluates every rule for one employee.
///
/// `shifts` must be sorted ascending by `time_in`, as produced by
/// [`EmployeeShifts`]. The three rules are independent; any combination
/// may fire.
pub fn scan_employee(
    employee_name: &str,
    shifts: &[ShiftRecord],
    rules: &RuleThresholds,
) -> EmployeeScan {
    let scan = EmployeeScan {
        employee_name: employee_name.to_string(),
        shift_count: shifts.len(),
        consecutive_days: detect_consecutive_days(shifts, rules.consecutive_days),
        short_break: detect_short_break(shifts, rules.min_break_hours, rules.max_break_hours),
        long_shift: detect_long_shift(shifts, rules.max_shift_hours),
    };

    debug!(
        employee = %employee_name,
        shifts = scan.shift_count,
        consecutive_days = ?scan.consecutive_days,
        short_break = ?scan.short_break,
        long_shift = ?scan.long_shift,
        "Scanned employee"
    );

    scan
}

/// Scans every employee and returns all findings.
///
/// Findings are grouped by employee in iteration order, each employee's
/// findings in rule order.
pub fn scan_all(groups: &EmployeeShifts, rules: &RuleThresholds) -> Vec<Finding> {
    groups
        .iter()
        .flat_map(|(name, shifts)| scan_employee(name, shifts, rules).findings())
        .collect()
}
