//! Configuration types for timecard auditing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file (or no file at all) yields the standard audit.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::analysis::DEFAULT_CONSECUTIVE_DAYS;
use crate::error::{AuditError, AuditResult};

/// Default timestamp format: `MM/DD/YYYY hh:mm AM|PM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Identifies one of the columns the parser reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Position identifier (carried through, unused by rules).
    PositionId,
    /// Clock-in timestamp.
    TimeIn,
    /// Clock-out timestamp.
    TimeOut,
    /// Employee name, possibly quoted.
    EmployeeName,
}

impl Column {
    /// Returns the configuration key for this column.
    pub fn name(self) -> &'static str {
        match self {
            Column::PositionId => "position_id",
            Column::TimeIn => "time_in",
            Column::TimeOut => "time_out",
            Column::EmployeeName => "employee_name",
        }
    }
}

/// Zero-based field positions of the columns the parser reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    /// Index of the position identifier.
    pub position_id: usize,
    /// Index of the clock-in timestamp.
    pub time_in: usize,
    /// Index of the clock-out timestamp.
    pub time_out: usize,
    /// Index of the employee name.
    pub employee_name: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            position_id: 0,
            time_in: 2,
            time_out: 3,
            employee_name: 7,
        }
    }
}

impl ColumnMap {
    /// Returns the field index configured for `column`.
    pub fn index_of(&self, column: Column) -> usize {
        match column {
            Column::PositionId => self.position_id,
            Column::TimeIn => self.time_in,
            Column::TimeOut => self.time_out,
            Column::EmployeeName => self.employee_name,
        }
    }
}

/// Thresholds for the three compliance rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleThresholds {
    /// Number of consecutive calendar days that triggers the streak rule.
    pub consecutive_days: usize,
    /// Gaps must be strictly longer than this to count as a short break.
    pub min_break_hours: Decimal,
    /// Gaps must be strictly shorter than this to count as a short break.
    pub max_break_hours: Decimal,
    /// Shifts strictly longer than this trigger the long-shift rule.
    pub max_shift_hours: Decimal,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            consecutive_days: DEFAULT_CONSECUTIVE_DAYS,
            min_break_hours: Decimal::ONE,
            max_break_hours: Decimal::TEN,
            max_shift_hours: Decimal::from(14),
        }
    }
}

/// The complete audit configuration.
///
/// # Example
///
/// ```
/// use timecard_audit::config::AuditConfig;
///
/// let config = AuditConfig::default();
/// assert_eq!(config.rules.consecutive_days, 7);
/// assert_eq!(config.columns.employee_name, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// chrono format string for the time-in and time-out columns.
    pub timestamp_format: String,
    /// Column positions.
    pub columns: ColumnMap,
    /// Rule thresholds.
    pub rules: RuleThresholds,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            columns: ColumnMap::default(),
            rules: RuleThresholds::default(),
        }
    }
}

impl AuditConfig {
    /// Checks the thresholds for internal consistency.
    pub fn validate(&self) -> AuditResult<()> {
        let rules = &self.rules;

        if rules.consecutive_days < 2 {
            return Err(AuditError::InvalidConfig {
                message: format!(
                    "consecutive_days must be at least 2, got {}",
                    rules.consecutive_days
                ),
            });
        }

        if rules.min_break_hours.is_sign_negative() || rules.max_shift_hours.is_sign_negative() {
            return Err(AuditError::InvalidConfig {
                message: "hour thresholds must not be negative".to_string(),
            });
        }

        if rules.min_break_hours >= rules.max_break_hours {
            return Err(AuditError::InvalidConfig {
                message: format!(
                    "min_break_hours ({}) must be less than max_break_hours ({})",
                    rules.min_break_hours, rules.max_break_hours
                ),
            });
        }

        if self.timestamp_format.trim().is_empty() {
            return Err(AuditError::InvalidConfig {
                message: "timestamp_format must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
