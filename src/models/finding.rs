//! Compliance findings.
//!
//! A [`Finding`] records that one rule fired for one employee. There is at
//! most one finding per employee per [`RuleKind`].

use serde::{Deserialize, Serialize};

use crate::config::RuleThresholds;

/// The compliance rules, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Worked on N consecutive calendar days.
    ConsecutiveDays,
    /// A gap between shifts inside the short-break window.
    ShortBreak,
    /// A single shift longer than the maximum.
    LongShift,
}

impl RuleKind {
    /// All rules in the order they are evaluated and reported.
    pub const ALL: [RuleKind; 3] = [
        RuleKind::ConsecutiveDays,
        RuleKind::ShortBreak,
        RuleKind::LongShift,
    ];

    /// Renders the report sentence for `employee_name`.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_audit::config::RuleThresholds;
    /// use timecard_audit::models::RuleKind;
    ///
    /// let rules = RuleThresholds::default();
    /// assert_eq!(
    ///     RuleKind::LongShift.sentence("Jane Doe", &rules),
    ///     "Jane Doe has worked more than 14 hours in a single shift."
    /// );
    /// ```
    pub fn sentence(self, employee_name: &str, rules: &RuleThresholds) -> String {
        match self {
            RuleKind::ConsecutiveDays => format!(
                "{} has worked for {} consecutive days.",
                employee_name, rules.consecutive_days
            ),
            RuleKind::ShortBreak => format!(
                "{} has less than {} hours but more than {} hour between shifts.",
                employee_name,
                rules.max_break_hours.normalize(),
                rules.min_break_hours.normalize()
            ),
            RuleKind::LongShift => format!(
                "{} has worked more than {} hours in a single shift.",
                employee_name,
                rules.max_shift_hours.normalize()
            ),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::ConsecutiveDays => write!(f, "consecutive_days"),
            RuleKind::ShortBreak => write!(f, "short_break"),
            RuleKind::LongShift => write!(f, "long_shift"),
        }
    }
}

/// One triggered rule for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The employee the rule fired for.
    pub employee_name: String,
    /// The rule that fired.
    pub rule: RuleKind,
}

impl Finding {
    /// Creates a finding.
    pub fn new(employee_name: impl Into<String>, rule: RuleKind) -> Self {
        Self {
            employee_name: employee_name.into(),
            rule,
        }
    }

    /// Renders the report sentence for this finding.
    pub fn message(&self, rules: &RuleThresholds) -> String {
        self.rule.sentence(&self.employee_name, rules)
    }
}
