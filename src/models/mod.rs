//! Core data models for the timecard auditor.

mod finding;
mod shift;

pub use finding::{Finding, RuleKind};
pub use shift::ShiftRecord;
