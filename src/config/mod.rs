//! Configuration loading and management for the timecard auditor.
//!
//! This module loads the audit configuration (timestamp format, column
//! positions, and rule thresholds) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timecard_audit::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./audit.yaml").unwrap();
//! println!("Max shift hours: {}", loader.config().rules.max_shift_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AuditConfig, Column, ColumnMap, DEFAULT_TIMESTAMP_FORMAT, RuleThresholds};
