//! Compliance report output.
//!
//! Findings are rendered as plain sentences (one per line) or as JSON,
//! and written to disk atomically.

mod writer;

pub use writer::{ReportEntry, ReportFormat, render, render_json, render_text, write_report};
