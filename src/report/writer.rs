//! Report rendering and atomic report files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::RuleThresholds;
use crate::error::{AuditError, AuditResult};
use crate::models::{Finding, RuleKind};

/// Output format for the compliance report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One sentence per line.
    #[default]
    Text,
    /// A JSON array of findings.
    Json,
}

/// One finding as it appears in a JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The employee the rule fired for.
    pub employee_name: String,
    /// The rule that fired.
    pub rule: RuleKind,
    /// The report sentence.
    pub message: String,
}

/// Renders findings as one sentence per line.
///
/// # Example
///
/// ```
/// use timecard_audit::config::RuleThresholds;
/// use timecard_audit::models::{Finding, RuleKind};
/// use timecard_audit::report::render_text;
///
/// let findings = vec![Finding::new("Jane Doe", RuleKind::ConsecutiveDays)];
/// let mut out = Vec::new();
/// render_text(&findings, &RuleThresholds::default(), &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Jane Doe has worked for 7 consecutive days.\n"
/// );
/// ```
pub fn render_text<W: Write>(
    findings: &[Finding],
    rules: &RuleThresholds,
    mut out: W,
) -> std::io::Result<()> {
    for finding in findings {
        writeln!(out, "{}", finding.message(rules))?;
    }
    Ok(())
}

/// Renders findings as a pretty-printed JSON array of [`ReportEntry`].
pub fn render_json<W: Write>(
    findings: &[Finding],
    rules: &RuleThresholds,
    mut out: W,
) -> std::io::Result<()> {
    let entries: Vec<ReportEntry> = findings
        .iter()
        .map(|finding| ReportEntry {
            employee_name: finding.employee_name.clone(),
            rule: finding.rule,
            message: finding.message(rules),
        })
        .collect();

    serde_json::to_writer_pretty(&mut out, &entries)?;
    writeln!(out)
}

/// Renders findings in `format`.
pub fn render<W: Write>(
    findings: &[Finding],
    rules: &RuleThresholds,
    format: ReportFormat,
    out: W,
) -> std::io::Result<()> {
    match format {
        ReportFormat::Text => render_text(findings, rules, out),
        ReportFormat::Json => render_json(findings, rules, out),
    }
}

/// Sibling path the report is staged in before being renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

/// Writes the report to `path`.
///
/// The report is rendered into a temporary file next to `path` and renamed
/// over it once complete, so `path` never holds a partial report. On failure
/// the temporary file is removed and any previous file at `path` is left
/// untouched.
pub fn write_report(
    path: &Path,
    findings: &[Finding],
    rules: &RuleThresholds,
    format: ReportFormat,
) -> AuditResult<()> {
    let staging = staging_path(path);
    let to_error = |e: std::io::Error| AuditError::OutputUnwritable {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let staged = File::create(&staging).and_then(|file| {
        let mut out = BufWriter::new(file);
        render(findings, rules, format, &mut out)?;
        out.into_inner()
            .map_err(std::io::IntoInnerError::into_error)?
            .sync_all()
    });

    if let Err(e) = staged.and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        let err = to_error(e);
        error!(error = %err, "Report not written");
        return Err(err);
    }

    info!(path = %path.display(), findings = findings.len(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_findings() -> Vec<Finding> {
        vec![
            Finding::new("Jane Doe", RuleKind::ConsecutiveDays),
            Finding::new("John Smith", RuleKind::ShortBreak),
            Finding::new("John Smith", RuleKind::LongShift),
        ]
    }

    #[test]
    fn test_render_text_one_line_per_finding() {
        let mut out = Vec::new();
        render_text(&sample_findings(), &RuleThresholds::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Jane Doe has worked for 7 consecutive days.\n\
             John Smith has less than 10 hours but more than 1 hour between shifts.\n\
             John Smith has worked more than 14 hours in a single shift.\n"
        );
    }

    #[test]
    fn test_render_text_no_findings_is_empty() {
        let mut out = Vec::new();
        render_text(&[], &RuleThresholds::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_json_entries() {
        let mut out = Vec::new();
        render_json(&sample_findings(), &RuleThresholds::default(), &mut out).unwrap();

        let entries: Vec<ReportEntry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].employee_name, "John Smith");
        assert_eq!(entries[1].rule, RuleKind::ShortBreak);
        assert_eq!(
            entries[1].message,
            "John Smith has less than 10 hours but more than 1 hour between shifts."
        );

        let raw: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(raw[0]["rule"], "consecutive_days");
    }

    #[test]
    fn test_write_report_creates_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        write_report(
            &path,
            &sample_findings(),
            &RuleThresholds::default(),
            ReportFormat::Text,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(!staging_path(&path).exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_report_replaces_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "stale\n").unwrap();

        write_report(&path, &[], &RuleThresholds::default(), ReportFormat::Text).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.txt");

        let result = write_report(
            &path,
            &sample_findings(),
            &RuleThresholds::default(),
            ReportFormat::Text,
        );

        match result {
            Err(AuditError::OutputUnwritable { path: reported, .. }) => {
                assert!(reported.ends_with("output.txt"));
            }
            other => panic!("Expected OutputUnwritable, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        let path = Path::new("/tmp/reports/output.txt");
        assert_eq!(
            staging_path(path),
            PathBuf::from("/tmp/reports/.output.txt.tmp")
        );
    }
}
