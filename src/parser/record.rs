//! Conversion of timecard lines into [`ShiftRecord`]s.
//!
//! Malformed lines are skipped and reported as [`LineDiagnostic`]s; they
//! never abort parsing of the remaining lines.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::config::{AuditConfig, Column};
use crate::error::{AuditError, AuditResult};
use crate::models::ShiftRecord;

use super::row::CsvRow;

/// A skipped line and the reason it was skipped.
#[derive(Debug)]
pub struct LineDiagnostic {
    /// 1-based line number in the source file (the header is line 1).
    pub line_number: usize,
    /// Why the line could not be parsed.
    pub error: AuditError,
}

/// The result of parsing a timecard source.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Records parsed successfully, in input order.
    pub records: Vec<ShiftRecord>,
    /// One entry per skipped line.
    pub diagnostics: Vec<LineDiagnostic>,
    /// Number of lines after the header, blank lines included.
    pub lines_read: usize,
}

/// Parses timecard lines according to an [`AuditConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RecordParser<'a> {
    config: &'a AuditConfig,
}

impl<'a> RecordParser<'a> {
    /// Creates a parser bound to `config`.
    pub fn new(config: &'a AuditConfig) -> Self {
        Self { config }
    }

    /// Parses one data line.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_audit::config::AuditConfig;
    /// use timecard_audit::parser::RecordParser;
    ///
    /// let config = AuditConfig::default();
    /// let line = r#"WFS000001,Active,01/02/2023 08:00 AM,01/02/2023 04:30 PM,08:30,,,"Doe, Jane",1"#;
    /// let record = RecordParser::new(&config).parse_line(line).unwrap();
    /// assert_eq!(record.employee_name, "Doe, Jane");
    /// assert_eq!(record.position_id, "WFS000001");
    /// ```
    pub fn parse_line(&self, line: &str) -> AuditResult<ShiftRecord> {
        let row = CsvRow::new(line, &self.config.columns);

        let position_id = row.field(Column::PositionId)?.trim().to_string();
        let employee_name = row
            .field(Column::EmployeeName)?
            .replace('"', "")
            .trim()
            .to_string();
        let time_in = self.parse_timestamp(&row, Column::TimeIn)?;
        let time_out = self.parse_timestamp(&row, Column::TimeOut)?;

        Ok(ShiftRecord {
            employee_name,
            position_id,
            time_in,
            time_out,
        })
    }

    fn parse_timestamp(&self, row: &CsvRow<'_>, column: Column) -> AuditResult<NaiveDateTime> {
        let value = row.field(column)?.trim();
        NaiveDateTime::parse_from_str(value, &self.config.timestamp_format).map_err(|e| {
            AuditError::InvalidTimestamp {
                column: column.name(),
                value: value.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Parses a full source, skipping the first line as a header.
    ///
    /// The header is never inspected. Blank lines are ignored without a
    /// diagnostic; any other line that fails to parse is logged and
    /// recorded in [`ParseOutcome::diagnostics`].
    pub fn parse_lines<I, S>(&self, lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = ParseOutcome::default();

        for (idx, line) in lines.into_iter().enumerate().skip(1) {
            let line = line.as_ref();
            let line_number = idx + 1;
            outcome.lines_read += 1;

            if line.trim().is_empty() {
                debug!(line_number, "Skipping blank line");
                continue;
            }

            match self.parse_line(line) {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    warn!(line_number, error = %error, "Skipping malformed line");
                    outcome.diagnostics.push(LineDiagnostic { line_number, error });
                }
            }
        }

        outcome
    }

    /// Reads and parses the file at `path`.
    ///
    /// Returns `InputUnreadable` if the file cannot be read at all; per-line
    /// failures are reported in the outcome instead. Each line is decoded on
    /// its own, so invalid UTF-8 on one line replaces the bad bytes with
    /// U+FFFD and leaves every other line untouched.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> AuditResult<ParseOutcome> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| AuditError::InputUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(self.parse_lines(decode_lines(&bytes)))
    }
}

/// Splits raw file content into lines the way `str::lines` does, decoding
/// each one lossily.
fn decode_lines(bytes: &[u8]) -> Vec<Cow<'_, str>> {
    if bytes.is_empty() {
        return Vec::new();
    }

    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .enumerate()
        .map(|(idx, raw)| {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            if let Cow::Owned(_) = line {
                warn!(line_number = idx + 1, "Replaced invalid UTF-8 in line");
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str = "Position ID,Position Status,Time,Time Out,Timecard Hours (as Time),Pay Cycle Start Date,Pay Cycle End Date,Employee Name,File Number";

    fn line(time_in: &str, time_out: &str, name: &str) -> String {
        format!(
            "WFS000001,Active,{},{},08:00,01/01/2023,01/14/2023,\"{}\",FN1",
            time_in, time_out, name
        )
    }

    #[test]
    fn test_parse_line_extracts_all_fields() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);

        let record = parser
            .parse_line(&line("01/02/2023 08:00 AM", "01/02/2023 11:15 PM", "Doe, Jane"))
            .unwrap();

        assert_eq!(record.employee_name, "Doe, Jane");
        assert_eq!(record.position_id, "WFS000001");
        assert_eq!(
            record.time_in,
            NaiveDate::from_ymd_opt(2023, 1, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        assert_eq!(
            record.time_out,
            NaiveDate::from_ymd_opt(2023, 1, 2)
                .unwrap()
                .and_hms_opt(23, 15, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_line_handles_noon_and_midnight() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);

        let record = parser
            .parse_line(&line("01/02/2023 12:00 AM", "01/02/2023 12:30 PM", "Jane"))
            .unwrap();

        assert_eq!(record.time_in.format("%H:%M").to_string(), "00:00");
        assert_eq!(record.time_out.format("%H:%M").to_string(), "12:30");
    }

    #[test]
    fn test_parse_line_trims_whitespace_around_fields() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);
        let raw = " P9 ,Active, 01/02/2023 08:00 AM , 01/02/2023 04:00 PM ,,,,  \" Jane Doe \"  ";

        let record = parser.parse_line(raw).unwrap();
        assert_eq!(record.position_id, "P9");
        assert_eq!(record.employee_name, "Jane Doe");
    }

    #[test]
    fn test_parse_line_rejects_bad_timestamp() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);

        let result = parser.parse_line(&line("", "01/02/2023 04:00 PM", "Jane"));
        match result {
            Err(AuditError::InvalidTimestamp { column, value, .. }) => {
                assert_eq!(column, "time_in");
                assert_eq!(value, "");
            }
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_rejects_24_hour_time_out() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);

        let result = parser.parse_line(&line("01/02/2023 08:00 AM", "2023-01-02 16:00", "Jane"));
        assert!(matches!(
            result,
            Err(AuditError::InvalidTimestamp {
                column: "time_out",
                ..
            })
        ));
    }

    /// Scenario 5: a line with only three fields is skipped, later lines still parse.
    #[test]
    fn test_short_line_is_skipped_and_parsing_continues() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);
        let good = line("01/03/2023 08:00 AM", "01/03/2023 04:00 PM", "Jane Doe");
        let lines = vec![HEADER, "WFS000001,Active,01/02/2023 08:00 AM", good.as_str()];

        let outcome = parser.parse_lines(lines);

        assert_eq!(outcome.lines_read, 2);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].employee_name, "Jane Doe");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line_number, 2);
        assert!(matches!(
            outcome.diagnostics[0].error,
            AuditError::MissingField {
                column: "employee_name",
                ..
            }
        ));
    }

    #[test]
    fn test_header_is_skipped_without_inspection() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);
        let data = line("01/02/2023 08:00 AM", "01/02/2023 04:00 PM", "Jane");

        // A header that would itself parse as a record is still skipped.
        let outcome = parser.parse_lines(vec![data.clone(), data]);
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_blank_lines_are_not_diagnostics() {
        let config = AuditConfig::default();
        let parser = RecordParser::new(&config);

        let outcome = parser.parse_lines(vec![HEADER, "", "   "]);
        assert_eq!(outcome.lines_read, 2);
        assert!(outcome.records.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_source_yields_empty_outcome() {
        let config = AuditConfig::default();
        let outcome = RecordParser::new(&config).parse_lines(Vec::<String>::new());

        assert_eq!(outcome.lines_read, 0);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_custom_timestamp_format() {
        let config = AuditConfig {
            timestamp_format: "%Y-%m-%d %H:%M".to_string(),
            ..AuditConfig::default()
        };
        let parser = RecordParser::new(&config);

        let record = parser
            .parse_line(&line("2023-01-02 08:00", "2023-01-02 16:00", "Jane"))
            .unwrap();
        assert_eq!(record.duration_hours(), rust_decimal::Decimal::from(8));
    }

    #[test]
    fn test_read_missing_file_is_input_unreadable() {
        let config = AuditConfig::default();
        let result = RecordParser::new(&config).read_file("/nonexistent/timecards.csv");

        assert!(matches!(result, Err(AuditError::InputUnreadable { .. })));
    }

    #[test]
    fn test_read_file_handles_crlf_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timecards.csv");
        let content = format!(
            "{}\r\n{}\r\n",
            HEADER,
            line("01/02/2023 08:00 AM", "01/02/2023 04:00 PM", "Jane")
        );
        std::fs::write(&path, content).unwrap();

        let config = AuditConfig::default();
        let outcome = RecordParser::new(&config).read_file(&path).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].position_id, "WFS000001");
    }

    #[test]
    fn test_invalid_utf8_only_affects_its_own_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timecards.csv");
        let mut content = Vec::new();
        content.extend_from_slice(HEADER.as_bytes());
        content.push(b'\n');
        content.extend_from_slice(
            line("01/01/2023 08:00 AM", "01/01/2023 04:00 PM", "Jos\u{e9} Cruz").as_bytes(),
        );
        content.push(b'\n');
        // Latin-1 encoded name: 0xE9 is not valid UTF-8 on its own.
        content.extend_from_slice(b"WFS000002,Active,01/02/2023 08:00 AM,01/02/2023 11:00 PM,08:00,01/01/2023,01/14/2023,\"Ana Mu\xf1oz\",1\n");
        content.extend_from_slice(
            line("01/03/2023 08:00 AM", "01/03/2023 04:00 PM", "Jane Doe").as_bytes(),
        );
        content.push(b'\n');
        std::fs::write(&path, content).unwrap();

        let config = AuditConfig::default();
        let outcome = RecordParser::new(&config).read_file(&path).unwrap();

        assert_eq!(outcome.lines_read, 3);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(outcome.records[0].employee_name, "Jos\u{e9} Cruz");
        assert_eq!(outcome.records[1].employee_name, "Ana Mu\u{fffd}oz");
        assert_eq!(outcome.records[2].employee_name, "Jane Doe");
    }

    #[test]
    fn test_decode_lines_matches_str_lines() {
        for content in ["", "\n", "a", "a\n", "a\r\nb", "a\n\nb\n", "a\r\n"] {
            let decoded: Vec<String> = decode_lines(content.as_bytes())
                .into_iter()
                .map(Cow::into_owned)
                .collect();
            let expected: Vec<&str> = content.lines().collect();
            assert_eq!(decoded, expected, "content {:?}", content);
        }
    }
}
