//! Field splitting and named-column access for timecard lines.

use crate::config::{Column, ColumnMap};
use crate::error::{AuditError, AuditResult};

/// Splits a line on commas that are not inside a double-quoted section.
///
/// Quote characters are kept in the returned fields. Trailing empty fields
/// are preserved, so `"a,b,"` yields three fields. When a line carries an
/// odd number of quotes, the last one has no partner and is kept as a
/// literal character instead of opening a quoted section.
///
/// # Example
///
/// ```
/// use timecard_audit::parser::split_fields;
///
/// let fields = split_fields(r#"WFS1,Active,"Doe, Jane",x"#);
/// assert_eq!(fields, vec!["WFS1", "Active", r#""Doe, Jane""#, "x"]);
/// ```
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;
    let unmatched_quote = if line.bytes().filter(|&b| b == b'"').count() % 2 == 1 {
        line.rfind('"')
    } else {
        None
    };

    // Both delimiters are ASCII, so byte offsets are always char boundaries.
    for (idx, byte) in line.bytes().enumerate() {
        match byte {
            b'"' if unmatched_quote != Some(idx) => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                fields.push(&line[field_start..idx]);
                field_start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[field_start..]);

    fields
}

/// A split line with access to fields by column name.
#[derive(Debug, Clone)]
pub struct CsvRow<'a> {
    fields: Vec<&'a str>,
    columns: &'a ColumnMap,
}

impl<'a> CsvRow<'a> {
    /// Splits `line` and binds it to the column positions in `columns`.
    pub fn new(line: &'a str, columns: &'a ColumnMap) -> Self {
        Self {
            fields: split_fields(line),
            columns,
        }
    }

    /// Number of fields on the line.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the raw (untrimmed) value of `column`.
    pub fn field(&self, column: Column) -> AuditResult<&'a str> {
        let index = self.columns.index_of(column);
        self.fields
            .get(index)
            .copied()
            .ok_or_else(|| AuditError::MissingField {
                column: column.name(),
                index,
                found: self.fields.len(),
            })
    }
}
