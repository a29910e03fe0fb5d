//! Line-oriented parser for rc templates.
//!
//! A template is UTF-8 text. Each meaningful line reads
//! `key : value  # comment`. Everything from the first `#` is a comment, so
//! blank lines, full-line comments and decorative section headers such as
//! `### PLOT ###` all reduce to nothing and are skipped. A leading byte-order
//! mark is ignored.

use rcparams_common::{RcError, Result};
use std::collections::HashMap;
use tracing::trace;

/// One `key : value` declaration, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Declared key.
    pub key: String,
    /// Value text with comment and surrounding whitespace removed.
    pub value: String,
    /// One-based line number of the declaration.
    pub line: usize,
}

/// Parses template text into declarations in file order.
///
/// `source_name` only labels error messages. Fails with a parse error on a
/// line without `:`, on an empty key, on a key containing whitespace, and
/// on a key declared twice.
pub fn parse_template(text: &str, source_name: &str) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = strip_comment(raw_line).trim();
        if content.is_empty() {
            continue;
        }

        let Some((key, value)) = content.split_once(':') else {
            return Err(RcError::parse(
                source_name,
                line_no,
                format!("missing ':' separator in '{content}'"),
            ));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(RcError::parse(source_name, line_no, "empty key"));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(RcError::parse(
                source_name,
                line_no,
                format!("key '{key}' contains whitespace"),
            ));
        }

        if let Some(previous) = first_seen.insert(key.to_string(), line_no) {
            return Err(RcError::parse(
                source_name,
                line_no,
                format!("duplicate key '{key}', first declared at line {previous}"),
            ));
        }

        trace!(source = source_name, line = line_no, key, "parsed declaration");
        entries.push(RawEntry {
            key: key.to_string(),
            value: value.trim().to_string(),
            line: line_no,
        });
    }

    Ok(entries)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}
