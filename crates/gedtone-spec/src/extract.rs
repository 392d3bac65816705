//! Month extraction from GEDCOM-like date lines.
//!
//! Only lines carrying the literal `DATE` tag are considered. From each such
//! line the first word-bounded three-letter month abbreviation is taken; the
//! rest of the date (day, year, qualifiers) is ignored.

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::month::Month;
use crate::sequence::MonthSequence;

/// Case-sensitive tag marking a date line.
pub const DATE_MARKER: &str = "DATE";

/// Pattern matching a month abbreviation on word boundaries.
const MONTH_PATTERN: &str = r"(?i)\b(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\b";

static MONTH_REGEX: OnceLock<Regex> = OnceLock::new();

fn month_regex() -> &'static Regex {
    MONTH_REGEX.get_or_init(|| Regex::new(MONTH_PATTERN).expect("invalid regex pattern"))
}

/// Line statistics gathered during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Total lines scanned.
    pub lines: usize,
    /// Lines containing the `DATE` marker.
    pub date_lines: usize,
    /// Date lines that yielded no month.
    pub unmatched_date_lines: usize,
}

impl ExtractStats {
    /// Date lines that yielded a month.
    pub fn matched_date_lines(&self) -> usize {
        self.date_lines - self.unmatched_date_lines
    }
}

/// Extracts months from text, one per matching date line, in file order.
///
/// Never fails: unrecognized content simply yields fewer entries.
pub fn extract_months(text: &str) -> MonthSequence {
    extract_with_stats(text).0
}

/// Decodes bytes permissively and extracts months.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn extract_months_from_bytes(bytes: &[u8]) -> MonthSequence {
    extract_months(&decode_lossy(bytes))
}

/// Extracts months and reports line statistics.
pub fn extract_with_stats(text: &str) -> (MonthSequence, ExtractStats) {
    let mut months = MonthSequence::new();
    let mut stats = ExtractStats::default();

    for line in split_lines(text) {
        stats.lines += 1;
        if !line.contains(DATE_MARKER) {
            continue;
        }
        stats.date_lines += 1;

        match month_in_line(line) {
            Some(month) => months.push(month),
            None => {
                stats.unmatched_date_lines += 1;
                trace!(line, "date line without month");
            }
        }
    }

    debug!(
        lines = stats.lines,
        date_lines = stats.date_lines,
        months = months.len(),
        "extracted months"
    );
    (months, stats)
}

/// Decodes bytes as UTF-8, replacing malformed sequences.
pub fn decode_lossy(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Returns the first month abbreviation in a line, if any.
pub fn month_in_line(line: &str) -> Option<Month> {
    month_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Month::from_abbrev(m.as_str()))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines on any line terminator.
///
/// `\r\n` counts as a single break and a trailing terminator does not produce
/// an empty final line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((pos, c)) => {
                let line = &rest[..pos];
                let mut next = pos + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
