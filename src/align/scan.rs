//! Candidate discovery.
//!
//! One pass per separator over the selected rows. The quoted-literal mask is
//! a paired-quote scan with no escape handling; escaped or nested quotes are
//! out of contract.

use compact_str::CompactString;
use memchr::memmem;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::separator::{Gravity, SeparatorSpec};
use crate::models::{SelectionSet, TextBuffer};

/// One separator match on one line.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// 0-based document row, independent of the region it came from.
    pub row: usize,
    /// Original line text, terminator excluded.
    pub text: String,
    /// Separator literal as found on the line.
    pub separator: CompactString,
    pub gravity: Gravity,
    /// Leading-whitespace column width of the detabbed left segment.
    pub initial_indent: Option<usize>,
    /// Detabbed left segment, surrounding whitespace stripped. Trailing
    /// whitespace must go too: right-gravity padding would otherwise be
    /// re-absorbed on the next run and walk the column rightward.
    pub left: String,
    /// Detabbed right segment, trailing whitespace stripped.
    pub right: String,
}

/// Expand tabs to spaces at display-column stops.
pub fn detab(input: &str, tab_size: usize) -> String {
    let tab = tab_size.max(1);
    let mut out = String::with_capacity(input.len());
    let mut col = 0usize;
    for ch in input.chars() {
        if ch == '\t' {
            let pad = tab - col % tab;
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }
    out
}

fn quoted_literal_re() -> &'static Regex {
    static QUOTED_LITERAL: OnceLock<Regex> = OnceLock::new();
    QUOTED_LITERAL.get_or_init(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap())
}

/// Replace every quoted literal with a same-length run of `_` so a separator
/// inside a string cannot be mistaken for the real one. Byte length is
/// preserved: offsets into the collapsed line index the original line.
pub fn mask_literals(line: &str) -> String {
    let re = quoted_literal_re();
    let mut out = String::with_capacity(line.len());
    let mut last = 0usize;
    for m in re.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        out.extend(std::iter::repeat('_').take(m.len()));
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Split `line` on the last occurrence of the separator token and build a
/// candidate. Returns `None` when the line is not alignable on this token:
/// token absent, only inside a literal, or flush at either end of the line.
pub fn scan_line(
    row: usize,
    line: &str,
    spec: &SeparatorSpec,
    tab_size: usize,
) -> Option<Candidate> {
    let token = spec.token.as_bytes();
    // Cheap pre-filter before the literal mask.
    memmem::find(line.as_bytes(), token)?;

    let collapsed = mask_literals(line);
    let pos = memmem::rfind(collapsed.as_bytes(), token)?;
    let end = pos + token.len();

    // All three parts must be non-empty.
    if pos == 0 || end >= collapsed.len() {
        return None;
    }
    // The mask fill is `_`; a token containing `_` can propose a split inside
    // a masked literal, where the original may not have a char boundary.
    if !line.is_char_boundary(pos) || !line.is_char_boundary(end) {
        return None;
    }

    let left_detabbed = detab(&line[..pos], tab_size);
    let right_detabbed = detab(&line[end..], tab_size);
    let separator = CompactString::from(&line[pos..end]);

    let stripped = left_detabbed.trim_start();
    let ws_len = left_detabbed.len() - stripped.len();
    let initial_indent =
        (ws_len > 0).then(|| UnicodeWidthStr::width(&left_detabbed[..ws_len]));
    let stripped = stripped.trim_end();

    Some(Candidate {
        row,
        text: line.to_string(),
        separator,
        gravity: spec.gravity,
        initial_indent,
        left: stripped.to_string(),
        right: right_detabbed.trim_end().to_string(),
    })
}

/// Scan every row covered by the selection for one separator, in region order.
pub fn candidates_for_separator(
    buffer: &TextBuffer,
    selection: &SelectionSet,
    spec: &SeparatorSpec,
    tab_size: usize,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for region in selection.iter() {
        for row in region.rows() {
            let Some(line) = buffer.line_content(row) else {
                break;
            };
            if let Some(candidate) = scan_line(row, &line, spec, tab_size) {
                tracing::trace!(row, token = %spec.token, line = %candidate.text, "candidate");
                candidates.push(candidate);
            }
        }
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/unit/align/scan.rs"]
mod tests;
