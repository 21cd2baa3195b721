//! Line reconstruction against the shared layout.

use unicode_width::UnicodeWidthStr;

use super::layout::Layout;
use super::scan::Candidate;
use super::separator::Gravity;

/// A full-line replacement addressed by document row. The replacement covers
/// the whole original line, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub row: usize,
    pub replacement: String,
}

fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Build the replacement line for one candidate.
pub fn rebuild(candidate: &Candidate, layout: &Layout) -> LineEdit {
    // Re-establish the common margin stripped during discovery.
    let mut left = String::with_capacity(layout.boundary() + candidate.right.len() + 1);
    pad(&mut left, layout.indent);
    left.push_str(&candidate.left);

    let mut right = candidate.right.trim().to_string();

    match candidate.gravity {
        Gravity::Left => {
            // Separator sits flush against the content.
            left.push_str(&candidate.separator);
        }
        Gravity::Right => {
            let sep_width = UnicodeWidthStr::width(candidate.separator.as_str());
            let sep_space = layout
                .boundary()
                .saturating_sub(UnicodeWidthStr::width(left.as_str()) + sep_width);
            // Push the separator one separator's width past the boundary so
            // mixed-width separators still end on one right edge.
            pad(&mut left, sep_space);
            pad(&mut left, sep_width);
            left.push_str(&candidate.separator);
            right.insert(0, ' ');
        }
    }

    // Snap the left side together.
    let left_width = UnicodeWidthStr::width(left.as_str());
    if left_width < layout.boundary() {
        pad(&mut left, layout.boundary() - left_width);
    }

    let mut replacement = left;
    replacement.push_str(&right);
    replacement.push('\n');

    LineEdit {
        row: candidate.row,
        replacement,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/align/rewrite.rs"]
mod tests;
