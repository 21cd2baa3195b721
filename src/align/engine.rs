//! Pipeline orchestration: discovery → layout → rewrite → batch apply.
//!
//! Pure until the final batch-apply step. All replacements are computed
//! against the unmutated document and applied bottom-to-top, so recorded row
//! numbers stay valid for the whole batch.

use rustc_hash::FxHashMap;

use super::layout::{self, Layout};
use super::rewrite;
use super::scan;
use super::separator;
use crate::models::{EditOp, OpId, SelectionSet, TextBuffer};
use crate::services::ports::config::AlignConfig;

/// Result of one alignment invocation.
#[derive(Debug, Clone, Default)]
pub struct AlignOutcome {
    /// `None` when the selection produced no candidates; the document is
    /// untouched then.
    pub layout: Option<Layout>,
    /// Applied ops in application (bottom-to-top) order, parent-chained.
    pub edits: Vec<EditOp>,
    /// One zero-width cursor per rewritten row at the shared boundary column.
    /// Callers should reveal these.
    pub selection: SelectionSet,
}

impl AlignOutcome {
    pub fn changed(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Align every line covered by `selection` around the configured separators.
pub fn align(
    buffer: &mut TextBuffer,
    selection: &SelectionSet,
    config: &AlignConfig,
) -> AlignOutcome {
    let tab = config.tab();
    let specs = separator::sorted_by_token_len(&config.separators);

    let mut candidates = Vec::new();
    for spec in &specs {
        candidates.extend(scan::candidates_for_separator(buffer, selection, spec, tab));
    }

    let Some(layout) = layout::compute(&candidates, tab) else {
        tracing::debug!("no alignment candidates in selection");
        return AlignOutcome::default();
    };

    // Rebuild in discovery order. On a row matched by more than one
    // separator the later (longer-token) candidate supplies the replacement.
    let mut replacements: FxHashMap<usize, String> =
        FxHashMap::with_capacity_and_hasher(candidates.len(), Default::default());
    for candidate in &candidates {
        let edit = rewrite::rebuild(candidate, &layout);
        replacements.insert(edit.row, edit.replacement);
    }

    let mut rows: Vec<usize> = replacements.keys().copied().collect();
    rows.sort_unstable();

    let cursor_before = buffer.cursor();
    let mut parent = OpId::root();
    let mut edits = Vec::with_capacity(rows.len());
    for &row in rows.iter().rev() {
        let Some(span) = buffer.full_line_span(row) else {
            continue;
        };
        let Some(inserted) = replacements.remove(&row) else {
            continue;
        };
        let deleted = buffer.slice_text(span.clone());
        let op = EditOp::replace(
            parent,
            span.start,
            span.end,
            deleted,
            inserted,
            cursor_before,
            (row, layout.boundary()),
        );
        parent = op.id;
        buffer.apply_op(&op);
        edits.push(op);
    }

    let cursors: Vec<(usize, usize)> = rows.iter().map(|&row| (row, layout.boundary())).collect();
    if let Some(&(row, col)) = cursors.first() {
        buffer.set_cursor(row, col);
    }

    tracing::debug!(
        candidates = candidates.len(),
        rows = rows.len(),
        indent = layout.indent,
        left_col_width = layout.left_col_width,
        "alignment applied"
    );

    AlignOutcome {
        layout: Some(layout),
        edits,
        selection: SelectionSet::carets(cursors),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/align/engine.rs"]
mod tests;
