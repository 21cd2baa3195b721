use super::*;
use crate::models::Region;

fn spec(token: &str, gravity: Gravity) -> SeparatorSpec {
    SeparatorSpec::new(token, gravity)
}

#[test]
fn detab_expands_to_tab_stops() {
    assert_eq!(detab("\tx", 4), "    x");
    assert_eq!(detab("ab\tc", 4), "ab  c");
    assert_eq!(detab("abcd\te", 4), "abcd    e");
    assert_eq!(detab("a\tb\tc", 8), "a       b       c");
}

#[test]
fn detab_counts_wide_glyphs_as_two_columns() {
    // 中 occupies two columns, so the tab stop is two columns in
    assert_eq!(detab("中\ta", 4), "中  a");
}

#[test]
fn mask_literals_fills_quoted_spans() {
    assert_eq!(mask_literals(r#"x = "a=b""#), "x = _____");
    assert_eq!(mask_literals("x = 'a=b' + 'c'"), "x = _____ + ___");
    assert_eq!(mask_literals("no quotes here"), "no quotes here");
}

#[test]
fn mask_literals_preserves_byte_length() {
    let line = r#"name = "宽字符""#;
    assert_eq!(mask_literals(line).len(), line.len());
}

#[test]
fn scan_line_splits_on_last_occurrence() {
    let candidate = scan_line(0, "a = b = c", &spec("=", Gravity::Right), 4).unwrap();
    assert_eq!(candidate.left, "a = b");
    // the right segment keeps its leading space until reconstruction
    assert_eq!(candidate.right, " c");
    assert_eq!(candidate.separator, "=");
}

#[test]
fn scan_line_ignores_separator_inside_literal() {
    let candidate = scan_line(0, r#"x = "a=b""#, &spec("=", Gravity::Right), 4).unwrap();
    assert_eq!(candidate.left, "x");
    assert_eq!(candidate.right, r#" "a=b""#);
}

#[test]
fn scan_line_rejects_degenerate_lines() {
    let eq = spec("=", Gravity::Right);
    assert!(scan_line(0, "=", &eq, 4).is_none());
    assert!(scan_line(0, "x=", &eq, 4).is_none());
    assert!(scan_line(0, "=x", &eq, 4).is_none());
    assert!(scan_line(0, "no token", &eq, 4).is_none());
    assert!(scan_line(0, "", &eq, 4).is_none());
}

#[test]
fn scan_line_rejects_split_only_inside_literal() {
    // the only occurrence is masked away
    assert!(scan_line(0, r#"x: "a=b""#, &spec("=", Gravity::Right), 4).is_none());
}

#[test]
fn scan_line_records_initial_indent() {
    let eq = spec("=", Gravity::Right);
    let indented = scan_line(0, "    foo = 1", &eq, 4).unwrap();
    assert_eq!(indented.initial_indent, Some(4));

    let flush = scan_line(0, "foo = 1", &eq, 4).unwrap();
    assert_eq!(flush.initial_indent, None);
}

#[test]
fn scan_line_detabs_before_column_arithmetic() {
    let candidate = scan_line(0, "\tfoo\t= 1", &spec("=", Gravity::Right), 4).unwrap();
    assert_eq!(candidate.initial_indent, Some(4));
    assert_eq!(candidate.left, "foo");
    assert_eq!(candidate.right, " 1");
}

#[test]
fn scan_line_rejects_mask_collision_without_boundary() {
    // An underscore token can land on the `_` fill inside a masked literal;
    // a proposal that is not a char boundary in the original must be dropped.
    assert!(scan_line(0, r#"x __ "aé" y"#, &spec("__", Gravity::Left), 4).is_none());
}

#[test]
fn candidates_respect_selection_rows() {
    let buffer = TextBuffer::from_text("a = 1\nb = 2\nc = 3\n");
    let selection = SelectionSet::single(Region::new((1, 0), (1, 5)));
    let found = candidates_for_separator(&buffer, &selection, &spec("=", Gravity::Right), 4);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].row, 1);
}

#[test]
fn caret_contributes_its_own_line() {
    let buffer = TextBuffer::from_text("a = 1\nb = 2\n");
    let selection = SelectionSet::single(Region::caret((0, 3)));
    let found = candidates_for_separator(&buffer, &selection, &spec("=", Gravity::Right), 4);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].row, 0);
}

#[test]
fn rows_past_end_of_buffer_are_skipped() {
    let buffer = TextBuffer::from_text("a = 1");
    let selection = SelectionSet::single(Region::new((0, 0), (9, 0)));
    let found = candidates_for_separator(&buffer, &selection, &spec("=", Gravity::Right), 4);
    assert_eq!(found.len(), 1);
}
