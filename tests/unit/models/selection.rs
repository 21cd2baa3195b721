use super::*;

#[test]
fn region_range_is_ordered() {
    let forward = Region::new((0, 2), (1, 4));
    let reverse = Region::new((1, 4), (0, 2));
    assert_eq!(forward.range(), ((0, 2), (1, 4)));
    assert_eq!(reverse.range(), ((0, 2), (1, 4)));
}

#[test]
fn caret_is_empty_but_covers_its_row() {
    let caret = Region::caret((3, 7));
    assert!(caret.is_empty());
    assert_eq!(caret.rows().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn region_rows_spans_all_touched_lines() {
    let region = Region::new((2, 5), (5, 0));
    assert_eq!(region.rows().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

#[test]
fn contains_is_half_open() {
    let region = Region::new((0, 2), (0, 6));
    assert!(region.contains((0, 2)));
    assert!(region.contains((0, 5)));
    assert!(!region.contains((0, 6)));
}

#[test]
fn add_keeps_disjoint_regions_sorted() {
    let mut set = SelectionSet::new();
    set.add(Region::new((4, 0), (4, 3)));
    set.add(Region::new((1, 0), (1, 2)));

    let ranges: Vec<_> = set.iter().map(|r| r.range()).collect();
    assert_eq!(ranges, vec![((1, 0), (1, 2)), ((4, 0), (4, 3))]);
}

#[test]
fn add_merges_overlapping_regions() {
    let mut set = SelectionSet::new();
    set.add(Region::new((0, 0), (0, 4)));
    set.add(Region::new((0, 2), (1, 1)));

    assert_eq!(set.len(), 1);
    let merged = set.iter().next().unwrap();
    assert_eq!(merged.range(), ((0, 0), (1, 1)));
}

#[test]
fn add_merges_caret_inside_region() {
    let mut set = SelectionSet::new();
    set.add(Region::new((0, 0), (0, 4)));
    set.add(Region::caret((0, 2)));

    assert_eq!(set.len(), 1);
}

#[test]
fn carets_dedup_identical_points() {
    let set = SelectionSet::carets(vec![(0, 3), (0, 3), (2, 0)]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.cursor_positions(), vec![(0, 3), (2, 0)]);
}

#[test]
fn adjacent_regions_are_not_merged() {
    // half-open ranges: [a, b) and [b, c) touch but do not overlap
    let mut set = SelectionSet::new();
    set.add(Region::new((0, 0), (0, 4)));
    set.add(Region::new((0, 4), (0, 8)));
    assert_eq!(set.len(), 2);
}
