use super::*;

fn active_flags(selection: TabSelection, len: usize) -> Vec<bool> {
    (0..len).map(|i| selection.is_active(i)).collect()
}

#[test]
fn first_tab_is_active_by_default() {
    let selection = TabSelection::new(3);
    assert_eq!(selection.active(), Some(0));
    assert_eq!(active_flags(selection, 3), [true, false, false]);
}

#[test]
fn selecting_moves_the_single_active_tab() {
    let mut selection = TabSelection::new(3);
    selection.select(2);
    assert_eq!(active_flags(selection, 3), [false, false, true]);
    selection.select(1);
    assert_eq!(active_flags(selection, 3).iter().filter(|a| **a).count(), 1);
    assert!(selection.is_active(1));
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut selection = TabSelection::new(2);
    selection.select(1);
    selection.select(5);
    assert_eq!(selection.active(), Some(1));
}

#[test]
fn empty_strip_has_no_active_tab() {
    let mut selection = TabSelection::new(0);
    selection.select(0);
    assert_eq!(selection.active(), None);
    assert!(!selection.is_active(0));
}
