use pie_view::{CellPosition, CellRange, SelectionModel, LABEL_COLUMN, VALUE_COLUMN};

#[test]
fn test_select_range_replaces_previous_selection() {
    let mut sel = SelectionModel::default();
    sel.select_range(CellRange::new(0, 0, LABEL_COLUMN, LABEL_COLUMN));
    sel.select_range(CellRange::new(1, 2, LABEL_COLUMN, VALUE_COLUMN));

    assert!(!sel.is_selected(CellPosition::label(0)));
    assert!(sel.is_selected(CellPosition::label(1)));
    assert!(sel.is_selected(CellPosition::value(2)));
    assert!(!sel.is_selected(CellPosition::value(3)));
}

#[test]
fn test_current_is_independent_of_selection() {
    let mut sel = SelectionModel::default();
    sel.set_current(Some(CellPosition::value(1)));
    assert!(sel.is_current(CellPosition::value(1)));
    assert!(!sel.is_selected(CellPosition::value(1)));

    sel.select_range(CellRange::new(0, 0, LABEL_COLUMN, LABEL_COLUMN));
    assert_eq!(sel.current(), Some(CellPosition::value(1)));
}

#[test]
fn test_range_is_canonicalized() {
    let range = CellRange::new(3, 1, VALUE_COLUMN, LABEL_COLUMN);
    assert_eq!(range, CellRange::new(1, 3, LABEL_COLUMN, VALUE_COLUMN));
}

#[test]
fn test_from_positions_bounding_range() {
    let range = CellRange::from_positions([
        CellPosition::value(2),
        CellPosition::label(5),
        CellPosition::label(3),
    ])
    .unwrap();
    assert_eq!(range, CellRange::new(2, 5, LABEL_COLUMN, VALUE_COLUMN));

    assert_eq!(CellRange::from_positions(std::iter::empty()), None);
}

#[test]
fn test_adjust_for_insert_shifts_rows_below() {
    let mut sel = SelectionModel::default();
    sel.select_range(CellRange::new(2, 3, LABEL_COLUMN, VALUE_COLUMN));
    sel.set_current(Some(CellPosition::label(4)));

    sel.adjust_for_insert(2, 2);
    assert_eq!(
        sel.selected_range(),
        Some(CellRange::new(4, 5, LABEL_COLUMN, VALUE_COLUMN))
    );
    assert_eq!(sel.current(), Some(CellPosition::label(6)));

    // Insertion below leaves everything alone.
    sel.adjust_for_insert(9, 1);
    assert_eq!(sel.current(), Some(CellPosition::label(6)));
}

#[test]
fn test_adjust_for_remove_drops_and_shifts() {
    let mut sel = SelectionModel::default();
    sel.select_range(CellRange::new(4, 5, LABEL_COLUMN, VALUE_COLUMN));
    sel.set_current(Some(CellPosition::value(6)));

    // Removing rows above shifts the range down.
    assert!(sel.adjust_for_remove(&(0..2)));
    assert_eq!(
        sel.selected_range(),
        Some(CellRange::new(2, 3, LABEL_COLUMN, VALUE_COLUMN))
    );
    assert_eq!(sel.current(), Some(CellPosition::value(4)));

    // Removing a row inside the range drops the selection but only
    // shifts the current position.
    assert!(sel.adjust_for_remove(&(3..4)));
    assert_eq!(sel.selected_range(), None);
    assert_eq!(sel.current(), Some(CellPosition::value(3)));

    // Removing the current row clears it.
    assert!(sel.adjust_for_remove(&(3..4)));
    assert_eq!(sel.current(), None);

    // Nothing left to adjust.
    assert!(!sel.adjust_for_remove(&(0..1)));
}

#[test]
fn test_clear() {
    let mut sel = SelectionModel::default();
    sel.select_range(CellRange::new(0, 1, LABEL_COLUMN, VALUE_COLUMN));
    sel.set_current(Some(CellPosition::label(0)));
    sel.clear();
    assert_eq!(sel.selected_range(), None);
    assert_eq!(sel.current(), None);
}
