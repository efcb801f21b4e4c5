use std::ops::Range;
use std::sync::Arc;

use parking_lot::RwLock;

use super::position::{CellPosition, CellRange};

/// Selection state shared by every view attached to the same data
/// source: one rectangular selected range plus a distinguished
/// "current" position.
///
/// Mutation is expected to happen on the single thread driving the
/// views' event turns; the lock exists so multiple views can hold the
/// same instance, not to support concurrent writers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionModel {
    range: Option<CellRange>,
    current: Option<CellPosition>,
}

impl SelectionModel {
    pub fn is_selected(&self, pos: CellPosition) -> bool {
        self.range.is_some_and(|r| r.contains(pos))
    }

    pub fn selected_range(&self) -> Option<CellRange> {
        self.range
    }

    pub fn current(&self) -> Option<CellPosition> {
        self.current
    }

    pub fn is_current(&self, pos: CellPosition) -> bool {
        self.current == Some(pos)
    }

    pub fn set_current(&mut self, pos: Option<CellPosition>) {
        self.current = pos;
    }

    /// Replaces the selection with exactly `range`.
    pub fn select_range(&mut self, range: CellRange) {
        self.range = Some(range);
    }

    pub fn clear(&mut self) {
        self.range = None;
        self.current = None;
    }

    /// Shifts positions at or below the insertion point so the
    /// selection keeps tracking the same rows.
    pub fn adjust_for_insert(&mut self, at: usize, count: usize) {
        if let Some(range) = &mut self.range {
            if range.top >= at {
                range.top += count;
            }
            if range.bottom >= at {
                range.bottom += count;
            }
        }
        if let Some(current) = &mut self.current {
            if current.row >= at {
                current.row += count;
            }
        }
    }

    /// Drops positions referencing removed rows and shifts the ones
    /// below the removed range. Returns true when anything changed.
    pub fn adjust_for_remove(&mut self, removed: &Range<usize>) -> bool {
        let count = removed.len();
        let mut changed = false;

        if let Some(range) = self.range {
            if range.intersects_rows(removed) {
                self.range = None;
                changed = true;
            } else if range.top >= removed.end {
                self.range = Some(CellRange::new(
                    range.top - count,
                    range.bottom - count,
                    range.left,
                    range.right,
                ));
                changed = true;
            }
        }

        if let Some(current) = self.current {
            if removed.contains(&current.row) {
                self.current = None;
                changed = true;
            } else if current.row >= removed.end {
                self.current = Some(CellPosition::new(current.row - count, current.column));
                changed = true;
            }
        }

        changed
    }
}

/// Handle to a selection shared between views.
pub type SharedSelection = Arc<RwLock<SelectionModel>>;

pub fn shared_selection() -> SharedSelection {
    Arc::new(RwLock::new(SelectionModel::default()))
}
