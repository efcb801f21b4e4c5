use std::ops::Range;

/// Column holding the slice label and its color decoration.
pub const LABEL_COLUMN: usize = 0;
/// Column holding the numeric slice value.
pub const VALUE_COLUMN: usize = 1;
pub const COLUMN_COUNT: usize = 2;

/// A (row, column) position in the tabular data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

impl CellPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn label(row: usize) -> Self {
        Self::new(row, LABEL_COLUMN)
    }

    pub fn value(row: usize) -> Self {
        Self::new(row, VALUE_COLUMN)
    }
}

/// Inclusive rectangular range of cells, always canonical
/// (`top <= bottom`, `left <= right`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl CellRange {
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Self {
            top: top.min(bottom),
            bottom: top.max(bottom),
            left: left.min(right),
            right: left.max(right),
        }
    }

    pub fn single(pos: CellPosition) -> Self {
        Self::new(pos.row, pos.row, pos.column, pos.column)
    }

    /// Minimal bounding range over a set of positions.
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = CellPosition>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let mut range = Self::single(first);
        for pos in iter {
            range.top = range.top.min(pos.row);
            range.bottom = range.bottom.max(pos.row);
            range.left = range.left.min(pos.column);
            range.right = range.right.max(pos.column);
        }
        Some(range)
    }

    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row >= self.top
            && pos.row <= self.bottom
            && pos.column >= self.left
            && pos.column <= self.right
    }

    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.top..=self.bottom
    }

    pub fn columns(&self) -> std::ops::RangeInclusive<usize> {
        self.left..=self.right
    }

    /// True when any selected row falls inside the half-open row range.
    pub fn intersects_rows(&self, rows: &Range<usize>) -> bool {
        self.top < rows.end && rows.start <= self.bottom
    }
}
