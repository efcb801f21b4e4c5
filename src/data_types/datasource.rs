use std::ops::Range;

use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Change notification emitted by a tabular data source.
///
/// `AboutToBeRemoved` is delivered while the rows are still readable so
/// that views can subtract their contribution without a full rescan;
/// the owner removes the rows only after every view has seen the
/// notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowChange {
    Changed(Range<usize>),
    Inserted(Range<usize>),
    AboutToBeRemoved(Range<usize>),
}

/// Read/write access to a two-column table of pie slices.
///
/// Column 0 carries the label text plus a color decoration, column 1 a
/// non-negative value. The view never owns an implementation; it is
/// handed one by reference per operation.
pub trait TableDataSource {
    fn row_count(&self) -> usize;

    fn label(&self, row: usize) -> Option<&str>;

    fn value(&self, row: usize) -> Option<f64>;

    fn color(&self, row: usize) -> Option<Color>;

    fn set_label(&mut self, row: usize, label: &str) -> Result<RowChange>;

    fn set_value(&mut self, row: usize, value: f64) -> Result<RowChange>;

    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

/// One row of the table: a labeled, colored slice value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliceRow {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl SliceRow {
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Default `Vec`-backed data source.
///
/// Mutators return the `RowChange` the owner forwards to every attached
/// view; for removal, `remove_notice` produces the notification first
/// and `remove_rows` performs the removal afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecTableSource {
    rows: Vec<SliceRow>,
}

impl VecTableSource {
    pub fn new(rows: Vec<SliceRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SliceRow] {
        &self.rows
    }

    pub fn insert_row(&mut self, at: usize, row: SliceRow) -> Result<RowChange> {
        self.insert_rows(at, vec![row])
    }

    pub fn insert_rows(&mut self, at: usize, rows: Vec<SliceRow>) -> Result<RowChange> {
        if at > self.rows.len() {
            bail!(
                "insert position {at} out of range for {} rows",
                self.rows.len()
            );
        }
        let count = rows.len();
        self.rows.splice(at..at, rows);
        Ok(RowChange::Inserted(at..at + count))
    }

    /// Validates a removal and returns the notification to forward
    /// while the rows are still present.
    pub fn remove_notice(&self, range: Range<usize>) -> Result<RowChange> {
        if range.start > range.end || range.end > self.rows.len() {
            bail!(
                "removal range {range:?} out of range for {} rows",
                self.rows.len()
            );
        }
        Ok(RowChange::AboutToBeRemoved(range))
    }

    pub fn remove_rows(&mut self, range: Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.rows.len() {
            bail!(
                "removal range {range:?} out of range for {} rows",
                self.rows.len()
            );
        }
        self.rows.drain(range);
        Ok(())
    }

    pub fn set_rows(&mut self, rows: Vec<SliceRow>) -> RowChange {
        self.rows = rows;
        RowChange::Changed(0..self.rows.len())
    }
}

impl TableDataSource for VecTableSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn label(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.label.as_str())
    }

    fn value(&self, row: usize) -> Option<f64> {
        self.rows.get(row).map(|r| r.value)
    }

    fn color(&self, row: usize) -> Option<Color> {
        self.rows.get(row).map(|r| r.color)
    }

    fn set_label(&mut self, row: usize, label: &str) -> Result<RowChange> {
        let count = self.rows.len();
        let slot = self
            .rows
            .get_mut(row)
            .ok_or_else(|| eyre::eyre!("row {row} out of range for {count} rows"))?;
        slot.label = label.to_owned();
        Ok(RowChange::Changed(row..row + 1))
    }

    fn set_value(&mut self, row: usize, value: f64) -> Result<RowChange> {
        let count = self.rows.len();
        let slot = self
            .rows
            .get_mut(row)
            .ok_or_else(|| eyre::eyre!("row {row} out of range for {count} rows"))?;
        slot.value = value;
        Ok(RowChange::Changed(row..row + 1))
    }
}
