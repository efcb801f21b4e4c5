use std::ops::Range;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::data_types::TableDataSource;
use crate::utils::Rect;

/// Fixed layout constants of one view instance.
///
/// `diameter` is the side of the margin-inclusive bounding square; the
/// pie itself is inset by `margin` on every side. `row_height` is the
/// host font's line height and spaces the legend entries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub margin: f32,
    pub diameter: f32,
    pub row_height: f32,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            margin: 10.0,
            diameter: 300.0,
            row_height: 20.0,
        }
    }
}

impl PieLayout {
    /// Diameter of the drawn pie, margin excluded.
    pub fn pie_size(&self) -> f32 {
        self.diameter - 2.0 * self.margin
    }

    pub fn pie_radius(&self) -> f32 {
        self.pie_size() / 2.0
    }

    /// Visual center of the pie in content coordinates. This is the
    /// center of the bounding square, not of the inset pie rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.diameter / 2.0)
    }

    /// Bounding rectangle of the drawn pie in content coordinates.
    pub fn pie_rect(&self) -> Rect {
        Rect::new(self.margin, self.margin, self.pie_size(), self.pie_size())
    }

    /// Full drawable area: pie square plus an equally wide legend.
    pub fn content_size(&self) -> Vec2 {
        Vec2::new(2.0 * self.diameter, self.diameter)
    }

    /// Legend rectangle for the valid row at `rank`.
    pub fn legend_rect(&self, rank: usize) -> Rect {
        Rect::new(
            self.diameter,
            self.margin + rank as f32 * self.row_height,
            self.diameter - self.margin,
            self.row_height,
        )
    }
}

/// Totals derived from the data source: how many rows carry a positive
/// value and what those values sum to.
///
/// Rebuilt (or incrementally patched) on every data-source notification
/// before any render or hit test runs, so angle math never observes a
/// half-updated state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryModel {
    valid_rows: usize,
    total_value: f64,
}

impl GeometryModel {
    pub fn from_source(source: &dyn TableDataSource) -> Self {
        let mut model = Self::default();
        model.recompute(source);
        model
    }

    pub fn valid_rows(&self) -> usize {
        self.valid_rows
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// True when at least one slice exists; every angle computation
    /// short-circuits through this instead of dividing by zero.
    pub fn has_slices(&self) -> bool {
        self.valid_rows > 0 && self.total_value > 0.0
    }

    /// Full rescan of the source.
    pub fn recompute(&mut self, source: &dyn TableDataSource) {
        self.valid_rows = 0;
        self.total_value = 0.0;
        for row in 0..source.row_count() {
            let value = source.value(row).unwrap_or(0.0);
            if value > 0.0 {
                self.valid_rows += 1;
                self.total_value += value;
            }
        }
    }

    /// Adds the contribution of freshly inserted rows. Must match what
    /// a full rescan would produce.
    pub fn apply_insert(&mut self, source: &dyn TableDataSource, range: Range<usize>) {
        for row in range.start..range.end.min(source.row_count()) {
            let value = source.value(row).unwrap_or(0.0);
            if value > 0.0 {
                self.valid_rows += 1;
                self.total_value += value;
            }
        }
    }

    /// Subtracts the contribution of rows about to be removed; the
    /// rows must still be readable when this runs.
    pub fn apply_remove(&mut self, source: &dyn TableDataSource, range: Range<usize>) {
        for row in range.start..range.end.min(source.row_count()) {
            let value = source.value(row).unwrap_or(0.0);
            if value > 0.0 {
                self.valid_rows = self.valid_rows.saturating_sub(1);
                self.total_value -= value;
            }
        }
        // Float drift must not leave a phantom total behind.
        if self.valid_rows == 0 {
            self.total_value = 0.0;
        }
    }

    /// Angular sweep in degrees for one slice value.
    pub fn slice_sweep(&self, value: f64) -> f64 {
        if value > 0.0 && self.has_slices() {
            360.0 * value / self.total_value
        } else {
            0.0
        }
    }
}
