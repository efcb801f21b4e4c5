//! Mapping between data positions and the two screen geometries they
//! occupy: angular pie sectors and rectangular legend rows.

use glam::Vec2;

use crate::data_types::{CellPosition, TableDataSource, COLUMN_COUNT, LABEL_COLUMN, VALUE_COLUMN};
use crate::geometry::{GeometryModel, PieLayout};
use crate::utils::{polar_angle_degrees, Rect};

/// Scroll offset in pixels, as reported by the host's scroll bars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub h: i32,
    pub v: i32,
}

impl ScrollOffset {
    pub fn new(h: i32, v: i32) -> Self {
        Self { h, v }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.h as f32, self.v as f32)
    }
}

/// Angular span of one slice: `[start, start + sweep)` degrees,
/// accumulating over valid rows in row order from 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceSpan {
    pub row: usize,
    pub start: f64,
    pub sweep: f64,
}

impl SliceSpan {
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle < self.start + self.sweep
    }
}

/// Angular spans of all valid rows, in row order. Empty whenever the
/// model has no slices.
pub fn slice_spans(source: &dyn TableDataSource, model: &GeometryModel) -> Vec<SliceSpan> {
    let mut spans = Vec::with_capacity(model.valid_rows());
    if !model.has_slices() {
        return spans;
    }
    let mut start = 0.0;
    for row in 0..source.row_count() {
        let value = source.value(row).unwrap_or(0.0);
        if value > 0.0 {
            let sweep = model.slice_sweep(value);
            spans.push(SliceSpan { row, start, sweep });
            start += sweep;
        }
    }
    spans
}

/// Converts data positions to screen rectangles and screen points back
/// to data positions. Pure function of layout, geometry model, data
/// source contents and the current scroll offset.
pub struct CoordinateMapper<'a> {
    source: &'a dyn TableDataSource,
    layout: &'a PieLayout,
    model: &'a GeometryModel,
    scroll: ScrollOffset,
    viewport: Vec2,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(
        source: &'a dyn TableDataSource,
        layout: &'a PieLayout,
        model: &'a GeometryModel,
        scroll: ScrollOffset,
        viewport: Vec2,
    ) -> Self {
        Self {
            source,
            layout,
            model,
            scroll,
            viewport,
        }
    }

    /// Number of valid rows strictly before `row`; None when `row`
    /// itself has no positive value. Determines the legend slot.
    pub fn legend_rank(&self, row: usize) -> Option<usize> {
        if self.source.value(row).unwrap_or(0.0) <= 0.0 {
            return None;
        }
        let mut rank = 0;
        for r in 0..row {
            if self.source.value(r).unwrap_or(0.0) > 0.0 {
                rank += 1;
            }
        }
        Some(rank)
    }

    /// Angular span of one row's slice, None for invalid rows.
    pub fn slice_span(&self, row: usize) -> Option<SliceSpan> {
        slice_spans(self.source, self.model)
            .into_iter()
            .find(|span| span.row == row)
    }

    /// Rectangle occupied by a position in content coordinates.
    ///
    /// The pie is drawn as a whole, so value cells map to the full
    /// viewport rectangle; slice-level geometry lives in the region
    /// calculator.
    pub fn item_rect(&self, pos: CellPosition) -> Option<Rect> {
        if pos.row >= self.source.row_count() || pos.column >= COLUMN_COUNT {
            return None;
        }
        match pos.column {
            LABEL_COLUMN => {
                let rank = self.legend_rank(pos.row)?;
                Some(self.layout.legend_rect(rank))
            }
            VALUE_COLUMN => {
                self.legend_rank(pos.row)?;
                Some(Rect::from_size(self.viewport))
            }
            _ => None,
        }
    }

    /// `item_rect` in viewport coordinates. The pie's whole-viewport
    /// rectangle is already a viewport rectangle and is not shifted.
    pub fn visual_rect(&self, pos: CellPosition) -> Option<Rect> {
        let rect = self.item_rect(pos)?;
        if pos.column == LABEL_COLUMN {
            Some(rect.translated(-self.scroll.as_vec2()))
        } else {
            Some(rect)
        }
    }

    /// Data position under a viewport point, or None for misses
    /// (outside the pie radius, exactly at the center, past the last
    /// legend row, or an empty model).
    pub fn hit_test(&self, point: Vec2) -> Option<CellPosition> {
        if !self.model.has_slices() {
            return None;
        }
        let content = point + self.scroll.as_vec2();
        let total = self.layout.diameter;

        if content.x < total {
            // Offset from the visual center, y flipped so "above
            // center" is a positive angle contribution.
            let cx = (content.x - total / 2.0) as f64;
            let cy = (total / 2.0 - content.y) as f64;
            let d = (cx * cx + cy * cy).sqrt();
            if d == 0.0 || d > self.layout.pie_radius() as f64 {
                return None;
            }
            let angle = polar_angle_degrees(cx, cy);
            slice_spans(self.source, self.model)
                .into_iter()
                .find(|span| span.contains(angle))
                .map(|span| CellPosition::value(span.row))
        } else {
            let y = content.y - self.layout.margin;
            if y < 0.0 {
                return None;
            }
            let list_item = (y / self.layout.row_height).floor() as usize;
            let mut rank = 0;
            for row in 0..self.source.row_count() {
                if self.source.value(row).unwrap_or(0.0) > 0.0 {
                    if rank == list_item {
                        return Some(CellPosition::label(row));
                    }
                    rank += 1;
                }
            }
            None
        }
    }
}
