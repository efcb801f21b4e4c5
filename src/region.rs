//! Precise per-cell shapes and the region-based rubber-band selection
//! algorithm built on top of them.

use glam::Vec2;

use crate::data_types::{
    CellPosition, CellRange, SelectionModel, TableDataSource, COLUMN_COUNT, LABEL_COLUMN,
    VALUE_COLUMN,
};
use crate::geometry::{GeometryModel, PieLayout};
use crate::transform::{slice_spans, ScrollOffset};
use crate::utils::Rect;

/// Maximum arc step when tessellating a sector, in degrees.
const ARC_STEP_DEGREES: f64 = 4.0;

/// Exact shape of one cell: a legend rectangle or a tessellated
/// circular-sector polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Sector(Vec<Vec2>),
}

impl Shape {
    pub fn intersects(&self, rect: &Rect) -> bool {
        match self {
            Shape::Rect(r) => r.intersects(rect),
            Shape::Sector(poly) => polygon_intersects_rect(poly, rect),
        }
    }

    pub fn translated(&self, delta: Vec2) -> Shape {
        match self {
            Shape::Rect(r) => Shape::Rect(r.translated(delta)),
            Shape::Sector(poly) => Shape::Sector(poly.iter().map(|p| *p + delta).collect()),
        }
    }
}

/// Closed sector polygon in content coordinates: pie center, then arc
/// vertices from `start` through `start + sweep` at the outer radius.
/// Screen y grows downward, hence the flipped sine.
pub fn sector_polygon(layout: &PieLayout, start: f64, sweep: f64) -> Vec<Vec2> {
    let center = layout.center();
    let radius = layout.pie_radius();
    let steps = ((sweep / ARC_STEP_DEGREES).ceil() as usize).max(8);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = (start + sweep * i as f64 / steps as f64).to_radians();
        points.push(Vec2::new(
            center.x + radius * angle.cos() as f32,
            center.y - radius * angle.sin() as f32,
        ));
    }
    points
}

/// Computes cell shapes and inverts selection rectangles back to
/// discrete cell ranges. All input and output geometry is in content
/// coordinates unless stated otherwise.
pub struct SelectionRegionCalculator<'a> {
    source: &'a dyn TableDataSource,
    layout: &'a PieLayout,
    model: &'a GeometryModel,
}

impl<'a> SelectionRegionCalculator<'a> {
    pub fn new(
        source: &'a dyn TableDataSource,
        layout: &'a PieLayout,
        model: &'a GeometryModel,
    ) -> Self {
        Self {
            source,
            layout,
            model,
        }
    }

    /// Precise shape of one cell, None for invalid rows and positions
    /// outside the grid.
    pub fn item_shape(&self, pos: CellPosition) -> Option<Shape> {
        if pos.row >= self.source.row_count() || pos.column >= COLUMN_COUNT {
            return None;
        }
        if self.source.value(pos.row).unwrap_or(0.0) <= 0.0 {
            return None;
        }
        match pos.column {
            LABEL_COLUMN => {
                let mut rank = 0;
                for r in 0..pos.row {
                    if self.source.value(r).unwrap_or(0.0) > 0.0 {
                        rank += 1;
                    }
                }
                Some(Shape::Rect(self.layout.legend_rect(rank)))
            }
            VALUE_COLUMN => slice_spans(self.source, self.model)
                .into_iter()
                .find(|span| span.row == pos.row)
                .map(|span| Shape::Sector(sector_polygon(self.layout, span.start, span.sweep))),
            _ => None,
        }
    }

    /// Shapes of every cell in the selected range, translated to
    /// viewport coordinates for painting.
    pub fn region_for_selection(
        &self,
        selection: &SelectionModel,
        scroll: ScrollOffset,
    ) -> Vec<Shape> {
        let Some(range) = selection.selected_range() else {
            return Vec::new();
        };
        let delta = -scroll.as_vec2();
        let mut shapes = Vec::new();
        for row in range.rows() {
            for column in range.columns() {
                if let Some(shape) = self.item_shape(CellPosition::new(row, column)) {
                    shapes.push(shape.translated(delta));
                }
            }
        }
        shapes
    }

    /// Minimal rectangular cell range covering every cell whose shape
    /// intersects `content_rect`; None when nothing does.
    ///
    /// The collapse from the exact intersected set to its bounding
    /// rectangle is deliberate: a partial sweep across the pie still
    /// yields a full row/column range.
    pub fn range_for_rect(&self, content_rect: Rect) -> Option<CellRange> {
        let mut hits = Vec::new();
        for row in 0..self.source.row_count() {
            for column in 0..COLUMN_COUNT {
                let pos = CellPosition::new(row, column);
                if let Some(shape) = self.item_shape(pos) {
                    if shape.intersects(&content_rect) {
                        hits.push(pos);
                    }
                }
            }
        }
        CellRange::from_positions(hits)
    }
}

fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

/// Even-odd ray cast.
fn point_in_polygon(p: Vec2, poly: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn polygon_intersects_rect(poly: &[Vec2], rect: &Rect) -> bool {
    if poly.is_empty() {
        return false;
    }
    if poly.iter().any(|p| rect.contains(*p)) {
        return true;
    }
    let corners = rect.corners();
    if corners.iter().any(|c| point_in_polygon(*c, poly)) {
        return true;
    }
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        for j in 0..4 {
            if segments_intersect(a, b, corners[j], corners[(j + 1) % 4]) {
                return true;
            }
        }
    }
    false
}
