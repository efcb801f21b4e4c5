//! The concrete view type: scroll state, rubber-band selection, and
//! the abstract-view contract the host framework drives.

use std::ops::Range;

use glam::Vec2;
use tracing::{debug, info};

use crate::data_types::{
    CellPosition, SelectionModel, SharedSelection, TableDataSource, LABEL_COLUMN,
};
use crate::geometry::{GeometryModel, PieLayout};
use crate::region::{SelectionRegionCalculator, Shape};
use crate::rendering::{paint_view, CellDelegate, RenderSurface};
use crate::theme::PieTheme;
use crate::transform::{CoordinateMapper, ScrollOffset};
use crate::utils::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
struct RubberBand {
    origin: Vec2,
    rect: Rect,
}

/// Pie chart view over a shared data source and a shared selection.
///
/// The view owns only derived state (geometry totals, scroll offsets,
/// an in-progress rubber band); the data source and the selection are
/// owned elsewhere and passed in by reference. All methods run on the
/// host's single event thread.
pub struct PieView {
    layout: PieLayout,
    theme: PieTheme,
    model: GeometryModel,
    scroll: ScrollOffset,
    viewport: Vec2,
    selection: SharedSelection,
    rubber_band: Option<RubberBand>,
    repaint_requested: bool,
}

impl PieView {
    pub fn new(selection: SharedSelection) -> Self {
        info!("pie view created");
        Self {
            layout: PieLayout::default(),
            theme: PieTheme::default(),
            model: GeometryModel::default(),
            scroll: ScrollOffset::default(),
            viewport: Vec2::ZERO,
            selection,
            rubber_band: None,
            repaint_requested: false,
        }
    }

    pub fn with_layout(mut self, layout: PieLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_theme(mut self, theme: PieTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn layout(&self) -> &PieLayout {
        &self.layout
    }

    pub fn geometry(&self) -> &GeometryModel {
        &self.model
    }

    pub fn selection(&self) -> &SharedSelection {
        &self.selection
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// In-progress rubber band in viewport coordinates, present only
    /// during an active drag.
    pub fn rubber_band(&self) -> Option<Rect> {
        self.rubber_band.map(|b| b.rect)
    }

    /// Consumes the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn mapper<'a>(&'a self, source: &'a dyn TableDataSource) -> CoordinateMapper<'a> {
        CoordinateMapper::new(source, &self.layout, &self.model, self.scroll, self.viewport)
    }

    // ---- data source notifications -------------------------------

    /// Generic change: full recompute of the geometry totals.
    pub fn data_changed(&mut self, source: &dyn TableDataSource, range: Range<usize>) {
        debug!(?range, "data changed");
        self.model.recompute(source);
        self.repaint_requested = true;
    }

    pub fn rows_inserted(&mut self, source: &dyn TableDataSource, range: Range<usize>) {
        debug!(?range, "rows inserted");
        self.model.apply_insert(source, range.clone());
        self.selection
            .write()
            .adjust_for_insert(range.start, range.len());
        self.clamp_scroll();
        self.repaint_requested = true;
    }

    /// Called while the rows are still readable; drops any selection
    /// or current position referencing them.
    pub fn rows_about_to_be_removed(&mut self, source: &dyn TableDataSource, range: Range<usize>) {
        debug!(?range, "rows about to be removed");
        self.model.apply_remove(source, range.clone());
        self.selection.write().adjust_for_remove(&range);
        self.clamp_scroll();
        self.repaint_requested = true;
    }

    // ---- scrolling -----------------------------------------------

    /// Scroll range per axis: `max(0, content - viewport)`.
    pub fn scroll_range(&self) -> (i32, i32) {
        let content = self.layout.content_size();
        (
            (content.x - self.viewport.x).max(0.0) as i32,
            (content.y - self.viewport.y).max(0.0) as i32,
        )
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.clamp_scroll();
        self.repaint_requested = true;
    }

    pub fn set_scroll(&mut self, h: i32, v: i32) {
        self.scroll = ScrollOffset::new(h, v);
        self.clamp_scroll();
        self.repaint_requested = true;
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.set_scroll(self.scroll.h + dx, self.scroll.v + dy);
    }

    fn clamp_scroll(&mut self) {
        let (max_h, max_v) = self.scroll_range();
        self.scroll.h = self.scroll.h.clamp(0, max_h);
        self.scroll.v = self.scroll.v.clamp(0, max_v);
    }

    /// Adjusts the offsets just enough to make `pos` visible.
    pub fn scroll_to(&mut self, source: &dyn TableDataSource, pos: CellPosition) {
        let area = Rect::from_size(self.viewport);
        let Some(rect) = self.mapper(source).visual_rect(pos) else {
            return;
        };

        if rect.x < area.x {
            self.scroll.h += (rect.x - area.x) as i32;
        } else if rect.right() > area.right() {
            self.scroll.h += (rect.right() - area.right()).min(rect.x - area.x) as i32;
        }

        if rect.y < area.y {
            self.scroll.v += (rect.y - area.y) as i32;
        } else if rect.bottom() > area.bottom() {
            self.scroll.v += (rect.bottom() - area.bottom()).min(rect.y - area.y) as i32;
        }

        self.clamp_scroll();
        self.repaint_requested = true;
    }

    // ---- abstract view contract ----------------------------------

    pub fn hit_test(&self, source: &dyn TableDataSource, point: Vec2) -> Option<CellPosition> {
        self.mapper(source).hit_test(point)
    }

    pub fn visual_rect(&self, source: &dyn TableDataSource, pos: CellPosition) -> Option<Rect> {
        self.mapper(source).visual_rect(pos)
    }

    /// Viewport-space shapes of the currently selected cells.
    pub fn visual_region(&self, source: &dyn TableDataSource) -> Vec<Shape> {
        let selection = self.selection.read().clone();
        SelectionRegionCalculator::new(source, &self.layout, &self.model)
            .region_for_selection(&selection, self.scroll)
    }

    /// Moves the shared current position one row up or down, clamped
    /// at both ends; the column is kept. Returns the new position.
    pub fn move_cursor(
        &mut self,
        source: &dyn TableDataSource,
        direction: CursorDirection,
    ) -> Option<CellPosition> {
        let rows = source.row_count();
        if rows == 0 {
            return None;
        }
        let mut selection = self.selection.write();
        // Without a current position the first move lands on row 0.
        let next = match selection.current() {
            None => CellPosition::new(0, LABEL_COLUMN),
            Some(current) => match direction {
                CursorDirection::Up | CursorDirection::Left => {
                    CellPosition::new(current.row.saturating_sub(1), current.column)
                }
                CursorDirection::Down | CursorDirection::Right => {
                    CellPosition::new((current.row + 1).min(rows - 1), current.column)
                }
            },
        };
        selection.set_current(Some(next));
        drop(selection);
        self.repaint_requested = true;
        Some(next)
    }

    /// Editing is permitted only on label cells; value cells and pie
    /// geometry are never editable.
    pub fn begin_edit(&self, pos: CellPosition) -> bool {
        pos.column == LABEL_COLUMN
    }

    // ---- pointer input -------------------------------------------

    pub fn mouse_down(&mut self, source: &dyn TableDataSource, point: Vec2) {
        let hit = self.hit_test(source, point);
        self.selection.write().set_current(hit);
        self.rubber_band = Some(RubberBand {
            origin: point,
            rect: Rect::from_corners(point, point),
        });
        self.repaint_requested = true;
    }

    pub fn mouse_moved(&mut self, point: Vec2) {
        if let Some(band) = &mut self.rubber_band {
            band.rect = Rect::from_corners(band.origin, point);
            self.repaint_requested = true;
        }
    }

    /// Finalizes the drag: the band is translated to content
    /// coordinates and the shared selection replaced with the minimal
    /// cell range covering every intersected shape.
    pub fn mouse_up(&mut self, source: &dyn TableDataSource, _point: Vec2) {
        let Some(band) = self.rubber_band.take() else {
            return;
        };
        let content_rect = band.rect.translated(self.scroll.as_vec2());
        let calculator = SelectionRegionCalculator::new(source, &self.layout, &self.model);
        if let Some(range) = calculator.range_for_rect(content_rect) {
            debug!(?range, "rubber band selection");
            self.selection.write().select_range(range);
        }
        self.repaint_requested = true;
    }

    // ---- painting ------------------------------------------------

    pub fn paint(
        &self,
        surface: &mut dyn RenderSurface,
        source: &dyn TableDataSource,
        delegate: &dyn CellDelegate,
    ) {
        let selection: SelectionModel = self.selection.read().clone();
        paint_view(
            surface,
            source,
            &self.layout,
            &self.model,
            self.scroll,
            &selection,
            self.viewport,
            &self.theme,
            delegate,
            self.rubber_band(),
        );
    }
}
