//! Pie chart item view over a two-column tabular data source.
//!
//! The crate is framework-independent: hosts implement
//! [`rendering::RenderSurface`], forward pointer input and data-source
//! notifications to a [`view_controller::PieView`], and share one
//! [`data_types::SelectionModel`] between any number of views.

pub mod data_types;
pub mod geometry;
pub mod region;
pub mod rendering;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use data_types::{
    shared_selection, CellPosition, CellRange, Color, RowChange, SelectionModel, SharedSelection,
    SliceRow, TableDataSource, VecTableSource, COLUMN_COUNT, LABEL_COLUMN, VALUE_COLUMN,
};
pub use geometry::{GeometryModel, PieLayout};
pub use region::{sector_polygon, SelectionRegionCalculator, Shape};
pub use rendering::{
    paint_view, Brush, CellDelegate, CellStyle, CommandRecorder, DrawCommand, FillPattern,
    RenderSurface, SwatchCellDelegate,
};
pub use theme::PieTheme;
pub use transform::{slice_spans, CoordinateMapper, ScrollOffset, SliceSpan};
pub use utils::Rect;
pub use view_controller::{CursorDirection, PieView};
