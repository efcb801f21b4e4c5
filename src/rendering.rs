//! Painting of the pie and its legend against an abstract 2-D surface.

use glam::Vec2;

use crate::data_types::{CellPosition, Color, SelectionModel, TableDataSource};
use crate::geometry::{GeometryModel, PieLayout};
use crate::theme::PieTheme;
use crate::transform::{slice_spans, CoordinateMapper, ScrollOffset};
use crate::utils::Rect;

/// Fill style of a pie sector. The hatches distinguish selection
/// states; "current" uses the denser hatch and wins over "selected".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillPattern {
    Solid,
    SelectedHatch,
    CurrentHatch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub pattern: FillPattern,
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            pattern: FillPattern::Solid,
        }
    }
}

/// The 2-D drawing surface the view paints against. The host owns the
/// surface and sizes it to the viewport; angles follow the same math
/// convention as hit testing (degrees, counter-clockwise from +x).
pub trait RenderSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color);

    fn stroke_ellipse(&mut self, rect: Rect, color: Color);

    /// Fills the circular sector of the ellipse inscribed in `rect`
    /// spanning `[start, start + sweep)` degrees.
    fn fill_sector(&mut self, rect: Rect, start: f64, sweep: f64, brush: Brush);

    fn draw_text(&mut self, origin: Vec2, text: &str, color: Color, size: f32);
}

/// Selection flags passed to the per-row legend delegate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub selected: bool,
    pub current: bool,
    pub focused: bool,
}

/// Per-row legend painting hook, mirroring the delegated cell paint of
/// the host framework's item views.
pub trait CellDelegate {
    fn paint_cell(
        &self,
        surface: &mut dyn RenderSurface,
        rect: Rect,
        style: &CellStyle,
        label: &str,
        color: Color,
        theme: &PieTheme,
    );
}

/// Default delegate: color swatch, label text, selection-tinted
/// background, focus outline.
pub struct SwatchCellDelegate;

impl CellDelegate for SwatchCellDelegate {
    fn paint_cell(
        &self,
        surface: &mut dyn RenderSurface,
        rect: Rect,
        style: &CellStyle,
        label: &str,
        color: Color,
        theme: &PieTheme,
    ) {
        if style.selected {
            surface.fill_rect(rect, theme.selection_tint);
        }
        let inset = rect.height * 0.2;
        let swatch = Rect::new(
            rect.x + inset,
            rect.y + inset,
            rect.height - 2.0 * inset,
            rect.height - 2.0 * inset,
        );
        surface.fill_rect(swatch, color);
        surface.draw_text(
            Vec2::new(swatch.right() + inset, rect.y + inset),
            label,
            theme.text,
            theme.text_size,
        );
        if style.focused {
            surface.stroke_rect(rect, theme.foreground);
        }
    }
}

/// Paints one view state in deterministic order: background, pie
/// outline, sectors in row order, legend entries for valid rows only
/// (dense-packed by rank), then the in-progress rubber band.
#[allow(clippy::too_many_arguments)]
pub fn paint_view(
    surface: &mut dyn RenderSurface,
    source: &dyn TableDataSource,
    layout: &PieLayout,
    model: &GeometryModel,
    scroll: ScrollOffset,
    selection: &SelectionModel,
    viewport: Vec2,
    theme: &PieTheme,
    delegate: &dyn CellDelegate,
    rubber_band: Option<Rect>,
) {
    surface.fill_rect(Rect::from_size(viewport), theme.background);

    if model.has_slices() {
        let pie_rect = layout.pie_rect().translated(-scroll.as_vec2());
        surface.stroke_ellipse(pie_rect, theme.foreground);

        for span in slice_spans(source, model) {
            let color = source.color(span.row).unwrap_or(theme.foreground);
            let value_pos = CellPosition::value(span.row);
            let pattern = if selection.is_current(value_pos) {
                FillPattern::CurrentHatch
            } else if selection.is_selected(value_pos) {
                FillPattern::SelectedHatch
            } else {
                FillPattern::Solid
            };
            surface.fill_sector(pie_rect, span.start, span.sweep, Brush { color, pattern });
        }

        let mapper = CoordinateMapper::new(source, layout, model, scroll, viewport);
        for span in slice_spans(source, model) {
            let label_pos = CellPosition::label(span.row);
            let Some(rect) = mapper.visual_rect(label_pos) else {
                continue;
            };
            let current = selection.is_current(label_pos);
            let style = CellStyle {
                selected: selection.is_selected(label_pos),
                current,
                focused: current,
            };
            let label = source.label(span.row).unwrap_or_default();
            let color = source.color(span.row).unwrap_or(theme.foreground);
            delegate.paint_cell(surface, rect, &style, label, color, theme);
        }
    }

    if let Some(band) = rubber_band {
        surface.fill_rect(band, theme.rubber_band_fill);
        surface.stroke_rect(band, theme.rubber_band_border);
    }
}

/// One recorded primitive draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
    },
    StrokeEllipse {
        rect: Rect,
        color: Color,
    },
    FillSector {
        rect: Rect,
        start: f64,
        sweep: f64,
        brush: Brush,
    },
    Text {
        origin: Vec2,
        text: String,
        color: Color,
        size: f32,
    },
}

/// Surface that records draw calls instead of rasterizing, for tests
/// and host-side snapshotting.
#[derive(Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sectors(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillSector { .. }))
            .collect()
    }
}

impl RenderSurface for CommandRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn stroke_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeEllipse { rect, color });
    }

    fn fill_sector(&mut self, rect: Rect, start: f64, sweep: f64, brush: Brush) {
        self.commands.push(DrawCommand::FillSector {
            rect,
            start,
            sweep,
            brush,
        });
    }

    fn draw_text(&mut self, origin: Vec2, text: &str, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_owned(),
            color,
            size,
        });
    }
}
