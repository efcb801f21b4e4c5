use glam::Vec2;
use pie_view::{
    slice_spans, CellPosition, Color, CoordinateMapper, GeometryModel, PieLayout, ScrollOffset,
    SliceRow, VecTableSource, LABEL_COLUMN, VALUE_COLUMN,
};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn abc_source() -> VecTableSource {
    VecTableSource::new(vec![
        SliceRow::new("A", 10.0, Color::RED),
        SliceRow::new("B", 20.0, Color::GREEN),
        SliceRow::new("C", 30.0, Color::BLUE),
    ])
}

/// Viewport point at polar (angle degrees, distance) from the pie's
/// visual center, math convention with screen y flipped.
fn point_at(layout: &PieLayout, angle: f64, distance: f64) -> Vec2 {
    let center = layout.center();
    let rad = angle.to_radians();
    Vec2::new(
        center.x + (distance * rad.cos()) as f32,
        center.y - (distance * rad.sin()) as f32,
    )
}

#[test]
fn test_slice_spans_accumulate_in_row_order() {
    let source = abc_source();
    let model = GeometryModel::from_source(&source);
    let spans = slice_spans(&source, &model);

    assert_eq!(spans.len(), 3);
    assert_eq!((spans[0].row, spans[0].start, spans[0].sweep), (0, 0.0, 60.0));
    assert_eq!((spans[1].row, spans[1].start, spans[1].sweep), (1, 60.0, 120.0));
    assert_eq!((spans[2].row, spans[2].start, spans[2].sweep), (2, 180.0, 180.0));

    let total: f64 = spans.iter().map(|s| s.sweep).sum();
    assert!((total - 360.0).abs() < 1e-9);
}

#[test]
fn test_slice_spans_skip_invalid_rows() {
    let mut rows = abc_source().rows().to_vec();
    rows.insert(1, SliceRow::new("skip", 0.0, Color::BLACK));
    let source = VecTableSource::new(rows);
    let model = GeometryModel::from_source(&source);
    let spans = slice_spans(&source, &model);

    assert_eq!(spans.iter().map(|s| s.row).collect::<Vec<_>>(), [0, 2, 3]);
}

#[test]
fn test_hit_test_maps_each_sector() {
    let source = abc_source();
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let mapper = CoordinateMapper::new(&source, &layout, &model, ScrollOffset::default(), VIEWPORT);

    // A:[0,60), B:[60,180), C:[180,360)
    assert_eq!(
        mapper.hit_test(point_at(&layout, 30.0, 100.0)),
        Some(CellPosition::value(0))
    );
    assert_eq!(
        mapper.hit_test(point_at(&layout, 90.0, 100.0)),
        Some(CellPosition::value(1))
    );
    assert_eq!(
        mapper.hit_test(point_at(&layout, 270.0, 100.0)),
        Some(CellPosition::value(2))
    );
}

#[test]
fn test_hit_test_misses_outside_radius_and_at_center() {
    let source = abc_source();
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let mapper = CoordinateMapper::new(&source, &layout, &model, ScrollOffset::default(), VIEWPORT);

    // Beyond the pie radius but still left of the legend.
    assert_eq!(mapper.hit_test(point_at(&layout, 45.0, 145.0)), None);
    // Exactly at the center.
    assert_eq!(mapper.hit_test(layout.center()), None);
}

#[test]
fn test_hit_test_legend_rows() {
    let source = abc_source();
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let mapper = CoordinateMapper::new(&source, &layout, &model, ScrollOffset::default(), VIEWPORT);

    // Legend rows start at x = diameter, y = margin, one row_height each.
    assert_eq!(
        mapper.hit_test(Vec2::new(320.0, 15.0)),
        Some(CellPosition::label(0))
    );
    assert_eq!(
        mapper.hit_test(Vec2::new(320.0, 35.0)),
        Some(CellPosition::label(1))
    );
    assert_eq!(
        mapper.hit_test(Vec2::new(320.0, 55.0)),
        Some(CellPosition::label(2))
    );
    // Dead zone past the last legend row.
    assert_eq!(mapper.hit_test(Vec2::new(320.0, 75.0)), None);
    // Above the first row.
    assert_eq!(mapper.hit_test(Vec2::new(320.0, 5.0)), None);
}

#[test]
fn test_hit_test_legend_skips_invalid_rows() {
    let mut rows = abc_source().rows().to_vec();
    rows.insert(0, SliceRow::new("skip", 0.0, Color::BLACK));
    let source = VecTableSource::new(rows);
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let mapper = CoordinateMapper::new(&source, &layout, &model, ScrollOffset::default(), VIEWPORT);

    // First legend slot belongs to the first valid row, which is row 1.
    assert_eq!(
        mapper.hit_test(Vec2::new(320.0, 15.0)),
        Some(CellPosition::label(1))
    );
}

#[test]
fn test_hit_test_translates_by_scroll_offset() {
    let source = abc_source();
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let scroll = ScrollOffset::new(100, 20);
    let mapper = CoordinateMapper::new(&source, &layout, &model, scroll, VIEWPORT);

    // The same content point as angle 90, shifted into viewport space.
    let content = point_at(&layout, 90.0, 100.0);
    let viewport_point = content - scroll.as_vec2();
    assert_eq!(mapper.hit_test(viewport_point), Some(CellPosition::value(1)));
}

#[test]
fn test_hit_test_empty_model_never_hits() {
    let source = VecTableSource::new(vec![
        SliceRow::new("a", 0.0, Color::RED),
        SliceRow::new("b", -1.0, Color::GREEN),
    ]);
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let mapper = CoordinateMapper::new(&source, &layout, &model, ScrollOffset::default(), VIEWPORT);

    for point in [
        point_at(&layout, 30.0, 100.0),
        Vec2::new(320.0, 15.0),
        Vec2::ZERO,
        layout.center(),
    ] {
        assert_eq!(mapper.hit_test(point), None);
    }
}

#[test]
fn test_legend_rank_skips_invalid_rows() {
    let mut rows = abc_source().rows().to_vec();
    rows.insert(1, SliceRow::new("skip", 0.0, Color::BLACK));
    let source = VecTableSource::new(rows);
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let mapper = CoordinateMapper::new(&source, &layout, &model, ScrollOffset::default(), VIEWPORT);

    assert_eq!(mapper.legend_rank(0), Some(0));
    assert_eq!(mapper.legend_rank(1), None);
    assert_eq!(mapper.legend_rank(2), Some(1));
    assert_eq!(mapper.legend_rank(3), Some(2));

    // The invalid row occupies no angle either.
    assert_eq!(mapper.slice_span(1), None);
    assert_eq!(mapper.slice_span(2).unwrap().start, 60.0);
}

#[test]
fn test_item_rect_and_visual_rect() {
    let source = abc_source();
    let layout = PieLayout::default();
    let model = GeometryModel::from_source(&source);
    let scroll = ScrollOffset::new(50, 10);
    let mapper = CoordinateMapper::new(&source, &layout, &model, scroll, VIEWPORT);

    let rect = mapper
        .item_rect(CellPosition::new(1, LABEL_COLUMN))
        .unwrap();
    assert_eq!(rect.x, 300.0);
    assert_eq!(rect.y, 30.0);

    let visual = mapper
        .visual_rect(CellPosition::new(1, LABEL_COLUMN))
        .unwrap();
    assert_eq!(visual.x, 250.0);
    assert_eq!(visual.y, 20.0);

    // Value cells map to the full viewport; the pie is drawn whole.
    let pie = mapper
        .visual_rect(CellPosition::new(1, VALUE_COLUMN))
        .unwrap();
    assert_eq!(pie.origin(), Vec2::ZERO);
    assert_eq!(pie.size(), VIEWPORT);

    // Out of range and out of grid.
    assert_eq!(mapper.item_rect(CellPosition::new(9, LABEL_COLUMN)), None);
    assert_eq!(mapper.item_rect(CellPosition::new(0, 2)), None);
}
