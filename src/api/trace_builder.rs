use crate::core::{StripLayout, Viewport};
use crate::render::{LinePrimitive, PolylinePrimitive};

use super::StripStyle;

/// Builds one connected polyline per non-empty row. Every sample in range is
/// plotted; no decimation.
pub(super) fn build_traces(layout: &StripLayout<'_>, style: StripStyle) -> Vec<PolylinePrimitive> {
    let mut traces = Vec::with_capacity(layout.rows() as usize);
    for span in layout.row_spans() {
        if span.is_empty() {
            continue;
        }
        let points: Vec<(f64, f64)> = layout.row_points(span.row).collect();
        traces.push(PolylinePrimitive::new(
            points,
            style.signal_stroke_width,
            style.signal_color,
            style.signal_join,
        ));
    }
    traces
}

/// Builds the horizontal separators at internal row boundaries. None when the
/// layout has a single row.
pub(super) fn build_separators(
    viewport: Viewport,
    rows: u32,
    row_height: f64,
    style: StripStyle,
) -> Vec<LinePrimitive> {
    if rows <= 1 {
        return Vec::new();
    }

    (1..rows)
        .map(|row| {
            let y = f64::from(row) * row_height;
            LinePrimitive::new(
                0.0,
                y,
                viewport.width_px(),
                y,
                style.separator_stroke_width,
                style.separator_color,
            )
        })
        .collect()
}
