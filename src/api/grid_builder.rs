use crate::core::Viewport;
use crate::render::{Color, LinePrimitive};

use super::{GRID_MINOR_DIVISIONS, StripStyle};

/// Builds the two-tier paper grid: minor lines first so major lines stroke
/// over them.
pub(super) fn build_grid_lines(viewport: Viewport, style: StripStyle) -> Vec<LinePrimitive> {
    if !style.show_grid {
        return Vec::new();
    }

    let width = viewport.width_px();
    let height = viewport.height_px();
    let minor_pitch = style.grid_box_size_px / GRID_MINOR_DIVISIONS;
    let major_pitch = style.grid_box_size_px;

    let mut lines = Vec::new();
    push_grid_tier(
        &mut lines,
        width,
        height,
        minor_pitch,
        style.minor_grid_stroke_width,
        style.minor_grid_color,
    );
    push_grid_tier(
        &mut lines,
        width,
        height,
        major_pitch,
        style.major_grid_stroke_width,
        style.major_grid_color,
    );
    lines
}

fn push_grid_tier(
    lines: &mut Vec<LinePrimitive>,
    width: f64,
    height: f64,
    pitch: f64,
    stroke_width: f64,
    color: Color,
) {
    let mut x = 0.0;
    while x < width {
        lines.push(LinePrimitive::new(x, 0.0, x, height, stroke_width, color));
        x += pitch;
    }

    let mut y = 0.0;
    while y < height {
        lines.push(LinePrimitive::new(0.0, y, width, y, stroke_width, color));
        y += pitch;
    }
}
