use tracing::trace;

use crate::core::{LayoutConfig, Signal, StripLayout, Viewport};
use crate::error::StripResult;
use crate::render::RenderFrame;

use super::StripStyle;
use super::grid_builder::build_grid_lines;
use super::trace_builder::{build_separators, build_traces};

/// Materializes the full scene for one repaint in the fixed pass order:
/// background, grid, traces, separators.
pub(super) fn build_render_frame(
    signal: &Signal,
    config: LayoutConfig,
    viewport: Viewport,
    style: StripStyle,
) -> StripResult<RenderFrame> {
    viewport.ensure_valid()?;

    let layout = StripLayout::new(signal, config, viewport);
    let mut frame = RenderFrame::new(viewport, style.background_color);
    frame.grid_lines = build_grid_lines(viewport, style);
    frame.traces = build_traces(&layout, style);
    frame.separators = build_separators(viewport, config.rows, layout.row_height(), style);

    trace!(
        grid_lines = frame.grid_lines.len(),
        traces = frame.traces.len(),
        separators = frame.separators.len(),
        "render frame built"
    );
    Ok(frame)
}
