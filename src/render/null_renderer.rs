use crate::error::StripResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_grid_line_count: usize,
    pub last_trace_count: usize,
    pub last_separator_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StripResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_grid_line_count = frame.grid_lines.len();
        self.last_trace_count = frame.traces.len();
        self.last_separator_count = frame.separators.len();
        Ok(())
    }
}
