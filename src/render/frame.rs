use crate::core::Viewport;
use crate::error::StripResult;
use crate::render::{Color, LinePrimitive, PolylinePrimitive};

/// Backend-agnostic scene for one strip repaint.
///
/// Layers are drawn in field order: background fill, grid, signal traces,
/// row separators. Encoding the repaint order structurally keeps backends
/// from reordering passes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub grid_lines: Vec<LinePrimitive>,
    pub traces: Vec<PolylinePrimitive>,
    pub separators: Vec<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            grid_lines: Vec::new(),
            traces: Vec::new(),
            separators: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_grid_line(mut self, line: LinePrimitive) -> Self {
        self.grid_lines.push(line);
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: PolylinePrimitive) -> Self {
        self.traces.push(trace);
        self
    }

    #[must_use]
    pub fn with_separator(mut self, line: LinePrimitive) -> Self {
        self.separators.push(line);
        self
    }

    pub fn validate(&self) -> StripResult<()> {
        self.viewport.ensure_valid()?;
        self.background.validate()?;

        for line in &self.grid_lines {
            line.validate()?;
        }
        for trace in &self.traces {
            trace.validate()?;
        }
        for line in &self.separators {
            line.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid_lines.is_empty() && self.traces.is_empty() && self.separators.is_empty()
    }
}
