use cairo::{Context, Format, ImageSurface};

use crate::error::{StripError, StripResult};
use crate::render::{Color, LineJoin, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub grid_lines_drawn: usize,
    pub traces_drawn: usize,
    pub separators_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> StripResult<()>;
}

/// Cairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> StripResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(StripError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> StripResult<()> {
        frame.validate()?;

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.grid_lines {
            stroke_line(context, line.x1, line.y1, line.x2, line.y2, line.stroke_width, line.color)
                .map_err(|err| map_backend_error("failed to stroke grid line", err))?;
            stats.grid_lines_drawn += 1;
        }

        for trace in &frame.traces {
            apply_color(context, trace.color);
            context.set_line_width(trace.stroke_width);
            context.set_line_join(map_line_join(trace.join));

            let mut points = trace.points.iter();
            if let Some(&(x, y)) = points.next() {
                context.move_to(x, y);
            }
            for &(x, y) in points {
                context.line_to(x, y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke trace", err))?;
            stats.traces_drawn += 1;
        }

        for line in &frame.separators {
            stroke_line(context, line.x1, line.y1, line.x2, line.y2, line.stroke_width, line.color)
                .map_err(|err| map_backend_error("failed to stroke separator", err))?;
            stats.separators_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StripResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> StripResult<()> {
        self.render_with_context(context, frame)
    }
}

fn stroke_line(
    context: &Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke_width: f64,
    color: Color,
) -> Result<(), cairo::Error> {
    apply_color(context, color);
    context.set_line_width(stroke_width);
    context.move_to(x1, y1);
    context.line_to(x2, y2);
    context.stroke()
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_line_join(join: LineJoin) -> cairo::LineJoin {
    match join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
        LineJoin::Bevel => cairo::LineJoin::Bevel,
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> StripError {
    StripError::InvalidData(format!("{prefix}: {err}"))
}
