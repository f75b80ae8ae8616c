use tracing::{debug, trace};

use crate::core::{LayoutConfig, Signal, Viewport, compute_fit};
use crate::error::{StripError, StripResult};
use crate::interaction::{ZoomLimitBehavior, resolve_wheel_zoom_factor};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_render_frame;
use super::validation::validate_strip_style;
use super::{StripEngineConfig, StripStyle};

/// Main orchestration facade consumed by host applications.
///
/// `StripEngine` owns the signal, the layout configuration, and the
/// renderer; every successful mutator ends with a full repaint so the drawn
/// state always reflects the current configuration.
#[derive(Debug)]
pub struct StripEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    signal: Signal,
    config: LayoutConfig,
    style: StripStyle,
    zoom_limit_behavior: ZoomLimitBehavior,
}

impl<R: Renderer> StripEngine<R> {
    /// Creates a fully initialized engine: validates the surface, auto-fits
    /// the scales to the signal, and paints the first frame.
    pub fn new(renderer: R, config: StripEngineConfig, signal: Signal) -> StripResult<Self> {
        config.viewport.ensure_valid()?;
        validate_strip_style(config.style)?;
        config.zoom_limit_behavior.validate()?;
        if config.rows == 0 {
            return Err(StripError::InvalidRowCount { requested: 0 });
        }

        let fit = compute_fit(&signal, config.rows, config.viewport)?;
        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            signal,
            config: LayoutConfig {
                rows: config.rows,
                scale_x: fit.scale_x,
                scale_y: fit.scale_y,
                pan_y: 0.0,
            },
            style: config.style,
            zoom_limit_behavior: config.zoom_limit_behavior,
        };
        engine.draw()?;
        Ok(engine)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        self.config
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.config.scale_x
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.config.scale_y
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.config.pan_y
    }

    #[must_use]
    pub fn style(&self) -> StripStyle {
        self.style
    }

    #[must_use]
    pub fn zoom_limit_behavior(&self) -> ZoomLimitBehavior {
        self.zoom_limit_behavior
    }

    /// Changes the row layout and re-derives both scales from auto-fit.
    ///
    /// Any prior zoom is discarded. A rejected row count leaves the current
    /// configuration and the last-rendered output intact.
    pub fn set_rows(&mut self, rows: u32) -> StripResult<()> {
        if rows == 0 {
            return Err(StripError::InvalidRowCount { requested: 0 });
        }

        // Recompute the fit before touching configuration so a failure
        // cannot leave a half-updated scale pair behind.
        let fit = compute_fit(&self.signal, rows, self.viewport)?;
        self.config.rows = rows;
        self.config.scale_x = fit.scale_x;
        self.config.scale_y = fit.scale_y;
        debug!(
            rows,
            scale_x = fit.scale_x,
            scale_y = fit.scale_y,
            "row layout changed"
        );
        self.draw()
    }

    /// Multiplies the horizontal scale by `factor` and repaints.
    ///
    /// The vertical scale is never affected. The configured
    /// [`ZoomLimitBehavior`] bounds the result.
    pub fn set_zoom(&mut self, factor: f64) -> StripResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(StripError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }

        self.config.scale_x = self.zoom_limit_behavior.apply(self.config.scale_x * factor);
        trace!(scale_x = self.config.scale_x, "horizontal zoom applied");
        self.draw()
    }

    /// Applies a wheel gesture: positive delta zooms out, negative zooms in,
    /// zero is a no-op.
    ///
    /// Suppressing the surface's default scroll behavior is the host's duty;
    /// the gesture is fully consumed here. Returns the factor applied, if
    /// any.
    pub fn wheel_zoom(&mut self, wheel_delta_y: f64) -> StripResult<Option<f64>> {
        let Some(factor) = resolve_wheel_zoom_factor(wheel_delta_y)? else {
            return Ok(None);
        };
        self.set_zoom(factor)?;
        Ok(Some(factor))
    }

    /// Sets the vertical pan offset applied to every trace point and
    /// repaints.
    pub fn set_pan_y(&mut self, pan_y: f64) -> StripResult<()> {
        if !pan_y.is_finite() {
            return Err(StripError::InvalidData(
                "vertical pan offset must be finite".to_owned(),
            ));
        }

        self.config.pan_y = pan_y;
        self.draw()
    }

    /// Toggles the paper grid backdrop and repaints.
    pub fn set_show_grid(&mut self, show_grid: bool) -> StripResult<()> {
        self.style.show_grid = show_grid;
        self.draw()
    }

    /// Materializes the scene for the current configuration without touching
    /// the renderer.
    pub fn render_frame(&self) -> StripResult<RenderFrame> {
        build_render_frame(&self.signal, self.config, self.viewport, self.style)
    }

    /// Full repaint: clear, grid, traces, separators. Idempotent for a fixed
    /// configuration.
    pub fn draw(&mut self) -> StripResult<()> {
        let frame = self.render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
