use crate::core::Viewport;
use crate::interaction::ZoomLimitBehavior;

use super::StripStyle;

/// Construction-time configuration for [`super::StripEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripEngineConfig {
    pub viewport: Viewport,
    pub rows: u32,
    pub style: StripStyle,
    pub zoom_limit_behavior: ZoomLimitBehavior,
}

impl StripEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rows: 1,
            style: StripStyle::default(),
            zoom_limit_behavior: ZoomLimitBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StripStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_zoom_limit_behavior(mut self, behavior: ZoomLimitBehavior) -> Self {
        self.zoom_limit_behavior = behavior;
        self
    }
}
