use serde::{Deserialize, Serialize};

use crate::error::{StripError, StripResult};

/// Pixel dimensions of the render surface.
///
/// The engine never owns or resizes the surface; it only reads these
/// dimensions when fitting and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> StripResult<()> {
        if !self.is_valid() {
            return Err(StripError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}
