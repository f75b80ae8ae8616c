use serde::{Deserialize, Serialize};

use crate::error::{StripError, StripResult};

/// Multiplicative `scale_x` step applied when the wheel scrolls down/forward.
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;
/// Multiplicative `scale_x` step applied when the wheel scrolls up/back.
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

/// Policy bounding interactive horizontal zoom.
///
/// `Unbounded` matches the historical viewer, where repeated gestures can
/// shrink `scale_x` toward zero or grow it without limit. Hosts that need a
/// stable working range opt into `Clamped`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ZoomLimitBehavior {
    #[default]
    Unbounded,
    /// Pin `scale_x` into `[min_scale_x, max_scale_x]` after each zoom step.
    Clamped { min_scale_x: f64, max_scale_x: f64 },
}

impl ZoomLimitBehavior {
    pub fn validate(self) -> StripResult<()> {
        match self {
            Self::Unbounded => Ok(()),
            Self::Clamped {
                min_scale_x,
                max_scale_x,
            } => {
                if !min_scale_x.is_finite() || min_scale_x <= 0.0 {
                    return Err(StripError::InvalidData(
                        "zoom limit min_scale_x must be finite and > 0".to_owned(),
                    ));
                }
                if !max_scale_x.is_finite() || max_scale_x < min_scale_x {
                    return Err(StripError::InvalidData(
                        "zoom limit max_scale_x must be finite and >= min_scale_x".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn apply(self, scale_x: f64) -> f64 {
        match self {
            Self::Unbounded => scale_x,
            Self::Clamped {
                min_scale_x,
                max_scale_x,
            } => scale_x.clamp(min_scale_x, max_scale_x),
        }
    }
}

/// Resolves a wheel delta into a multiplicative `scale_x` factor.
///
/// A positive delta (scroll down/forward) zooms out, a negative delta zooms
/// in. Returns `None` for a zero delta so hosts can skip the repaint.
pub fn resolve_wheel_zoom_factor(wheel_delta_y: f64) -> StripResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(StripError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }
    if wheel_delta_y > 0.0 {
        Ok(Some(WHEEL_ZOOM_OUT_FACTOR))
    } else {
        Ok(Some(WHEEL_ZOOM_IN_FACTOR))
    }
}
