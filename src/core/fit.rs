use serde::{Deserialize, Serialize};

use crate::core::layout::points_per_row;
use crate::core::{Signal, Viewport};
use crate::error::{StripError, StripResult};

/// Vertical headroom factor applied around the peak-to-peak excursion, so a
/// row's trace never touches its neighbours at default scale.
const VERTICAL_PADDING_FACTOR: f64 = 1.5;

/// Scale pair derived from data statistics and surface size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitScales {
    /// Pixels per sample index within a row.
    pub scale_x: f64,
    /// Pixels per amplitude unit.
    pub scale_y: f64,
}

/// Derives default scales so the whole signal is visible without manual zoom.
///
/// `scale_x` fits one row's worth of samples exactly across the surface
/// width; `scale_y` fits the padded amplitude span into one row's allotted
/// height. A flat-line signal substitutes an amplitude span of `1.0`, so the
/// returned scales are always finite and positive.
///
/// Pure function of its inputs; the engine calls it at construction and on
/// every row-count change, never on zoom.
pub fn compute_fit(signal: &Signal, rows: u32, viewport: Viewport) -> StripResult<FitScales> {
    viewport.ensure_valid()?;
    if rows == 0 {
        return Err(StripError::InvalidRowCount { requested: 0 });
    }

    let row_samples = points_per_row(signal.len(), rows);
    if row_samples == 0 {
        return Err(StripError::EmptySignal);
    }

    let scale_x = viewport.width_px() / row_samples as f64;

    let range = match signal.range() {
        span if span == 0.0 => 1.0,
        span => span,
    };
    let scale_y = (viewport.height_px() / f64::from(rows)) / (range * VERTICAL_PADDING_FACTOR);

    Ok(FitScales { scale_x, scale_y })
}
