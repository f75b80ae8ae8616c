use crate::error::{StripError, StripResult};

use super::StripStyle;

pub(super) fn validate_strip_style(style: StripStyle) -> StripResult<StripStyle> {
    style.background_color.validate()?;
    style.signal_color.validate()?;
    style.minor_grid_color.validate()?;
    style.major_grid_color.validate()?;
    style.separator_color.validate()?;

    for (name, value) in [
        ("signal_stroke_width", style.signal_stroke_width),
        ("minor_grid_stroke_width", style.minor_grid_stroke_width),
        ("major_grid_stroke_width", style.major_grid_stroke_width),
        ("separator_stroke_width", style.separator_stroke_width),
        ("grid_box_size_px", style.grid_box_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(StripError::InvalidData(format!(
                "strip style `{name}` must be finite and > 0"
            )));
        }
    }

    Ok(style)
}
