use crate::render::{Color, LineJoin};

/// Side length in pixels of one major grid box. Minor lines subdivide it.
pub const GRID_BOX_SIZE_PX: f64 = 20.0;
/// Minor grid divisions per major box.
pub const GRID_MINOR_DIVISIONS: f64 = 5.0;

/// Style contract for the current render frame.
///
/// Grid pitch is fixed pixel units, never tied to `scale_x`/`scale_y`: the
/// grid is a constant paper backdrop, not a time/amplitude ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripStyle {
    pub background_color: Color,
    pub signal_color: Color,
    pub signal_stroke_width: f64,
    pub signal_join: LineJoin,
    pub minor_grid_color: Color,
    pub minor_grid_stroke_width: f64,
    pub major_grid_color: Color,
    pub major_grid_stroke_width: f64,
    pub separator_color: Color,
    pub separator_stroke_width: f64,
    pub grid_box_size_px: f64,
    pub show_grid: bool,
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            signal_color: Color::rgb(0.0, 0.0, 0.0),
            signal_stroke_width: 1.5,
            signal_join: LineJoin::Round,
            // Light pink minor boxes under darker pink major boxes, the
            // standard ECG paper look.
            minor_grid_color: Color::from_rgb8(0xfc, 0xe0, 0xe0),
            minor_grid_stroke_width: 1.0,
            major_grid_color: Color::from_rgb8(0xf0, 0xa1, 0xa1),
            major_grid_stroke_width: 1.5,
            separator_color: Color::from_rgb8(0x33, 0x33, 0x33),
            separator_stroke_width: 2.0,
            grid_box_size_px: GRID_BOX_SIZE_PX,
            show_grid: true,
        }
    }
}
