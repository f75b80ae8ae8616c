pub mod fit;
pub mod layout;
pub mod signal;
pub mod types;

pub use fit::{FitScales, compute_fit};
pub use layout::{LayoutConfig, RowPoints, RowSpan, StripLayout, points_per_row};
pub use signal::Signal;
pub use types::Viewport;
