use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Signal, Viewport};

/// Mutable presentation state owned by the engine.
///
/// `rows` is the number of horizontal strips the signal is split across;
/// `scale_x`/`scale_y` convert sample index and amplitude to pixels;
/// `pan_y` is a vertical pixel offset applied to every trace point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub rows: u32,
    pub scale_x: f64,
    pub scale_y: f64,
    pub pan_y: f64,
}

/// Sample-index range of one strip row. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub row: u32,
    pub start: usize,
    pub end: usize,
}

impl RowSpan {
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// Samples allotted to each row: `ceil(sample_count / rows)`.
#[must_use]
pub fn points_per_row(sample_count: usize, rows: u32) -> usize {
    debug_assert!(rows > 0);
    sample_count.div_ceil(rows as usize)
}

/// Per-draw geometry for the strip layout.
///
/// Borrows the signal and is rebuilt from current configuration on every
/// repaint; nothing is cached between draws.
#[derive(Debug, Clone, Copy)]
pub struct StripLayout<'a> {
    signal: &'a Signal,
    config: LayoutConfig,
    viewport: Viewport,
}

impl<'a> StripLayout<'a> {
    #[must_use]
    pub fn new(signal: &'a Signal, config: LayoutConfig, viewport: Viewport) -> Self {
        debug_assert!(config.rows > 0);
        Self {
            signal,
            config,
            viewport,
        }
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    #[must_use]
    pub fn points_per_row(&self) -> usize {
        points_per_row(self.signal.len(), self.config.rows)
    }

    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.viewport.height_px() / f64::from(self.config.rows)
    }

    /// Index range covered by row `row`. Empty once the data runs out
    /// (possible only when `rows > sample count`).
    #[must_use]
    pub fn row_span(&self, row: u32) -> RowSpan {
        let sample_count = self.signal.len();
        let start = (row as usize * self.points_per_row()).min(sample_count);
        let end = (start + self.points_per_row()).min(sample_count);
        RowSpan { row, start, end }
    }

    #[must_use]
    pub fn row_spans(&self) -> SmallVec<[RowSpan; 8]> {
        (0..self.config.rows).map(|row| self.row_span(row)).collect()
    }

    #[must_use]
    pub fn row_center_y(&self, row: u32) -> f64 {
        f64::from(row) * self.row_height() + self.row_height() / 2.0
    }

    /// Lazy, restartable pixel-coordinate iterator over one row's samples.
    ///
    /// `x` is relative to the row start; `y` centers the trace on the row's
    /// midline using the signal's single global midpoint, so amplitudes stay
    /// visually comparable across rows.
    #[must_use]
    pub fn row_points(&self, row: u32) -> RowPoints<'a> {
        let span = self.row_span(row);
        RowPoints {
            row_samples: &self.signal.samples()[span.start..span.end],
            local_index: 0,
            scale_x: self.config.scale_x,
            scale_y: self.config.scale_y,
            row_center_y: self.row_center_y(row),
            midpoint: self.signal.midpoint(),
            pan_y: self.config.pan_y,
        }
    }
}

/// Iterator produced by [`StripLayout::row_points`].
#[derive(Debug, Clone)]
pub struct RowPoints<'a> {
    row_samples: &'a [f64],
    local_index: usize,
    scale_x: f64,
    scale_y: f64,
    row_center_y: f64,
    midpoint: f64,
    pan_y: f64,
}

impl Iterator for RowPoints<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.row_samples.get(self.local_index)?;
        let x = self.local_index as f64 * self.scale_x;
        let y = self.row_center_y - (value - self.midpoint) * self.scale_y + self.pan_y;
        self.local_index += 1;
        Some((x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.row_samples.len() - self.local_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowPoints<'_> {}
