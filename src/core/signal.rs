use crate::error::{StripError, StripResult};

/// Ordered amplitude samples at implicit uniform time intervals.
///
/// The sequence is immutable once loaded; extrema are computed at
/// construction so layout and fit math never rescan the data.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    min: f64,
    max: f64,
}

impl Signal {
    /// Validates and takes ownership of a sample sequence.
    ///
    /// Rejects empty sequences and non-finite samples so downstream scale
    /// math can never observe NaN or infinity.
    pub fn new(samples: Vec<f64>) -> StripResult<Self> {
        if samples.is_empty() {
            return Err(StripError::EmptySignal);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, &sample) in samples.iter().enumerate() {
            if !sample.is_finite() {
                return Err(StripError::InvalidData(format!(
                    "sample at index {index} must be finite"
                )));
            }
            min = min.min(sample);
            max = max.max(sample);
        }

        Ok(Self { samples, min, max })
    }

    /// Parses a comma- and/or whitespace-separated numeric dump.
    ///
    /// Tokens that do not parse as finite numbers are skipped. Fails with
    /// `EmptySignal` when nothing numeric remains.
    pub fn from_text(input: &str) -> StripResult<Self> {
        let samples: Vec<f64> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect();

        Self::new(samples)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Raw peak-to-peak amplitude span. Zero for a flat-line signal.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Global amplitude midpoint shared by every row's vertical mapping.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.max + self.min) / 2.0
    }
}
