use rand::Rng;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::SampleError;

/// A half-open interval `[low, high)` to draw uniform values from.
///
/// Serialized as a two-element array `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-derive",
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Range {
    low: f64,
    high: f64,
}

impl Range {
    /// Creates a range, checking that both bounds and the span between them
    /// are finite and that `low <= high`.
    ///
    /// A degenerate range with `low == high` is allowed and always yields `low`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] if the bounds do not form a range.
    pub fn new(low: f64, high: f64) -> Result<Self, SampleError> {
        if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() || low > high {
            return Err(SampleError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Draws one value uniformly from the range.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.low < self.high {
            rng.gen_range(self.low..self.high)
        } else {
            self.low
        }
    }
}

impl TryFrom<[f64; 2]> for Range {
    type Error = SampleError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = SampleError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<Range> for [f64; 2] {
    fn from(range: Range) -> Self {
        [range.low, range.high]
    }
}
