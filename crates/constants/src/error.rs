use thiserror::Error;

/// Errors raised while declaring sampling ranges.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    /// The range is empty or not finite: `low > high`, or a bound is NaN or
    /// infinite.
    #[error("invalid range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },
}
