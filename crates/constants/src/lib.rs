//! Constant leaves for expression trees.
//!
//! - [`RangeSampler`] — draws named values uniformly from declared ranges
//! - [`LazyValue`] — a zero-argument leaf that re-evaluates its function on
//!   every access
//! - [`Input`] — a single named input with its type tag

mod error;
mod input;
mod lazy;
mod range;
mod sampler;

pub use error::SampleError;
pub use input::Input;
pub use lazy::{Kwargs, LazyValue};
pub use range::Range;
pub use sampler::{KeywordRanges, RangeSampler, Sample};
