//! Uniform views over the input sources of an expression evaluator.
//!
//! An evaluator addresses its inputs through one trait, whatever the
//! container behind them:
//!
//! - [`InputView`] — length, indexed lookup, ordered iteration and per-element
//!   type tags
//! - [`DenseArrayInputs`], [`TableInputs`], [`MappingInputs`],
//!   [`SequenceInputs`] — views over a 2-D array, a named-column [`Frame`], a
//!   key-value mapping and a plain sequence
//! - [`Inputs`] — any one of the above, chosen at construction
//! - [`flatten`] — reduces nested views to one ordered set of leaves with
//!   composite path identifiers such as `"0_1"`

mod dense;
mod error;
mod inputs;
mod key;
mod mapping;
mod sequence;
mod table;
mod value;
mod view;

pub mod flatten;

pub use dense::{DenseArray, DenseArrayInputs};
pub use error::InputsError;
pub use flatten::{Flattened, flatten};
pub use inputs::Inputs;
pub use key::Key;
pub use mapping::MappingInputs;
pub use sequence::SequenceInputs;
pub use table::{Frame, TableInputs};
pub use value::{Column, DType, Element, Value};
pub use view::{Entries, InputView};
