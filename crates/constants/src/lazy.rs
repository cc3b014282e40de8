use std::fmt;

use arbor_inputs::{DType, Value};
use indexmap::IndexMap;

use crate::Sample;

/// Keyword arguments bound to a [`LazyValue`].
pub type Kwargs = IndexMap<String, Value>;

/// A zero-argument leaf whose value is computed on every access.
///
/// The wrapped function is called with fixed positional and keyword arguments
/// each time [`value`](Self::value) is read. Nothing is cached, so a
/// non-deterministic function yields a fresh constant per evaluation.
///
/// The declared output type is metadata only and is never checked.
pub struct LazyValue<F> {
    function: F,
    name: String,
    args: Vec<Value>,
    kwargs: Kwargs,
    output_type: Option<DType>,
}

impl<F> LazyValue<F> {
    /// Binds `function` to fixed arguments.
    pub fn new<T>(function: F, name: impl Into<String>, args: Vec<Value>, kwargs: Kwargs) -> Self
    where
        F: Fn(&[Value], &Kwargs) -> T,
    {
        Self {
            function,
            name: name.into(),
            args,
            kwargs,
            output_type: None,
        }
    }

    /// Binds `function` to a sampled set of keyword arguments.
    pub fn from_sample<T>(function: F, name: impl Into<String>, sample: &Sample) -> Self
    where
        F: Fn(&[Value], &Kwargs) -> T,
    {
        let kwargs = sample
            .iter()
            .map(|(key, value)| (key.clone(), Value::Float(*value)))
            .collect();
        Self::new(function, name, Vec::new(), kwargs)
    }

    /// Declares the type this leaf is expected to produce.
    #[must_use]
    pub fn with_output_type(mut self, output_type: DType) -> Self {
        self.output_type = Some(output_type);
        self
    }

    /// Calls the function with the bound arguments.
    pub fn value<T>(&self) -> T
    where
        F: Fn(&[Value], &Kwargs) -> T,
    {
        (self.function)(&self.args, &self.kwargs)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A constant leaf takes no inputs from the expression tree.
    #[must_use]
    pub fn arity(&self) -> usize {
        0
    }

    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    #[must_use]
    pub fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    #[must_use]
    pub fn output_type(&self) -> Option<DType> {
        self.output_type
    }
}

impl<F> fmt::Debug for LazyValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyValue")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .field("output_type", &self.output_type)
            .finish_non_exhaustive()
    }
}
