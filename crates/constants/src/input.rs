use arbor_inputs::{DType, Value};

/// A single named input value.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub name: String,
    pub value: Value,
    pub dtype: DType,
}

impl Input {
    /// Creates an input whose type tag is inferred from the value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            dtype: value.dtype(),
            value,
        }
    }

    /// Creates an input with an explicit type tag.
    pub fn with_type(name: impl Into<String>, value: impl Into<Value>, dtype: DType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            dtype,
        }
    }
}

impl From<Input> for (String, Value) {
    fn from(input: Input) -> Self {
        (input.name, input.value)
    }
}
