use crate::{
    DType, InputView, InputsError, Key, Value,
    flatten,
    key::resolve_int_key,
    view::{Entries, resolve_types},
};

/// Inputs backed by a plain ordered sequence.
#[derive(Debug, Clone, Default)]
pub struct SequenceInputs {
    values: Vec<Value>,
    types: Vec<DType>,
}

impl SequenceInputs {
    /// Creates a view typed by the type of each value.
    pub fn new<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let types = values.iter().map(Value::dtype).collect();
        Self { values, types }
    }

    /// Creates a view with explicit per-element type tags.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::TypeCountMismatch`] if `types` does not have one
    /// tag per element.
    pub fn with_types<V: Into<Value>>(
        values: impl IntoIterator<Item = V>,
        types: Vec<DType>,
    ) -> Result<Self, InputsError> {
        let mut inputs = Self::new(values);
        inputs.types = resolve_types(Some(types), inputs.values.len(), Vec::new)?;
        Ok(inputs)
    }

    /// Flattens a nested structure into a sequence of its leaves.
    ///
    /// Composite paths are dropped; leaves keep their depth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::CyclicStructure`] if a view contains itself.
    pub fn flatten(inputs: &dyn InputView) -> Result<Self, InputsError> {
        Ok(Self::new(flatten(inputs)?.values))
    }
}

impl InputView for SequenceInputs {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn position(&self, index: &Key) -> Result<usize, InputsError> {
        resolve_int_key(index, self.len())
    }

    fn get(&self, index: &Key) -> Result<Value, InputsError> {
        let position = self.position(index)?;
        self.values
            .get(position)
            .cloned()
            .ok_or_else(|| InputsError::KeyNotFound { key: index.clone() })
    }

    fn iter(&self) -> Entries<'_> {
        Box::new(
            self.values
                .iter()
                .enumerate()
                .map(|(i, value)| (Key::from(i), value.clone())),
        )
    }

    fn types(&self) -> &[DType] {
        &self.types
    }
}

impl<V: Into<Value>> FromIterator<V> for SequenceInputs {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_address_elements() {
        let inputs = SequenceInputs::new([10, 20, 30]);

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs.get(&Key::from(0)).unwrap(), Value::from(10));
        assert_eq!(inputs.get(&Key::from(-1)).unwrap(), Value::from(30));
        assert_eq!(
            inputs.get(&Key::from(3)),
            Err(InputsError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn types_align_with_elements() {
        let inputs = SequenceInputs::new([Value::from(1.0), Value::from(true)]);
        assert_eq!(inputs.types().len(), inputs.len());
        assert_eq!(inputs.type_of(&Key::from(1)).unwrap(), DType::Bool);
    }

    #[test]
    fn iteration_is_restartable() {
        let inputs: SequenceInputs = ["a", "b"].into_iter().collect();

        let first: Vec<(Key, Value)> = inputs.iter().collect();
        let second: Vec<(Key, Value)> = inputs.iter().collect();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                (Key::from(0), Value::from("a")),
                (Key::from(1), Value::from("b")),
            ]
        );
    }

    #[test]
    fn flatten_of_flat_input_keeps_every_leaf() {
        let inputs = SequenceInputs::new([1.0, 2.0, 3.0]);

        let flat = SequenceInputs::flatten(&inputs).unwrap();

        let values: Vec<Value> = flat.iter().map(|(_, v)| v).collect();
        assert_eq!(
            values,
            vec![Value::from(1.0), Value::from(2.0), Value::from(3.0)]
        );
    }

    #[test]
    fn flatten_drops_nested_structure() {
        let inner = SequenceInputs::new([2, 3]);
        let outer = SequenceInputs::new([Value::from(1), Value::nested(inner), Value::from(4)]);

        let flat = SequenceInputs::flatten(&outer).unwrap();

        assert_eq!(flat.len(), 4);
        assert_eq!(flat.types(), &[DType::Int64; 4]);
        assert_eq!(flat.get(&Key::from(2)).unwrap(), Value::from(3));
    }
}
