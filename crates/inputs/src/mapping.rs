use indexmap::IndexMap;

use crate::{
    DType, InputView, InputsError, Key, Value,
    flatten,
    key::resolve_position,
    view::{Entries, resolve_types},
};

/// Inputs backed by a key-value mapping, iterated in insertion order.
///
/// Lookups try the index as a key first. An integer index that is not a key
/// falls back to a position in insertion order, without error.
///
/// The mapping is read-only once constructed.
#[derive(Debug, Clone, Default)]
pub struct MappingInputs {
    values: IndexMap<Key, Value>,
    types: Vec<DType>,
}

impl MappingInputs {
    /// Creates a view typed by the type of each value.
    ///
    /// A repeated key keeps its first position and its last value.
    pub fn new<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let values: IndexMap<Key, Value> = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let types = values.values().map(Value::dtype).collect();
        Self { values, types }
    }

    /// Creates a view with explicit per-entry type tags.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::TypeCountMismatch`] if `types` does not have one
    /// tag per entry.
    pub fn with_types<K, V>(
        values: impl IntoIterator<Item = (K, V)>,
        types: Vec<DType>,
    ) -> Result<Self, InputsError>
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut inputs = Self::new(values);
        inputs.types = resolve_types(Some(types), inputs.values.len(), Vec::new)?;
        Ok(inputs)
    }

    /// Flattens a nested structure into a mapping keyed by composite path.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::CyclicStructure`] if a view contains itself.
    pub fn flatten(inputs: &dyn InputView) -> Result<Self, InputsError> {
        let flattened = flatten(inputs)?;
        Ok(Self::new(
            flattened
                .paths
                .into_iter()
                .zip(flattened.values)
                .map(|(path, value)| (path.unwrap_or_default(), value)),
        ))
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.values.keys()
    }
}

impl InputView for MappingInputs {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn position(&self, index: &Key) -> Result<usize, InputsError> {
        if let Some(position) = self.values.get_index_of(index) {
            return Ok(position);
        }
        match index {
            Key::Int(i) => resolve_position(*i, self.len()),
            Key::Name(_) => Err(InputsError::KeyNotFound { key: index.clone() }),
        }
    }

    fn get(&self, index: &Key) -> Result<Value, InputsError> {
        let position = self.position(index)?;
        self.values
            .get_index(position)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| InputsError::KeyNotFound { key: index.clone() })
    }

    fn iter(&self) -> Entries<'_> {
        Box::new(self.values.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    fn types(&self) -> &[DType] {
        &self.types
    }
}
