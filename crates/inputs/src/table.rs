use indexmap::IndexMap;

use crate::{
    Column, DType, InputView, InputsError, Key, Value,
    key::resolve_position,
    view::{Entries, resolve_types},
};

/// A table of equally long, uniquely named columns in declared order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: IndexMap<String, Column>,
}

impl Frame {
    /// Builds a frame from `(name, column)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::DuplicateColumn`] if a name repeats, or
    /// [`InputsError::RaggedFrame`] if a column's length differs from the first.
    pub fn new<N, C>(columns: impl IntoIterator<Item = (N, C)>) -> Result<Self, InputsError>
    where
        N: Into<String>,
        C: Into<Column>,
    {
        let mut frame = IndexMap::new();
        let mut rows = None;

        for (name, column) in columns {
            let name = name.into();
            let column = column.into();

            let expected = *rows.get_or_insert(column.len());
            if column.len() != expected {
                return Err(InputsError::RaggedFrame {
                    name,
                    expected,
                    actual: column.len(),
                });
            }
            if frame.contains_key(&name) {
                return Err(InputsError::DuplicateColumn { name });
            }
            frame.insert(name, column);
        }

        Ok(Self { columns: frame })
    }

    /// Returns the number of rows, zero for a frame without columns.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.values().next().map_or(0, Column::len)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Returns the element type of every column, in declared order.
    #[must_use]
    pub fn dtypes(&self) -> Vec<DType> {
        self.columns
            .values()
            .map(|column| DType::from(column.element()))
            .collect()
    }
}

/// Inputs backed by a [`Frame`].
///
/// Columns are addressed by name, or by integer position when the index is an
/// integer.
#[derive(Debug, Clone)]
pub struct TableInputs {
    values: Frame,
    types: Vec<DType>,
}

impl TableInputs {
    /// Creates a view typed by the frame's column types.
    #[must_use]
    pub fn new(values: Frame) -> Self {
        let types = values.dtypes();
        Self { values, types }
    }

    /// Creates a view with explicit per-column type tags.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::TypeCountMismatch`] if `types` does not have one
    /// tag per column.
    pub fn with_types(values: Frame, types: Vec<DType>) -> Result<Self, InputsError> {
        let types = resolve_types(Some(types), values.width(), Vec::new)?;
        Ok(Self { values, types })
    }

    #[must_use]
    pub fn values(&self) -> &Frame {
        &self.values
    }
}

impl InputView for TableInputs {
    fn len(&self) -> usize {
        self.values.width()
    }

    fn position(&self, index: &Key) -> Result<usize, InputsError> {
        match index {
            Key::Name(name) => self
                .values
                .columns
                .get_index_of(name)
                .ok_or_else(|| InputsError::KeyNotFound { key: index.clone() }),
            Key::Int(i) => resolve_position(*i, self.len()),
        }
    }

    fn get(&self, index: &Key) -> Result<Value, InputsError> {
        let position = self.position(index)?;
        self.values
            .columns
            .get_index(position)
            .map(|(_, column)| Value::Array(column.clone()))
            .ok_or_else(|| InputsError::KeyNotFound { key: index.clone() })
    }

    fn iter(&self) -> Entries<'_> {
        Box::new(
            self.values
                .columns
                .iter()
                .map(|(name, column)| (Key::from(name.as_str()), Value::Array(column.clone()))),
        )
    }

    fn types(&self) -> &[DType] {
        &self.types
    }
}
