use ndarray::{Array2, Axis};

use crate::{
    Column, DType, Element, InputView, InputsError, Key, Value,
    key::resolve_int_key,
    view::{Entries, resolve_types},
};

macro_rules! define_dense_array {
    ($($variant:ident($elem:ty) => $element:ident),+ $(,)?) => {
        /// A typed two-dimensional array with observations as rows and
        /// features as columns.
        #[derive(Debug, Clone, PartialEq)]
        pub enum DenseArray {
            $($variant(Array2<$elem>)),+
        }

        impl DenseArray {
            /// Returns `(rows, columns)`.
            #[must_use]
            pub fn dim(&self) -> (usize, usize) {
                match self {
                    $(Self::$variant(a) => a.dim(),)+
                }
            }

            /// Returns the element type shared by every entry.
            #[must_use]
            pub fn element(&self) -> Element {
                match self {
                    $(Self::$variant(_) => Element::$element,)+
                }
            }

            /// Copies out one feature column.
            ///
            /// The caller guarantees `index < self.dim().1`.
            fn column(&self, index: usize) -> Column {
                match self {
                    $(Self::$variant(a) => Column::from(a.index_axis(Axis(1), index).to_owned()),)+
                }
            }
        }

        $(
            impl From<Array2<$elem>> for DenseArray {
                fn from(values: Array2<$elem>) -> Self {
                    Self::$variant(values)
                }
            }
        )+
    };
}

define_dense_array!(
    Bool(bool) => Bool,
    Int(i64) => Int64,
    Float(f64) => Float64,
);

/// Inputs backed by a dense two-dimensional array.
///
/// Each column is one addressable input, indexed by its integer position.
#[derive(Debug, Clone)]
pub struct DenseArrayInputs {
    values: DenseArray,
    types: Vec<DType>,
}

impl DenseArrayInputs {
    /// Creates a view whose type tags all equal the array's element type.
    pub fn new(values: impl Into<DenseArray>) -> Self {
        let values = values.into();
        let types = vec![DType::from(values.element()); values.dim().1];
        Self { values, types }
    }

    /// Creates a view with explicit per-column type tags.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::TypeCountMismatch`] if `types` does not have one
    /// tag per column.
    pub fn with_types(
        values: impl Into<DenseArray>,
        types: Vec<DType>,
    ) -> Result<Self, InputsError> {
        let values = values.into();
        let types = resolve_types(Some(types), values.dim().1, Vec::new)?;
        Ok(Self { values, types })
    }

    /// Returns the underlying array.
    #[must_use]
    pub fn values(&self) -> &DenseArray {
        &self.values
    }
}

impl InputView for DenseArrayInputs {
    fn len(&self) -> usize {
        self.values.dim().1
    }

    fn position(&self, index: &Key) -> Result<usize, InputsError> {
        resolve_int_key(index, self.len())
    }

    fn get(&self, index: &Key) -> Result<Value, InputsError> {
        let position = self.position(index)?;
        Ok(Value::Array(self.values.column(position)))
    }

    fn iter(&self) -> Entries<'_> {
        Box::new((0..self.len()).map(|i| (Key::from(i), Value::Array(self.values.column(i)))))
    }

    fn types(&self) -> &[DType] {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    use super::*;

    fn features() -> DenseArrayInputs {
        DenseArrayInputs::new(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn columns_are_the_addressable_inputs() {
        let inputs = features();

        assert_eq!(inputs.len(), 3);
        assert_eq!(
            inputs.get(&Key::from(1)).unwrap(),
            Value::Array(Column::from(array![2.0, 5.0]))
        );
        assert_eq!(
            inputs.get(&Key::from(-1)).unwrap(),
            Value::Array(Column::from(array![3.0, 6.0]))
        );
    }

    #[test]
    fn float_columns_keep_their_values() {
        let inputs = DenseArrayInputs::new(array![[0.1, 1.0], [0.2, 2.0]]);

        let column = inputs.get(&Key::from(0)).unwrap();
        let values = column.as_column().and_then(Column::as_float).unwrap();

        assert_relative_eq!(values.sum(), 0.3);
        assert_relative_eq!(values[1], 0.2);
    }

    #[test]
    fn types_repeat_the_element_type() {
        let inputs = features();
        assert_eq!(inputs.types(), &[DType::Float64; 3]);
        assert_eq!(inputs.type_of(&Key::from(2)).unwrap(), DType::Float64);

        let ints = DenseArrayInputs::new(array![[1_i64, 2], [3, 4]]);
        assert_eq!(ints.types(), &[DType::Int64, DType::Int64]);
    }

    #[test]
    fn out_of_range_column_is_an_error() {
        let inputs = features();
        assert_eq!(
            inputs.get(&Key::from(3)),
            Err(InputsError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(matches!(
            inputs.get(&Key::from("a")),
            Err(InputsError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn iteration_visits_columns_in_order() {
        let inputs = features();
        let keys: Vec<Key> = inputs.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![Key::from(0), Key::from(1), Key::from(2)]);

        for (key, value) in inputs.iter() {
            assert_eq!(inputs.get(&key).unwrap(), value);
        }
    }

    #[test]
    fn explicit_types_must_match_column_count() {
        let result = DenseArrayInputs::with_types(
            array![[1.0, 2.0]],
            vec![DType::Float64],
        );
        assert_eq!(
            result.unwrap_err(),
            InputsError::TypeCountMismatch {
                expected: 2,
                actual: 1
            }
        );

        let inputs =
            DenseArrayInputs::with_types(array![[1.0, 2.0]], vec![DType::Float64, DType::Int64])
                .unwrap();
        assert_eq!(inputs.type_of(&Key::from(1)).unwrap(), DType::Int64);
    }

    #[test]
    fn empty_array_gives_an_empty_view() {
        let inputs = DenseArrayInputs::new(Array2::<f64>::zeros((4, 0)));
        assert!(inputs.is_empty());
        assert_eq!(inputs.iter().count(), 0);
        assert!(inputs.types().is_empty());
    }
}
