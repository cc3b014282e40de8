use ndarray::Array2;

use crate::{
    DType, DenseArray, DenseArrayInputs, Frame, InputView, InputsError, Key, MappingInputs,
    SequenceInputs, TableInputs, Value, view::Entries,
};

/// Any of the built-in input views.
///
/// The container shape is matched once, when the `Inputs` is built; every
/// later call dispatches straight to the variant.
#[derive(Debug, Clone)]
pub enum Inputs {
    Dense(DenseArrayInputs),
    Table(TableInputs),
    Mapping(MappingInputs),
    Sequence(SequenceInputs),
}

macro_rules! dispatch {
    ($self:ident, $view:ident => $body:expr) => {
        match $self {
            Inputs::Dense($view) => $body,
            Inputs::Table($view) => $body,
            Inputs::Mapping($view) => $body,
            Inputs::Sequence($view) => $body,
        }
    };
}

impl InputView for Inputs {
    fn len(&self) -> usize {
        dispatch!(self, view => view.len())
    }

    fn position(&self, index: &Key) -> Result<usize, InputsError> {
        dispatch!(self, view => view.position(index))
    }

    fn get(&self, index: &Key) -> Result<Value, InputsError> {
        dispatch!(self, view => view.get(index))
    }

    fn iter(&self) -> Entries<'_> {
        dispatch!(self, view => view.iter())
    }

    fn types(&self) -> &[DType] {
        dispatch!(self, view => view.types())
    }

    fn type_of(&self, index: &Key) -> Result<DType, InputsError> {
        dispatch!(self, view => view.type_of(index))
    }
}

macro_rules! impl_inputs_from {
    ($($source:ty => $variant:ident($view:ty)),+ $(,)?) => {
        $(
            impl From<$view> for Inputs {
                fn from(view: $view) -> Self {
                    Inputs::$variant(view)
                }
            }

            impl From<$view> for Value {
                fn from(view: $view) -> Self {
                    Value::nested(view)
                }
            }

            impl From<$source> for Inputs {
                fn from(values: $source) -> Self {
                    Inputs::$variant(<$view>::new(values))
                }
            }
        )+
    };
}

impl_inputs_from!(
    DenseArray => Dense(DenseArrayInputs),
    Frame => Table(TableInputs),
    Vec<(Key, Value)> => Mapping(MappingInputs),
    Vec<Value> => Sequence(SequenceInputs),
);

impl From<Array2<f64>> for Inputs {
    fn from(values: Array2<f64>) -> Self {
        Inputs::Dense(DenseArrayInputs::new(values))
    }
}

impl From<Inputs> for Value {
    fn from(inputs: Inputs) -> Self {
        Value::nested(inputs)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::Column;

    fn every_variant() -> Vec<Inputs> {
        vec![
            Inputs::from(array![[1.0, 2.0], [3.0, 4.0]]),
            Inputs::from(Frame::new([("a", Column::from(vec![1_i64, 2]))]).unwrap()),
            Inputs::from(vec![
                (Key::from("a"), Value::from(1)),
                (Key::from("b"), Value::from("two")),
            ]),
            Inputs::from(vec![Value::from(true), Value::from(0.5), Value::from(7)]),
        ]
    }

    #[test]
    fn types_align_with_length() {
        for inputs in every_variant() {
            assert_eq!(inputs.types().len(), inputs.len(), "{inputs:?}");
        }
    }

    #[test]
    fn iteration_is_complete_and_agrees_with_get() {
        for inputs in every_variant() {
            let entries: Vec<(Key, Value)> = inputs.iter().collect();
            assert_eq!(entries.len(), inputs.len());

            for (key, value) in entries {
                assert_eq!(inputs.get(&key).unwrap(), value);
                let position = inputs.position(&key).unwrap();
                assert_eq!(inputs.type_of(&key).unwrap(), inputs.types()[position]);
            }
        }
    }

    #[test]
    fn variants_nest_as_values() {
        let dense = Inputs::from(array![[1.0], [2.0]]);
        let outer = SequenceInputs::new([Value::from(dense)]);

        assert_eq!(outer.types(), &[DType::Inputs]);
        let flat = SequenceInputs::flatten(&outer).unwrap();
        assert_eq!(flat.types(), &[DType::Array(crate::Element::Float64)]);
    }
}
