use arbor_inputs::{Column, DenseArrayInputs, Frame, Inputs, MappingInputs, Value};
use ndarray::array;

/// A small sensor dataset as a dense array of three features.
#[must_use]
pub fn sensor_array() -> DenseArrayInputs {
    DenseArrayInputs::new(array![[0.1, 10.0, 100.0], [0.2, 20.0, 200.0]])
}

/// The same observations as a named-column table, plus a label column.
///
/// # Panics
///
/// Never; the columns are equally long and uniquely named.
#[must_use]
pub fn sensor_table() -> Inputs {
    let frame = Frame::new([
        ("ratio", Column::from(vec![0.1, 0.2])),
        ("count", Column::from(vec![10_i64, 20])),
        ("site", Column::from(vec!["north".to_owned(), "south".to_owned()])),
    ])
    .expect("fixture frame is well formed");
    Inputs::from(frame)
}

/// Every source an evaluator might receive at once, keyed by source name.
#[must_use]
pub fn multi_source() -> MappingInputs {
    MappingInputs::new([
        ("array", Value::from(sensor_array())),
        ("table", Value::from(sensor_table())),
        ("offset", Value::from(1.5)),
    ])
}
