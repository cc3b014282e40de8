use std::{fmt, sync::Arc};

use ndarray::Array1;

use crate::InputView;

/// The element type of a scalar or of the entries of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Bool,
    Int64,
    Float64,
    Text,
}

/// The type tag recorded for each addressable element of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    Int64,
    Float64,
    Text,
    /// A one-dimensional column of the given element type.
    Array(Element),
    /// A nested input view.
    Inputs,
}

impl From<Element> for DType {
    fn from(element: Element) -> Self {
        match element {
            Element::Bool => DType::Bool,
            Element::Int64 => DType::Int64,
            Element::Float64 => DType::Float64,
            Element::Text => DType::Text,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Bool => f.write_str("bool"),
            DType::Int64 => f.write_str("int64"),
            DType::Float64 => f.write_str("float64"),
            DType::Text => f.write_str("text"),
            DType::Array(element) => write!(f, "array<{}>", DType::from(*element)),
            DType::Inputs => f.write_str("inputs"),
        }
    }
}

/// A typed one-dimensional column, such as one feature of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Bool(Array1<bool>),
    Int(Array1<i64>),
    Float(Array1<f64>),
    Text(Array1<String>),
}

impl Column {
    /// Returns the number of rows in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Bool(a) => a.len(),
            Column::Int(a) => a.len(),
            Column::Float(a) => a.len(),
            Column::Text(a) => a.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element type of the column.
    #[must_use]
    pub fn element(&self) -> Element {
        match self {
            Column::Bool(_) => Element::Bool,
            Column::Int(_) => Element::Int64,
            Column::Float(_) => Element::Float64,
            Column::Text(_) => Element::Text,
        }
    }

    /// Returns the column as floats, if that is its element type.
    #[must_use]
    pub fn as_float(&self) -> Option<&Array1<f64>> {
        match self {
            Column::Float(a) => Some(a),
            _ => None,
        }
    }
}

macro_rules! impl_column_from {
    ($($elem:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<Array1<$elem>> for Column {
                fn from(values: Array1<$elem>) -> Self {
                    Column::$variant(values)
                }
            }

            impl From<Vec<$elem>> for Column {
                fn from(values: Vec<$elem>) -> Self {
                    Column::$variant(Array1::from(values))
                }
            }
        )+
    };
}

impl_column_from!(
    bool => Bool,
    i64 => Int,
    f64 => Float,
    String => Text,
);

/// A single value held by an input view.
///
/// Leaves are scalars and columns. A [`Value::Inputs`] holds a nested view,
/// which is what [`flatten`](crate::flatten) walks into.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Array(Column),
    Inputs(Arc<dyn InputView>),
}

impl Value {
    /// Wraps a view so it can be nested inside another view.
    pub fn nested(view: impl InputView + 'static) -> Self {
        Value::Inputs(Arc::new(view))
    }

    /// Infers the type tag of the value.
    #[must_use]
    pub fn dtype(&self) -> DType {
        match self {
            Value::Bool(_) => DType::Bool,
            Value::Int(_) => DType::Int64,
            Value::Float(_) => DType::Float64,
            Value::Text(_) => DType::Text,
            Value::Array(column) => DType::Array(column.element()),
            Value::Inputs(_) => DType::Inputs,
        }
    }

    /// Returns `true` if the value is not a nested view.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::Inputs(_))
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Value::Array(column) => Some(column),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_inputs(&self) -> Option<&Arc<dyn InputView>> {
        match self {
            Value::Inputs(view) => Some(view),
            _ => None,
        }
    }
}

/// Nested views compare by identity, everything else by content.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Inputs(a), Value::Inputs(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Column> for Value {
    fn from(column: Column) -> Self {
        Value::Array(column)
    }
}

impl From<Arc<dyn InputView>> for Value {
    fn from(view: Arc<dyn InputView>) -> Self {
        Value::Inputs(view)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn scalars_infer_their_own_type() {
        assert_eq!(Value::from(1.5).dtype(), DType::Float64);
        assert_eq!(Value::from(3).dtype(), DType::Int64);
        assert_eq!(Value::from(true).dtype(), DType::Bool);
        assert_eq!(Value::from("x").dtype(), DType::Text);
    }

    #[test]
    fn columns_infer_an_array_type() {
        let column = Column::from(array![1.0, 2.0]);
        assert_eq!(column.len(), 2);
        assert_eq!(
            Value::from(column).dtype(),
            DType::Array(Element::Float64)
        );
        assert_eq!(DType::Array(Element::Int64).to_string(), "array<int64>");
    }

    #[test]
    fn mixed_variants_are_never_equal() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from("a"), Value::Text("a".to_owned()));
    }
}
