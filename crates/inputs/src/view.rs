use std::fmt::Debug;

use crate::{DType, InputsError, Key, Value};

/// Ordered `(index, value)` pairs produced by [`InputView::iter`].
pub type Entries<'a> = Box<dyn Iterator<Item = (Key, Value)> + 'a>;

/// A uniform, read-only view over a collection of input values.
///
/// An evaluator holds any implementation of this trait and addresses its
/// inputs the same way regardless of the underlying container.
/// The number of addressable elements is fixed at construction, and
/// [`types`](Self::types) always holds exactly one tag per element.
///
/// Views may hold other views as values (see [`Value::Inputs`]);
/// [`flatten`](crate::flatten) reduces such a structure to its leaves.
pub trait InputView: Debug + Send + Sync {
    /// Returns the number of addressable elements, not counting nested leaves.
    fn len(&self) -> usize;

    /// Returns `true` if the view has no addressable elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves an index to a position in iteration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the index addresses no element of the view.
    fn position(&self, index: &Key) -> Result<usize, InputsError>;

    /// Looks up one element.
    ///
    /// # Errors
    ///
    /// Returns an error if the index addresses no element of the view.
    fn get(&self, index: &Key) -> Result<Value, InputsError>;

    /// Iterates over `(index, value)` pairs in the view's natural order.
    ///
    /// Iteration does not consume the view and may be restarted.
    fn iter(&self) -> Entries<'_>;

    /// Returns one type tag per element, in iteration order.
    fn types(&self) -> &[DType];

    /// Returns the type tag of one element.
    ///
    /// # Errors
    ///
    /// Returns an error if the index addresses no element of the view.
    fn type_of(&self, index: &Key) -> Result<DType, InputsError> {
        let position = self.position(index)?;
        self.types()
            .get(position)
            .copied()
            .ok_or(InputsError::IndexOutOfRange {
                index: i64::try_from(position).unwrap_or(i64::MAX),
                len: self.len(),
            })
    }
}

/// Uses explicit type tags when given, otherwise infers them.
///
/// # Errors
///
/// Returns [`InputsError::TypeCountMismatch`] if explicit tags do not match
/// the number of elements.
pub(crate) fn resolve_types(
    explicit: Option<Vec<DType>>,
    len: usize,
    infer: impl FnOnce() -> Vec<DType>,
) -> Result<Vec<DType>, InputsError> {
    match explicit {
        Some(types) if types.len() != len => Err(InputsError::TypeCountMismatch {
            expected: len,
            actual: types.len(),
        }),
        Some(types) => Ok(types),
        None => Ok(infer()),
    }
}
