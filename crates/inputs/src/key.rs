use std::fmt;

use crate::InputsError;

/// An index into an input view.
///
/// Integer keys address elements by position in every view. Name keys address
/// table columns and mapping entries. A mapping may also use integer keys of
/// its own, in which case a present key takes priority over the position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Name(String),
}

impl Key {
    /// Returns the integer value of the key, if it is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name of the key, if it is one.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

/// Resolves a possibly negative position against a view of length `len`.
///
/// Negative positions count from the end, so `-1` is the last element.
///
/// # Errors
///
/// Returns [`InputsError::IndexOutOfRange`] if `index` is outside `-len..len`.
pub(crate) fn resolve_position(index: i64, len: usize) -> Result<usize, InputsError> {
    let out_of_range = || InputsError::IndexOutOfRange { index, len };
    let signed_len = i64::try_from(len).map_err(|_| out_of_range())?;

    let position = if index < 0 { index + signed_len } else { index };
    if (0..signed_len).contains(&position) {
        usize::try_from(position).map_err(|_| out_of_range())
    } else {
        Err(out_of_range())
    }
}

/// Resolves a key that must be an integer position.
pub(crate) fn resolve_int_key(key: &Key, len: usize) -> Result<usize, InputsError> {
    match key {
        Key::Int(i) => resolve_position(*i, len),
        Key::Name(_) => Err(InputsError::KeyNotFound { key: key.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_plain_form() {
        assert_eq!(Key::from(7).to_string(), "7");
        assert_eq!(Key::from("x1").to_string(), "x1");
        assert_eq!(Key::from(-2_i64).to_string(), "-2");
    }

    #[test]
    fn positions_resolve_from_both_ends() {
        assert_eq!(resolve_position(0, 3), Ok(0));
        assert_eq!(resolve_position(2, 3), Ok(2));
        assert_eq!(resolve_position(-1, 3), Ok(2));
        assert_eq!(resolve_position(-3, 3), Ok(0));
    }

    #[test]
    fn positions_outside_the_view_are_rejected() {
        assert_eq!(
            resolve_position(3, 3),
            Err(InputsError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            resolve_position(-4, 3),
            Err(InputsError::IndexOutOfRange { index: -4, len: 3 })
        );
        assert!(resolve_position(0, 0).is_err());
    }

    #[test]
    fn names_are_not_positions() {
        assert_eq!(
            resolve_int_key(&Key::from("a"), 3),
            Err(InputsError::KeyNotFound {
                key: Key::from("a")
            })
        );
    }
}
