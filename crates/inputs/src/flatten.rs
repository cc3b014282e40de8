//! Reduction of nested input views to one flat, ordered set of leaves.
//!
//! Flattening runs in two passes:
//!
//! 1. [`walk`] visits the structure depth-first in iteration order and records
//!    each leaf together with its path, a list of [`PathSegment`]s.
//! 2. [`join_path`] turns a path into its composite identifier.
//!
//! A path holds the key of every nested view entered below the root, followed
//! by the leaf's position within its immediate parent. Joined with `_`, a leaf
//! at position 1 of the view stored under key `0` of the root becomes `"0_1"`,
//! and a leaf directly in the root at position 2 becomes `"2"`.

use std::{collections::HashSet, fmt};

use tracing::{debug, trace};

use crate::{InputView, InputsError, Key, Value};

/// One level of a leaf's path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// The key under which a nested view is stored in its parent.
    Key(Key),
    /// The position of the leaf within its immediate parent.
    Position(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => fmt::Display::fmt(key, f),
            PathSegment::Position(position) => fmt::Display::fmt(position, f),
        }
    }
}

/// A leaf found by [`walk`], with the path that leads to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatLeaf {
    pub path: Vec<PathSegment>,
    pub value: Value,
}

/// The result of [`flatten`]: parallel, index-aligned paths and leaf values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub paths: Vec<Option<String>>,
    pub values: Vec<Value>,
}

impl Flattened {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Flattens a nested view into its leaves and their composite identifiers.
///
/// # Errors
///
/// Returns [`InputsError::CyclicStructure`] if a view contains itself.
pub fn flatten(inputs: &dyn InputView) -> Result<Flattened, InputsError> {
    let leaves = walk_view(inputs)?;
    debug!(leaves = leaves.len(), "flattened inputs");

    let (paths, values) = leaves
        .into_iter()
        .map(|leaf| (join_path(&leaf.path), leaf.value))
        .unzip();

    Ok(Flattened { paths, values })
}

/// Collects the leaves under `value` in depth-first order.
///
/// A value that is itself a leaf yields one entry with an empty path.
///
/// # Errors
///
/// Returns [`InputsError::CyclicStructure`] if a view contains itself.
pub fn walk(value: &Value) -> Result<Vec<FlatLeaf>, InputsError> {
    match value {
        Value::Inputs(view) => walk_view(view.as_ref()),
        leaf => Ok(vec![FlatLeaf {
            path: Vec::new(),
            value: leaf.clone(),
        }]),
    }
}

/// Collects the leaves under a view in depth-first order.
///
/// # Errors
///
/// Returns [`InputsError::CyclicStructure`] if a view contains itself.
pub fn walk_view(inputs: &dyn InputView) -> Result<Vec<FlatLeaf>, InputsError> {
    let mut walker = Walker::default();
    walker.visit(inputs, &mut Vec::new())?;
    Ok(walker.leaves)
}

/// Joins a path into its composite identifier, or `None` for an empty path.
#[must_use]
pub fn join_path(path: &[PathSegment]) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<String> = path.iter().map(ToString::to_string).collect();
    Some(segments.join("_"))
}

#[derive(Default)]
struct Walker {
    /// Views on the path from the root to the current node, by address.
    ancestors: HashSet<*const ()>,
    leaves: Vec<FlatLeaf>,
}

impl Walker {
    fn visit(
        &mut self,
        inputs: &dyn InputView,
        prefix: &mut Vec<PathSegment>,
    ) -> Result<(), InputsError> {
        let id = std::ptr::from_ref(inputs).cast::<()>();
        if !self.ancestors.insert(id) {
            debug!(depth = prefix.len(), "cycle detected while flattening");
            return Err(InputsError::CyclicStructure {
                depth: prefix.len(),
            });
        }

        for (position, (key, value)) in inputs.iter().enumerate() {
            match value {
                Value::Inputs(nested) => {
                    trace!(key = %key, depth = prefix.len() + 1, "entering nested inputs");
                    prefix.push(PathSegment::Key(key));
                    self.visit(nested.as_ref(), prefix)?;
                    prefix.pop();
                }
                leaf => {
                    let mut path = prefix.clone();
                    path.push(PathSegment::Position(position));
                    self.leaves.push(FlatLeaf { path, value: leaf });
                }
            }
        }

        self.ancestors.remove(&id);
        Ok(())
    }
}
