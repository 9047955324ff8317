//! Variable combinations.

use std::fmt;

use derive_more::Into;
use serde::{Deserialize, Serialize};

/// A set of included variable indices, kept sorted and free of duplicates.
///
/// Two sets compare and hash equal exactly when they include the same
/// variables, regardless of the order they were assembled in.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Into, Serialize, Deserialize,
)]
pub struct VariableSet(Vec<usize>);

impl VariableSet {
    /// A set holding one variable.
    #[must_use]
    pub fn single(index: usize) -> Self {
        Self(vec![index])
    }

    /// This set plus one more variable.
    #[must_use]
    pub fn with(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        if let Err(pos) = indices.binary_search(&index) {
            indices.insert(pos, index);
        }
        Self(indices)
    }

    /// Number of included variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no variable is included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `index` is included.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Included indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Iterate included indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Render with variable names instead of indices.
    #[must_use]
    pub fn describe(&self, names: &[String]) -> String {
        let parts: Vec<&str> =
            self.0.iter().map(|&i| names.get(i).map_or("?", String::as_str)).collect();
        format!("{{{}}}", parts.join(", "))
    }
}

impl FromIterator<usize> for VariableSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut indices: Vec<usize> = iter.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, index) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "}}")
    }
}
