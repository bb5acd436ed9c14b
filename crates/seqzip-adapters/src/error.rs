//! Error types for the adapter crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two input slices an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// Errors raised by the checked adapter entry points.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// An input slice was not in ascending order under the comparator.
    /// `index` is the position of the first out-of-order element.
    #[error("{side} input is not sorted: element at index {index} is out of order")]
    Unsorted { side: Side, index: usize },
}

/// Convenience alias for adapter results.
pub type AdapterResult<T> = Result<T, AdapterError>;
