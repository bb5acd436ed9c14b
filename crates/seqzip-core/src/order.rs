//! Three-valued ordering result.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The result of comparing a left-side element against a right-side element,
/// from the left element's perspective.
///
/// Named `Order` rather than `Ord` to avoid shadowing the prelude trait.
/// The enum is closed: no value outside these three variants can exist, so
/// consumers dispatch on it with a total match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// The left element sorts before the right element.
    Less,
    /// The left and right elements are equivalent under the ordering.
    Equal,
    /// The left element sorts after the right element.
    Greater,
}

impl Order {
    /// Convert from the standard library's comparison result.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Ordering> for Order {
    fn from(ord: Ordering) -> Self {
        Self::from_ordering(ord)
    }
}

impl From<Order> for Ordering {
    fn from(order: Order) -> Self {
        match order {
            Order::Less => Ordering::Less,
            Order::Equal => Ordering::Equal,
            Order::Greater => Ordering::Greater,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
        };
        write!(f, "{s}")
    }
}
