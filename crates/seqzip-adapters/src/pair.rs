//! Positional pairing adapter: zip two slices by index, regardless of
//! content or element type.

use serde::{Deserialize, Serialize};
use seqzip_core::{zip, Order, Zipper};

/// One element of a positionally paired sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pairing<L, R> {
    /// Tail element of the left slice, past the end of the right.
    Left(L),
    /// Tail element of the right slice, past the end of the left.
    Right(R),
    /// Elements at the same position on both sides.
    Both(L, R),
}

struct SlicePairer<'a, L, R> {
    left: &'a [L],
    right: &'a [R],
    out: Vec<Pairing<L, R>>,
}

impl<L: Clone, R: Clone> Zipper for SlicePairer<'_, L, R> {
    fn len_left(&self) -> usize {
        self.left.len()
    }

    fn len_right(&self) -> usize {
        self.right.len()
    }

    fn compare(&self, _i: usize, _j: usize) -> Order {
        // Never consulted by `zip`; there is no ordering across L and R.
        Order::Equal
    }

    fn add_left(&mut self, i: usize) {
        self.out.push(Pairing::Left(self.left[i].clone()));
    }

    fn add_right(&mut self, j: usize) {
        self.out.push(Pairing::Right(self.right[j].clone()));
    }

    fn add_both(&mut self, i: usize, j: usize) {
        self.out
            .push(Pairing::Both(self.left[i].clone(), self.right[j].clone()));
    }
}

/// Pair two slices position by position.
///
/// Produces [`Pairing::Both`] for each common index, then the tail of the
/// longer slice individually. Unlike `Iterator::zip`, no element is
/// dropped when the lengths differ.
pub fn pair<L: Clone, R: Clone>(left: &[L], right: &[R]) -> Vec<Pairing<L, R>> {
    let mut pairer = SlicePairer {
        left,
        right,
        out: Vec::with_capacity(left.len().max(right.len())),
    };
    zip(&mut pairer);
    pairer.out
}
