//! The merge engine: a single-pass lockstep traversal of two sorted
//! sequences.

use tracing::trace;

use crate::order::Order;
use crate::zipper::Zipper;

/// Merge the two sorted collections behind `z` in a single left-to-right
/// pass, comparing the leading element of each side exactly once.
///
/// Two elements that compare [`Order::Equal`] are appended together by
/// [`Zipper::add_both`]; otherwise the lesser element is appended on its own
/// by [`Zipper::add_left`] or [`Zipper::add_right`]. Once either side is
/// exhausted the remainder of the other is appended individually, in
/// ascending index order, without further comparisons.
///
/// Exactly one append is issued per iteration, so the total number of
/// appends is at most `len_left + len_right` and at least
/// `max(len_left, len_right)`. Appends are issued in strictly increasing
/// order of the relevant index, with no buffering or reordering.
///
/// Assumes both collections are sorted in ascending order under
/// [`Zipper::compare`]; the output is only meaningful when that holds.
pub fn zip_with_gaps<Z: Zipper>(z: &mut Z) {
    let (len_left, len_right) = (z.len_left(), z.len_right());
    trace!(len_left, len_right, "zipping sorted sequences");
    let (mut i, mut j) = (0, 0);
    while i < len_left || j < len_right {
        if i >= len_left {
            z.add_right(j);
            j += 1;
        } else if j >= len_right {
            z.add_left(i);
            i += 1;
        } else {
            match z.compare(i, j) {
                Order::Less => {
                    z.add_left(i);
                    i += 1;
                }
                Order::Greater => {
                    z.add_right(j);
                    j += 1;
                }
                Order::Equal => {
                    z.add_both(i, j);
                    i += 1;
                    j += 1;
                }
            }
        }
    }
}

/// Zip both collections behind `z` positionally, pairing elements by index
/// regardless of content.
///
/// Equivalent to [`zip_with_gaps`] with a comparison that always returns
/// [`Order::Equal`]: [`Zipper::add_both`] is called for each common
/// position, then the tail of the longer collection is appended
/// individually. Useful for pairing two sequences of possibly unequal
/// length without defining a real ordering.
pub fn zip<Z: Zipper>(z: &mut Z) {
    zip_with_gaps(&mut AlwaysEqual(z))
}

/// Decorator that forces every comparison to `Equal`, delegating the rest of
/// the contract to the wrapped zipper.
struct AlwaysEqual<'a, Z>(&'a mut Z);

impl<Z: Zipper> Zipper for AlwaysEqual<'_, Z> {
    fn len_left(&self) -> usize {
        self.0.len_left()
    }

    fn len_right(&self) -> usize {
        self.0.len_right()
    }

    fn compare(&self, _i: usize, _j: usize) -> Order {
        Order::Equal
    }

    fn add_left(&mut self, i: usize) {
        self.0.add_left(i);
    }

    fn add_right(&mut self, j: usize) {
        self.0.add_right(j);
    }

    fn add_both(&mut self, i: usize, j: usize) {
        self.0.add_both(i, j);
    }
}
