//! The capability contract a caller implements to drive the zip engine.

use crate::order::Order;

/// A pair of ordered collections that can be zipped together, plus the output
/// they are zipped into.
///
/// Implementations wrap two concrete sequences, each sorted in ascending
/// order under the ordering induced by [`compare`](Zipper::compare), together
/// with whatever output structure the caller wants populated. The engine
/// itself never sees elements or storage; it only works through this trait.
///
/// The reported lengths must stay stable for the duration of one engine
/// call (the engine reads each once, at call start). An implementation that
/// reports a length larger than its actual storage will index out of range
/// inside its own methods and panic there.
pub trait Zipper {
    /// Number of elements in the left collection.
    fn len_left(&self) -> usize;

    /// Number of elements in the right collection.
    fn len_right(&self) -> usize;

    /// Compare the left element at `i` against the right element at `j`,
    /// from the left element's perspective: [`Order::Less`] if the left
    /// element sorts first, [`Order::Greater`] if the right element sorts
    /// first, [`Order::Equal`] if they correspond.
    ///
    /// Only invoked with `i < len_left()` and `j < len_right()`.
    fn compare(&self, i: usize, j: usize) -> Order;

    /// Append only the left element at `i` to the output.
    fn add_left(&mut self, i: usize);

    /// Append only the right element at `j` to the output.
    fn add_right(&mut self, j: usize);

    /// Append the corresponding pair at `(i, j)` to the output.
    fn add_both(&mut self, i: usize, j: usize);
}
