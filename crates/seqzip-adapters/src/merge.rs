//! Slice merge adapter: zip two sorted slices into one tagged vector.
//!
//! The output preserves provenance: each element records whether it came
//! from the left slice, the right slice, or corresponded on both sides.

use serde::{Deserialize, Serialize};
use seqzip_core::{zip_with_gaps, Order, Zipper};

use crate::error::{AdapterError, AdapterResult, Side};

/// One element of a merged sequence, tagged by which side it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeItem<T> {
    /// Present only in the left slice.
    Left(T),
    /// Present only in the right slice.
    Right(T),
    /// Present on both sides (left copy first).
    Both(T, T),
}

/// Zipper over two slices that clones elements into a tagged output vector.
struct SliceMerger<'a, T, F> {
    left: &'a [T],
    right: &'a [T],
    cmp: F,
    out: Vec<MergeItem<T>>,
}

impl<T, F> Zipper for SliceMerger<'_, T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Order,
{
    fn len_left(&self) -> usize {
        self.left.len()
    }

    fn len_right(&self) -> usize {
        self.right.len()
    }

    fn compare(&self, i: usize, j: usize) -> Order {
        (self.cmp)(&self.left[i], &self.right[j])
    }

    fn add_left(&mut self, i: usize) {
        self.out.push(MergeItem::Left(self.left[i].clone()));
    }

    fn add_right(&mut self, j: usize) {
        self.out.push(MergeItem::Right(self.right[j].clone()));
    }

    fn add_both(&mut self, i: usize, j: usize) {
        self.out
            .push(MergeItem::Both(self.left[i].clone(), self.right[j].clone()));
    }
}

/// Merge two slices sorted under `cmp` into a single tagged vector.
///
/// Elements comparing [`Order::Equal`] are paired into
/// [`MergeItem::Both`]; all others appear individually with their side
/// recorded. Assumes both slices are ascending under `cmp`; see
/// [`try_merge_by`] for a checked variant.
pub fn merge_by<T, F>(left: &[T], right: &[T], cmp: F) -> Vec<MergeItem<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> Order,
{
    let mut merger = SliceMerger {
        left,
        right,
        cmp,
        out: Vec::with_capacity(left.len().max(right.len())),
    };
    zip_with_gaps(&mut merger);
    merger.out
}

/// [`merge_by`] with the natural ordering of `T`.
pub fn merge<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<MergeItem<T>> {
    merge_by(left, right, |a, b| Order::from_ordering(a.cmp(b)))
}

/// Checked [`merge_by`]: verifies both inputs are ascending under `cmp`
/// before merging, returning [`AdapterError::Unsorted`] (and producing no
/// output) otherwise.
pub fn try_merge_by<T, F>(left: &[T], right: &[T], cmp: F) -> AdapterResult<Vec<MergeItem<T>>>
where
    T: Clone,
    F: Fn(&T, &T) -> Order,
{
    ensure_sorted(left, &cmp, Side::Left)?;
    ensure_sorted(right, &cmp, Side::Right)?;
    Ok(merge_by(left, right, cmp))
}

/// Checked [`merge`] with the natural ordering of `T`.
pub fn try_merge<T: Clone + Ord>(left: &[T], right: &[T]) -> AdapterResult<Vec<MergeItem<T>>> {
    try_merge_by(left, right, |a, b| Order::from_ordering(a.cmp(b)))
}

fn ensure_sorted<T, F>(seq: &[T], cmp: &F, side: Side) -> AdapterResult<()>
where
    F: Fn(&T, &T) -> Order,
{
    for (idx, pair) in seq.windows(2).enumerate() {
        if cmp(&pair[0], &pair[1]) == Order::Greater {
            return Err(AdapterError::Unsorted {
                side,
                index: idx + 1,
            });
        }
    }
    Ok(())
}
