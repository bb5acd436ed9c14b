//! Set operations over sorted, deduplicated slices.
//!
//! Each operation is a single pass of the zip engine with a different
//! keep policy for left-only, right-only, and shared elements. Inputs must
//! be ascending and free of duplicates for set semantics to hold.

use seqzip_core::{zip_with_gaps, Order, Zipper};

/// Zipper over two sorted slices that keeps elements according to which
/// side(s) they appear on.
struct SetZipper<'a, T> {
    left: &'a [T],
    right: &'a [T],
    keep_left: bool,
    keep_right: bool,
    keep_both: bool,
    out: Vec<T>,
}

impl<T: Clone + Ord> Zipper for SetZipper<'_, T> {
    fn len_left(&self) -> usize {
        self.left.len()
    }

    fn len_right(&self) -> usize {
        self.right.len()
    }

    fn compare(&self, i: usize, j: usize) -> Order {
        Order::from_ordering(self.left[i].cmp(&self.right[j]))
    }

    fn add_left(&mut self, i: usize) {
        if self.keep_left {
            self.out.push(self.left[i].clone());
        }
    }

    fn add_right(&mut self, j: usize) {
        if self.keep_right {
            self.out.push(self.right[j].clone());
        }
    }

    fn add_both(&mut self, i: usize, _j: usize) {
        if self.keep_both {
            self.out.push(self.left[i].clone());
        }
    }
}

fn run<T: Clone + Ord>(
    left: &[T],
    right: &[T],
    keep_left: bool,
    keep_right: bool,
    keep_both: bool,
) -> Vec<T> {
    let mut z = SetZipper {
        left,
        right,
        keep_left,
        keep_right,
        keep_both,
        out: Vec::new(),
    };
    zip_with_gaps(&mut z);
    z.out
}

/// Elements present on either side, one copy for elements on both.
pub fn union<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    run(left, right, true, true, true)
}

/// Elements present on both sides.
pub fn intersection<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    run(left, right, false, false, true)
}

/// Elements present on the left side and not the right.
pub fn difference<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    run(left, right, true, false, false)
}

/// Elements present on exactly one side.
pub fn symmetric_difference<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    run(left, right, true, true, false)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const LEFT: &[i32] = &[1, 3, 5, 7];
    const RIGHT: &[i32] = &[2, 3, 4, 7, 9];

    fn expected(op: impl Fn(&BTreeSet<i32>, &BTreeSet<i32>) -> Vec<i32>) -> Vec<i32> {
        let l: BTreeSet<i32> = LEFT.iter().copied().collect();
        let r: BTreeSet<i32> = RIGHT.iter().copied().collect();
        op(&l, &r)
    }

    #[test]
    fn union_matches_btreeset() {
        assert_eq!(
            union(LEFT, RIGHT),
            expected(|l, r| l.union(r).copied().collect())
        );
    }

    #[test]
    fn intersection_matches_btreeset() {
        assert_eq!(
            intersection(LEFT, RIGHT),
            expected(|l, r| l.intersection(r).copied().collect())
        );
    }

    #[test]
    fn difference_matches_btreeset() {
        assert_eq!(
            difference(LEFT, RIGHT),
            expected(|l, r| l.difference(r).copied().collect())
        );
    }

    #[test]
    fn symmetric_difference_matches_btreeset() {
        assert_eq!(
            symmetric_difference(LEFT, RIGHT),
            expected(|l, r| l.symmetric_difference(r).copied().collect())
        );
    }

    #[test]
    fn disjoint_sets() {
        assert_eq!(union(&[1, 2], &[3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(intersection(&[1, 2], &[3, 4]), Vec::<i32>::new());
        assert_eq!(difference(&[1, 2], &[3, 4]), vec![1, 2]);
    }

    #[test]
    fn identical_sets() {
        let s = &[1, 2, 3];
        assert_eq!(union(s, s), vec![1, 2, 3]);
        assert_eq!(intersection(s, s), vec![1, 2, 3]);
        assert_eq!(difference(s, s), Vec::<i32>::new());
        assert_eq!(symmetric_difference(s, s), Vec::<i32>::new());
    }

    #[test]
    fn empty_operands() {
        assert_eq!(union::<i32>(&[], &[]), Vec::<i32>::new());
        assert_eq!(union(&[], &[1, 2]), vec![1, 2]);
        assert_eq!(difference(&[], &[1]), Vec::<i32>::new());
        assert_eq!(difference(&[1], &[]), vec![1]);
    }

    #[test]
    fn results_stay_sorted() {
        let out = union(LEFT, RIGHT);
        assert!(out.windows(2).all(|w| w[0] < w[1]));
    }
}
