//! Concrete zipper adapters for seqzip.
//!
//! Ready-made [`Zipper`](seqzip_core::Zipper) implementations over slices,
//! covering the common uses of the engine: sorted-merge joins with a tagged
//! output, positional pairing of unequal-length sequences, and set algebra
//! over sorted deduplicated inputs.
//!
//! # Key Types
//!
//! - [`MergeItem`] / [`merge_by`] / [`try_merge_by`] -- Sorted merge into a tagged vector
//! - [`Pairing`] / [`pair`] -- Positional pairing of heterogeneous slices
//! - [`union`] / [`intersection`] / [`difference`] / [`symmetric_difference`] -- Set operations
//! - [`AdapterError`] -- Precondition failures from checked entry points

pub mod error;
pub mod merge;
pub mod pair;
pub mod set;

pub use error::{AdapterError, AdapterResult, Side};
pub use merge::{merge, merge_by, try_merge, try_merge_by, MergeItem};
pub use pair::{pair, Pairing};
pub use set::{difference, intersection, symmetric_difference, union};
