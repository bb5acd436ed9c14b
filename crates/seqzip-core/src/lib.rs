//! Core zip engine for seqzip.
//!
//! Walks two sorted sequences in lockstep, classifying each element as
//! present only on the left, only on the right, or on both sides. The engine
//! never touches concrete storage: callers supply a [`Zipper`] implementation
//! wrapping their own sequences and output container, and the engine drives
//! its append operations in a single linear pass.
//!
//! # Key Types
//!
//! - [`Order`] -- Three-valued comparison result (Less / Equal / Greater)
//! - [`Zipper`] -- The capability a caller implements to drive the engine
//! - [`zip_with_gaps`] -- Sorted merge with per-pair comparison
//! - [`zip`] -- Positional pairing (comparison forced to Equal)

pub mod order;
pub mod zip;
pub mod zipper;

pub use order::Order;
pub use zip::{zip, zip_with_gaps};
pub use zipper::Zipper;
