//! Sparse `(indices, values, shape)` encoding of dense batches.
//!
//! [`batch_dense_to_sparse`] is the entry point used by operator tests that
//! feed sparse inputs: each sample is flattened (column-major by default), its
//! zero entries are dropped, and the surviving positions and values are kept
//! index-aligned. Every sample must share one shape, ignoring the leading axis
//! when a [`DynamicAxis`] is given.

mod axis;
mod batch;
mod converter;
mod error;

pub use axis::DynamicAxis;
pub use batch::{sparse_sample, SparseBatch, SparseSample};
pub use converter::{batch_dense_to_sparse, SparseConverter};
pub use error::SparseError;
