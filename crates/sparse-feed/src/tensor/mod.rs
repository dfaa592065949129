//! Core tensor abstractions used by the sparse conversion.
//!
//! The tensor module defines shapes, dtypes, the storage element trait, the
//! host tensor, and the nested-list coercion that turns list literals into
//! tensors.

pub mod dtype;
mod host_tensor;
mod nested;
pub mod shape;
pub mod storage;

pub use dtype::DType;
pub use host_tensor::Tensor;
pub use nested::{IntoTensor, Nested, NestedError};
pub use shape::Shape;
pub use storage::StorageElement;
