//! Defines the scalar element trait implemented by host-side tensors.

use std::fmt::Debug;

use super::dtype::DType;

/// Trait describing the numeric behaviour required by tensor storages.
///
/// Sparse conversion only needs to tell zeros apart from everything else, so the
/// surface stays small: an additive identity, a zero test, and the dtype tag.
pub trait StorageElement: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    /// Dtype tag matching the Rust element type.
    const DTYPE: DType;

    /// Returns the additive identity for the element type.
    fn zero() -> Self;

    /// Reports whether the element is exactly zero. `-0.0` counts as zero and
    /// `NaN` does not.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

impl StorageElement for f32 {
    const DTYPE: DType = DType::F32;

    fn zero() -> Self {
        0.0
    }
}

impl StorageElement for f64 {
    const DTYPE: DType = DType::F64;

    fn zero() -> Self {
        0.0
    }
}

impl StorageElement for i32 {
    const DTYPE: DType = DType::I32;

    fn zero() -> Self {
        0
    }
}

impl StorageElement for i64 {
    const DTYPE: DType = DType::I64;

    fn zero() -> Self {
        0
    }
}
