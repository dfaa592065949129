use thiserror::Error;

use super::axis::DynamicAxis;
use crate::tensor::{NestedError, Shape};

/// Errors surfaced while converting a dense batch or reading a sparse one back.
#[derive(Debug, Error)]
pub enum SparseError {
    /// Two samples disagree on their shape (ignoring the dynamic axis).
    #[error(
        "except for the sequence dimensions all shapes should be the same - instead we got {}",
        join_shapes(.shapes)
    )]
    ShapeMismatch { shapes: Vec<Shape> },
    #[error("cannot convert an empty batch: there is no sample shape to report")]
    EmptyBatch,
    #[error("sample {index} is not a rectangular tensor")]
    RaggedSample {
        index: usize,
        #[source]
        source: NestedError,
    },
    #[error("sample {index} is out of range for a batch of {len}")]
    SampleOutOfRange { index: usize, len: usize },
    #[error("cannot densify samples converted along dynamic axis `{axis}`: sequence lengths are not recorded")]
    DynamicAxisDensify { axis: DynamicAxis },
    #[error(transparent)]
    InvalidTensor(#[from] anyhow::Error),
}

pub(super) fn join_shapes(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .map(Shape::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_lists_every_shape() {
        let err = SparseError::ShapeMismatch {
            shapes: vec![Shape::new([2, 3]), Shape::new([3])],
        };
        assert_eq!(
            err.to_string(),
            "except for the sequence dimensions all shapes should be the same - instead we got (2, 3), (3,)"
        );
    }
}
