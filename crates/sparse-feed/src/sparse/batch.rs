//! Sparse samples and the batch triple handed to sparse-input constructors.

use super::{axis::DynamicAxis, error::SparseError};
use crate::layout::FlattenOrder;
use crate::tensor::{Shape, StorageElement, Tensor};

/// Non-zero entries of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseSample<E> {
    /// Flattened positions of the non-zero entries, ascending.
    pub indices: Vec<usize>,
    /// Values found at `indices`, index-aligned.
    pub values: Vec<E>,
}

impl<E> SparseSample<E> {
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }
}

/// Extracts the non-zero entries of `tensor` flattened in `order`.
pub fn sparse_sample<E: StorageElement>(tensor: &Tensor<E>, order: FlattenOrder) -> SparseSample<E> {
    let (indices, values) = tensor
        .ravel(order)
        .into_iter()
        .enumerate()
        .filter(|(_, value)| !value.is_zero())
        .unzip();
    SparseSample { indices, values }
}

/// Sparse encoding of a whole batch: per-sample indices and values plus the
/// single shape shared by every sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseBatch<E> {
    indices: Vec<Vec<usize>>,
    values: Vec<Vec<E>>,
    shape: Shape,
    order: FlattenOrder,
    dynamic_axis: Option<DynamicAxis>,
}

impl<E: StorageElement> SparseBatch<E> {
    pub(crate) fn new(
        indices: Vec<Vec<usize>>,
        values: Vec<Vec<E>>,
        shape: Shape,
        order: FlattenOrder,
        dynamic_axis: Option<DynamicAxis>,
    ) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        SparseBatch {
            indices,
            values,
            shape,
            order,
            dynamic_axis,
        }
    }

    pub fn indices(&self) -> &[Vec<usize>] {
        &self.indices
    }

    pub fn values(&self) -> &[Vec<E>] {
        &self.values
    }

    /// Per-sample shape, excluding the dynamic axis when one was given.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn order(&self) -> FlattenOrder {
        self.order
    }

    pub fn dynamic_axis(&self) -> Option<&DynamicAxis> {
        self.dynamic_axis.as_ref()
    }

    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Total number of stored non-zero entries across the batch.
    pub fn nnz(&self) -> usize {
        self.indices.iter().map(Vec::len).sum()
    }

    /// Copies out the entries of sample `index`.
    pub fn sample(&self, index: usize) -> Result<SparseSample<E>, SparseError> {
        match (self.indices.get(index), self.values.get(index)) {
            (Some(indices), Some(values)) => Ok(SparseSample {
                indices: indices.clone(),
                values: values.clone(),
            }),
            _ => Err(SparseError::SampleOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    /// Rebuilds sample `index` as a dense tensor.
    ///
    /// Only available without a dynamic axis, since sequence lengths are not
    /// part of the sparse encoding.
    pub fn to_dense(&self, index: usize) -> Result<Tensor<E>, SparseError> {
        if let Some(axis) = &self.dynamic_axis {
            return Err(SparseError::DynamicAxisDensify { axis: axis.clone() });
        }
        let sample = self.sample(index)?;
        let mut ordered = vec![E::zero(); self.shape.num_elements()];
        for (position, value) in sample.indices.into_iter().zip(sample.values) {
            ordered[position] = value;
        }
        Ok(Tensor::from_ordered(self.shape.clone(), ordered, self.order)?)
    }

    /// Splits the batch into the `(indices, values, shape)` triple.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, Vec<Vec<E>>, Shape) {
        (self.indices, self.values, self.shape)
    }
}
