//! Host-backed tensor used for dense test batches.

use anyhow::{bail, ensure, Result};

use super::{dtype::DType, shape::Shape, storage::StorageElement};
use crate::layout::FlattenOrder;

/// Simple host-backed tensor holding elements in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<E> {
    shape: Shape,
    data: Vec<E>,
}

impl<E: StorageElement> Tensor<E> {
    /// Constructs a tensor from raw row-major values, validating the length against the shape.
    pub fn from_vec(shape: Shape, data: Vec<E>) -> Result<Self> {
        if data.len() != shape.num_elements() {
            bail!(
                "tensor data length ({}) does not match shape {:?}",
                data.len(),
                shape.dims()
            );
        }
        Ok(Tensor { shape, data })
    }

    /// Assembles a tensor whose length was already checked by the caller.
    pub(crate) fn from_parts(shape: Shape, data: Vec<E>) -> Self {
        debug_assert_eq!(data.len(), shape.num_elements());
        Tensor { shape, data }
    }

    /// Returns a zero-initialized tensor of the requested shape.
    pub fn zeros(shape: Shape) -> Self {
        let len = shape.num_elements();
        Tensor {
            shape,
            data: vec![E::zero(); len],
        }
    }

    /// Builds a tensor from values listed in `order`, placing each one at its
    /// row-major storage offset.
    pub fn from_ordered(shape: Shape, ordered: Vec<E>, order: FlattenOrder) -> Result<Self> {
        ensure!(
            ordered.len() == shape.num_elements(),
            "tensor data length ({}) does not match shape {:?}",
            ordered.len(),
            shape.dims()
        );
        if order == FlattenOrder::RowMajor {
            return Ok(Tensor {
                shape,
                data: ordered,
            });
        }
        let mut data = vec![E::zero(); ordered.len()];
        for (value, offset) in ordered.into_iter().zip(order.storage_offsets(&shape)) {
            data[offset] = value;
        }
        Ok(Tensor { shape, data })
    }

    /// Returns the total number of elements stored in the tensor.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Reports whether the tensor contains zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Provides access to the tensor shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the scalar dtype of the tensor payload.
    pub fn dtype(&self) -> DType {
        E::DTYPE
    }

    /// Borrows the row-major data slice.
    pub fn data(&self) -> &[E] {
        &self.data
    }

    /// Flattens the tensor in the requested order, like numpy's `ravel(order=...)`.
    pub fn ravel(&self, order: FlattenOrder) -> Vec<E> {
        match order {
            FlattenOrder::RowMajor => self.data.clone(),
            FlattenOrder::ColumnMajor => order
                .storage_offsets(&self.shape)
                .into_iter()
                .map(|offset| self.data[offset])
                .collect(),
        }
    }

    /// Counts the non-zero elements.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|value| !value.is_zero()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_length_mismatch() {
        let err = Tensor::<i64>::from_vec(Shape::new([2, 3]), vec![1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("does not match shape [2, 3]"));
    }

    #[test]
    fn ravel_in_fortran_order() {
        let tensor = Tensor::from_vec(Shape::new([2, 3]), vec![1i64, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(tensor.ravel(FlattenOrder::ColumnMajor), vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(tensor.ravel(FlattenOrder::RowMajor), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_ordered_inverts_ravel() {
        let tensor = Tensor::from_vec(Shape::new([3, 2]), vec![1.0f32, 0.0, 3.0, 4.0, 0.0, 6.0])
            .unwrap();
        let ordered = tensor.ravel(FlattenOrder::ColumnMajor);
        let rebuilt =
            Tensor::from_ordered(Shape::new([3, 2]), ordered, FlattenOrder::ColumnMajor).unwrap();
        assert_eq!(rebuilt, tensor);
    }

    #[test]
    fn scalar_tensor_ravels_to_one_element() {
        let tensor = Tensor::from_vec(Shape::scalar(), vec![7i64]).unwrap();
        assert_eq!(tensor.shape().rank(), 0);
        assert_eq!(tensor.len(), 1);
        assert_eq!(tensor.ravel(FlattenOrder::ColumnMajor), vec![7]);
        assert_eq!(tensor.dtype(), DType::I64);
        assert_eq!(tensor.count_nonzero(), 1);
    }
}
