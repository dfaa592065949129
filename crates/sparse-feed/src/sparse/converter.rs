//! Dense-to-sparse batch conversion.

use tracing::{debug, error, trace, warn};

use super::{
    axis::DynamicAxis,
    batch::{sparse_sample, SparseBatch},
    error::{join_shapes, SparseError},
};
use crate::config::ConversionConfig;
use crate::layout::FlattenOrder;
use crate::tensor::{IntoTensor, Shape, StorageElement};

/// Converts batches of dense samples into [`SparseBatch`]es.
#[derive(Debug, Clone, Default)]
pub struct SparseConverter {
    config: ConversionConfig,
}

impl SparseConverter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Converts every sample of `batch`.
    ///
    /// Samples are coerced to tensors, their shapes (minus the leading axis when
    /// a dynamic axis is configured) are checked against every shape seen so
    /// far, and their non-zero entries are collected in flattened order. The
    /// first sample whose shape disagrees aborts the conversion.
    pub fn convert<E, I, T>(&self, batch: I) -> Result<SparseBatch<E>, SparseError>
    where
        E: StorageElement,
        I: IntoIterator<Item = T>,
        T: IntoTensor<E>,
    {
        let order = self.config.resolved_order();
        let dynamic_axis = self.config.effective_dynamic_axis().cloned();
        trace!(?order, axis = ?dynamic_axis, dtype = E::DTYPE.name(), "converting dense batch");

        let mut shapes: Vec<Shape> = Vec::new();
        let mut batch_indices = Vec::new();
        let mut batch_values = Vec::new();

        for (index, sample) in batch.into_iter().enumerate() {
            let tensor = sample.into_tensor().map_err(|source| {
                warn!(sample = index, %source, "rejecting ragged sample");
                SparseError::RaggedSample { index, source }
            })?;

            let sample_shape = match dynamic_axis {
                Some(_) => tensor.shape().without_leading_axis(),
                None => tensor.shape().clone(),
            };
            if !shapes.contains(&sample_shape) {
                shapes.push(sample_shape);
            }
            if shapes.len() != 1 {
                error!(sample = index, shapes = %join_shapes(&shapes), "sample shapes disagree");
                return Err(SparseError::ShapeMismatch { shapes });
            }

            let sparse = sparse_sample(&tensor, order);
            debug!(
                sample = index,
                shape = %tensor.shape(),
                nnz = sparse.nnz(),
                "converted sample"
            );
            batch_indices.push(sparse.indices);
            batch_values.push(sparse.values);
        }

        let shape = shapes.pop().ok_or(SparseError::EmptyBatch)?;
        Ok(SparseBatch::new(
            batch_indices,
            batch_values,
            shape,
            order,
            dynamic_axis,
        ))
    }
}

/// Converts a batch of dense samples into the `(indices, values, shape)`
/// encoding consumed by sparse inputs, flattening each sample in column-major
/// order.
///
/// With `dynamic_axis`, each sample is a sequence whose leading dimension may
/// vary; only the remaining dimensions must agree across the batch.
pub fn batch_dense_to_sparse<E, I, T>(
    batch: I,
    dynamic_axis: Option<&DynamicAxis>,
) -> Result<SparseBatch<E>, SparseError>
where
    E: StorageElement,
    I: IntoIterator<Item = T>,
    T: IntoTensor<E>,
{
    let config = ConversionConfig {
        dynamic_axis: dynamic_axis.cloned(),
        order: Some(FlattenOrder::ColumnMajor),
    };
    SparseConverter::new(config).convert(batch)
}
