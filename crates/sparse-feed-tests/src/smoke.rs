use sparse_feed::sparse::{batch_dense_to_sparse, DynamicAxis, SparseBatch, SparseError};
use sparse_feed::tensor::{Nested, Shape};

use crate::fixtures::{self, Fixture};

fn check_fixture(fixture: Fixture) {
    let batch: SparseBatch<i64> = batch_dense_to_sparse(fixture.batch, None)
        .unwrap_or_else(|err| panic!("fixture {} failed to convert: {err}", fixture.name));
    let (indices, values, shape) = batch.into_parts();
    assert_eq!(indices, fixture.indices, "indices of fixture {}", fixture.name);
    assert_eq!(values, fixture.values, "values of fixture {}", fixture.name);
    assert_eq!(shape, fixture.shape, "shape of fixture {}", fixture.name);
    for (i, (idx, vals)) in indices.iter().zip(values.iter()).enumerate() {
        assert_eq!(
            idx.len(),
            vals.len(),
            "sample {i} of fixture {} is not index-aligned",
            fixture.name
        );
    }
}

pub fn full_batch_matches_expected() {
    check_fixture(fixtures::full_batch());
}

pub fn single_sample_matches_expected() {
    check_fixture(fixtures::single_sample());
}

pub fn zeros_are_skipped() {
    check_fixture(fixtures::batch_with_zeros());
}

pub fn mismatched_shapes_fail() {
    let batch: Vec<Nested<i64>> = vec![
        Nested::from(vec![vec![1, 2, 3], vec![4, 5, 6]]),
        Nested::from(vec![vec![1, 2], vec![3, 4]]),
    ];
    match batch_dense_to_sparse(batch, None) {
        Err(SparseError::ShapeMismatch { shapes }) => {
            assert_eq!(shapes, vec![Shape::new([2, 3]), Shape::new([2, 2])]);
        }
        other => panic!("expected a shape mismatch, got {other:?}"),
    }
}

pub fn dynamic_axis_ignores_sequence_length() {
    let axis = DynamicAxis::new("sequence");
    let batch: Vec<Nested<i64>> = vec![
        Nested::from(vec![vec![0, 1, 0]]),
        Nested::from(vec![vec![2, 0, 0], vec![0, 0, 3]]),
        Nested::from(vec![vec![0, 0, 0], vec![0, 0, 0], vec![4, 0, 0]]),
    ];
    let batch = batch_dense_to_sparse(batch, Some(&axis))
        .unwrap_or_else(|err| panic!("dynamic axis batch failed to convert: {err}"));
    assert_eq!(batch.shape(), &Shape::new([3]));
    assert_eq!(batch.indices(), &[vec![1], vec![0, 5], vec![2]]);
    assert_eq!(batch.values(), &[vec![1], vec![2, 3], vec![4]]);
}

pub fn conversion_is_pure(seed: u64) {
    let shape = Shape::new([5, 4]);
    let samples = fixtures::random_batch(seed, &shape, 10, 0.25);
    let first = batch_dense_to_sparse(&samples, None)
        .unwrap_or_else(|err| panic!("random batch failed to convert: {err}"));
    let second = batch_dense_to_sparse(&samples, None)
        .unwrap_or_else(|err| panic!("random batch failed to convert: {err}"));
    assert_eq!(first, second);
    for (i, sample) in samples.iter().enumerate() {
        let dense = first
            .to_dense(i)
            .unwrap_or_else(|err| panic!("sample {i} failed to densify: {err}"));
        assert_eq!(&dense, sample);
    }
}
