//! `SPARSE_FEED_ORDER` is read once per process, so this file holds a single
//! test that sets it before any conversion runs.

use sparse_feed::sparse::{batch_dense_to_sparse, SparseBatch, SparseConverter};
use sparse_feed::tensor::{Shape, Tensor};
use sparse_feed::{ConversionConfig, FlattenOrder};

#[test]
fn environment_order_applies_only_when_config_leaves_it_unset() {
    std::env::set_var("SPARSE_FEED_ORDER", "row");

    let unset = ConversionConfig::default();
    assert_eq!(unset.resolved_order(), FlattenOrder::RowMajor);
    let explicit = ConversionConfig::default().with_order(FlattenOrder::ColumnMajor);
    assert_eq!(explicit.resolved_order(), FlattenOrder::ColumnMajor);

    let converted: SparseBatch<i64> = SparseConverter::default()
        .convert(vec![vec![vec![1, 2, 3], vec![4, 0, 6]]])
        .unwrap();
    assert_eq!(converted.order(), FlattenOrder::RowMajor);
    assert_eq!(converted.indices(), &[vec![0, 1, 2, 3, 5]]);
    assert_eq!(
        converted.to_dense(0).unwrap(),
        Tensor::from_vec(Shape::new([2, 3]), vec![1, 2, 3, 4, 0, 6]).unwrap()
    );

    let fixed: SparseBatch<i64> =
        batch_dense_to_sparse(vec![vec![vec![1, 2, 3], vec![4, 0, 6]]], None).unwrap();
    assert_eq!(fixed.order(), FlattenOrder::ColumnMajor);
    assert_eq!(fixed.indices(), &[vec![0, 1, 2, 4, 5]]);
    assert_eq!(fixed.values(), &[vec![1, 4, 2, 3, 6]]);
}
