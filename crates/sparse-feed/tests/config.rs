use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use sparse_feed::sparse::{DynamicAxis, SparseBatch, SparseConverter};
use sparse_feed::tensor::Shape;
use sparse_feed::{ConversionConfig, FlattenOrder};

#[test]
fn converter_from_config_file() {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("sparse_feed_config_{timestamp}.json"));
    fs::write(&path, r#"{ "dynamic_axis": "time", "order": "column_major" }"#).unwrap();
    let config = ConversionConfig::from_path(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.effective_dynamic_axis(), Some(&DynamicAxis::new("time")));
    assert_eq!(config.resolved_order(), FlattenOrder::ColumnMajor);

    let converter = SparseConverter::new(config);
    let batch: SparseBatch<i64> = converter
        .convert(vec![
            vec![vec![0, 3], vec![4, 0]],
            vec![vec![1, 0], vec![0, 0], vec![0, 9]],
        ])
        .unwrap();
    assert_eq!(batch.shape(), &Shape::new([2]));
    assert_eq!(batch.indices(), &[vec![1, 2], vec![0, 5]]);
    assert_eq!(batch.values(), &[vec![4, 3], vec![1, 9]]);
}

#[test]
fn config_round_trips_through_json() {
    let config = ConversionConfig::default()
        .with_dynamic_axis("steps")
        .with_order(FlattenOrder::RowMajor);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"dynamic_axis":"steps","order":"row_major"}"#);
    assert_eq!(ConversionConfig::from_json_str(&json).unwrap(), config);
}
