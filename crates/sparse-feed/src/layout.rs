//! Flattening order helpers.
//!
//! Host tensors always store their elements in row-major order. Sparse batches
//! address elements by their position in a chosen flattening order, so this
//! module maps positions in that order back to storage offsets.

use serde::de::{self, value::StrDeserializer, IntoDeserializer};
use serde::{Deserialize, Serialize};

use crate::tensor::Shape;

/// Order in which a multi-dimensional tensor is flattened into positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlattenOrder {
    /// Fortran order: the first index varies fastest.
    #[default]
    #[serde(alias = "f", alias = "fortran", alias = "column", alias = "col")]
    ColumnMajor,
    /// C order: the last index varies fastest. Matches the storage layout.
    #[serde(alias = "c", alias = "row")]
    RowMajor,
}

impl FlattenOrder {
    /// Parses the spellings accepted in config files, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let deserializer: StrDeserializer<'_, de::value::Error> =
            normalized.as_str().into_deserializer();
        FlattenOrder::deserialize(deserializer).ok()
    }

    /// Returns, for each flattened position in this order, the row-major storage
    /// offset of the element found there.
    pub fn storage_offsets(self, shape: &Shape) -> Vec<usize> {
        let len = shape.num_elements();
        match self {
            FlattenOrder::RowMajor => (0..len).collect(),
            FlattenOrder::ColumnMajor => {
                let dims = shape.dims();
                let row_strides = shape.row_major_strides();
                let column_strides = shape.column_major_strides();
                let mut offsets = vec![0usize; len];
                for offset in 0..len {
                    let position: usize = dims
                        .iter()
                        .zip(&row_strides)
                        .zip(&column_strides)
                        .map(|((dim, row), column)| (offset / row) % dim * column)
                        .sum();
                    offsets[position] = offset;
                }
                offsets
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_offsets_walk_first_axis_fastest() {
        let offsets = FlattenOrder::ColumnMajor.storage_offsets(&Shape::new([2, 3]));
        assert_eq!(offsets, vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn column_major_offsets_for_rank_three() {
        let offsets = FlattenOrder::ColumnMajor.storage_offsets(&Shape::new([2, 2, 2]));
        assert_eq!(offsets, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn row_major_offsets_are_identity() {
        let offsets = FlattenOrder::RowMajor.storage_offsets(&Shape::new([2, 3]));
        assert_eq!(offsets, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn scalar_and_empty_shapes() {
        assert_eq!(FlattenOrder::ColumnMajor.storage_offsets(&Shape::scalar()), vec![0]);
        assert!(FlattenOrder::ColumnMajor
            .storage_offsets(&Shape::new([0, 3]))
            .is_empty());
    }

    #[test]
    fn parses_short_forms() {
        assert_eq!(FlattenOrder::parse("F"), Some(FlattenOrder::ColumnMajor));
        assert_eq!(FlattenOrder::parse(" row "), Some(FlattenOrder::RowMajor));
        assert_eq!(FlattenOrder::parse("col"), Some(FlattenOrder::ColumnMajor));
        assert_eq!(FlattenOrder::parse("ROW_MAJOR"), Some(FlattenOrder::RowMajor));
        assert_eq!(FlattenOrder::parse("diagonal"), None);
    }

    #[test]
    fn parse_and_serde_accept_the_same_spellings() {
        for spelling in ["f", "fortran", "column", "col", "column_major", "c", "row", "row_major"] {
            let from_json: FlattenOrder =
                serde_json::from_value(serde_json::Value::String(spelling.to_string())).unwrap();
            assert_eq!(FlattenOrder::parse(spelling), Some(from_json), "{spelling}");
        }
    }
}
