pub mod config;
mod env;
pub mod layout;
pub mod sparse;
pub mod tensor;

pub use config::ConversionConfig;
pub use layout::FlattenOrder;
pub use sparse::{batch_dense_to_sparse, DynamicAxis, SparseBatch, SparseConverter, SparseError};
pub use tensor::{DType, Nested, Shape, Tensor};
