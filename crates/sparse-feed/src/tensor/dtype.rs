//! Enumerates the scalar element types a host tensor can carry.

/// Logical dtype identifier shared by host tensors and sparse batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point following IEEE-754 semantics.
    F32,
    /// 64-bit floating point.
    F64,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer, the default for integer literals in test batches.
    I64,
}

impl DType {
    /// Short lowercase name used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::I32 => "i32",
            DType::I64 => "i64",
        }
    }
}
