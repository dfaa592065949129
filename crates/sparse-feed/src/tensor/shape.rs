//! Lightweight wrapper for tensor shapes and dimension bookkeeping.

use std::fmt;

/// Stores the logical dimensions of a tensor.
///
/// A rank-0 shape describes a scalar. This happens when a dynamic axis is
/// stripped from a plain sequence of scalars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Constructs a new shape from the provided dimensions.
    pub fn new<D: Into<Vec<usize>>>(dims: D) -> Self {
        Shape { dims: dims.into() }
    }

    /// Shape of a single scalar value.
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    /// Borrow the raw dimension slice for downstream calculations.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the rank (number of axes) of the shape.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Computes the total number of elements implied by the shape.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Drops the leading axis, returning the scalar shape for rank-0 inputs.
    pub fn without_leading_axis(&self) -> Shape {
        Shape {
            dims: self.dims.iter().skip(1).copied().collect(),
        }
    }

    /// Row-major (C order) strides: the last index varies fastest.
    pub fn row_major_strides(&self) -> Vec<usize> {
        let mut strides = vec![0usize; self.dims.len()];
        let mut stride = 1usize;
        for axis in (0..self.dims.len()).rev() {
            strides[axis] = stride;
            stride *= self.dims[axis];
        }
        strides
    }

    /// Column-major (Fortran order) strides: the first index varies fastest.
    pub fn column_major_strides(&self) -> Vec<usize> {
        let mut strides = vec![0usize; self.dims.len()];
        let mut stride = 1usize;
        for (axis, dim) in self.dims.iter().enumerate() {
            strides[axis] = stride;
            stride *= dim;
        }
        strides
    }
}

/// Formats like a tuple literal: `()`, `(1,)`, `(2, 3)`.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dims.as_slice() {
            [] => write!(f, "()"),
            [only] => write!(f, "({only},)"),
            dims => {
                write!(f, "(")?;
                for (i, dim) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{dim}")?;
                }
                write!(f, ")")
            }
        }
    }
}
