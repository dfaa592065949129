//! Nested numeric lists and their coercion into host tensors.
//!
//! Test batches are usually written as list literals (`vec![vec![1, 2], vec![3, 4]]`).
//! [`Nested`] captures arbitrarily deep lists and infers the tensor shape from
//! them, rejecting ragged input instead of guessing a layout.

use thiserror::Error;

use super::{shape::Shape, storage::StorageElement, Tensor};

/// Arbitrarily nested list of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<E> {
    Scalar(E),
    List(Vec<Nested<E>>),
}

/// Errors surfaced when a nested list does not describe a rectangular tensor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NestedError {
    #[error("ragged nested list at {path}: expected shape {expected}, found {found}")]
    Ragged {
        path: String,
        expected: Shape,
        found: Shape,
    },
}

impl<E: StorageElement> Nested<E> {
    /// Infers the shape, failing if sibling lists disagree.
    pub fn shape(&self) -> Result<Shape, NestedError> {
        let mut path = Vec::new();
        self.shape_at(&mut path).map(Shape::new)
    }

    fn shape_at(&self, path: &mut Vec<usize>) -> Result<Vec<usize>, NestedError> {
        match self {
            Nested::Scalar(_) => Ok(Vec::new()),
            Nested::List(items) => {
                let mut inner: Option<Vec<usize>> = None;
                for (i, item) in items.iter().enumerate() {
                    path.push(i);
                    let found = item.shape_at(path)?;
                    path.pop();
                    match &inner {
                        None => inner = Some(found),
                        Some(expected) if *expected != found => {
                            return Err(NestedError::Ragged {
                                path: format_path(path, i),
                                expected: Shape::new(expected.clone()),
                                found: Shape::new(found),
                            });
                        }
                        Some(_) => {}
                    }
                }
                let mut dims = vec![items.len()];
                dims.extend(inner.unwrap_or_default());
                Ok(dims)
            }
        }
    }

    /// Coerces the list into a row-major tensor.
    pub fn to_tensor(&self) -> Result<Tensor<E>, NestedError> {
        let shape = self.shape()?;
        let mut data = Vec::with_capacity(shape.num_elements());
        self.collect_into(&mut data);
        Ok(Tensor::from_parts(shape, data))
    }

    fn collect_into(&self, out: &mut Vec<E>) {
        match self {
            Nested::Scalar(value) => out.push(*value),
            Nested::List(items) => items.iter().for_each(|item| item.collect_into(out)),
        }
    }
}

fn format_path(parents: &[usize], index: usize) -> String {
    let mut path = String::from("sample");
    for i in parents.iter().chain(std::iter::once(&index)) {
        path.push_str(&format!("[{i}]"));
    }
    path
}

/// Conversion into a host tensor, accepting tensors and nested list literals alike.
pub trait IntoTensor<E: StorageElement> {
    /// Converts the value into a row-major host tensor.
    fn into_tensor(self) -> Result<Tensor<E>, NestedError>;
}

impl<E: StorageElement> IntoTensor<E> for Tensor<E> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        Ok(self)
    }
}

impl<E: StorageElement> IntoTensor<E> for &Tensor<E> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        Ok(self.clone())
    }
}

impl<E: StorageElement> IntoTensor<E> for Nested<E> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        self.to_tensor()
    }
}

impl<E: StorageElement> IntoTensor<E> for &Nested<E> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        self.to_tensor()
    }
}

impl<E: StorageElement> IntoTensor<E> for Vec<E> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        Nested::from(self).to_tensor()
    }
}

impl<E: StorageElement> IntoTensor<E> for Vec<Vec<E>> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        Nested::from(self).to_tensor()
    }
}

impl<E: StorageElement> IntoTensor<E> for Vec<Vec<Vec<E>>> {
    fn into_tensor(self) -> Result<Tensor<E>, NestedError> {
        Nested::from(self).to_tensor()
    }
}

impl<E: StorageElement> From<Vec<E>> for Nested<E> {
    fn from(values: Vec<E>) -> Self {
        Nested::List(values.into_iter().map(Nested::Scalar).collect())
    }
}

impl<E: StorageElement> From<Vec<Vec<E>>> for Nested<E> {
    fn from(rows: Vec<Vec<E>>) -> Self {
        Nested::List(rows.into_iter().map(Nested::from).collect())
    }
}

impl<E: StorageElement> From<Vec<Vec<Vec<E>>>> for Nested<E> {
    fn from(planes: Vec<Vec<Vec<E>>>) -> Self {
        Nested::List(planes.into_iter().map(Nested::from).collect())
    }
}
