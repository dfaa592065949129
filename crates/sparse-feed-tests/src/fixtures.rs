//! Canonical dense batches and their expected sparse encodings.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_feed::tensor::{Nested, Shape, Tensor};

/// A dense batch together with the triple it must convert to.
pub struct Fixture {
    pub name: &'static str,
    pub batch: Vec<Nested<i64>>,
    pub indices: Vec<Vec<usize>>,
    pub values: Vec<Vec<i64>>,
    pub shape: Shape,
}

/// Two fully dense `(2, 3)` samples.
pub fn full_batch() -> Fixture {
    Fixture {
        name: "full",
        batch: vec![
            Nested::from(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Nested::from(vec![vec![10, 20, 30], vec![40, 50, 60]]),
        ],
        indices: vec![vec![0, 1, 2, 3, 4, 5], vec![0, 1, 2, 3, 4, 5]],
        values: vec![vec![1, 4, 2, 5, 3, 6], vec![10, 40, 20, 50, 30, 60]],
        shape: Shape::new([2, 3]),
    }
}

/// A batch holding the one-element vector `[1]`.
pub fn single_sample() -> Fixture {
    Fixture {
        name: "single",
        batch: vec![Nested::from(vec![1])],
        indices: vec![vec![0]],
        values: vec![vec![1]],
        shape: Shape::new([1]),
    }
}

/// `(2, 3)` samples with zeros, one of them with an all-zero first row.
pub fn batch_with_zeros() -> Fixture {
    Fixture {
        name: "zeros",
        batch: vec![
            Nested::from(vec![vec![1, 2, 3], vec![4, 0, 6]]),
            Nested::from(vec![vec![0, 0, 0], vec![40, 50, 60]]),
        ],
        indices: vec![vec![0, 1, 2, 4, 5], vec![1, 3, 5]],
        values: vec![vec![1, 4, 2, 3, 6], vec![40, 50, 60]],
        shape: Shape::new([2, 3]),
    }
}

pub fn all() -> Vec<Fixture> {
    vec![full_batch(), single_sample(), batch_with_zeros()]
}

/// Samples of one shape with roughly `density` of their entries non-zero.
pub fn random_batch(seed: u64, shape: &Shape, samples: usize, density: f64) -> Vec<Tensor<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..samples)
        .map(|_| {
            let data = (0..shape.num_elements())
                .map(|_| {
                    if rng.gen_bool(density) {
                        rng.gen_range(1.0f32..10.0)
                    } else {
                        0.0
                    }
                })
                .collect();
            Tensor::from_vec(shape.clone(), data)
                .unwrap_or_else(|err| panic!("random fixture has a bad shape: {err}"))
        })
        .collect()
}
