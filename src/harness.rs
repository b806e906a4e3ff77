//! Monte-Carlo averaging of scattering functions.
//!
//! The mean of many scattered directions says how strongly a distribution leans towards its
//! reference direction: near the normal (scaled by the concentration) for the cosine-like models,
//! and along the axis of symmetry for the hemispherical ones.

use crate::ops::{add, dot, scale};
use crate::vector::Vector3;

pub const DEFAULT_COUNT: usize = 10_000;
pub const DEFAULT_NORMAL: Vector3 = Vector3::new(0.0, -1.0, 0.0);

/// Summary of a distribution's mean direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bias {
    pub mean: Vector3,
    /// Length of `mean`, 1 for a distribution collapsed onto one direction.
    pub concentration: f64,
    /// Component of `mean` along the reference normal.
    pub alignment: f64,
}

#[derive(Debug, Copy, Clone)]
pub struct Evaluation {
    pub count: usize,
    pub normal: Vector3,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, DEFAULT_NORMAL)
    }
}

impl Evaluation {
    pub fn new(count: usize, normal: Vector3) -> Self {
        Self { count, normal }
    }

    /// Averages `count` results of `callback(normal)`. Zero draws average to the zero vector.
    pub fn mean<F>(&self, mut callback: F) -> Vector3
    where
        F: FnMut(&Vector3) -> Vector3,
    {
        let mut output = Vector3::zero();
        if self.count == 0 {
            return output;
        }

        for _ in 0..self.count {
            add(&mut output, &callback(&self.normal));
        }
        scale(&mut output, 1.0 / self.count as f64);

        log::trace!("mean of {} draws about {:?}: {:?}", self.count, self.normal, output);

        output
    }

    pub fn bias<F>(&self, callback: F) -> Bias
    where
        F: FnMut(&Vector3) -> Vector3,
    {
        let mean = self.mean(callback);
        Bias {
            mean,
            concentration: mean.length(),
            alignment: dot(&mean, &self.normal),
        }
    }
}

/// Averages 10 000 draws of `callback` about the normal `(0, -1, 0)`.
pub fn test_scatter<F>(callback: F) -> Vector3
where
    F: FnMut(&Vector3) -> Vector3,
{
    Evaluation::default().mean(callback)
}
