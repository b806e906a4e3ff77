//! Direction sampling for Monte-Carlo path tracing.
//!
//! Given an incoming ray and/or a surface normal, the functions in [`scattering`] produce a new
//! direction from one of several distributions. Randomness always comes from a caller supplied
//! [`rand::Rng`]; [`rng::ThreadPrng`] is a convenient per-thread source.

pub mod config;
pub mod distributions;
pub mod harness;
pub mod ops;
pub mod rng;
pub mod scattering;
mod testbase;
pub mod vector;

pub use crate::harness::test_scatter;
pub use crate::vector::Vector3;
