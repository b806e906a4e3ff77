//! Common utilities shared by unit tests.
#![cfg(test)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::vector::Vector3;

/// Number of draws used by the statistical tests.
pub const SAMPLES: usize = 100_000;

/// A deterministic generator so statistical tests can't flake.
pub fn seeded_rng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(0x5ca7_7e12)
}

prop_compose! {
    /// An arbitrary unit vector, built from spherical coordinates independently of the samplers
    /// under test.
    pub fn unit_vector()(
        azimuth in 0.0..std::f64::consts::TAU,
        polar in 0.0..std::f64::consts::PI,
    ) -> Vector3 {
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        let (sin_polar, cos_polar) = polar.sin_cos();
        Vector3::new(sin_polar * cos_azimuth, sin_polar * sin_azimuth, cos_polar)
    }
}

prop_compose! {
    /// A seed for a fresh generator, so property tests cover many random streams.
    pub fn rng_seed()(seed in any::<u64>()) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }
}
