//! Random points on and inside the unit sphere.
//!
//! These are the randomness source for every scattering function. Both samplers use the
//! hat-box construction (uniform `z` plus uniform azimuth) rather than normalizing a random point
//! in a cube, which would pile density up towards the cube's corners.

use crate::vector::Vector3;
use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::PI;

/// Uniformly distributed unit vectors.
pub struct SphereSurface;

impl Distribution<Vector3> for SphereSurface {
    fn sample<R>(&self, rng: &mut R) -> Vector3
    where
        R: Rng + ?Sized,
    {
        let angle = 2.0 * PI * rng.gen::<f64>();
        let z = 2.0 * rng.gen::<f64>() - 1.0;
        let r = (1.0 - z * z).sqrt();

        let (sin_angle, cos_angle) = angle.sin_cos();

        Vector3::new(r * cos_angle, r * sin_angle, z)
    }
}

/// Points uniformly distributed by volume inside the unit ball.
pub struct SphereVolume;

impl Distribution<Vector3> for SphereVolume {
    fn sample<R>(&self, rng: &mut R) -> Vector3
    where
        R: Rng + ?Sized,
    {
        let surface = SphereSurface.sample(rng);
        // `cbrt` so that the density is uniform in volume and not in radius.
        let radius = rng.gen::<f64>().cbrt();

        surface * radius
    }
}

pub fn random_sphere_surface<R>(rng: &mut R) -> Vector3
where
    R: Rng + ?Sized,
{
    SphereSurface.sample(rng)
}

pub fn random_sphere_volume<R>(rng: &mut R) -> Vector3
where
    R: Rng + ?Sized,
{
    SphereVolume.sample(rng)
}

/// Uniform in `[0, max)`.
pub fn random_float<R>(rng: &mut R, max: f64) -> f64
where
    R: Rng + ?Sized,
{
    rng.gen::<f64>() * max
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testbase::{seeded_rng, SAMPLES};
    use approx::assert_abs_diff_eq;

    #[test]
    fn surface_samples_are_unit_length() {
        let mut rng = seeded_rng();
        for v in SphereSurface.sample_iter(&mut rng).take(1000) {
            assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn surface_is_isotropic() {
        let mut rng = seeded_rng();

        let mut sum = Vector3::zero();
        let mut squares = Vector3::zero();
        for v in SphereSurface.sample_iter(&mut rng).take(SAMPLES) {
            sum += v;
            squares += Vector3::new(v.x * v.x, v.y * v.y, v.z * v.z);
        }
        let mean = sum * (1.0 / SAMPLES as f64);
        let variance = squares * (1.0 / SAMPLES as f64);

        assert!(mean.length() < 0.01, "biased mean {:?}", mean);
        assert_abs_diff_eq!(variance, Vector3::new(1.0, 1.0, 1.0) * (1.0 / 3.0), epsilon = 0.01);
    }

    #[test]
    fn volume_samples_stay_inside() {
        let mut rng = seeded_rng();
        for _ in 0..1000 {
            assert!(random_sphere_volume(&mut rng).length() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn volume_radius_density_grows_with_r_squared() {
        const BINS: usize = 10;

        let mut rng = seeded_rng();
        let mut histogram = [0usize; BINS];
        for v in SphereVolume.sample_iter(&mut rng).take(SAMPLES) {
            let bin = ((v.length() * BINS as f64) as usize).min(BINS - 1);
            histogram[bin] += 1;
        }

        for (i, &count) in histogram.iter().enumerate() {
            let lo = i as f64 / BINS as f64;
            let hi = (i + 1) as f64 / BINS as f64;
            let expected = hi.powi(3) - lo.powi(3);
            assert_abs_diff_eq!(count as f64 / SAMPLES as f64, expected, epsilon = 0.01);
        }

        // Uniform-in-radius sampling would put half of the points in the inner half.
        let inner_half: usize = histogram[..BINS / 2].iter().sum();
        assert_abs_diff_eq!(inner_half as f64 / SAMPLES as f64, 0.125, epsilon = 0.01);
    }

    #[test]
    fn random_float_range() {
        let mut rng = seeded_rng();
        let mut sum = 0.0;
        for _ in 0..SAMPLES {
            let x = random_float(&mut rng, 2.0 * PI);
            assert!((0.0..2.0 * PI).contains(&x));
            sum += x;
        }

        assert_abs_diff_eq!(sum / SAMPLES as f64, PI, epsilon = 0.02);
    }
}
