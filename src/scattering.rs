//! Scattered ray directions.
//!
//! Each function combines a base direction (the incoming ray, the normal or the mirror reflection)
//! with jitter from [`crate::distributions`]. Some of the resulting distributions are not the
//! physically "correct" ones; their exact shape is part of their look and must not be altered.

use crate::distributions::{random_float, random_sphere_surface, random_sphere_volume};
use crate::ops::{add, copy_vector, dot, make_scaled, normalize, reflect, scale};
use crate::vector::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Width of the jitter when the caller has no preference.
pub const DEFAULT_SPREAD: f64 = 1.0;

/// Jitters `ray` in place by a point sampled uniformly inside a ball of radius `spread`, then
/// renormalizes it.
pub fn scatter<R>(ray: &mut Vector3, spread: f64, rng: &mut R)
where
    R: Rng + ?Sized,
{
    add(ray, &make_scaled(&random_sphere_volume(rng), spread));
    normalize(ray);
}

/// Cosine-weighted direction about `normal`.
///
/// Adding a uniform unit vector to the normal and normalizing yields a density proportional to the
/// cosine of the angle from the normal.
pub fn diffuse_scatter<R>(normal: &Vector3, rng: &mut R) -> Vector3
where
    R: Rng + ?Sized,
{
    let mut jitter = random_sphere_surface(rng);
    add(&mut jitter, normal);
    normalize(&mut jitter);
    jitter
}

/// Like [`diffuse_scatter`] but with the sphere point written out around the normal.
///
/// The polar artifact of this construction produces angle invariant hot spots: tight drop
/// shadows and cohesive pockets of light on surfaces that face a light source.
pub fn center_weighted_scatter<R>(normal: &Vector3, rng: &mut R) -> Vector3
where
    R: Rng + ?Sized,
{
    let angle = random_float(rng, 2.0 * PI);
    let z = rng.gen::<f64>() * 2.0 - 1.0;
    let r = (1.0 - z * z).sqrt();

    let mut ray = Vector3::new(
        normal.x + r * angle.cos(),
        normal.y + r * angle.sin(),
        normal.z + z,
    );
    normalize(&mut ray);
    ray
}

/// Uniform direction in the hemisphere around the unit vector `ray`.
///
/// The backfacing half of the sphere is mirrored onto the front half. Reflection about a plane
/// preserves length, so the result is unit length without normalizing.
pub fn hemispherical_scatter<R>(ray: &Vector3, rng: &mut R) -> Vector3
where
    R: Rng + ?Sized,
{
    let mut jitter = random_sphere_surface(rng);
    let shadow = dot(&jitter, ray);
    if shadow < 0.0 {
        add(&mut jitter, &make_scaled(ray, -2.0 * shadow));
    }
    jitter
}

/// A cone around the mirror reflection of `ray` about `normal`.
///
/// The jitter length is itself uniformly random, which concentrates samples near the clean
/// reflection. `spread = 0` is a perfect mirror, `spread = 1` a heavily center weighted
/// hemisphere.
pub fn scattered_reflection_clustered<R>(
    ray: &Vector3,
    normal: &Vector3,
    spread: f64,
    rng: &mut R,
) -> Vector3
where
    R: Rng + ?Sized,
{
    let mut reflected = reflect(ray, normal);
    let mut jitter = random_sphere_surface(rng);
    scale(&mut jitter, spread * rng.gen::<f64>());
    add(&mut reflected, &jitter);
    normalize(&mut reflected);
    reflected
}

/// A cone around the mirror reflection of `ray` about `normal`, jittered by a uniform ball.
///
/// The ball radius is `dot(ray, normal) * spread`, so the cone narrows for grazing rays.
pub fn scattered_reflection_uniform<R>(
    ray: &Vector3,
    normal: &Vector3,
    spread: f64,
    rng: &mut R,
) -> Vector3
where
    R: Rng + ?Sized,
{
    let parallel_magnitude = dot(ray, normal);
    let mut reflected = reflect(ray, normal);
    let mut jitter = random_sphere_volume(rng);
    scale(&mut jitter, parallel_magnitude * spread);
    add(&mut reflected, &jitter);
    normalize(&mut reflected);
    reflected
}

/// Uniform direction in the hemisphere around the mirror reflection of `ray` about `normal`.
pub fn hemispherical_scattered_reflection<R>(
    ray: &Vector3,
    normal: &Vector3,
    rng: &mut R,
) -> Vector3
where
    R: Rng + ?Sized,
{
    let reflected = reflect(ray, normal);

    let mut jitter = random_sphere_surface(rng);
    let shadow = dot(&jitter, &reflected);
    if shadow < 0.0 {
        add(&mut jitter, &make_scaled(&reflected, -2.0 * shadow));
    }
    normalize(&mut jitter);
    jitter
}

fn default_spread() -> f64 {
    DEFAULT_SPREAD
}

/// One of the scattering functions above, selectable by name.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScatterModel {
    Jitter {
        #[serde(default = "default_spread")]
        spread: f64,
    },
    Diffuse,
    CenterWeighted,
    Hemispherical,
    ReflectionClustered {
        #[serde(default = "default_spread")]
        spread: f64,
    },
    ReflectionUniform {
        #[serde(default = "default_spread")]
        spread: f64,
    },
    HemisphericalReflection,
}

impl ScatterModel {
    pub fn name(&self) -> String {
        match self {
            Self::Jitter { spread } => format!("jitter (spread {})", spread),
            Self::Diffuse => "diffuse".to_string(),
            Self::CenterWeighted => "center weighted".to_string(),
            Self::Hemispherical => "hemispherical".to_string(),
            Self::ReflectionClustered { spread } => {
                format!("clustered reflection (spread {})", spread)
            }
            Self::ReflectionUniform { spread } => format!("uniform reflection (spread {})", spread),
            Self::HemisphericalReflection => "hemispherical reflection".to_string(),
        }
    }

    /// Draws one direction.
    ///
    /// The reflection models reflect `incoming` about `normal`; every other model scatters
    /// `normal` itself.
    pub fn sample<R>(&self, incoming: &Vector3, normal: &Vector3, rng: &mut R) -> Vector3
    where
        R: Rng + ?Sized,
    {
        match *self {
            Self::Jitter { spread } => {
                let mut ray = copy_vector(normal);
                scatter(&mut ray, spread, rng);
                ray
            }
            Self::Diffuse => diffuse_scatter(normal, rng),
            Self::CenterWeighted => center_weighted_scatter(normal, rng),
            Self::Hemispherical => hemispherical_scatter(normal, rng),
            Self::ReflectionClustered { spread } => {
                scattered_reflection_clustered(incoming, normal, spread, rng)
            }
            Self::ReflectionUniform { spread } => {
                scattered_reflection_uniform(incoming, normal, spread, rng)
            }
            Self::HemisphericalReflection => {
                hemispherical_scattered_reflection(incoming, normal, rng)
            }
        }
    }
}
