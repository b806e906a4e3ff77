//! Free vector operations.
//!
//! `add`, `scale` and `normalize` mutate their first argument in place; `make_scaled`,
//! `copy_vector` and `reflect` return a fresh value and leave their inputs alone.

use crate::vector::Vector3;

#[inline]
pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// `a := a + b`
#[inline]
pub fn add(a: &mut Vector3, b: &Vector3) {
    *a += *b;
}

/// `a := k * a`
#[inline]
pub fn scale(a: &mut Vector3, k: f64) {
    *a *= k;
}

#[inline]
pub fn make_scaled(a: &Vector3, k: f64) -> Vector3 {
    *a * k
}

#[inline]
pub fn copy_vector(a: &Vector3) -> Vector3 {
    *a
}

/// Scales `a` to unit length.
///
/// A zero-length vector is left as it is. The caller has to treat it as a degenerate direction.
pub fn normalize(a: &mut Vector3) {
    let length = a.length();
    if length != 0.0 {
        a.x /= length;
        a.y /= length;
        a.z /= length;
    }
}

/// Mirror reflection of `v` about the unit normal `n`: `v - 2 (v . n) n`.
pub fn reflect(v: &Vector3, n: &Vector3) -> Vector3 {
    let mut reflected = copy_vector(v);
    add(&mut reflected, &make_scaled(n, -2.0 * dot(v, n)));
    reflected
}
