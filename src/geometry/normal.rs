use crate::math::{Point, Real, Vector};

/// Vectors shorter than this are left as-is instead of being normalized.
const NORMALIZATION_EPSILON: Real = 1.0e-7;

/// Normalizes `v` unless it is (nearly) zero, in which case it is returned unchanged.
#[inline]
pub(crate) fn normalize_or_keep(v: Vector<Real>) -> Vector<Real> {
    let norm = v.norm();
    if norm > NORMALIZATION_EPSILON {
        v / norm
    } else {
        v
    }
}

/// The unit normal of the face `face`, computed from its first three vertices.
///
/// Degenerate faces yield a zero-length (or nearly zero-length) vector that
/// is not normalized.
pub fn face_normal(face: &[u32], vertices: &[Point<Real>]) -> Vector<Real> {
    let p1 = &vertices[face[0] as usize];
    let p2 = &vertices[face[1] as usize];
    let p3 = &vertices[face[2] as usize];
    normalize_or_keep((p2 - p1).cross(&(p3 - p1)))
}

/// Euclidean distance between the normalized versions of `a` and `b`.
///
/// This is a cheap, monotonic proxy for the angle between two directions.
pub fn normal_distance(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    (normalize_or_keep(*a) - normalize_or_keep(*b)).norm()
}
