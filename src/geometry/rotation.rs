use crate::math::{Point, Real, Rotation};
use rand::Rng;

/// Three rotation angles, in radians, around the `x`, `y` and `z` axes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Angles {
    /// Rotation around the `x` axis.
    pub x: Real,
    /// Rotation around the `y` axis.
    pub y: Real,
    /// Rotation around the `z` axis.
    pub z: Real,
}

impl Angles {
    /// The rotation matrix corresponding to these angles.
    pub fn rotation(&self) -> Rotation<Real> {
        rotation_matrix(self.x, self.y, self.z)
    }
}

/// Builds the rotation `Rz · Ry · Rx` for the given angles.
///
/// The result is a pure function of the angles.
#[inline]
pub fn rotation_matrix(x: Real, y: Real, z: Real) -> Rotation<Real> {
    Rotation::from_euler_angles(x, y, z)
}

/// Draws three angles uniformly in `[0, 2π)`.
pub fn random_angles(rng: &mut impl Rng) -> Angles {
    let two_pi = core::f64::consts::TAU;
    let mut angle = || rng.gen_range(0.0..two_pi) as Real;
    Angles {
        x: angle(),
        y: angle(),
        z: angle(),
    }
}

/// Applies `rotation` to `pt`.
///
/// Every rotated coordinate used by the partitioner goes through this function,
/// so the same input always yields bit-identical output.
#[inline]
pub(crate) fn rotate(rotation: &Rotation<Real>, pt: &Point<Real>) -> Point<Real> {
    rotation * pt
}
