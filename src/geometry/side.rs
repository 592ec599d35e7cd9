use super::Line;
use crate::math::{Point, Real};

/// Values of the line equation closer to zero than this count as "on the line".
pub const INTERSECT_EPSILON: Real = 1.0e-6;

/// Position of a face relative to a separating [`Line`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Every vertex evaluates strictly positive.
    Left,
    /// Every vertex evaluates strictly negative.
    Right,
    /// The face straddles or touches the line.
    Cross,
}

impl Side {
    /// The opposite side. `Cross` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Cross => Side::Cross,
        }
    }
}

/// Classifies `face` against `line`, using the coordinates in `vertices`.
///
/// `vertices` must be expressed in the frame the line was built in. A single
/// vertex within [`INTERSECT_EPSILON`] of the line makes the whole face
/// [`Side::Cross`].
pub fn triangle_side(line: &Line, face: &[u32], vertices: &[Point<Real>]) -> Side {
    let mut positive = false;
    let mut negative = false;

    for vid in face {
        let val = line.eval(&vertices[*vid as usize]);

        if val.abs() <= INTERSECT_EPSILON {
            return Side::Cross;
        }

        if val > 0.0 {
            positive = true;
        } else {
            negative = true;
        }
    }

    match (positive, negative) {
        (true, false) => Side::Left,
        (false, true) => Side::Right,
        _ => Side::Cross,
    }
}
