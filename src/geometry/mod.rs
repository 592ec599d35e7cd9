//! Geometric primitives used to score and apply cuts.

pub use self::line::Line;
pub use self::normal::{face_normal, normal_distance};
pub use self::rotation::{random_angles, rotation_matrix, Angles};
pub(crate) use self::rotation::rotate;
pub use self::side::{triangle_side, Side, INTERSECT_EPSILON};

mod line;
mod normal;
mod rotation;
mod side;
