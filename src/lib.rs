/*!
uvcut
========

**uvcut** splits large triangle meshes into a binary tree of sub-meshes small
enough to be handed, one by one, to a UV-atlas decomposer.

The pipeline is:

1. optionally discover "clusters" (coherent small objects) with
   [`clustering::discover_clusters`],
2. recursively cut the mesh with [`partitioning::partition`],
3. parametrize the resulting leaves with an [`atlas::AtlasDecomposer`].

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod atlas;
pub mod clustering;
pub mod executor;
pub mod figure;
pub mod geometry;
pub mod io;
pub mod partitioning;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f64"))]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point2, Point3, Rotation3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation matrix type.
    pub type Rotation<N> = Rotation3<N>;
}
