//! UV-atlas decomposition of partition leaves.

pub use self::planar::PlanarAtlas;

use crate::figure::{Figure, FigureError, ParametrizedFigure};

mod planar;

/// Error raised by an [`AtlasDecomposer`].
#[derive(thiserror::Error, Debug)]
pub enum AtlasError {
    /// There is nothing to decompose.
    #[error("cannot build an atlas without any leaf.")]
    EmptyDivision,
    /// The assembled mesh is invalid.
    #[error(transparent)]
    Mesh(#[from] FigureError),
}

/// Computes a single texture atlas out of the leaves of a partition.
pub trait AtlasDecomposer {
    /// Parametrizes every leaf and assembles them into one textured figure.
    fn decompose(&self, leaves: &[Figure]) -> Result<ParametrizedFigure, AtlasError>;
}
