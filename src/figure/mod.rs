//! The mesh model: figures, their clusters, and UV-parametrized figures.

pub use self::error::FigureError;
pub use self::figure::{Face, Figure};
pub use self::parametrized::{ParametrizedFigure, UvOverlay};

mod error;
mod figure;
mod parametrized;
