use super::{Face, Figure};
use crate::math::{Point2, Real};

/// Texture coordinates attached to a figure.
///
/// `uv_faces[i]` lists, for each corner of the `i`-th face of the figure, an
/// index into `uvs`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct UvOverlay {
    /// The texture coordinates.
    pub uvs: Vec<Point2<Real>>,
    /// Per-face indices into `uvs`, in the same order as the figure faces.
    pub uv_faces: Vec<Face>,
}

impl UvOverlay {
    /// Checks that this overlay matches the faces of `figure`: same face
    /// count, same corner count per face, and in-range uv indices.
    pub fn fits(&self, figure: &Figure) -> bool {
        self.uv_faces.len() == figure.num_faces()
            && self
                .uv_faces
                .iter()
                .zip(figure.faces())
                .all(|(uv_face, face)| {
                    uv_face.len() == face.len()
                        && uv_face.iter().all(|id| (*id as usize) < self.uvs.len())
                })
    }

    /// The texture coordinates of each corner of the `face_id`-th face.
    pub fn face_uvs(&self, face_id: usize) -> impl Iterator<Item = &Point2<Real>> + '_ {
        self.uv_faces[face_id]
            .iter()
            .map(move |id| &self.uvs[*id as usize])
    }
}

/// A figure together with its UV parametrization.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ParametrizedFigure {
    /// The geometry.
    pub figure: Figure,
    /// The texture coordinates of every face corner of `figure`.
    pub overlay: UvOverlay,
}
