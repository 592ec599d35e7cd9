use super::{AtlasDecomposer, AtlasError};
use crate::figure::{Face, Figure, ParametrizedFigure, UvOverlay};
use crate::math::{Point, Point2, Real, Vector};
use crate::utils;
use na::Vector2;

/// An atlas decomposer projecting each leaf on the plane orthogonal to its
/// dominant axis.
///
/// Each leaf gets one square tile of a near-square grid covering `[0, 1]²`.
/// Its projection is scaled uniformly to fit the tile, minus a margin of
/// `gutter` (relative to the tile size) on every border.
///
/// Faces folding over each other in the projection overlap in the atlas: this
/// is only suitable for leaves that are roughly flat.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarAtlas {
    /// Relative margin around each tile, in `[0, 0.5)`.
    pub gutter: Real,
}

impl Default for PlanarAtlas {
    fn default() -> Self {
        Self { gutter: 0.02 }
    }
}

impl PlanarAtlas {
    /// Creates a decomposer with the given relative margin around each tile.
    pub fn new(gutter: Real) -> Self {
        Self {
            gutter: gutter.clamp(0.0, 0.49),
        }
    }
}

/// The index of the coordinate axis most aligned with the area-weighted
/// normal of `figure`.
fn dominant_axis(figure: &Figure) -> usize {
    let vertices = figure.vertices();
    let mut normal = Vector::zeros();

    for face in figure.faces() {
        let origin = vertices[face[0] as usize];
        for w in face[1..].windows(2) {
            let a = vertices[w[0] as usize] - origin;
            let b = vertices[w[1] as usize] - origin;
            normal += a.cross(&b);
        }
    }

    normal.iamax()
}

/// Projects `figure` along its dominant axis and scales the result into
/// `[0, 1]²`, preserving the aspect ratio.
fn project(figure: &Figure) -> Vec<Point2<Real>> {
    let axis = dominant_axis(figure);
    let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);
    let projected: Vec<Point2<Real>> = figure
        .vertices()
        .iter()
        .map(|pt: &Point<Real>| Point2::new(pt[u], pt[v]))
        .collect();

    let Some(first) = projected.first() else {
        return projected;
    };
    let (mins, maxs) = projected
        .iter()
        .fold((*first, *first), |(mins, maxs), pt| (mins.inf(pt), maxs.sup(pt)));
    let extent = (maxs - mins).max();
    let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };

    projected
        .into_iter()
        .map(|pt| Point2::from((pt - mins) * scale))
        .collect()
}

impl AtlasDecomposer for PlanarAtlas {
    fn decompose(&self, leaves: &[Figure]) -> Result<ParametrizedFigure, AtlasError> {
        if leaves.is_empty() {
            return Err(AtlasError::EmptyDivision);
        }

        let tiles = utils::map_ordered(leaves, project);

        let cols = (leaves.len() as Real).sqrt().ceil() as usize;
        let cell = 1.0 / cols as Real;
        let margin = cell * self.gutter;
        let inner = cell - 2.0 * margin;

        let num_vertices = leaves.iter().map(|l| l.num_vertices()).sum();
        let num_faces = leaves.iter().map(|l| l.num_faces()).sum();
        let mut vertices = Vec::with_capacity(num_vertices);
        let mut faces: Vec<Face> = Vec::with_capacity(num_faces);
        let mut uvs = Vec::with_capacity(num_vertices);

        for (i, (leaf, tile)) in leaves.iter().zip(tiles).enumerate() {
            let base = vertices.len() as u32;
            let corner = Vector2::new(
                (i % cols) as Real * cell + margin,
                (i / cols) as Real * cell + margin,
            );

            vertices.extend_from_slice(leaf.vertices());
            faces.extend(
                leaf.faces()
                    .iter()
                    .map(|face| face.iter().map(|vid| vid + base).collect()),
            );
            uvs.extend(tile.into_iter().map(|uv| Point2::from(uv.coords * inner + corner)));
        }

        log::debug!(
            "planar atlas: {} tiles on a {}-column grid, {} faces",
            leaves.len(),
            cols,
            faces.len()
        );

        let uv_faces = faces.clone();
        let figure = Figure::new(vertices, faces)?;
        Ok(ParametrizedFigure {
            figure,
            overlay: UvOverlay { uvs, uv_faces },
        })
    }
}

#[cfg(test)]
mod test {
    use super::{dominant_axis, project, PlanarAtlas};
    use crate::atlas::{AtlasDecomposer, AtlasError};
    use crate::figure::Figure;
    use crate::math::{Point, Point2, Real};
    use smallvec::smallvec;

    fn square(origin: Point<Real>, size: Real) -> Figure {
        Figure::new(
            vec![
                origin,
                origin + crate::math::Vector::x() * size,
                origin + crate::math::Vector::new(size, 0.0, size),
                origin + crate::math::Vector::z() * size,
            ],
            vec![smallvec![0, 1, 2], smallvec![0, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn projection_fills_unit_square() {
        let figure = square(Point::new(3.0, 1.0, -2.0), 4.0);
        assert_eq!(dominant_axis(&figure), 1);

        let uvs = project(&figure);
        let expected = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        for (uv, expected) in uvs.iter().zip(expected.iter()) {
            assert_relative_eq!(*uv, *expected);
        }
    }

    #[test]
    fn tiles_do_not_overlap() {
        let leaves: Vec<_> = (0..5)
            .map(|i| square(Point::new(i as Real * 10.0, 0.0, 0.0), 1.0 + i as Real))
            .collect();
        let atlas = PlanarAtlas::new(0.05).decompose(&leaves).unwrap();

        assert_eq!(atlas.figure.num_faces(), 10);
        assert_eq!(atlas.figure.num_vertices(), 20);
        assert!(atlas.overlay.fits(&atlas.figure));
        assert!(atlas
            .overlay
            .uvs
            .iter()
            .all(|uv| uv.x >= 0.0 && uv.x <= 1.0 && uv.y >= 0.0 && uv.y <= 1.0));

        // 5 leaves on a 3x3 grid: every tile stays inside its own cell.
        let cell = 1.0 / 3.0;
        for (i, chunk) in atlas.overlay.uvs.chunks(4).enumerate() {
            let (col, row) = ((i % 3) as Real, (i / 3) as Real);
            for uv in chunk {
                assert!(uv.x > col * cell && uv.x < (col + 1.0) * cell);
                assert!(uv.y > row * cell && uv.y < (row + 1.0) * cell);
            }
        }
    }

    #[test]
    fn empty_division_is_an_error() {
        assert!(matches!(
            PlanarAtlas::default().decompose(&[]),
            Err(AtlasError::EmptyDivision)
        ));
    }
}
