use super::ClusteringParameters;
use crate::figure::Figure;
use crate::geometry::random_angles;
use crate::math::{Point, Real};
use rand::Rng;

/// Checks whether the region made of the faces `region` of `figure` is a thin
/// line-like shape (a fence, a cable, a pole…).
///
/// The bounding box of the region is computed in `params.line_filter_samples`
/// random orientations. The region is line-like if, in any of them, one extent
/// exceeds `params.line_filter_ratio` times the sum of the two others.
pub fn is_line_like(
    figure: &Figure,
    region: &[u32],
    params: &ClusteringParameters,
    rng: &mut impl Rng,
) -> bool {
    let part = figure.subfigure(region);

    if part.num_vertices() == 0 {
        return false;
    }

    (0..params.line_filter_samples).any(|_| {
        let rotation = random_angles(rng).rotation();
        let points = part.turned_points(&rotation);
        let (mins, maxs) = points.iter().fold(
            (Point::from([Real::MAX; 3]), Point::from([-Real::MAX; 3])),
            |(mins, maxs), pt| (mins.inf(pt), maxs.sup(pt)),
        );

        let extents = maxs - mins;
        let longest = extents.max();
        longest > params.line_filter_ratio * (extents.sum() - longest)
    })
}
