//! Discovery of "interesting regions" (clusters) of a mesh.
//!
//! A cluster is a set of adjacent faces with similar orientation, meant to
//! capture one small coherent object (a tree, a fence, a small building) that
//! the partitioner should try not to cut through.
//!
//! The discovery runs in three stages:
//!
//! 1. faces are grouped by region growing over the edge-adjacency graph
//!    ([`FaceGraph`], [`grow_regions`]),
//! 2. small regions are greedily merged with the neighbor they share the most
//!    vertices with ([`merge_regions`]),
//! 3. regions outside of the configured size bounds (and, optionally,
//!    line-shaped regions) are discarded.

pub use self::adjacency::FaceGraph;
pub use self::growing::{grow_region, grow_regions};
pub use self::line_filter::is_line_like;
pub use self::merging::merge_regions;
pub use self::parameters::ClusteringParameters;

use crate::figure::Figure;
use crate::utils::mix_seed;
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;

mod adjacency;
mod growing;
mod line_filter;
mod merging;
mod parameters;

/// Finds the clusters of `figure`.
///
/// The returned face groups are pairwise disjoint and each contains between
/// `params.min_size` and `params.max_size` faces. They can be passed directly
/// to [`Figure::set_clusters`]. The result is fully determined by `figure`,
/// `params` and `seed`.
pub fn discover_clusters(figure: &Figure, params: &ClusteringParameters, seed: u64) -> Vec<Vec<u32>> {
    let graph = FaceGraph::new(figure);
    let mut rng = Isaac64Rng::seed_from_u64(mix_seed(seed, 0));

    let regions: Vec<_> = grow_regions(&graph, figure, params.normal_threshold)
        .into_iter()
        .filter(|region| region.len() <= params.max_size)
        .filter(|region| {
            // Large regions are checked once merging is done.
            !params.line_filter
                || region.len() >= params.line_filter_deferred_size
                || !is_line_like(figure, region, params, &mut rng)
        })
        .collect();
    log::debug!("{} candidate regions after growing", regions.len());

    let mut clusters = merge_regions(regions, figure, params, &mut rng);
    clusters.retain(|cluster| cluster.len() >= params.min_size);
    clusters.shrink_to_fit();
    log::debug!("{} clusters kept", clusters.len());
    clusters
}
