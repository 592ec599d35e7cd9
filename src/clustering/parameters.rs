use crate::math::Real;

/// Parameters of the cluster discovery.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ClusteringParameters {
    /// Regions larger than this are never clusters, and merges never exceed it.
    pub max_size: usize,
    /// Final regions smaller than this are discarded.
    pub min_size: usize,
    /// Discard regions that look like thin lines (fences, cables…).
    pub line_filter: bool,
    /// Maximum distance between a face normal and the running mean normal of
    /// a region for the face to join it.
    pub normal_threshold: Real,
    /// Number of random orientations tried by the line filter.
    pub line_filter_samples: usize,
    /// A region is line-like if, in some orientation, one extent of its
    /// bounding box exceeds this factor times the sum of the two others.
    pub line_filter_ratio: Real,
    /// Regions at least this big are only checked by the line filter after merging.
    pub line_filter_deferred_size: usize,
}

impl Default for ClusteringParameters {
    fn default() -> Self {
        Self {
            max_size: 100_000,
            min_size: 10_000,
            line_filter: false,
            normal_threshold: 0.4,
            line_filter_samples: 20,
            line_filter_ratio: 3.0,
            line_filter_deferred_size: 1000,
        }
    }
}
