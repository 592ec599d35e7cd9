use super::ParametersError;
use crate::clustering::ClusteringParameters;

/// Parameters of the partitioning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Parameters {
    /// Maximum depth of the recursion tree. With a depth of `N` and no other
    /// limit, the figure is cut into `2^N` leaves. `None` means unlimited.
    pub depth: Option<u32>,
    /// Figures with at most this number of faces are not cut any further.
    /// `0` lets the depth alone control the recursion.
    pub acceptable_size: usize,
    /// Number of random orientations tried for each cut. Higher values give
    /// better cuts at the price of more work.
    pub parts: usize,
    /// Discover clusters before partitioning, and try not to cut through them.
    pub clusterization: bool,
    /// Minimum size of a cluster.
    pub cluster_min_size: usize,
    /// Maximum size of a cluster.
    pub cluster_max_size: usize,
    /// Discard line-shaped clusters.
    pub optimize_clusters: bool,
    /// Save every leaf to its own file.
    pub save_partition: bool,
    /// Seed all the random choices derive from.
    pub seed: u64,
    /// Size of the worker pool. `None` uses one thread per core.
    pub threads: Option<usize>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            depth: None,
            acceptable_size: 0,
            parts: 16,
            clusterization: false,
            cluster_min_size: 10_000,
            cluster_max_size: 100_000,
            optimize_clusters: false,
            save_partition: false,
            seed: 0,
            threads: None,
        }
    }
}

impl Parameters {
    /// Checks the consistency of these parameters.
    pub fn validate(&self) -> Result<(), ParametersError> {
        if self.depth.is_none() && self.acceptable_size == 0 {
            return Err(ParametersError::NoTermination);
        }

        if self.parts == 0 {
            return Err(ParametersError::ZeroParts);
        }

        if self.threads == Some(0) {
            return Err(ParametersError::ZeroThreads);
        }

        if self.cluster_min_size > self.cluster_max_size {
            return Err(ParametersError::ClusterBounds {
                min: self.cluster_min_size,
                max: self.cluster_max_size,
            });
        }

        // A cluster kept whole on one side may otherwise be re-split forever.
        if self.clusterization
            && self.depth.is_none()
            && self.cluster_max_size > self.acceptable_size
        {
            return Err(ParametersError::UnboundedCluster {
                max_cluster: self.cluster_max_size,
                acceptable_size: self.acceptable_size,
            });
        }

        Ok(())
    }

    /// The parameters of the cluster discovery.
    pub fn clustering(&self) -> ClusteringParameters {
        ClusteringParameters {
            max_size: self.cluster_max_size,
            min_size: self.cluster_min_size,
            line_filter: self.optimize_clusters,
            ..ClusteringParameters::default()
        }
    }

    /// A textual summary of these parameters, prefixed by `name`.
    ///
    /// Suitable as a file name prefix.
    pub fn description(&self, name: &str) -> String {
        let depth = self
            .depth
            .map_or_else(|| "inf".to_string(), |d| d.to_string());
        format!(
            "{}_{}_{}_{}_{}_{}_{}_{}",
            name,
            depth,
            self.acceptable_size,
            self.parts,
            self.clusterization as u8,
            self.cluster_min_size,
            self.cluster_max_size,
            self.optimize_clusters as u8
        )
    }
}
