use crate::io::MeshIoError;
use std::path::PathBuf;

/// Indicates invalid partitioning parameters.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParametersError {
    /// Neither a depth limit nor an acceptable leaf size was given.
    #[error("at least one of the depth limit or the acceptable leaf size must be specified.")]
    NoTermination,
    /// At least one orientation must be tried per cut.
    #[error("the number of orientations tried per cut must be positive.")]
    ZeroParts,
    /// The worker pool needs at least one thread.
    #[error("the number of worker threads must be positive.")]
    ZeroThreads,
    /// The cluster size bounds are inverted.
    #[error("the minimum cluster size ({min}) cannot be larger than the maximum cluster size ({max}).")]
    ClusterBounds {
        /// The minimum cluster size.
        min: usize,
        /// The maximum cluster size.
        max: usize,
    },
    /// Clusters may be larger than leaves while nothing bounds the recursion depth.
    #[error("the maximum cluster size ({max_cluster}) cannot exceed the acceptable leaf size ({acceptable_size}) without a depth limit.")]
    UnboundedCluster {
        /// The maximum cluster size.
        max_cluster: usize,
        /// The acceptable leaf size.
        acceptable_size: usize,
    },
}

/// Error raised while partitioning a figure.
#[derive(thiserror::Error, Debug)]
pub enum PartitionError {
    /// The parameters are invalid.
    #[error(transparent)]
    Parameters(#[from] ParametersError),
    /// The worker pool could not be created.
    #[error("failed to create the worker pool: {0}")]
    ThreadPool(String),
    /// A worker panicked. All the work of the partition is lost.
    #[error("a partition worker panicked: {0}")]
    WorkerPanicked(String),
    /// A leaf could not be saved.
    #[error("failed to save the leaf {path:?}: {source}")]
    Persist {
        /// The file the leaf was written to.
        path: PathBuf,
        /// The underlying error.
        source: MeshIoError,
    },
}
