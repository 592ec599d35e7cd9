//! End-to-end processing of one mesh file.

use crate::atlas::{AtlasDecomposer, AtlasError};
use crate::clustering;
use crate::figure::{Figure, FigureError};
use crate::io::{self, MeshIoError};
use crate::partitioning::{self, Parameters, ParametersError, PartitionError};
use core::time::Duration;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Error raised while processing a [`Job`].
#[derive(thiserror::Error, Debug)]
pub enum ExecutorError {
    /// The parameters of the job are invalid.
    #[error(transparent)]
    Parameters(#[from] ParametersError),
    /// The input could not be loaded or the output could not be saved.
    #[error(transparent)]
    MeshIo(#[from] MeshIoError),
    /// The discovered clusters could not be attached to the figure.
    #[error(transparent)]
    Clusters(#[from] FigureError),
    /// The partitioning failed.
    #[error(transparent)]
    Partition(#[from] PartitionError),
    /// The atlas decomposition failed.
    #[error(transparent)]
    Atlas(#[from] AtlasError),
}

/// A mesh file to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// The PLY file to load.
    pub input: PathBuf,
    /// The PLY file the textured result is written to.
    pub output: PathBuf,
    /// The partitioning parameters.
    pub params: Parameters,
}

impl Job {
    /// A job writing its result to `uv_<input file name>`, next to the input.
    pub fn new(input: impl Into<PathBuf>, params: Parameters) -> Self {
        let input = input.into();
        let name = input
            .file_name()
            .map_or_else(|| "out.ply".into(), |name| name.to_string_lossy());
        let output = input.with_file_name(format!("uv_{name}"));
        Self {
            input,
            output,
            params,
        }
    }

    /// The prefix of the files the leaves are saved to, next to the output.
    pub fn save_prefix(&self) -> String {
        let name = self
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = self.output.parent().unwrap_or_else(|| Path::new(""));
        dir.join(self.params.description(&name))
            .to_string_lossy()
            .into_owned()
    }
}

/// Statistics of a successful run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    /// Number of faces of the input mesh.
    pub num_faces: usize,
    /// Number of clusters discovered.
    pub num_clusters: usize,
    /// Number of leaves of the partition.
    pub num_leaves: usize,
    /// Size of the largest leaf, in faces.
    pub max_leaf_size: usize,
    /// Time spent on each stage: loading, clustering, partitioning,
    /// decomposition and saving.
    pub timings: [Duration; 5],
}

/// Loads the input of `job`, partitions it, parametrizes the leaves with
/// `decomposer`, and saves the result.
pub fn run(job: &Job, decomposer: &dyn AtlasDecomposer) -> Result<RunReport, ExecutorError> {
    let params = &job.params;
    params.validate()?;

    let mut report = RunReport::default();

    let start = Instant::now();
    let mut figure = io::read_ply(&job.input)?;
    report.num_faces = figure.num_faces();
    report.timings[0] = start.elapsed();
    log::info!(
        "loaded {:?}: {} vertices, {} faces in {:.2?}",
        job.input,
        figure.num_vertices(),
        figure.num_faces(),
        report.timings[0]
    );

    if params.clusterization {
        let start = Instant::now();
        let clusters = clustering::discover_clusters(&figure, &params.clustering(), params.seed);
        report.num_clusters = clusters.len();
        figure.set_clusters(clusters)?;
        report.timings[1] = start.elapsed();
        log::info!(
            "found {} clusters in {:.2?}",
            report.num_clusters,
            report.timings[1]
        );
    }

    let start = Instant::now();
    let leaves = partitioning::partition(figure, params, &job.save_prefix())?;
    report.num_leaves = leaves.len();
    report.max_leaf_size = leaves
        .iter()
        .map(|leaf| leaf.figure.num_faces())
        .max()
        .unwrap_or(0);
    report.timings[2] = start.elapsed();
    log::info!(
        "partitioned into {} leaves (largest: {} faces) in {:.2?}",
        report.num_leaves,
        report.max_leaf_size,
        report.timings[2]
    );

    let start = Instant::now();
    let leaves: Vec<Figure> = leaves.into_iter().map(|leaf| leaf.figure).collect();
    let atlas = decomposer.decompose(&leaves)?;
    drop(leaves);
    report.timings[3] = start.elapsed();
    log::info!("atlas computed in {:.2?}", report.timings[3]);

    let start = Instant::now();
    io::write_ply(&atlas.figure, Some(&atlas.overlay), &job.output)?;
    report.timings[4] = start.elapsed();
    log::info!("saved {:?} in {:.2?}", job.output, report.timings[4]);

    Ok(report)
}
