//! uvcut - splits a large mesh into leaves and packs them into a texture atlas.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use uvcut::atlas::PlanarAtlas;
use uvcut::executor::{self, Job};
use uvcut::partitioning::Parameters;

#[derive(Parser)]
#[command(name = "uvcut")]
#[command(about = "Partition a PLY mesh and compute a UV atlas of its pieces")]
#[command(version)]
struct Cli {
    /// Input PLY file
    input: PathBuf,

    /// Maximum depth of the partition tree
    #[arg(short, long)]
    depth: Option<u32>,

    /// Pieces with at most this many faces are not cut further
    #[arg(short, long, default_value_t = 0)]
    size: usize,

    /// Number of random orientations tried per cut
    #[arg(short, long, default_value_t = 16)]
    parts: usize,

    /// Discover clusters and keep them whole where possible
    #[arg(long)]
    cluster: bool,

    /// Discard line-shaped clusters
    #[arg(long)]
    cluster_opt: bool,

    /// Minimum cluster size, in faces
    #[arg(long, default_value_t = 10_000)]
    cluster_min_size: usize,

    /// Maximum cluster size, in faces
    #[arg(long, default_value_t = 100_000)]
    cluster_max_size: usize,

    /// Output PLY file (default: uv_<input> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save every leaf of the partition to its own PLY file
    #[arg(long)]
    part_save: bool,

    /// Seed of the random orientations
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Relative margin around each atlas tile
    #[arg(long, default_value_t = 0.02)]
    gutter: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let params = Parameters {
        depth: cli.depth,
        acceptable_size: cli.size,
        parts: cli.parts,
        clusterization: cli.cluster,
        cluster_min_size: cli.cluster_min_size,
        cluster_max_size: cli.cluster_max_size,
        optimize_clusters: cli.cluster_opt,
        save_partition: cli.part_save,
        seed: cli.seed,
        threads: cli.threads,
    };
    params.validate().context("invalid parameters")?;

    let mut job = Job::new(cli.input, params);
    if let Some(output) = cli.output {
        job.output = output;
    }

    let atlas = PlanarAtlas::new(cli.gutter as _);
    let report = executor::run(&job, &atlas)
        .with_context(|| format!("failed to process {}", job.input.display()))?;

    println!(
        "{} faces -> {} leaves (largest: {} faces), {} clusters",
        report.num_faces, report.num_leaves, report.max_leaf_size, report.num_clusters
    );
    println!("Written: {}", job.output.display());

    Ok(())
}
