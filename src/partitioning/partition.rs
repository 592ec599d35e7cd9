use super::{search_cut, split_faces, Parameters, PartitionError};
use crate::figure::Figure;
use crate::io;
use crate::utils::{self, mix_seed};
use core::any::Any;
use core::panic::AssertUnwindSafe;
use std::panic;
use std::path::PathBuf;

/// A leaf of the partition tree.
#[derive(Clone, Debug)]
pub struct Leaf {
    /// The faces of this leaf. Its `source_faces` map them back to the
    /// partitioned figure.
    pub figure: Figure,
    /// The branch leading to this leaf: one `_l` or `_r` per level.
    pub path: String,
}

struct Context<'a> {
    params: &'a Parameters,
    save_prefix: &'a str,
}

/// Recursively cuts `figure` in two until every piece satisfies the stopping
/// criteria of `params`.
///
/// The leaves are returned in depth-first order, left before right. When
/// `params.save_partition` is set, every leaf is also written to
/// `{save_prefix}{path}.ply` as soon as it is produced.
///
/// The result only depends on `figure` and `params` (including its seed): the
/// number of threads has no influence on it.
pub fn partition(
    figure: Figure,
    params: &Parameters,
    save_prefix: &str,
) -> Result<Vec<Leaf>, PartitionError> {
    params.validate()?;

    let ctx = Context {
        params,
        save_prefix,
    };
    let run = || {
        panic::catch_unwind(AssertUnwindSafe(|| {
            partition_node(figure, 0, String::new(), params.seed, &ctx)
        }))
    };

    #[cfg(feature = "parallel")]
    let result = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = params.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| PartitionError::ThreadPool(e.to_string()))?;
        pool.install(run)
    };
    #[cfg(not(feature = "parallel"))]
    let result = run();

    let leaves = result.map_err(|payload| PartitionError::WorkerPanicked(panic_message(&*payload)))??;
    log::info!("partition done: {} leaves", leaves.len());
    Ok(leaves)
}

fn partition_node(
    figure: Figure,
    depth: u32,
    path: String,
    seed: u64,
    ctx: &Context,
) -> Result<Vec<Leaf>, PartitionError> {
    let params = ctx.params;
    log::debug!("{}{}: {} faces", ctx.save_prefix, path, figure.num_faces());

    let depth_reached = params.depth.is_some_and(|max| depth >= max);
    if depth_reached || figure.num_faces() <= params.acceptable_size {
        return make_leaf(figure, path, ctx);
    }

    let Some(cut) = search_cut(&figure, params.parts, mix_seed(seed, 0)) else {
        log::warn!("{}{}: no balanced cut found", ctx.save_prefix, path);
        return make_leaf(figure, path, ctx);
    };

    let split = split_faces(&figure, &cut);
    if split.left.is_empty() || split.right.is_empty() {
        log::warn!(
            "{}{}: cut leaves one side empty ({} faces)",
            ctx.save_prefix,
            path,
            figure.num_faces()
        );
        return make_leaf(figure, path, ctx);
    }

    log::trace!(
        "{}{}: {} / {} faces, {} crossed",
        ctx.save_prefix,
        path,
        split.left.len(),
        split.right.len(),
        cut.crossed
    );

    let left = figure.subfigure(&split.left);
    let right = figure.subfigure(&split.right);
    drop(figure);

    let (left, right) = utils::fork_join(
        || partition_node(left, depth + 1, format!("{path}_l"), mix_seed(seed, 1), ctx),
        || partition_node(right, depth + 1, format!("{path}_r"), mix_seed(seed, 2), ctx),
    );

    let mut leaves = left?;
    leaves.extend(right?);
    Ok(leaves)
}

fn make_leaf(figure: Figure, path: String, ctx: &Context) -> Result<Vec<Leaf>, PartitionError> {
    if ctx.params.save_partition {
        let file = PathBuf::from(format!("{}{}.ply", ctx.save_prefix, path));
        io::write_ply(&figure, None, &file)
            .map_err(|source| PartitionError::Persist { path: file, source })?;
    }

    Ok(vec![Leaf { figure, path }])
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
