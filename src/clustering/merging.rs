use super::{is_line_like, ClusteringParameters};
use crate::figure::Figure;
use crate::utils::hashmap::HashMap;
use rand::Rng;
use std::collections::BTreeSet;

/// Greedily merges small regions into their most-connected neighbor.
///
/// Regions are processed from the smallest to the largest (ties broken by
/// index). The current region is merged into the neighbor sharing the most
/// vertex incidences with it, provided the merged region does not exceed
/// `params.max_size`; the grown neighbor is then re-queued with its new size.
/// A region without any eligible neighbor is final. When the line filter is
/// enabled, final regions that look like lines are dropped.
pub fn merge_regions(
    mut regions: Vec<Vec<u32>>,
    figure: &Figure,
    params: &ClusteringParameters,
    rng: &mut impl Rng,
) -> Vec<Vec<u32>> {
    let faces = figure.faces();
    // For each vertex, the regions containing at least one face touching it.
    let mut vertex_regions: Vec<BTreeSet<u32>> = vec![BTreeSet::new(); figure.num_vertices()];
    for (region_id, region) in regions.iter().enumerate() {
        for fid in region {
            for vid in &faces[*fid as usize] {
                let _ = vertex_regions[*vid as usize].insert(region_id as u32);
            }
        }
    }

    let mut queue: BTreeSet<(usize, u32)> = regions
        .iter()
        .enumerate()
        .map(|(id, region)| (region.len(), id as u32))
        .collect();
    let mut result = vec![];

    while let Some((len, current)) = queue.pop_first() {
        let mut shared: HashMap<u32, usize> = HashMap::new();
        let mut best_count = 0;
        let mut best = 0;

        for fid in &regions[current as usize] {
            for vid in &faces[*fid as usize] {
                for other in &vertex_regions[*vid as usize] {
                    if *other == current || regions[*other as usize].len() + len > params.max_size {
                        continue;
                    }

                    let count = shared.entry(*other).or_insert(0);
                    *count += 1;
                    if *count > best_count {
                        best_count = *count;
                        best = *other;
                    }
                }
            }
        }

        let region = core::mem::take(&mut regions[current as usize]);
        let target = (best_count > 0).then_some(best);

        for fid in &region {
            for vid in &faces[*fid as usize] {
                let owners = &mut vertex_regions[*vid as usize];
                let _ = owners.remove(&current);
                if let Some(target) = target {
                    let _ = owners.insert(target);
                }
            }
        }

        match target {
            Some(target) => {
                let merged = &mut regions[target as usize];
                let _ = queue.remove(&(merged.len(), target));
                merged.extend(region);
                let _ = queue.insert((merged.len(), target));
            }
            None => {
                if !params.line_filter || !is_line_like(figure, &region, params, rng) {
                    result.push(region);
                }
            }
        }
    }

    result
}
