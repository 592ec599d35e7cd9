use super::FaceGraph;
use crate::figure::Figure;
use crate::geometry::{face_normal, normal_distance};
use crate::math::{Real, Vector};
use std::collections::VecDeque;

/// Grows the region containing `seed` by breadth-first search.
///
/// A face joins the region when it is dequeued, at which point the running
/// mean normal of the region is updated. A neighbor is enqueued if it was not
/// visited yet and its normal is closer than `threshold` to the current mean.
///
/// The "same region" relation this builds is not transitive: membership
/// depends on the order in which faces are reached, which is fully determined
/// by `seed` and the (sorted) adjacency of `graph`.
pub fn grow_region(
    graph: &FaceGraph,
    normals: &[Vector<Real>],
    seed: u32,
    threshold: Real,
    visited: &mut [bool],
) -> Vec<u32> {
    let mut region = vec![];
    let mut queue = VecDeque::new();
    let mut mean = Vector::zeros();

    queue.push_back(seed);
    visited[seed as usize] = true;

    while let Some(face) = queue.pop_front() {
        let count = region.len() as Real;
        mean = (mean * count + normals[face as usize]) / (count + 1.0);
        region.push(face);

        for neighbor in graph.neighbors(face) {
            let n = *neighbor as usize;
            if !visited[n] && normal_distance(&mean, &normals[n]) < threshold {
                visited[n] = true;
                queue.push_back(*neighbor);
            }
        }
    }

    region
}

/// Partitions all the faces of `figure` into regions of similar orientation.
///
/// Seeds are taken in increasing face order.
pub fn grow_regions(graph: &FaceGraph, figure: &Figure, threshold: Real) -> Vec<Vec<u32>> {
    let normals: Vec<_> = figure
        .faces()
        .iter()
        .map(|face| face_normal(face, figure.vertices()))
        .collect();
    let mut visited = vec![false; graph.num_faces()];
    let mut regions = vec![];

    for face_id in 0..graph.num_faces() as u32 {
        if !visited[face_id as usize] {
            regions.push(grow_region(graph, &normals, face_id, threshold, &mut visited));
        }
    }

    regions
}
