use super::Cut;
use crate::figure::Figure;
use crate::geometry::{triangle_side, Side};

/// A cluster goes whole to its majority side when that side holds more than
/// `CLUSTER_IMBALANCE` times as many of its faces as the other one.
pub const CLUSTER_IMBALANCE: usize = 5;

/// The faces of a figure distributed on both sides of a [`Cut`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Split {
    /// Indices of the faces on the left of the cut.
    pub left: Vec<u32>,
    /// Indices of the faces on the right of the cut.
    pub right: Vec<u32>,
}

/// Assigns every face of `figure` to one side of `cut`.
///
/// Clusters lying mostly on one side are kept whole on that side. Faces of the
/// other clusters, and faces outside of any cluster, are classified on their
/// own. Faces straddling the line are handed out last, each one to the side
/// currently holding fewer faces (the right one on ties).
///
/// Every face ends up in exactly one of the two lists.
pub fn split_faces(figure: &Figure, cut: &Cut) -> Split {
    let turned = figure.turned_points(&cut.angles.rotation());
    let faces = figure.faces();
    let mut split = Split::default();
    let mut crossing = Vec::new();

    let resolved: Vec<bool> = figure
        .clusters()
        .iter()
        .map(|cluster| {
            let mut left = 0;
            let mut right = 0;

            for fid in cluster {
                match triangle_side(&cut.line, &faces[*fid as usize], &turned) {
                    Side::Left => left += 1,
                    Side::Right => right += 1,
                    Side::Cross => {}
                }
            }

            if left.min(right) * CLUSTER_IMBALANCE < left.max(right) {
                let target = if left > right {
                    &mut split.left
                } else {
                    &mut split.right
                };
                target.extend_from_slice(cluster);
                true
            } else {
                false
            }
        })
        .collect();

    for (fid, face) in faces.iter().enumerate() {
        if let Some(cluster) = figure.face_to_cluster()[fid] {
            if resolved[cluster as usize] {
                continue;
            }
        }

        match triangle_side(&cut.line, face, &turned) {
            Side::Left => split.left.push(fid as u32),
            Side::Right => split.right.push(fid as u32),
            Side::Cross => crossing.push(fid as u32),
        }
    }

    while let Some(fid) = crossing.pop() {
        if split.left.len() < split.right.len() {
            split.left.push(fid);
        } else {
            split.right.push(fid);
        }
    }

    split
}
