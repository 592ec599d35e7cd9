use crate::figure::Figure;
use crate::utils::hashmap::HashMap;
use crate::utils::SortedPair;
use smallvec::SmallVec;

/// Face adjacency graph of a figure.
///
/// Two faces are neighbors if they have at least one pair of vertices in
/// common. Every vertex pair of a face counts, not only its boundary edges, so
/// shared edges and polygon diagonals are handled uniformly.
#[derive(Clone, Debug)]
pub struct FaceGraph {
    /// `neighbors[ranges[i]..ranges[i + 1]]` are the neighbors of the `i`-th
    /// face, sorted in increasing order without duplicates.
    neighbors: Vec<u32>,
    ranges: Vec<usize>,
}

impl FaceGraph {
    /// Computes the adjacency graph of `figure`.
    pub fn new(figure: &Figure) -> Self {
        let mut faces_by_edge: HashMap<SortedPair<u32>, SmallVec<[u32; 2]>> = HashMap::new();

        for (face_id, face) in figure.faces().iter().enumerate() {
            for (i, a) in face.iter().enumerate() {
                for b in &face[i + 1..] {
                    faces_by_edge
                        .entry(SortedPair::new(*a, *b))
                        .or_default()
                        .push(face_id as u32);
                }
            }
        }

        let mut adjacency: Vec<Vec<u32>> = vec![vec![]; figure.num_faces()];
        for faces in faces_by_edge.values().filter(|faces| faces.len() > 1) {
            for a in faces {
                for b in faces {
                    if a != b {
                        adjacency[*a as usize].push(*b);
                    }
                }
            }
        }

        let mut neighbors = vec![];
        let mut ranges = Vec::with_capacity(adjacency.len() + 1);
        ranges.push(0);

        for mut adj in adjacency {
            adj.sort_unstable();
            adj.dedup();
            neighbors.extend_from_slice(&adj);
            ranges.push(neighbors.len());
        }

        Self { neighbors, ranges }
    }

    /// The number of faces (nodes) of this graph.
    pub fn num_faces(&self) -> usize {
        self.ranges.len() - 1
    }

    /// The neighbors of the face `face_id`, in increasing order.
    pub fn neighbors(&self, face_id: u32) -> &[u32] {
        let i = face_id as usize;
        &self.neighbors[self.ranges[i]..self.ranges[i + 1]]
    }
}
