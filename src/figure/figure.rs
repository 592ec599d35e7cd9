use super::FigureError;
use crate::geometry::rotate;
use crate::math::{Point, Real, Rotation};
use crate::utils::hashmap::HashMap;
use smallvec::SmallVec;

/// The vertex indices of a face. Triangles in practice, but any polygon with
/// at least three vertices is accepted.
pub type Face = SmallVec<[u32; 3]>;

/// A polygonal mesh together with its clusters.
///
/// A cluster is a set of faces that should, if possible, end up in the same
/// leaf after partitioning (a tree, a small building…). Clusters are pairwise
/// disjoint and the reverse index [`Figure::face_to_cluster`] is always
/// consistent with [`Figure::clusters`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Figure {
    vertices: Vec<Point<Real>>,
    faces: Vec<Face>,
    clusters: Vec<Vec<u32>>,
    face_to_cluster: Vec<Option<u32>>,
    source_faces: Vec<u32>,
}

impl Figure {
    /// Creates a figure without clusters.
    ///
    /// Fails if a face has less than three vertices, or references a vertex
    /// that does not exist.
    pub fn new(vertices: Vec<Point<Real>>, faces: Vec<Face>) -> Result<Self, FigureError> {
        for (face_id, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(FigureError::DegenerateFace {
                    face: face_id as u32,
                    len: face.len(),
                });
            }

            if let Some(vertex) = face.iter().find(|vid| **vid as usize >= vertices.len()) {
                return Err(FigureError::VertexOutOfRange {
                    face: face_id as u32,
                    vertex: *vertex,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self::new_unchecked(vertices, faces))
    }

    /// Creates a figure without clusters from double-precision positions, as
    /// produced by mesh loaders.
    pub fn from_f64_points(points: &[[f64; 3]], faces: Vec<Face>) -> Result<Self, FigureError> {
        let vertices = points
            .iter()
            .map(|p| Point::new(p[0] as Real, p[1] as Real, p[2] as Real))
            .collect();
        Self::new(vertices, faces)
    }

    fn new_unchecked(vertices: Vec<Point<Real>>, faces: Vec<Face>) -> Self {
        let num_faces = faces.len();
        Self {
            vertices,
            faces,
            clusters: vec![],
            face_to_cluster: vec![None; num_faces],
            source_faces: (0..num_faces as u32).collect(),
        }
    }

    /// The vertex positions of this figure.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The faces of this figure, as indices into [`Self::vertices`].
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The clusters of this figure, as lists of face indices.
    #[inline]
    pub fn clusters(&self) -> &[Vec<u32>] {
        &self.clusters
    }

    /// For each face, the index of the cluster it belongs to, if any.
    #[inline]
    pub fn face_to_cluster(&self) -> &[Option<u32>] {
        &self.face_to_cluster
    }

    /// For each face, the index of the face of the root figure it was derived from.
    ///
    /// A figure built with [`Figure::new`] is its own root.
    #[inline]
    pub fn source_faces(&self) -> &[u32] {
        &self.source_faces
    }

    /// The number of faces of this figure.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The number of vertices of this figure.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Replaces all the clusters of this figure.
    ///
    /// Any previous clustering is discarded. On error, the figure is left
    /// unchanged.
    pub fn set_clusters(&mut self, clusters: Vec<Vec<u32>>) -> Result<(), FigureError> {
        let mut face_to_cluster = vec![None; self.faces.len()];

        for (cluster_id, cluster) in clusters.iter().enumerate() {
            for face_id in cluster {
                let slot = face_to_cluster.get_mut(*face_id as usize).ok_or(
                    FigureError::FaceOutOfRange {
                        cluster: cluster_id as u32,
                        face: *face_id,
                        num_faces: self.faces.len(),
                    },
                )?;

                if let Some(first) = *slot {
                    return Err(FigureError::OverlappingClusters {
                        face: *face_id,
                        first,
                        second: cluster_id as u32,
                    });
                }

                *slot = Some(cluster_id as u32);
            }
        }

        self.clusters = clusters;
        self.face_to_cluster = face_to_cluster;
        Ok(())
    }

    /// The vertices of this figure transformed by `rotation`.
    ///
    /// The figure itself is left untouched.
    pub fn turned_points(&self, rotation: &Rotation<Real>) -> Vec<Point<Real>> {
        self.vertices.iter().map(|pt| rotate(rotation, pt)).collect()
    }

    /// Extracts the sub-figure made of the faces listed in `faces`.
    ///
    /// The vertices are compacted: the result only contains the vertices
    /// referenced by the selected faces, renumbered densely in order of first
    /// use. Clusters entirely contained in the selection are carried over (with
    /// new ids); clusters only partially selected are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `faces` contains an index out of bounds.
    pub fn subfigure(&self, faces: &[u32]) -> Self {
        // A dense remapping table is cheaper for large selections, a map for small ones.
        let (vertices, new_faces) = if faces.len() * 4 >= self.faces.len() {
            let mut remap = vec![u32::MAX; self.vertices.len()];
            self.compact(faces, &mut remap)
        } else {
            let mut remap = HashMap::with_capacity(faces.len() * 2);
            self.compact(faces, &mut remap)
        };

        let mut result = Self::new_unchecked(vertices, new_faces);
        result.source_faces = faces
            .iter()
            .map(|fid| self.source_faces[*fid as usize])
            .collect();

        // Count how many faces of each cluster survive.
        let mut selected_count: HashMap<u32, usize> = HashMap::new();
        for fid in faces {
            if let Some(cluster) = self.face_to_cluster[*fid as usize] {
                *selected_count.entry(cluster).or_insert(0) += 1;
            }
        }

        let mut new_cluster_id: HashMap<u32, u32> = HashMap::new();
        for (new_fid, fid) in faces.iter().enumerate() {
            let Some(cluster) = self.face_to_cluster[*fid as usize] else {
                continue;
            };

            if selected_count[&cluster] != self.clusters[cluster as usize].len() {
                continue;
            }

            let id = *new_cluster_id.entry(cluster).or_insert_with(|| {
                result.clusters.push(vec![]);
                result.clusters.len() as u32 - 1
            });
            result.clusters[id as usize].push(new_fid as u32);
            result.face_to_cluster[new_fid] = Some(id);
        }

        result
    }

    fn compact(
        &self,
        faces: &[u32],
        remap: &mut impl IndexRemap,
    ) -> (Vec<Point<Real>>, Vec<Face>) {
        let mut vertices = Vec::new();
        let mut new_faces = Vec::with_capacity(faces.len());

        for fid in faces {
            let face = &self.faces[*fid as usize];
            let new_face = face
                .iter()
                .map(|vid| {
                    remap.get_or_insert_with(*vid, || {
                        vertices.push(self.vertices[*vid as usize]);
                        vertices.len() as u32 - 1
                    })
                })
                .collect();
            new_faces.push(new_face);
        }

        vertices.shrink_to_fit();
        (vertices, new_faces)
    }
}

/// Maps vertex indices of a parent figure to indices in a sub-figure.
trait IndexRemap {
    fn get_or_insert_with(&mut self, key: u32, f: impl FnOnce() -> u32) -> u32;
}

impl IndexRemap for Vec<u32> {
    #[inline]
    fn get_or_insert_with(&mut self, key: u32, f: impl FnOnce() -> u32) -> u32 {
        let slot = &mut self[key as usize];
        if *slot == u32::MAX {
            *slot = f();
        }
        *slot
    }
}

impl IndexRemap for HashMap<u32, u32> {
    #[inline]
    fn get_or_insert_with(&mut self, key: u32, f: impl FnOnce() -> u32) -> u32 {
        *self.entry(key).or_insert_with(f)
    }
}
