/// Indicates an inconsistency while building a figure or setting its clusters.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FigureError {
    /// A face must reference at least three vertices.
    #[error("the face {face} has only {len} vertices.")]
    DegenerateFace {
        /// The offending face.
        face: u32,
        /// Its number of vertices.
        len: usize,
    },
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {vertex} but there are only {num_vertices} vertices.")]
    VertexOutOfRange {
        /// The offending face.
        face: u32,
        /// The out-of-range vertex index.
        vertex: u32,
        /// The number of vertices of the figure.
        num_vertices: usize,
    },
    /// A cluster references a face that does not exist.
    #[error("the cluster {cluster} references the face {face} but there are only {num_faces} faces.")]
    FaceOutOfRange {
        /// The offending cluster.
        cluster: u32,
        /// The out-of-range face index.
        face: u32,
        /// The number of faces of the figure.
        num_faces: usize,
    },
    /// Two clusters share a face.
    #[error("the face {face} belongs to both clusters {first} and {second}.")]
    OverlappingClusters {
        /// The shared face.
        face: u32,
        /// The first cluster containing the face.
        first: u32,
        /// The second cluster containing the face.
        second: u32,
    },
}
