use crate::figure::FigureError;
use std::path::PathBuf;

/// Errors raised while loading or saving a mesh.
#[derive(thiserror::Error, Debug)]
pub enum MeshIoError {
    /// The file to load does not exist.
    #[error("file not found: {path:?}")]
    FileNotFound {
        /// The missing file.
        path: PathBuf,
    },
    /// The file is not a valid PLY file, or cannot represent the mesh.
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// What is wrong.
        message: String,
    },
    /// The file content does not form a valid figure.
    #[error(transparent)]
    Mesh(#[from] FigureError),
    /// Error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshIoError {
    pub(crate) fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
