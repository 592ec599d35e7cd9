//! Reading and writing figures as PLY files.

pub use self::error::MeshIoError;
pub use self::ply::{read_ply, write_ply};

mod error;
mod ply;
