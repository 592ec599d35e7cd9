extern crate nalgebra as na;

mod clusters;
mod meshes;
mod partition;
mod pipeline;
