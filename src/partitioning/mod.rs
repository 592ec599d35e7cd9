//! Recursive binary space partitioning of figures.
//!
//! Each node of the recursion tree goes through three steps:
//!
//! - **search**: `parts` random orientations of the figure are scored in
//!   parallel by sweeping a line along the rotated `x` axis, looking for a
//!   balanced position crossing as few faces as possible ([`search_cut`]),
//! - **split**: the faces are assigned to the left or right of the best
//!   [`Cut`], keeping strongly one-sided clusters whole ([`split_faces`]),
//! - **recurse** on both halves, in parallel, until the depth limit or the
//!   acceptable leaf size is reached ([`partition`]).

pub use self::error::{ParametersError, PartitionError};
pub use self::parameters::Parameters;
pub use self::partition::{partition, Leaf};
pub use self::search::{evaluate_rotation, search_cut, Cut, BALANCE_RATIO};
pub use self::split::{split_faces, Split, CLUSTER_IMBALANCE};

mod error;
mod parameters;
mod partition;
mod search;
mod split;
