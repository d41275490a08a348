//! Partition algorithms.
//!
//! This module contains the slab-partition passes and the face
//! classification they drive:
//!
//! - **Vertical cuts**: sweep lines at every distinct input x-coordinate
//! - **Horizontal cuts**: rightward ray refinement of vertical edges
//! - **Classification**: rectangle / right triangle / obtuse / open slab
//! - **Open-slab repair**: one diagonal per open slab, to a fixed point
//!
//! [`slab_partition`] sequences all of the above; the individual passes
//! are exported for callers that want to observe intermediate meshes.

pub mod classify;
pub mod slab;

pub use classify::{classify_face, split_open_slab};
pub use slab::{add_horizontal_cuts, add_vertical_cuts, slab_partition, PartitionOptions};
