//! # Slabmesh
//!
//! A slab-partition stage for non-obtuse triangulation pipelines.
//!
//! Slabmesh decomposes a simple polygon's interior into a half-edge mesh
//! whose faces are each a rectangle, a right triangle, or an acceptable
//! obtuse cell — no unresolved quadrilateral remains. All coordinates are
//! exact rationals, so "is vertical", "is horizontal" and every ordering
//! decision are exact; intersection points produced by the cut passes are
//! generally non-integer and floating point would misclassify them.
//!
//! ## Features
//!
//! - **Half-edge data structure**: O(1) adjacency queries with type-safe indices
//! - **Exact arithmetic**: arbitrary-precision rational coordinates throughout
//! - **Sweep cuts**: vertical cut lines at every input x-coordinate, plus
//!   rightward ray refinement
//! - **Terminal classification**: a classify/repair loop that resolves every
//!   open slab with one diagonal
//!
//! ## Quick Start
//!
//! ```
//! use slabmesh::prelude::*;
//!
//! // An L-shaped hexagon, boundary in CCW order.
//! let points = vec![
//!     Point::from_integers(0, 0),
//!     Point::from_integers(2, 0),
//!     Point::from_integers(2, 1),
//!     Point::from_integers(1, 1),
//!     Point::from_integers(1, 2),
//!     Point::from_integers(0, 2),
//! ];
//! let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3, 4, 5], &points).unwrap();
//!
//! // Partition it.
//! slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();
//!
//! // Every interior face now carries a terminal tag.
//! for face in mesh.interior_face_ids() {
//!     let kind = mesh.face(face).kind.unwrap();
//!     assert_ne!(kind, FaceKind::OpenSlab);
//! }
//! ```
//!
//! ## Mesh Traversal
//!
//! The half-edge structure enables efficient traversal of mesh elements:
//!
//! ```
//! use slabmesh::prelude::*;
//!
//! # let points = vec![
//! #     Point::from_integers(0, 0),
//! #     Point::from_integers(1, 0),
//! #     Point::from_integers(1, 1),
//! #     Point::from_integers(0, 1),
//! # ];
//! # let mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3], &points).unwrap();
//! // Walk a face's boundary ring
//! let face = mesh.interior_face_ids().next().unwrap();
//! for he in mesh.face_ring(face).unwrap() {
//!     println!("edge from {:?}", mesh.origin(he));
//! }
//!
//! // Walk the half-edges out of a vertex
//! let v = VertexId::new(0);
//! for he in mesh.vertex_star(v).unwrap() {
//!     println!("outgoing: {:?}", he);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod geom;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use slabmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{classify_face, slab_partition, PartitionOptions};
    pub use crate::error::{MeshError, Result};
    pub use crate::geom::{Coord, Point};
    pub use crate::mesh::{
        Face, FaceId, FaceKind, HalfEdge, HalfEdgeId, PlanarMesh, Vertex, VertexId,
    };
}
