//! Core mesh data structures.
//!
//! This module provides the half-edge (doubly-connected edge list)
//! representation of a planar subdivision with exact rational coordinates.
//!
//! # Overview
//!
//! The primary type is [`PlanarMesh`]. Interior faces carry CCW boundary
//! rings; the single outer face carries the mirrored CW ring around the
//! polygon. Adjacency queries (twin, next, prev, origin) are O(1), and ring
//! and star walks are linear in the cycle length.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`FaceId`] - Identifies a face
//!
//! All relational fields are stored as these handles into growth-only
//! arenas, so references held across mutations stay valid.
//!
//! # Construction and growth
//!
//! A mesh starts from a simple polygon and only ever grows, by splitting
//! edges and inserting diagonals:
//!
//! ```
//! use slabmesh::mesh::PlanarMesh;
//! use slabmesh::geom::Point;
//!
//! let points = vec![
//!     Point::from_integers(0, 0),
//!     Point::from_integers(2, 0),
//!     Point::from_integers(2, 2),
//!     Point::from_integers(0, 2),
//! ];
//! let mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3], &points).unwrap();
//! assert_eq!(mesh.num_interior_faces(), 1);
//! ```

mod builder;
mod halfedge;
mod index;
mod ops;

pub use halfedge::{Face, FaceKind, HalfEdge, PlanarMesh, Vertex};
pub use index::{FaceId, HalfEdgeId, VertexId};
