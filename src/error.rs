//! Error types for slabmesh.
//!
//! This module defines all error types used throughout the library.
//!
//! There are two fatal families. *Corrupted-mesh* errors ([`MeshError::BrokenRing`],
//! [`MeshError::RingCycle`]) are raised when a ring or star walk hits an
//! unlinked half-edge or revisits one before closing — an invariant violation
//! from an earlier malformed construction. *Precondition-violated* errors
//! ([`MeshError::NotIncident`], [`MeshError::MissingAnchor`] and friends)
//! signal that a caller invoked a mesh operation outside its contract.
//! Neither family is recoverable; there is no I/O boundary here, so a failure
//! always means a geometry or logic defect and the operation fails fast.

use thiserror::Error;

use crate::mesh::{FaceId, HalfEdgeId, VertexId};

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction and partitioning.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The polygon boundary is too short to bound an area.
    #[error("polygon boundary has {count} vertices, need at least 3")]
    PolygonTooSmall {
        /// Number of boundary vertices supplied.
        count: usize,
    },

    /// The boundary references a vertex index outside the point list.
    #[error("boundary slot {slot} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// Position in the boundary sequence.
        slot: usize,
        /// The out-of-range vertex index.
        vertex: usize,
    },

    /// The boundary visits the same vertex twice (the polygon would not be simple).
    #[error("boundary repeats vertex index {vertex}")]
    RepeatedVertex {
        /// The repeated vertex index.
        vertex: usize,
    },

    /// A ring or star walk hit an unlinked half-edge.
    #[error("walk from {start:?} hit an unlinked half-edge after {steps} steps")]
    BrokenRing {
        /// The half-edge the walk started from.
        start: HalfEdgeId,
        /// Number of links followed before the walk broke.
        steps: usize,
    },

    /// A ring or star walk revisited a half-edge before closing.
    #[error("walk from {start:?} revisited {at:?} before closing")]
    RingCycle {
        /// The half-edge the walk started from.
        start: HalfEdgeId,
        /// The half-edge that was seen twice.
        at: HalfEdgeId,
    },

    /// A vertex has no outgoing half-edge to anchor a star walk.
    #[error("vertex {vertex:?} has no outgoing half-edge")]
    IsolatedVertex {
        /// The vertex in question.
        vertex: VertexId,
    },

    /// A vertex was expected on a face's boundary but is not incident to it.
    #[error("vertex {vertex:?} is not incident to face {face:?}")]
    NotIncident {
        /// The vertex in question.
        vertex: VertexId,
        /// The face it was expected to bound.
        face: FaceId,
    },

    /// A face has no boundary half-edge anchor.
    #[error("face {face:?} has no boundary half-edge")]
    MissingAnchor {
        /// The face in question.
        face: FaceId,
    },

    /// Open-slab repair was requested on a face without exactly two vertical edges.
    #[error("face {face:?} is not an open slab (expected exactly two vertical edges)")]
    NotOpenSlab {
        /// The face in question.
        face: FaceId,
    },

    /// The classify/repair loop did not reach a fixed point within its iteration cap.
    #[error("classify/repair loop did not settle after {iterations} iterations")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: usize,
    },
}
