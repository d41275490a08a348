//! Half-edge mesh data structure for planar subdivisions.
//!
//! # Structure
//!
//! - Each undirected edge is split into two **half-edges** pointing in
//!   opposite directions
//! - Each half-edge knows its **twin** (opposite half-edge), **next** and
//!   **prev** (around the face boundary), **origin vertex**, and owning
//!   **face**
//! - Each vertex stores one outgoing half-edge as a traversal anchor
//! - Each face stores one half-edge on its boundary ring, plus its
//!   classification tag once the classifier has run
//!
//! # Outer face
//!
//! The unbounded complement of the polygon is a real face with a real
//! boundary ring (the mirror of the polygon boundary, wound CW). It is
//! excluded from cutting and classification but participates in every
//! topological invariant.
//!
//! # Lifecycle
//!
//! The arena is growth-only: entities are created by the polygon loader and
//! thereafter only added — by [`PlanarMesh::split_edge`] (+1 vertex, +2
//! half-edges) and [`PlanarMesh::add_diagonal`] (+2 half-edges, +1 face) —
//! never removed or recycled.

use crate::error::{MeshError, Result};
use crate::geom::Point;

use super::index::{FaceId, HalfEdgeId, VertexId};

/// Classification tag for an interior face.
///
/// Assigned by the classifier; `OpenSlab` is transient and is resolved by
/// one diagonal insertion, the other three are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// Four edges, two vertical, two horizontal.
    Rectangle,
    /// Three edges, one vertical, one horizontal.
    RightTriangle,
    /// Acceptable obtuse triangle (also the fallback tag).
    ObtuseTriangle,
    /// Two disjoint vertical sides; needs one more diagonal.
    OpenSlab,
}

/// A vertex in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The exact position of this vertex.
    pub position: Point,

    /// One outgoing half-edge from this vertex. A traversal anchor only,
    /// not ownership; any outgoing half-edge is acceptable.
    pub halfedge: HalfEdgeId,
}

impl Vertex {
    /// Create a new vertex at the given position, with no anchor yet.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            halfedge: HalfEdgeId::invalid(),
        }
    }
}

/// A directed half-edge.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    /// The vertex this half-edge originates from.
    pub origin: VertexId,

    /// The opposite half-edge over the same segment.
    pub twin: HalfEdgeId,

    /// The next half-edge around the owning face (CCW for interior faces).
    pub next: HalfEdgeId,

    /// The previous half-edge around the owning face.
    pub prev: HalfEdgeId,

    /// The face this half-edge bounds.
    pub face: FaceId,
}

impl HalfEdge {
    /// Create a new unlinked half-edge.
    pub fn new() -> Self {
        Self {
            origin: VertexId::invalid(),
            twin: HalfEdgeId::invalid(),
            next: HalfEdgeId::invalid(),
            prev: HalfEdgeId::invalid(),
            face: FaceId::invalid(),
        }
    }
}

impl Default for HalfEdge {
    fn default() -> Self {
        Self::new()
    }
}

/// A face of the subdivision.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// One half-edge on the boundary ring of this face.
    pub halfedge: HalfEdgeId,

    /// Classification tag; `None` until the classifier has run.
    pub kind: Option<FaceKind>,
}

impl Face {
    /// Create a new face anchored at the given half-edge.
    pub fn new(halfedge: HalfEdgeId) -> Self {
        Self {
            halfedge,
            kind: None,
        }
    }
}

/// A planar subdivision stored as an index-addressed half-edge arena.
///
/// Construct one with [`PlanarMesh::from_polygon`], mutate it with
/// [`PlanarMesh::split_edge`] and [`PlanarMesh::add_diagonal`] (or run the
/// whole pipeline via [`crate::algo::slab_partition`]), then read the face
/// tags back.
#[derive(Debug, Clone)]
pub struct PlanarMesh {
    /// All vertices in the mesh.
    pub(crate) vertices: Vec<Vertex>,

    /// All half-edges in the mesh.
    pub(crate) halfedges: Vec<HalfEdge>,

    /// All faces in the mesh, the outer face included.
    pub(crate) faces: Vec<Face>,

    /// The face representing the unbounded complement.
    pub(crate) outer: FaceId,
}

impl PlanarMesh {
    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of half-edges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of faces, the outer face included.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of interior faces.
    #[inline]
    pub fn num_interior_faces(&self) -> usize {
        self.faces.len() - 1
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get a mutable vertex by ID.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    /// Get a half-edge by ID.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.halfedges[id.index()]
    }

    /// Get a mutable half-edge by ID.
    #[inline]
    pub fn halfedge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.halfedges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Get a mutable face by ID.
    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point {
        &self.vertex(v).position
    }

    /// Get the face representing the unbounded complement.
    #[inline]
    pub fn outer_face(&self) -> FaceId {
        self.outer
    }

    /// Check whether a face is the outer face.
    #[inline]
    pub fn is_outer(&self, f: FaceId) -> bool {
        f == self.outer
    }

    // ==================== Topology Queries ====================

    /// Get the twin (opposite) half-edge.
    #[inline]
    pub fn twin(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(he).twin
    }

    /// Get the next half-edge around the face.
    #[inline]
    pub fn next(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(he).next
    }

    /// Get the previous half-edge around the face.
    #[inline]
    pub fn prev(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(he).prev
    }

    /// Get the origin vertex of a half-edge.
    #[inline]
    pub fn origin(&self, he: HalfEdgeId) -> VertexId {
        self.halfedge(he).origin
    }

    /// Get the destination vertex of a half-edge.
    #[inline]
    pub fn dest(&self, he: HalfEdgeId) -> VertexId {
        self.origin(self.twin(he))
    }

    /// Get the face of a half-edge.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId) -> FaceId {
        self.halfedge(he).face
    }

    /// Check whether both endpoints of a half-edge share an x coordinate.
    pub fn is_vertical(&self, he: HalfEdgeId) -> bool {
        self.position(self.origin(he)).x == self.position(self.dest(he)).x
    }

    /// Check whether both endpoints of a half-edge share a y coordinate.
    pub fn is_horizontal(&self, he: HalfEdgeId) -> bool {
        self.position(self.origin(he)).y == self.position(self.dest(he)).y
    }

    // ==================== Checked Walks ====================
    //
    // Every traversal is defensive: a walk that hits an unlinked half-edge
    // or revisits one before closing surfaces a corrupted-mesh error
    // immediately instead of propagating garbage downstream.

    /// Walk a boundary ring via `next`, starting (and closing) at `start`.
    ///
    /// Returns the ring's half-edges in order. Fails with
    /// [`MeshError::BrokenRing`] on an unlinked `next` and
    /// [`MeshError::RingCycle`] if the walk revisits a half-edge other than
    /// `start`.
    pub fn ring_from(&self, start: HalfEdgeId) -> Result<Vec<HalfEdgeId>> {
        let mut out = Vec::new();
        let mut seen = vec![false; self.halfedges.len()];
        let mut he = start;
        loop {
            if !he.is_valid() || he.index() >= self.halfedges.len() {
                return Err(MeshError::BrokenRing {
                    start,
                    steps: out.len(),
                });
            }
            if seen[he.index()] {
                return Err(MeshError::RingCycle { start, at: he });
            }
            seen[he.index()] = true;
            out.push(he);
            he = self.halfedge(he).next;
            if he == start {
                break;
            }
        }
        Ok(out)
    }

    /// Walk the boundary ring of a face.
    ///
    /// Fails with [`MeshError::MissingAnchor`] if the face has no boundary
    /// half-edge, or with a corrupted-mesh error if the ring is broken.
    pub fn face_ring(&self, f: FaceId) -> Result<Vec<HalfEdgeId>> {
        let anchor = self.face(f).halfedge;
        if !anchor.is_valid() {
            return Err(MeshError::MissingAnchor { face: f });
        }
        self.ring_from(anchor)
    }

    /// Walk the star of a vertex: every half-edge originating at `v`,
    /// visited via `twin → next` from the vertex's incident anchor.
    pub fn vertex_star(&self, v: VertexId) -> Result<Vec<HalfEdgeId>> {
        let start = self.vertex(v).halfedge;
        if !start.is_valid() {
            return Err(MeshError::IsolatedVertex { vertex: v });
        }
        let mut out = Vec::new();
        let mut seen = vec![false; self.halfedges.len()];
        let mut he = start;
        loop {
            if !he.is_valid() || he.index() >= self.halfedges.len() {
                return Err(MeshError::BrokenRing {
                    start,
                    steps: out.len(),
                });
            }
            if seen[he.index()] {
                return Err(MeshError::RingCycle { start, at: he });
            }
            seen[he.index()] = true;
            out.push(he);
            let tw = self.halfedge(he).twin;
            if !tw.is_valid() {
                return Err(MeshError::BrokenRing {
                    start,
                    steps: out.len(),
                });
            }
            he = self.halfedge(tw).next;
            if he == start {
                break;
            }
        }
        Ok(out)
    }

    /// The interior faces incident to a vertex, in star order, without
    /// duplicates. The outer face is never reported.
    pub fn vertex_faces(&self, v: VertexId) -> Result<Vec<FaceId>> {
        let mut out: Vec<FaceId> = Vec::new();
        for he in self.vertex_star(v)? {
            let f = self.face_of(he);
            if !self.is_outer(f) && !out.contains(&f) {
                out.push(f);
            }
        }
        Ok(out)
    }

    /// Find the ring half-edge of `face` whose origin is `v`.
    ///
    /// Fails with [`MeshError::NotIncident`] if `v` does not lie on the
    /// face's boundary — a precondition violation by the caller.
    pub fn halfedge_from(&self, v: VertexId, face: FaceId) -> Result<HalfEdgeId> {
        for he in self.vertex_star(v)? {
            if self.face_of(he) == face {
                return Ok(he);
            }
        }
        Err(MeshError::NotIncident { vertex: v, face })
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        (0..self.halfedges.len()).map(HalfEdgeId::new)
    }

    /// Iterate over all face IDs, the outer face included.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over the IDs of interior faces only.
    pub fn interior_face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.face_ids().filter(move |&f| !self.is_outer(f))
    }

    // ==================== Validation ====================

    /// Check that all connectivity is consistent.
    ///
    /// Verifies twin involution, next/prev mutual inversion, vertex anchor
    /// origins, face anchors, ring closure with a consistent `face` field,
    /// and Euler's formula. Intended for tests and debugging.
    pub fn is_valid(&self) -> bool {
        for (i, he) in self.halfedges.iter().enumerate() {
            let id = HalfEdgeId::new(i);
            if !he.twin.is_valid() || self.halfedge(he.twin).twin != id {
                return false;
            }
            if !he.next.is_valid() || self.halfedge(he.next).prev != id {
                return false;
            }
            if !he.prev.is_valid() || self.halfedge(he.prev).next != id {
                return false;
            }
            // A half-edge and its twin run between distinct endpoints.
            if self.halfedge(he.twin).origin == he.origin {
                return false;
            }
        }

        for (i, v) in self.vertices.iter().enumerate() {
            if !v.halfedge.is_valid() {
                return false;
            }
            if self.halfedge(v.halfedge).origin != VertexId::new(i) {
                return false;
            }
        }

        for i in 0..self.faces.len() {
            let f = FaceId::new(i);
            let ring = match self.face_ring(f) {
                Ok(ring) => ring,
                Err(_) => return false,
            };
            if ring.iter().any(|&he| self.face_of(he) != f) {
                return false;
            }
        }

        // Euler's formula for a subdivision of the sphere.
        let v = self.num_vertices() as i64;
        let e = (self.num_halfedges() / 2) as i64;
        let f = self.num_faces() as i64;
        v - e + f == 2
    }
}
