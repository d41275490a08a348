//! Growth operations: edge splitting and diagonal insertion.
//!
//! These are the only two ways an existing mesh changes. Both preserve the
//! identity of every entity they touch: a split edge keeps its half-edge
//! IDs (shortened to the new vertex), and a face split by a diagonal keeps
//! its ID for one of the two resulting rings, so handles held by pending
//! work lists stay valid.

use log::trace;

use crate::error::Result;
use crate::geom::Point;

use super::halfedge::{Face, HalfEdge, PlanarMesh, Vertex};
use super::index::{FaceId, HalfEdgeId, VertexId};

impl PlanarMesh {
    /// Split the edge carried by `he` at `position`, inserting a new vertex M.
    ///
    /// With `he: A→B`, afterwards `he` runs A→M and a new half-edge M→B is
    /// spliced directly after it in its ring; symmetrically the twin becomes
    /// B→M with a new M→A spliced after it. Both adjacent faces keep their
    /// identity and gain one ring edge. Net growth: +1 vertex, +2
    /// half-edges, +0 faces.
    ///
    /// `position` must lie on the segment A–B; this is not verified here —
    /// callers produce it by exact parametric interpolation or reuse an
    /// existing endpoint's height, so the check would be redundant.
    ///
    /// Returns the ID of M.
    pub fn split_edge(&mut self, he: HalfEdgeId, position: Point) -> VertexId {
        // Capture the twin before relinking; after this `he`'s twin changes.
        let tw = self.twin(he);

        let m = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(position));

        let mb = HalfEdgeId::new(self.halfedges.len()); // M→B, he's ring
        let ma = HalfEdgeId::new(self.halfedges.len() + 1); // M→A, twin's ring
        self.halfedges.push(HalfEdge::new());
        self.halfedges.push(HalfEdge::new());

        self.halfedge_mut(mb).origin = m;
        self.halfedge_mut(ma).origin = m;

        // he: A→M ⟷ ma: M→A, tw: B→M ⟷ mb: M→B.
        self.halfedge_mut(mb).twin = tw;
        self.halfedge_mut(tw).twin = mb;
        self.halfedge_mut(ma).twin = he;
        self.halfedge_mut(he).twin = ma;

        // Splice M→B after A→M. When the ring wraps to `he` itself the same
        // links produce the two-edge ring, so no special case is needed.
        let nxt = self.next(he);
        self.halfedge_mut(mb).face = self.face_of(he);
        self.halfedge_mut(mb).prev = he;
        self.halfedge_mut(mb).next = nxt;
        self.halfedge_mut(he).next = mb;
        self.halfedge_mut(nxt).prev = mb;

        // Splice M→A after B→M in the opposite ring.
        let nxt = self.next(tw);
        self.halfedge_mut(ma).face = self.face_of(tw);
        self.halfedge_mut(ma).prev = tw;
        self.halfedge_mut(ma).next = nxt;
        self.halfedge_mut(tw).next = ma;
        self.halfedge_mut(nxt).prev = ma;

        self.vertex_mut(m).halfedge = ma;

        trace!("split {:?} at {}, new vertex {:?}", he, self.position(m), m);
        m
    }

    /// Insert the diagonal `v1`–`v2` inside `face`, splitting it in two.
    ///
    /// The caller guarantees `v1 != v2`, that both vertices lie on the
    /// face's boundary ring, and that the open segment between them lies in
    /// the face's interior without crossing existing edges. Only the first
    /// two conditions are checkable cheaply; a vertex that is not on the
    /// ring fails with [`MeshError::NotIncident`].
    ///
    /// The ring is cut at `v1` and `v2` into two rings sharing only those
    /// vertices. One keeps the identity of `face` (so pending work-list
    /// references stay valid), the other is relabeled to a newly created
    /// face. Net growth: +2 half-edges, +1 face.
    ///
    /// Returns `(face, new_face)`.
    ///
    /// [`MeshError::NotIncident`]: crate::error::MeshError::NotIncident
    pub fn add_diagonal(
        &mut self,
        face: FaceId,
        v1: VertexId,
        v2: VertexId,
    ) -> Result<(FaceId, FaceId)> {
        let h1 = self.halfedge_from(v1, face)?;
        let h2 = self.halfedge_from(v2, face)?;

        // Predecessors before any relinking.
        let h1_prev = self.prev(h1);
        let h2_prev = self.prev(h2);

        let e1 = HalfEdgeId::new(self.halfedges.len()); // v1→v2
        let e2 = HalfEdgeId::new(self.halfedges.len() + 1); // v2→v1
        self.halfedges.push(HalfEdge::new());
        self.halfedges.push(HalfEdge::new());

        self.halfedge_mut(e1).origin = v1;
        self.halfedge_mut(e2).origin = v2;
        self.halfedge_mut(e1).twin = e2;
        self.halfedge_mut(e2).twin = e1;

        // Splice e1 between h1's predecessor and h2.
        self.halfedge_mut(e1).prev = h1_prev;
        self.halfedge_mut(e1).next = h2;
        self.halfedge_mut(h1_prev).next = e1;
        self.halfedge_mut(h2).prev = e1;

        // Splice e2 between h2's predecessor and h1.
        self.halfedge_mut(e2).prev = h2_prev;
        self.halfedge_mut(e2).next = h1;
        self.halfedge_mut(h2_prev).next = e2;
        self.halfedge_mut(h1).prev = e2;

        let new_face = FaceId::new(self.faces.len());
        self.faces.push(Face::new(e1));

        // Relabel both rings. The walk through e1 becomes the new face,
        // the walk through e2 keeps the original face identity.
        let ring1 = self.ring_from(e1)?;
        for &id in &ring1 {
            self.halfedge_mut(id).face = new_face;
        }
        let ring2 = self.ring_from(e2)?;
        for &id in &ring2 {
            self.halfedge_mut(id).face = face;
        }

        // The original face's anchor may have crossed to the other ring.
        self.face_mut(face).halfedge = e2;

        // Repair incident anchors that pointed into the reassigned side.
        if self.face_of(self.vertex(v1).halfedge) == face {
            self.vertex_mut(v1).halfedge = e1;
        }
        if self.face_of(self.vertex(v2).halfedge) == face {
            self.vertex_mut(v2).halfedge = e2;
        }

        trace!(
            "diagonal {:?}→{:?} split {:?} into rings of {} and {} edges",
            v1,
            v2,
            face,
            ring2.len(),
            ring1.len()
        );
        Ok((face, new_face))
    }
}
