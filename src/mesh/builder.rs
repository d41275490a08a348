//! Mesh construction from a polygon boundary.
//!
//! The loader turns a CCW boundary index sequence into the initial two-face
//! mesh: one interior face whose ring follows the input order, and the
//! outer face whose ring is its mirror.

use log::debug;

use crate::error::{MeshError, Result};
use crate::geom::Point;

use super::halfedge::{Face, HalfEdge, PlanarMesh, Vertex};
use super::index::{FaceId, HalfEdgeId, VertexId};

impl PlanarMesh {
    /// Build the initial mesh of a simple polygon.
    ///
    /// `boundary` is an ordered CCW sequence of indices into `points`,
    /// without repeating the first vertex at the end. Every point is added
    /// as a mesh vertex, in input order, so that `VertexId::new(i)`
    /// corresponds to `points[i]`.
    ///
    /// The result has `n` forward half-edges forming the interior face's
    /// CCW ring, `n` reverse half-edges forming the outer face's CW ring,
    /// twins linked across, and each vertex anchored at the first half-edge
    /// it is visited as origin or destination.
    ///
    /// # Errors
    /// Fails if the boundary has fewer than three vertices, references an
    /// index outside `points`, or visits the same vertex twice.
    pub fn from_polygon(boundary: &[usize], points: &[Point]) -> Result<Self> {
        if boundary.len() < 3 {
            return Err(MeshError::PolygonTooSmall {
                count: boundary.len(),
            });
        }
        for (slot, &vi) in boundary.iter().enumerate() {
            if vi >= points.len() {
                return Err(MeshError::InvalidVertexIndex { slot, vertex: vi });
            }
            if boundary[..slot].contains(&vi) {
                return Err(MeshError::RepeatedVertex { vertex: vi });
            }
        }

        let n = boundary.len();
        let mut mesh = PlanarMesh {
            vertices: points.iter().cloned().map(Vertex::new).collect(),
            halfedges: vec![HalfEdge::new(); 2 * n],
            faces: Vec::with_capacity(2),
            outer: FaceId::invalid(),
        };

        // Forward half-edges occupy slots 0..n, reverse slots n..2n;
        // forward i runs boundary[i] → boundary[i+1], reverse i mirrors it.
        let fwd = |i: usize| HalfEdgeId::new(i % n);
        let rev = |i: usize| HalfEdgeId::new(n + i % n);

        let inner = FaceId::new(0);
        let outer = FaceId::new(1);
        mesh.faces.push(Face::new(fwd(0)));
        mesh.faces.push(Face::new(rev(0)));
        mesh.outer = outer;

        for i in 0..n {
            let v_origin = VertexId::new(boundary[i]);
            let v_dest = VertexId::new(boundary[(i + 1) % n]);

            {
                let e = mesh.halfedge_mut(fwd(i));
                e.origin = v_origin;
                e.twin = rev(i);
                e.next = fwd(i + 1);
                e.prev = fwd(i + n - 1);
                e.face = inner;
            }
            {
                // The outer ring runs against the boundary order.
                let te = mesh.halfedge_mut(rev(i));
                te.origin = v_dest;
                te.twin = fwd(i);
                te.next = rev(i + n - 1);
                te.prev = rev(i + 1);
                te.face = outer;
            }

            if !mesh.vertex(v_origin).halfedge.is_valid() {
                mesh.vertex_mut(v_origin).halfedge = fwd(i);
            }
            if !mesh.vertex(v_dest).halfedge.is_valid() {
                mesh.vertex_mut(v_dest).halfedge = rev(i);
            }
        }

        debug!(
            "built polygon mesh: {} vertices, {} half-edges, 2 faces",
            mesh.num_vertices(),
            mesh.num_halfedges()
        );
        Ok(mesh)
    }
}
