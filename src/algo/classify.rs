//! Face classification and open-slab repair.
//!
//! Classification is a pure function of a face's boundary-edge shape:
//! counting vertical and horizontal edges decides whether a cell is already
//! a rectangle or right triangle, an acceptable obtuse cell, or an open
//! slab that still needs one diagonal.

use log::trace;

use crate::error::{MeshError, Result};
use crate::geom::Coord;
use crate::mesh::{FaceId, FaceKind, HalfEdgeId, PlanarMesh};

/// The y-interval covered by a half-edge, low end first.
fn y_span(mesh: &PlanarMesh, he: HalfEdgeId) -> (&Coord, &Coord) {
    let a = &mesh.position(mesh.origin(he)).y;
    let b = &mesh.position(mesh.dest(he)).y;
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Classify an interior face from its boundary ring.
///
/// Checked in priority order:
/// 1. 4 edges, 2 vertical, 2 horizontal → [`FaceKind::Rectangle`]
/// 2. 3 edges, 1 vertical, 1 horizontal → [`FaceKind::RightTriangle`]
/// 3. exactly 2 vertical edges: overlapping y-intervals →
///    [`FaceKind::ObtuseTriangle`], disjoint → [`FaceKind::OpenSlab`]
/// 4. anything else → [`FaceKind::ObtuseTriangle`]
///
/// Does not store the tag; the caller decides when a tag is final.
///
/// # Errors
/// Propagates corrupted-mesh errors from the ring walk.
pub fn classify_face(mesh: &PlanarMesh, face: FaceId) -> Result<FaceKind> {
    let ring = mesh.face_ring(face)?;
    let verticals: Vec<HalfEdgeId> = ring
        .iter()
        .copied()
        .filter(|&he| mesh.is_vertical(he))
        .collect();
    let horizontals = ring.iter().filter(|&&he| mesh.is_horizontal(he)).count();

    if ring.len() == 4 && verticals.len() == 2 && horizontals == 2 {
        return Ok(FaceKind::Rectangle);
    }
    if ring.len() == 3 && verticals.len() == 1 && horizontals == 1 {
        return Ok(FaceKind::RightTriangle);
    }
    if verticals.len() == 2 {
        let (a_lo, a_hi) = y_span(mesh, verticals[0]);
        let (b_lo, b_hi) = y_span(mesh, verticals[1]);
        if a_lo.max(b_lo) <= a_hi.min(b_hi) {
            return Ok(FaceKind::ObtuseTriangle);
        }
        return Ok(FaceKind::OpenSlab);
    }
    Ok(FaceKind::ObtuseTriangle)
}

/// Split an open-slab face with the one diagonal that resolves it.
///
/// Orders the face's two vertical edges left/right by x, then connects the
/// topmost endpoint of the left edge to the bottommost endpoint of the
/// right edge. Both resulting faces must be re-classified by the caller.
///
/// # Errors
/// Fails with [`MeshError::NotOpenSlab`] if the face does not have exactly
/// two vertical edges.
pub fn split_open_slab(mesh: &mut PlanarMesh, face: FaceId) -> Result<(FaceId, FaceId)> {
    let mut verticals: Vec<HalfEdgeId> = mesh
        .face_ring(face)?
        .into_iter()
        .filter(|&he| mesh.is_vertical(he))
        .collect();
    if verticals.len() != 2 {
        return Err(MeshError::NotOpenSlab { face });
    }
    verticals.sort_by(|&a, &b| {
        mesh.position(mesh.origin(a))
            .x
            .cmp(&mesh.position(mesh.origin(b)).x)
    });
    let (left, right) = (verticals[0], verticals[1]);

    let left_top = {
        let (o, d) = (mesh.origin(left), mesh.dest(left));
        if mesh.position(o).y > mesh.position(d).y {
            o
        } else {
            d
        }
    };
    let right_bottom = {
        let (o, d) = (mesh.origin(right), mesh.dest(right));
        if mesh.position(o).y < mesh.position(d).y {
            o
        } else {
            d
        }
    };

    trace!(
        "open slab {:?}: joining {:?} to {:?}",
        face,
        left_top,
        right_bottom
    );
    mesh.add_diagonal(face, left_top, right_bottom)
}
