//! Slab partition: sweep cuts and the classify/repair driver.
//!
//! The partition runs in three phases over a polygon mesh:
//!
//! 1. **Vertical cuts**: at every distinct input x-coordinate, collect the
//!    vertices where that vertical line meets the subdivision (splitting
//!    straddling edges at the exact intersection), then join same-face
//!    pairs of hits with vertical diagonals.
//! 2. **Horizontal cuts**: from every vertex, cast a rightward ray and
//!    split the nearest vertical edge of its face at the ray height. The
//!    ray only splits; it never inserts a connecting edge.
//! 3. **Classify/repair**: work through the interior faces with an
//!    explicit stack, tagging each; open slabs are resolved with one
//!    diagonal and both halves re-queued.
//!
//! # Example
//!
//! ```
//! use slabmesh::prelude::*;
//!
//! let points = vec![
//!     Point::from_integers(0, 0),
//!     Point::from_integers(2, 0),
//!     Point::from_integers(2, 1),
//!     Point::from_integers(1, 1),
//!     Point::from_integers(1, 2),
//!     Point::from_integers(0, 2),
//! ];
//! let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3, 4, 5], &points).unwrap();
//! slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();
//!
//! for face in mesh.interior_face_ids() {
//!     assert!(mesh.face(face).kind.is_some());
//! }
//! ```

use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::geom::{intersect_vertical_line, Coord, Point};
use crate::mesh::{FaceId, FaceKind, HalfEdgeId, PlanarMesh, VertexId};

use super::classify::{classify_face, split_open_slab};

/// Options for the slab partition driver.
#[derive(Debug, Clone, Default)]
pub struct PartitionOptions {
    /// Cap on classify/repair iterations. `None` derives a generous cap
    /// from the face count at loop entry. Termination of the repair loop
    /// is a documented assumption rather than a proven bound, so the cap
    /// turns a hypothetical runaway into [`MeshError::ConvergenceFailed`]
    /// instead of a hang.
    pub max_repair_passes: Option<usize>,
}

impl PartitionOptions {
    /// Create options with an explicit repair-iteration cap.
    pub fn with_max_repair_passes(mut self, passes: usize) -> Self {
        self.max_repair_passes = Some(passes);
        self
    }
}

// ==================== Vertical-Cut Pass ====================

/// Cut the mesh along every distinct input x-coordinate.
///
/// For each line, straddling edges are split at the exact parametric
/// intersection and on-line endpoints contribute their vertices directly;
/// the collected hits are then paired bottom-up and joined by vertical
/// diagonals where a pair bounds a common interior face.
pub fn add_vertical_cuts(mesh: &mut PlanarMesh) -> Result<()> {
    let mut xs: Vec<Coord> = mesh
        .vertex_ids()
        .map(|v| mesh.position(v).x.clone())
        .collect();
    xs.sort();
    xs.dedup();
    debug!("vertical pass over {} distinct x-coordinates", xs.len());

    for x0 in &xs {
        cut_along_line(mesh, x0)?;
    }
    Ok(())
}

/// One vertical line: collect hits, then join same-face pairs.
fn cut_along_line(mesh: &mut PlanarMesh, x0: &Coord) -> Result<()> {
    // Several edges touching the line contribute the same endpoint.
    fn push_hit(hits: &mut Vec<VertexId>, v: VertexId) {
        if !hits.contains(&v) {
            hits.push(v);
        }
    }
    let mut hits: Vec<VertexId> = Vec::new();

    // Scan a snapshot: splits append half-edges whose sub-segments end on
    // the line and are already covered by the recorded hit vertex. Each
    // undirected edge is evaluated once; the straddle test is symmetric
    // and a second split of the same edge would corrupt the mesh.
    let snapshot = mesh.num_halfedges();
    let mut visited = vec![false; snapshot];
    for i in 0..snapshot {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        let he = HalfEdgeId::new(i);
        let tw = mesh.twin(he);
        if tw.index() < snapshot {
            visited[tw.index()] = true;
        }

        // Cut from the interior side.
        let e = if mesh.is_outer(mesh.face_of(he)) {
            tw
        } else {
            he
        };
        if mesh.is_outer(mesh.face_of(e)) {
            continue;
        }

        let a = mesh.origin(e);
        let b = mesh.dest(e);
        let (ax, bx) = (&mesh.position(a).x, &mesh.position(b).x);
        if ax.min(bx) < x0 && x0 < ax.max(bx) {
            let point = intersect_vertical_line(mesh.position(a), mesh.position(b), x0);
            let m = mesh.split_edge(e, point);
            push_hit(&mut hits, m);
        } else {
            if ax == x0 {
                push_hit(&mut hits, a);
            }
            if bx == x0 {
                push_hit(&mut hits, b);
            }
        }
    }

    hits.sort_by(|&a, &b| mesh.position(a).y.cmp(&mesh.position(b).y));
    trace!("line x={}: {} hits", x0, hits.len());

    // Pair hits bottom-up. No common face means the line is outside the
    // polygon between these two hits, so advance by one and retry the
    // upper hit against the next.
    let mut i = 0;
    while i + 1 < hits.len() {
        let low = hits[i];
        let up = hits[i + 1];

        let low_faces = mesh.vertex_faces(low)?;
        let up_faces = mesh.vertex_faces(up)?;
        let common = up_faces.iter().copied().find(|f| low_faces.contains(f));
        let Some(common) = common else {
            i += 1;
            continue;
        };

        if joined_vertically(mesh, low, up, common)? {
            i += 2;
            continue;
        }

        mesh.add_diagonal(common, low, up)?;
        i += 2;
    }
    Ok(())
}

/// Whether `low` and `up` are already connected by a vertical edge
/// bounding `face` on either side.
fn joined_vertically(
    mesh: &PlanarMesh,
    low: VertexId,
    up: VertexId,
    face: FaceId,
) -> Result<bool> {
    for he in mesh.vertex_star(low)? {
        if (mesh.face_of(he) == face || mesh.face_of(mesh.twin(he)) == face)
            && mesh.dest(he) == up
            && mesh.is_vertical(he)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

// ==================== Horizontal-Cut Pass ====================

/// Refine vertical edges by casting a rightward ray from every vertex.
///
/// For each vertex, among the vertical edges of its anchor's face that lie
/// strictly to its right and whose y-span contains the vertex height, the
/// nearest is split at the ray's landing point. The split is the whole
/// effect: no edge is inserted from the vertex to the new point, so face
/// counts are unchanged by this pass.
pub fn add_horizontal_cuts(mesh: &mut PlanarMesh) -> Result<()> {
    // Vertices created by the splits below sit at existing ray heights
    // and need no rays of their own; iterate the entry snapshot.
    let snapshot: Vec<VertexId> = mesh.vertex_ids().collect();
    debug!("horizontal pass over {} vertices", snapshot.len());

    for v in snapshot {
        // A point the boundary never referenced has no outgoing half-edge.
        let anchor = mesh.vertex(v).halfedge;
        if !anchor.is_valid() {
            continue;
        }
        let face = mesh.face_of(anchor);
        if mesh.is_outer(face) {
            continue;
        }
        let vx = mesh.position(v).x.clone();
        let vy = mesh.position(v).y.clone();

        let mut best: Option<(HalfEdgeId, Coord)> = None;
        for he in mesh.face_ring(face)? {
            if !mesh.is_vertical(he) {
                continue;
            }
            let x = &mesh.position(mesh.origin(he)).x;
            if *x <= vx {
                continue;
            }
            let ya = &mesh.position(mesh.origin(he)).y;
            let yb = &mesh.position(mesh.dest(he)).y;
            if &vy < ya.min(yb) || ya.max(yb) < &vy {
                continue;
            }
            let dx = x - &vx;
            let closer = match &best {
                Some((_, best_dx)) => dx < *best_dx,
                None => true,
            };
            if closer {
                best = Some((he, dx));
            }
        }

        if let Some((he, _)) = best {
            // Landing exactly on an endpoint: the alignment vertex already
            // exists, and a zero-length edge would corrupt classification.
            if mesh.position(mesh.origin(he)).y == vy || mesh.position(mesh.dest(he)).y == vy {
                continue;
            }
            let x = mesh.position(mesh.origin(he)).x.clone();
            mesh.split_edge(he, Point::new(x, vy));
        }
    }
    Ok(())
}

// ==================== Driver ====================

/// Run the full slab partition on a polygon mesh.
///
/// Sequences the vertical pass, the horizontal pass, and the
/// classify/repair loop. On success every interior face carries a terminal
/// tag: [`FaceKind::Rectangle`], [`FaceKind::RightTriangle`] or
/// [`FaceKind::ObtuseTriangle`]; none remains [`FaceKind::OpenSlab`] or
/// untagged.
///
/// # Errors
/// Propagates corrupted-mesh and precondition errors from the passes, and
/// fails with [`MeshError::ConvergenceFailed`] if the repair loop exceeds
/// its iteration cap (see [`PartitionOptions::max_repair_passes`]).
pub fn slab_partition(mesh: &mut PlanarMesh, options: &PartitionOptions) -> Result<()> {
    add_vertical_cuts(mesh)?;
    add_horizontal_cuts(mesh)?;

    let cap = options
        .max_repair_passes
        .unwrap_or_else(|| (4 * mesh.num_interior_faces()).max(1024));

    let mut pending: Vec<FaceId> = mesh.interior_face_ids().collect();
    let mut iterations = 0usize;
    while let Some(face) = pending.pop() {
        iterations += 1;
        if iterations > cap {
            return Err(MeshError::ConvergenceFailed { iterations: cap });
        }

        let kind = classify_face(mesh, face)?;
        mesh.face_mut(face).kind = Some(kind);
        if kind == FaceKind::OpenSlab {
            let (f1, f2) = split_open_slab(mesh, face)?;
            pending.push(f1);
            pending.push(f2);
        }
    }

    debug!(
        "partition settled after {} classifications: {} interior faces",
        iterations,
        mesh.num_interior_faces()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn partitioned(coords: &[(i64, i64)]) -> PlanarMesh {
        let points: Vec<Point> = coords
            .iter()
            .map(|&(x, y)| Point::from_integers(x, y))
            .collect();
        let boundary: Vec<usize> = (0..points.len()).collect();
        let mut mesh = PlanarMesh::from_polygon(&boundary, &points).unwrap();
        slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();
        mesh
    }

    fn kinds(mesh: &PlanarMesh) -> Vec<FaceKind> {
        let mut out: Vec<FaceKind> = mesh
            .interior_face_ids()
            .map(|f| mesh.face(f).kind.expect("tagged"))
            .collect();
        out.sort_by_key(|k| format!("{:?}", k));
        out
    }

    fn assert_terminal(mesh: &PlanarMesh) {
        assert!(mesh.is_valid());
        for f in mesh.interior_face_ids() {
            let kind = mesh.face(f).kind.expect("every interior face tagged");
            assert_ne!(kind, FaceKind::OpenSlab);
        }
        assert!(mesh.face(mesh.outer_face()).kind.is_none());
    }

    #[test]
    fn test_unit_square() {
        let mesh = partitioned(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        assert_terminal(&mesh);
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_halfedges(), 8);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(kinds(&mesh), vec![FaceKind::Rectangle]);
    }

    #[test]
    fn test_right_triangle() {
        let mesh = partitioned(&[(0, 0), (2, 0), (0, 2)]);
        assert_terminal(&mesh);
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_halfedges(), 6);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(kinds(&mesh), vec![FaceKind::RightTriangle]);
    }

    #[test]
    fn test_l_shaped_hexagon() {
        // The cut at x=1 splits the bottom edge at (1,0) and joins it up
        // to the reflex corner, carving off the right unit square. The
        // left region keeps a collinear ring vertex at (1,1), so it falls
        // through to the obtuse tag rather than matching the rectangle
        // shape test.
        let mesh = partitioned(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]);
        assert_terminal(&mesh);
        assert_eq!(mesh.num_vertices(), 7);
        assert_eq!(mesh.num_halfedges(), 16);
        assert_eq!(mesh.num_faces(), 3);
        assert_eq!(
            kinds(&mesh),
            vec![FaceKind::ObtuseTriangle, FaceKind::Rectangle]
        );

        // One Steiner vertex, at the foot of the x=1 cut.
        assert_eq!(mesh.position(VertexId::new(6)), &Point::from_integers(1, 0));

        let ring_lens: Vec<usize> = mesh
            .interior_face_ids()
            .map(|f| mesh.face_ring(f).unwrap().len())
            .collect();
        let mut sorted = ring_lens.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![4, 5]);
    }

    #[test]
    fn test_heptagon() {
        let mesh = partitioned(&[(0, 0), (7, 0), (7, 3), (5, 5), (3, 5), (1, 4), (0, 2)]);
        assert_terminal(&mesh);
        assert_eq!(mesh.num_vertices(), 10);
        assert_eq!(mesh.num_halfedges(), 26);
        assert_eq!(mesh.num_faces(), 5);
        assert_eq!(
            kinds(&mesh),
            vec![
                FaceKind::ObtuseTriangle,
                FaceKind::ObtuseTriangle,
                FaceKind::ObtuseTriangle,
                FaceKind::Rectangle,
            ]
        );
    }

    #[test]
    fn test_rational_steiner_point() {
        // The cut at x=1 (through (1,-1)) crosses the slanted top edge
        // from (0,3) to (3,5) at the non-integer height 11/3.
        let points = vec![
            Point::from_integers(0, 0),
            Point::from_integers(1, -1),
            Point::from_integers(3, 0),
            Point::from_integers(3, 5),
            Point::from_integers(0, 3),
        ];
        let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3, 4], &points).unwrap();
        slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();

        assert_terminal(&mesh);
        assert_eq!(mesh.num_vertices(), 7);
        assert_eq!(mesh.num_halfedges(), 16);
        assert_eq!(mesh.num_faces(), 3);

        let expected = Point::from_ratios(1, 1, 11, 3);
        assert!(mesh.vertex_ids().any(|v| mesh.position(v) == &expected));
    }

    #[test]
    fn test_staircase() {
        // Unit steps under the diagonal, closed by the right and top
        // sides. Every cut line lands on existing vertices, so the run
        // adds only the ray-alignment points on the right wall.
        let mut coords = Vec::new();
        for i in 0..6 {
            coords.push((i, i));
            coords.push((i + 1, i));
        }
        coords.push((6, 6));
        coords.push((0, 6));

        let mesh = partitioned(&coords);
        assert_terminal(&mesh);
        assert_eq!(mesh.num_vertices(), 19);
        assert_eq!(mesh.num_halfedges(), 38);
        assert_eq!(mesh.num_faces(), 2);
        // A single interior face whose ring gained the alignment points.
        let face = mesh.interior_face_ids().next().unwrap();
        assert_eq!(mesh.face_ring(face).unwrap().len(), 19);
        assert_eq!(kinds(&mesh), vec![FaceKind::ObtuseTriangle]);
    }

    #[test]
    fn test_vertical_pass_alone_on_square() {
        // Cut lines at x=0 and x=1 both land on existing corners joined
        // by existing vertical edges, so the pass must not change the
        // mesh. This exercises both the per-edge de-duplication and the
        // already-joined check.
        let points = vec![
            Point::from_integers(0, 0),
            Point::from_integers(1, 0),
            Point::from_integers(1, 1),
            Point::from_integers(0, 1),
        ];
        let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3], &points).unwrap();
        add_vertical_cuts(&mut mesh).unwrap();

        assert!(mesh.is_valid());
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_halfedges(), 8);
        assert_eq!(mesh.num_faces(), 2);
    }

    #[test]
    fn test_horizontal_pass_splits_only() {
        // The loader anchors every boundary vertex except the first at an
        // outer half-edge, so order the boundary with the ray origin
        // (0,1) first. Its rightward ray hits the x=2 wall between the
        // wall's endpoints; the wall is split but no edge is added back
        // to the ray origin, so the face count stays the same.
        let points = vec![
            Point::from_integers(0, 1),
            Point::from_integers(0, 0),
            Point::from_integers(2, 0),
            Point::from_integers(2, 2),
        ];
        let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3], &points).unwrap();
        let faces_before = mesh.num_faces();
        add_horizontal_cuts(&mut mesh).unwrap();

        assert!(mesh.is_valid());
        assert_eq!(mesh.num_faces(), faces_before);
        assert_eq!(mesh.num_vertices(), 5);
        assert!(mesh
            .vertex_ids()
            .any(|v| mesh.position(v) == &Point::from_integers(2, 1)));
    }

    #[test]
    fn test_ray_skips_outer_anchored_vertices() {
        // Same quadrilateral with (0,1) last: it is anchored at an outer
        // half-edge and casts no ray. (0,0) does carry the interior
        // anchor, but its ray lands exactly on the wall corner (2,0) and
        // the split is skipped, so the pass changes nothing.
        let points = vec![
            Point::from_integers(0, 0),
            Point::from_integers(2, 0),
            Point::from_integers(2, 2),
            Point::from_integers(0, 1),
        ];
        let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3], &points).unwrap();
        add_horizontal_cuts(&mut mesh).unwrap();

        assert!(mesh.is_valid());
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_halfedges(), 8);
    }

    #[test]
    fn test_unreferenced_point_is_ignored() {
        // A point the boundary never uses has no outgoing half-edge; the
        // ray pass must skip it rather than walk from a missing anchor.
        let points = vec![
            Point::from_integers(0, 0),
            Point::from_integers(2, 0),
            Point::from_integers(0, 2),
            Point::from_integers(9, 9),
        ];
        let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2], &points).unwrap();
        slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();

        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(
            mesh.face(FaceId::new(0)).kind,
            Some(FaceKind::RightTriangle)
        );
        assert!(!mesh.vertex(VertexId::new(3)).halfedge.is_valid());
    }

    #[test]
    fn test_reclassification_consistency() {
        let mesh = partitioned(&[(0, 0), (7, 0), (7, 3), (5, 5), (3, 5), (1, 4), (0, 2)]);
        for f in mesh.interior_face_ids() {
            let again = classify_face(&mesh, f).unwrap();
            assert_eq!(Some(again), mesh.face(f).kind);
        }
    }

    #[test]
    fn test_tiny_iteration_cap_fails() {
        // A cap of zero cannot even tag the single face.
        let points = vec![
            Point::from_integers(0, 0),
            Point::from_integers(1, 0),
            Point::from_integers(1, 1),
            Point::from_integers(0, 1),
        ];
        let mut mesh = PlanarMesh::from_polygon(&[0, 1, 2, 3], &points).unwrap();
        let options = PartitionOptions::default().with_max_repair_passes(0);
        let err = slab_partition(&mut mesh, &options).unwrap_err();
        assert!(matches!(err, MeshError::ConvergenceFailed { .. }));
    }

    #[test]
    fn test_euler_invariant_holds_after_run() {
        for coords in [
            vec![(0, 0), (1, 0), (1, 1), (0, 1)],
            vec![(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)],
            vec![(0, 0), (7, 0), (7, 3), (5, 5), (3, 5), (1, 4), (0, 2)],
        ] {
            let mesh = partitioned(&coords);
            let v = mesh.num_vertices() as i64;
            let e = (mesh.num_halfedges() / 2) as i64;
            let f = mesh.num_faces() as i64;
            assert_eq!(v - e + f, 2);
        }
    }
}
