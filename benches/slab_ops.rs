//! Benchmarks for mesh construction and slab partitioning.

use criterion::{criterion_group, criterion_main, Criterion};
use slabmesh::prelude::*;

/// A rectilinear staircase with `steps` unit steps under the diagonal,
/// closed by the right and top sides.
fn staircase(steps: i64) -> Vec<Point> {
    let mut points = Vec::with_capacity(2 * steps as usize + 2);
    for i in 0..steps {
        points.push(Point::from_integers(i, i));
        points.push(Point::from_integers(i + 1, i));
    }
    points.push(Point::from_integers(steps, steps));
    points.push(Point::from_integers(0, steps));
    points
}

fn staircase_mesh(steps: i64) -> PlanarMesh {
    let points = staircase(steps);
    let boundary: Vec<usize> = (0..points.len()).collect();
    PlanarMesh::from_polygon(&boundary, &points).unwrap()
}

fn bench_mesh_construction(c: &mut Criterion) {
    let points = staircase(50);
    let boundary: Vec<usize> = (0..points.len()).collect();

    c.bench_function("build_staircase_50", |b| {
        b.iter(|| PlanarMesh::from_polygon(&boundary, &points).unwrap());
    });
}

fn bench_partition(c: &mut Criterion) {
    c.bench_function("slab_partition_staircase_20", |b| {
        b.iter(|| {
            let mut mesh = staircase_mesh(20);
            slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();
            mesh
        });
    });
}

fn bench_mesh_traversal(c: &mut Criterion) {
    let mut mesh = staircase_mesh(50);
    slab_partition(&mut mesh, &PartitionOptions::default()).unwrap();

    c.bench_function("face_rings_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for f in mesh.face_ids() {
                count += mesh.face_ring(f).unwrap().len();
            }
            count
        });
    });

    c.bench_function("vertex_stars_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in mesh.vertex_ids() {
                count += mesh.vertex_star(v).unwrap().len();
            }
            count
        });
    });

    c.bench_function("classify_all", |b| {
        b.iter(|| {
            let mut rectangles = 0;
            for f in mesh.interior_face_ids() {
                if classify_face(&mesh, f).unwrap() == FaceKind::Rectangle {
                    rectangles += 1;
                }
            }
            rectangles
        });
    });
}

criterion_group!(
    benches,
    bench_mesh_construction,
    bench_partition,
    bench_mesh_traversal
);
criterion_main!(benches);
