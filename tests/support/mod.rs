//! Test support library
//! Provides various helper functions & utilities for tests.

use meshcut::cut_mesh::CutMesh;
use meshcut::float_types::Real;
use meshcut::mesh::MeshBuffers;
use nalgebra::{Point3, Vector2, Vector3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Area of the triangle spanned by three points.
pub fn triangle_area(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Real {
    (b - a).cross(&(c - a)).norm() / 2.0
}

/// Total surface area across every submesh of one cut side.
pub fn side_area(side: &CutMesh) -> Real {
    let vertices = side.vertices();
    let mut area = 0.0;
    for indices in side.submeshes() {
        for tri in indices.chunks_exact(3) {
            area += triangle_area(
                &vertices[tri[0]].pos,
                &vertices[tri[1]].pos,
                &vertices[tri[2]].pos,
            );
        }
    }
    area
}

/// A one-triangle mesh in the z = 0 plane with a single submesh.
pub fn single_triangle(p1: [Real; 3], p2: [Real; 3], p3: [Real; 3]) -> MeshBuffers {
    MeshBuffers {
        positions: vec![Point3::from(p1), Point3::from(p2), Point3::from(p3)],
        normals: vec![Vector3::z(); 3],
        tangents: None,
        uvs: vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ],
        submeshes: vec![vec![0, 1, 2]],
    }
}

/// A two-triangle quad in the z = 0 plane spanning `[0, 2] x [0, 2]`, with
/// the diagonal edge from `(2, 2, 0)` to `(0, 0, 0)` shared by both
/// triangles.
pub fn quad() -> MeshBuffers {
    MeshBuffers {
        positions: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ],
        normals: vec![Vector3::z(); 4],
        tangents: None,
        uvs: vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ],
        submeshes: vec![vec![0, 1, 2, 2, 3, 0]],
    }
}
