//! Canonical shapes for tests and demos.

use crate::mesh::MeshBuffers;
use nalgebra::{Point3, Vector2, Vector3};

/// A 2×2×2 cube centered at the origin, built the classic shared-vertex way:
/// 8 vertices, 12 triangles, a single submesh.
///
/// Normals are the normalized corner directions (the only per-corner normal
/// a shared-vertex cube can express); UVs wrap one quad per pair of corners.
pub fn cube() -> MeshBuffers {
    let positions = vec![
        Point3::new(-1.0, -1.0, -1.0), // bottom backwards left
        Point3::new(1.0, -1.0, -1.0),  // bottom backwards right
        Point3::new(1.0, -1.0, 1.0),   // bottom forward right
        Point3::new(-1.0, -1.0, 1.0),  // bottom forward left
        Point3::new(-1.0, 1.0, -1.0),  // top backwards left
        Point3::new(1.0, 1.0, -1.0),   // top backwards right
        Point3::new(1.0, 1.0, 1.0),    // top forward right
        Point3::new(-1.0, 1.0, 1.0),   // top forward left
    ];

    let normals: Vec<Vector3<_>> = positions.iter().map(|p| p.coords.normalize()).collect();

    let uvs = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];

    #[rustfmt::skip]
    let indices = vec![
        // bottom triangles
        0, 1, 2,
        2, 3, 0,
        // top triangles
        6, 5, 4,
        4, 7, 6,
        // back triangles
        5, 1, 0,
        0, 4, 5,
        // front triangles
        3, 2, 6,
        6, 7, 3,
        // right triangles
        6, 2, 1,
        1, 5, 6,
        // left triangles
        0, 3, 7,
        7, 4, 0,
    ];

    MeshBuffers {
        positions,
        normals,
        tangents: None,
        uvs,
        submeshes: vec![indices],
    }
}
