use meshcut::errors::CutError;
use meshcut::float_types::EPSILON;
use meshcut::plane::Plane;
use meshcut::vertex::Vertex;
use nalgebra::{Point3, Vector2, Vector3, Vector4};

mod support;

use crate::support::approx_eq;

fn vertex(index: usize, pos: [f64; 3], uv: [f64; 2]) -> Vertex {
    Vertex::new(
        Some(index),
        Point3::from(pos),
        Vector3::z(),
        Some(Vector4::new(1.0, 0.0, 0.0, 1.0)),
        Vector2::from(uv),
    )
}

#[test]
fn interpolate_midpoint() {
    let a = Vertex::new(
        Some(0),
        Point3::origin(),
        Vector3::x(),
        Some(Vector4::new(1.0, 0.0, 0.0, 1.0)),
        Vector2::new(0.0, 0.0),
    );
    let b = Vertex::new(
        Some(1),
        Point3::new(2.0, 0.0, 0.0),
        Vector3::y(),
        Some(Vector4::new(0.0, 1.0, 0.0, -1.0)),
        Vector2::new(1.0, 1.0),
    );

    let mid = a.interpolate(&b, 0.5);
    assert_eq!(mid.original_index, None);
    assert!(approx_eq(mid.pos.x, 1.0, EPSILON));
    assert!(approx_eq(mid.normal.x, 0.5, EPSILON));
    assert!(approx_eq(mid.normal.y, 0.5, EPSILON));
    assert!(approx_eq(mid.uv.x, 0.5, EPSILON));

    let tangent = mid.tangent.expect("both endpoints carry tangents");
    assert!(approx_eq(tangent.x, 0.5, EPSILON));
    assert!(approx_eq(tangent.y, 0.5, EPSILON));
    // handedness sign interpolates like any other component
    assert!(approx_eq(tangent.w, 0.0, EPSILON));
}

#[test]
fn interpolate_drops_tangent_when_one_side_lacks_it() {
    let mut a = vertex(0, [0.0, 0.0, 0.0], [0.0, 0.0]);
    let b = vertex(1, [1.0, 0.0, 0.0], [1.0, 0.0]);
    a.tangent = None;

    assert!(a.interpolate(&b, 0.5).tangent.is_none());
}

#[test]
fn interpolate_on_plane_lands_on_plane() {
    let plane = Plane::from_point_normal(Point3::new(1.0, 0.0, 0.0), Vector3::x());
    let v_in = vertex(0, [0.0, 0.0, 0.0], [0.0, 0.0]);
    let v_out = vertex(1, [4.0, 0.0, 0.0], [1.0, 1.0]);

    let cut = Vertex::interpolate_on_plane(&v_in, &v_out, &plane).expect("edge crosses plane");
    assert_eq!(cut.original_index, None);
    assert!(plane.signed_distance(&cut.pos).abs() < EPSILON);
    // the plane sits a quarter of the way along the edge
    assert!(approx_eq(cut.pos.x, 1.0, EPSILON));
    assert!(approx_eq(cut.uv.x, 0.25, EPSILON));
    assert!(approx_eq(cut.uv.y, 0.25, EPSILON));
}

#[test]
fn interpolate_on_plane_returns_on_plane_endpoint() {
    let plane = Plane::from_point_normal(Point3::origin(), Vector3::x());

    let on_plane = vertex(0, [0.0, 2.0, 0.0], [0.3, 0.7]);
    let off_plane = vertex(1, [-3.0, 0.0, 0.0], [1.0, 1.0]);

    // in-side endpoint on the plane
    let cut = Vertex::interpolate_on_plane(&on_plane, &off_plane, &plane).expect("guarded");
    assert_eq!(cut.original_index, None);
    assert_eq!(cut.pos, on_plane.pos);
    assert_eq!(cut.uv, on_plane.uv);

    // out-side endpoint on the plane
    let cut = Vertex::interpolate_on_plane(&off_plane, &on_plane, &plane).expect("guarded");
    assert_eq!(cut.original_index, None);
    assert_eq!(cut.pos, on_plane.pos);
}

#[test]
fn interpolate_on_plane_degenerate_edge_fails() {
    let plane = Plane::from_point_normal(Point3::origin(), Vector3::y());

    // both endpoints clearly off the plane, edge running parallel to it
    let a = vertex(0, [0.0, 1.0, 0.0], [0.0, 0.0]);
    let b = vertex(1, [1.0, 1.0, 0.0], [1.0, 0.0]);

    let err = Vertex::interpolate_on_plane(&a, &b, &plane).unwrap_err();
    assert!(matches!(err, CutError::DegenerateIntersection(..)));
}
