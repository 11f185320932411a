use meshcut::bounds::{Aabb, world_bounds};
use nalgebra::{Matrix4, Point3, Vector3};

mod support;

use crate::support::approx_eq;

#[test]
fn from_points_spans_extremes() {
    let points = [
        Point3::new(1.0, -2.0, 0.5),
        Point3::new(-1.0, 3.0, 0.0),
        Point3::new(0.0, 0.0, -4.0),
    ];
    let aabb = Aabb::from_points(&points).expect("non-empty");

    assert_eq!(aabb.mins, Point3::new(-1.0, -2.0, -4.0));
    assert_eq!(aabb.maxs, Point3::new(1.0, 3.0, 0.5));
    assert!(approx_eq(aabb.size().y, 5.0, 1e-12));
    assert!(approx_eq(aabb.center().x, 0.0, 1e-12));
}

#[test]
fn from_points_empty_is_none() {
    assert!(Aabb::from_points(&[]).is_none());
}

#[test]
fn world_bounds_applies_transform() {
    let points = [Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
    let ltw = Matrix4::new_translation(&Vector3::new(0.0, 2.0, 0.0));

    let aabb = world_bounds(&ltw, &points).expect("non-empty");
    assert_eq!(aabb.mins, Point3::new(-1.0, 2.0, 0.0));
    assert_eq!(aabb.maxs, Point3::new(1.0, 2.0, 0.0));
}
