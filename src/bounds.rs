//! Axis-aligned bounds, used to derive cut planes from scene objects.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point3<Real>]) -> Option<Self> {
        let first = points.first()?;
        let mut mins = first.coords;
        let mut maxs = first.coords;
        for point in &points[1..] {
            mins = mins.inf(&point.coords);
            maxs = maxs.sup(&point.coords);
        }
        Some(Self::new(mins.into(), maxs.into()))
    }

    pub fn center(&self) -> Point3<Real> {
        ((self.mins.coords + self.maxs.coords) / 2.0).into()
    }

    pub fn size(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }
}

/// Bounds of `points` after mapping each through a local-to-world matrix,
/// or `None` for an empty slice.
pub fn world_bounds(local_to_world: &Matrix4<Real>, points: &[Point3<Real>]) -> Option<Aabb> {
    let first = local_to_world.transform_point(points.first()?);
    let mut mins = first.coords;
    let mut maxs = first.coords;
    for point in &points[1..] {
        let p = local_to_world.transform_point(point);
        mins = mins.inf(&p.coords);
        maxs = maxs.sup(&p.coords);
    }
    Some(Aabb::new(mins.into(), maxs.into()))
}
