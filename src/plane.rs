//! Cutting-plane primitive: signed distance, side classification and ray
//! intersection.

use crate::bounds::Aabb;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Matrix4, Point3, Vector3};

/// An oriented plane `n·p = w` with unit normal `n`.
///
/// Holds no mutable state, so one instance can be shared across any number
/// of concurrent triangle classifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal of the plane.
    pub normal: Vector3<Real>,
    /// Offset from origin along the normal.
    pub w: Real,
}

impl Plane {
    /// Build a plane from a point in the plane and a (not necessarily unit)
    /// normal.
    pub fn from_point_normal(point: Point3<Real>, normal: Vector3<Real>) -> Self {
        let normal = normal.normalize();
        let w = normal.dot(&point.coords);
        Plane { normal, w }
    }

    /// Build a plane from three points.
    /// The normal direction follows the right-hand rule: `(p2-p1) × (p3-p1)`.
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1));

        if normal.norm_squared() < Real::EPSILON * Real::EPSILON {
            // Collinear points, return default plane
            return Plane {
                normal: Vector3::z(),
                w: 0.0,
            };
        }

        let normal = normal.normalize();
        let w = normal.dot(&p1.coords);
        Plane { normal, w }
    }

    /// Signed distance from `point` to the plane, positive along the normal.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Which side of the plane `point` lies on. Points exactly on the plane
    /// classify as positive.
    pub fn side(&self, point: &Point3<Real>) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Distance along the ray `origin + t·dir` at which it crosses the
    /// plane, or `None` when the ray is parallel to it.
    pub fn intersect_ray(&self, origin: &Point3<Real>, dir: &Vector3<Real>) -> Option<Real> {
        let denom = self.normal.dot(dir);
        if denom.abs() < EPSILON {
            return None;
        }
        Some((self.w - self.normal.dot(&origin.coords)) / denom)
    }

    /// Return a flipped copy of this plane.
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Derive a cutting plane from a cut-plane object's world-space bounds
    /// and its right axis, expressed in the mesh's local space.
    ///
    /// `world_to_local` is the inverse of the mesh's local-to-world
    /// transform. This is a thin adapter over [`Plane::from_points`]; hosts
    /// with a different transform representation can rebuild it trivially.
    pub fn from_cutter_bounds(
        bounds: &Aabb,
        right: &Vector3<Real>,
        world_to_local: &Matrix4<Real>,
    ) -> Self {
        let right_size = right.component_mul(&bounds.size());

        let p1 = bounds.mins;
        let p2 = bounds.maxs;
        let p3 = p1 + right_size;

        Self::from_points(
            world_to_local.transform_point(&p1),
            world_to_local.transform_point(&p2),
            world_to_local.transform_point(&p3),
        )
    }
}
