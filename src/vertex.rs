//! Struct and functions for working with mesh vertices, including the
//! vertices synthesized where a cut crosses an edge.

use crate::errors::CutError;
use crate::float_types::{EPSILON, Real};
use crate::plane::Plane;
use nalgebra::{Point3, Vector2, Vector3, Vector4};

/// One vertex record: position plus the attributes carried through a cut.
///
/// `original_index` is `Some(i)` for a vertex taken verbatim from the source
/// buffers, which each output side welds on first encounter, and `None` for
/// a vertex synthesized at a plane intersection, which is never shared even
/// when numerically coincident with another. Vertices are immutable once
/// created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub original_index: Option<usize>,
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    /// Optional tangent; the fourth component encodes handedness and is
    /// interpolated like the rest.
    pub tangent: Option<Vector4<Real>>,
    pub uv: Vector2<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    pub const fn new(
        original_index: Option<usize>,
        pos: Point3<Real>,
        normal: Vector3<Real>,
        tangent: Option<Vector4<Real>>,
        uv: Vector2<Real>,
    ) -> Self {
        Vertex {
            original_index,
            pos,
            normal,
            tangent,
            uv,
        }
    }

    /// Return the linear interpolation of every attribute between `self`
    /// (`t = 0`) and `other` (`t = 1`).
    ///
    /// The result is always a synthesized vertex (`original_index = None`).
    /// The tangent is interpolated only when both endpoints carry one.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let tangent = match (self.tangent, other.tangent) {
            (Some(a), Some(b)) => Some(a + (b - a) * t),
            _ => None,
        };

        Vertex {
            original_index: None,
            pos: self.pos + (other.pos - self.pos) * t,
            normal: self.normal + (other.normal - self.normal) * t,
            tangent,
            uv: self.uv + (other.uv - self.uv) * t,
        }
    }

    /// Synthesize the vertex where the edge from `v_in` to `v_out` crosses
    /// `plane`.
    ///
    /// An endpoint already on the plane is returned as-is (marked
    /// synthesized) instead of raycast: a zero-length or in-plane ray has no
    /// usable intersection distance. Past that guard the endpoints lie on
    /// strictly opposite sides, so a miss surfaces as
    /// [`CutError::DegenerateIntersection`].
    pub fn interpolate_on_plane(
        v_in: &Vertex,
        v_out: &Vertex,
        plane: &Plane,
    ) -> Result<Vertex, CutError> {
        if plane.signed_distance(&v_in.pos).abs() < EPSILON {
            return Ok(Vertex {
                original_index: None,
                ..*v_in
            });
        }
        if plane.signed_distance(&v_out.pos).abs() < EPSILON {
            return Ok(Vertex {
                original_index: None,
                ..*v_out
            });
        }

        let edge = v_out.pos - v_in.pos;
        let length = edge.norm();
        let dir = edge / length;

        let distance = plane
            .intersect_ray(&v_in.pos, &dir)
            .ok_or(CutError::DegenerateIntersection(v_in.pos, v_out.pos))?;

        // t is left unclamped; an overshoot past [0, 1] can only come from
        // numerical breakdown and should stay visible downstream.
        let t = distance / length;

        let mut vertex = v_in.interpolate(v_out, t);
        vertex.pos = v_in.pos + dir * distance;
        Ok(vertex)
    }
}
