//! Input mesh description: flat attribute buffers plus per-submesh triangle
//! index lists.

use crate::errors::CutError;
use crate::float_types::Real;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector2, Vector3, Vector4};

/// The buffers describing one triangulated mesh, in the layout GPU-oriented
/// hosts already keep them in.
///
/// All attribute buffers share the same indexing; `submeshes` holds one flat
/// triangle index list per material slot, each with a length divisible by 3.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    /// Optional per-vertex tangents (4th component: handedness sign).
    pub tangents: Option<Vec<Vector4<Real>>>,
    pub uvs: Vec<Vector2<Real>>,
    pub submeshes: Vec<Vec<usize>>,
}

impl MeshBuffers {
    /// Check the buffer shape before cutting: non-empty positions, matching
    /// attribute lengths, at least one submesh, every index list a whole
    /// number of triangles.
    pub fn validate(&self) -> Result<(), CutError> {
        if self.positions.is_empty() {
            return Err(CutError::MissingInput("vertex position buffer is empty"));
        }
        let len = self.positions.len();
        if self.normals.len() != len {
            return Err(CutError::MissingInput(
                "normal buffer length differs from positions",
            ));
        }
        if self.uvs.len() != len {
            return Err(CutError::MissingInput(
                "uv buffer length differs from positions",
            ));
        }
        if let Some(tangents) = &self.tangents {
            if tangents.len() != len {
                return Err(CutError::MissingInput(
                    "tangent buffer length differs from positions",
                ));
            }
        }
        if self.submeshes.is_empty() {
            return Err(CutError::MissingInput("no submesh index lists"));
        }
        for (submesh, indices) in self.submeshes.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(CutError::MalformedTriangle {
                    submesh,
                    index_count: indices.len(),
                });
            }
        }
        Ok(())
    }

    /// Assemble the [`Vertex`] record stored at `index`.
    pub fn vertex(&self, index: usize) -> Result<Vertex, CutError> {
        if index >= self.positions.len() {
            return Err(CutError::VertexIndexOutOfRange {
                index,
                len: self.positions.len(),
            });
        }
        Ok(Vertex::new(
            Some(index),
            self.positions[index],
            self.normals[index],
            self.tangents.as_ref().map(|tangents| tangents[index]),
            self.uvs[index],
        ))
    }

    /// Total triangle count across every submesh.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|indices| indices.len() / 3).sum()
    }
}
