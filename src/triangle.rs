//! Read-only triangle view over the shared input buffers.

use crate::errors::CutError;
use crate::float_types::Real;
use crate::mesh::MeshBuffers;
use crate::vertex::Vertex;

/// Three vertex records in fixed winding order, drawn from the input
/// buffers by index.
///
/// Purely an adapter: it has no lifecycle beyond the classification step
/// that builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Assemble a triangle from three vertex-buffer indices.
    pub fn from_buffers(
        mesh: &MeshBuffers,
        i1: usize,
        i2: usize,
        i3: usize,
    ) -> Result<Self, CutError> {
        Ok(Triangle {
            vertices: [mesh.vertex(i1)?, mesh.vertex(i2)?, mesh.vertex(i3)?],
        })
    }

    /// Surface area of the triangle.
    pub fn area(&self) -> Real {
        let [v1, v2, v3] = &self.vertices;
        (v2.pos - v1.pos).cross(&(v3.pos - v1.pos)).norm() / 2.0
    }
}
