//! Per-side output accumulator with vertex welding.

use crate::errors::CutError;
use crate::float_types::Real;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector2, Vector3, Vector4};
use std::collections::HashMap;

/// Accumulates the vertices and per-submesh index lists for one side of a
/// cut.
///
/// A vertex carrying an original index is welded: the first occurrence is
/// appended and recorded in the old-to-new map, every later reference reuses
/// the mapped side-local index. Synthesized vertices (`original_index =
/// None`) are always appended fresh, so coincident cut-boundary vertices
/// from different triangles stay distinct. Accumulation is monotonic; there
/// is no removal.
#[derive(Debug, Clone, PartialEq)]
pub struct CutMesh {
    vertices: Vec<Vertex>,
    submeshes: Vec<Vec<usize>>,
    old_to_new: HashMap<usize, usize>,
}

impl CutMesh {
    /// Create an empty accumulator with `submesh_count` index-list slots.
    pub fn new(submesh_count: usize) -> Self {
        CutMesh {
            vertices: Vec::new(),
            submeshes: vec![Vec::new(); submesh_count],
            old_to_new: HashMap::new(),
        }
    }

    /// Append `vertex` and return its side-local index.
    fn push_vertex(&mut self, vertex: &Vertex) -> usize {
        self.vertices.push(*vertex);
        self.vertices.len() - 1
    }

    /// Resolve `vertex` to a side-local index, welding originals.
    fn resolve_vertex(&mut self, vertex: &Vertex) -> usize {
        match vertex.original_index {
            Some(original) => {
                if let Some(&mapped) = self.old_to_new.get(&original) {
                    return mapped;
                }
                let new_index = self.push_vertex(vertex);
                self.old_to_new.insert(original, new_index);
                new_index
            },
            // Synthesized vertices never enter the map.
            None => self.push_vertex(vertex),
        }
    }

    /// Append one triangle into the `submesh` slot, welding shared vertices.
    pub fn add_triangle(
        &mut self,
        v1: &Vertex,
        v2: &Vertex,
        v3: &Vertex,
        submesh: usize,
    ) -> Result<(), CutError> {
        if submesh >= self.submeshes.len() {
            return Err(CutError::SubmeshIndexOutOfRange {
                index: submesh,
                count: self.submeshes.len(),
            });
        }

        let i1 = self.resolve_vertex(v1);
        let i2 = self.resolve_vertex(v2);
        let i3 = self.resolve_vertex(v3);

        let indices = &mut self.submeshes[submesh];
        indices.push(i1);
        indices.push(i2);
        indices.push(i3);
        Ok(())
    }

    /// Output vertices in first-encounter order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// One index list per submesh slot, referencing [`CutMesh::vertices`].
    pub fn submeshes(&self) -> &[Vec<usize>] {
        &self.submeshes
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total triangle count across every submesh slot.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|indices| indices.len() / 3).sum()
    }

    /// True when no triangle ended up on this side.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Positions in output order, ready for host upload.
    pub fn positions(&self) -> Vec<Point3<Real>> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    /// Normals in output order.
    pub fn normals(&self) -> Vec<Vector3<Real>> {
        self.vertices.iter().map(|v| v.normal).collect()
    }

    /// Tangents in output order, `None` when the source mesh carried none.
    pub fn tangents(&self) -> Option<Vec<Vector4<Real>>> {
        self.vertices.iter().map(|v| v.tangent).collect()
    }

    /// Texture coordinates in output order.
    pub fn uvs(&self) -> Vec<Vector2<Real>> {
        self.vertices.iter().map(|v| v.uv).collect()
    }
}
