//! The cutting engine: classifies every triangle of every submesh against a
//! plane and clips the straddlers into two side accumulators.

use crate::cut_mesh::CutMesh;
use crate::errors::CutError;
use crate::mesh::MeshBuffers;
use crate::plane::Plane;
use crate::triangle::Triangle;
use crate::vertex::Vertex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The two sides produced by one cut.
///
/// `positive` holds everything on or in front of the plane (signed distance
/// >= 0), `negative` everything behind it. The names follow the plane's side
/// convention, not any spatial left/right.
#[derive(Debug, Clone, PartialEq)]
pub struct CutResult {
    pub positive: CutMesh,
    pub negative: CutMesh,
}

/// Cut `mesh` with `plane` into two independent meshes.
///
/// Whole-side triangles are emitted unmodified into the matching side;
/// straddling triangles are clipped into exactly three fragments (two on the
/// majority side, one on the minority side) with attributes interpolated at
/// the cut. Each side re-welds shared vertices independently; the cut
/// boundary is left open. Deterministic: identical inputs produce identical
/// outputs, including vertex order.
pub fn perform_cut(mesh: &MeshBuffers, plane: &Plane) -> Result<CutResult, CutError> {
    mesh.validate()?;

    let submesh_count = mesh.submeshes.len();
    let mut positive = CutMesh::new(submesh_count);
    let mut negative = CutMesh::new(submesh_count);

    for (submesh, indices) in mesh.submeshes.iter().enumerate() {
        for chunk in indices.chunks_exact(3) {
            let triangle = Triangle::from_buffers(mesh, chunk[0], chunk[1], chunk[2])?;
            clip_triangle(&triangle, plane, |side, v1, v2, v3| {
                if side {
                    positive.add_triangle(v1, v2, v3, submesh)
                } else {
                    negative.add_triangle(v1, v2, v3, submesh)
                }
            })?;
        }
    }

    Ok(CutResult { positive, negative })
}

/// Parallel variant of [`perform_cut`].
///
/// Submeshes are clipped concurrently into per-submesh fragment lists, then
/// folded into the accumulators in submesh order, so the output is
/// bit-identical to the serial path.
#[cfg(feature = "parallel")]
pub fn perform_cut_parallel(mesh: &MeshBuffers, plane: &Plane) -> Result<CutResult, CutError> {
    mesh.validate()?;

    let clipped: Vec<Vec<(bool, [Vertex; 3])>> = mesh
        .submeshes
        .par_iter()
        .map(|indices| {
            let mut fragments = Vec::with_capacity(indices.len() / 3);
            for chunk in indices.chunks_exact(3) {
                let triangle = Triangle::from_buffers(mesh, chunk[0], chunk[1], chunk[2])?;
                clip_triangle(&triangle, plane, |side, v1, v2, v3| {
                    fragments.push((side, [*v1, *v2, *v3]));
                    Ok(())
                })?;
            }
            Ok(fragments)
        })
        .collect::<Result<_, CutError>>()?;

    let submesh_count = mesh.submeshes.len();
    let mut positive = CutMesh::new(submesh_count);
    let mut negative = CutMesh::new(submesh_count);

    for (submesh, fragments) in clipped.iter().enumerate() {
        for (side, [v1, v2, v3]) in fragments {
            if *side {
                positive.add_triangle(v1, v2, v3, submesh)?;
            } else {
                negative.add_triangle(v1, v2, v3, submesh)?;
            }
        }
    }

    Ok(CutResult { positive, negative })
}

/// Classify one triangle and emit its fragments through `emit(side, v1, v2,
/// v3)`.
///
/// A whole-side triangle is emitted once, unmodified. A straddling triangle
/// is rotated so the two same-side vertices come first, then clipped by
/// [`split_triangle`]. All emitted fragments preserve the original winding.
fn clip_triangle<E>(triangle: &Triangle, plane: &Plane, mut emit: E) -> Result<(), CutError>
where
    E: FnMut(bool, &Vertex, &Vertex, &Vertex) -> Result<(), CutError>,
{
    let [v1, v2, v3] = &triangle.vertices;
    let s1 = plane.side(&v1.pos);
    let s2 = plane.side(&v2.pos);
    let s3 = plane.side(&v3.pos);

    if s1 == s2 && s2 == s3 {
        return emit(s1, v1, v2, v3);
    }

    // Rotate (a, b, c) out of (v1, v2, v3) so that a and b share a side and
    // c stands alone, keeping the cyclic order.
    let (a, b, c, pair_side) = if s1 == s2 {
        (v1, v2, v3, s1)
    } else if s2 == s3 {
        (v2, v3, v1, s2)
    } else {
        // last possibility, s3 == s1
        (v3, v1, v2, s3)
    };

    split_triangle(a, b, c, pair_side, plane, &mut emit)
}

/// Clip one straddling triangle: `a` and `b` on the `pair_side` of the
/// plane, `c` on the other, `(a, b, c)` a rotation of the original winding.
///
/// Each crossing edge is interpolated once and the resulting vertex reused
/// on both sides, so the two output meshes carry bit-identical boundary
/// positions even though they are stored unwelded.
fn split_triangle<E>(
    a: &Vertex,
    b: &Vertex,
    c: &Vertex,
    pair_side: bool,
    plane: &Plane,
    emit: &mut E,
) -> Result<(), CutError>
where
    E: FnMut(bool, &Vertex, &Vertex, &Vertex) -> Result<(), CutError>,
{
    let ac = Vertex::interpolate_on_plane(a, c, plane)?;
    let bc = Vertex::interpolate_on_plane(b, c, plane)?;

    emit(pair_side, a, b, &ac)?;
    emit(pair_side, &ac, b, &bc)?;
    emit(!pair_side, c, &ac, &bc)
}
