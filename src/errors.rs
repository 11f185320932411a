//! Cut failure conditions

use crate::float_types::Real;
use nalgebra::Point3;

/// All the ways a cut invocation can fail.
///
/// Every variant is unrecoverable for the current invocation: the engine
/// aborts and surfaces the error instead of skipping the offending triangle,
/// which would silently corrupt the output topology. Retrying without
/// changing the inputs is pointless since the operation is deterministic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CutError {
    /// An input buffer is empty or disagrees with the others in length.
    #[error("missing or inconsistent input: {0}")]
    MissingInput(&'static str),

    /// A triangle targeted a submesh slot past the accumulator's count.
    #[error("submesh index out of bounds! total: {count} attempt: {index}")]
    SubmeshIndexOutOfRange { index: usize, count: usize },

    /// A submesh index list is not a whole number of triangles.
    #[error("submesh {submesh} has an invalid amount of indices: {index_count}")]
    MalformedTriangle { submesh: usize, index_count: usize },

    /// A triangle index points past the end of the vertex buffer.
    #[error("vertex index {index} out of range (vertex buffer holds {len})")]
    VertexIndexOutOfRange { index: usize, len: usize },

    /// A straddling edge failed to intersect the plane. Unreachable when the
    /// endpoints genuinely lie on opposite sides; seeing it means numerical
    /// breakdown or a plane expressed in the wrong coordinate space.
    #[error("can't get point between two edge points {0} and {1}")]
    DegenerateIntersection(Point3<Real>, Point3<Real>),
}
