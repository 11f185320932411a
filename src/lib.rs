//! Runtime **plane-mesh splitting** for triangulated, multi-submesh meshes.
//!
//! Hand [`perform_cut`] a set of mesh buffers (positions, normals, optional
//! tangents, UVs, per-submesh triangle index lists) and a cutting [`Plane`];
//! it returns one [`CutMesh`] per side of the plane. Triangles crossing the
//! plane are clipped into fragments that follow the plane exactly, vertex
//! attributes are interpolated at the cut, and each side independently
//! re-welds shared vertices so the result renders and simulates without
//! cracks. The cut boundary is left open — no cap triangles are generated.
//!
//! ```
//! use meshcut::{perform_cut, shapes, Plane};
//! use nalgebra::{Point3, Vector3};
//!
//! let cube = shapes::cube();
//! let plane = Plane::from_point_normal(Point3::origin(), Vector3::x());
//!
//! let result = perform_cut(&cube, &plane).unwrap();
//! assert!(!result.positive.is_empty());
//! assert!(!result.negative.is_empty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: clip submeshes concurrently with rayon

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod bounds;
pub mod cut_mesh;
pub mod cutter;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod plane;
pub mod shapes;
pub mod triangle;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cut_mesh::CutMesh;
#[cfg(feature = "parallel")]
pub use cutter::perform_cut_parallel;
pub use cutter::{CutResult, perform_cut};
pub use errors::CutError;
pub use mesh::MeshBuffers;
pub use plane::Plane;
pub use triangle::Triangle;
pub use vertex::Vertex;
