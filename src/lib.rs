//! Single-precision linear algebra for real-time graphics.
//!
//! # Motivation
//!
//! Rendering code needs a small amount of CPU-side matrix math to build the transform
//! matrices it uploads to the GPU: model matrices assembled from translations, rotations
//! and scales, a view matrix from a camera pose, and a projection matrix. This crate
//! provides exactly that (2-, 3- and 4-component vectors, 4x4 matrices, and the standard
//! construction helpers) without pulling in a general-purpose linear algebra dependency.
//!
//! # Goals & Non-Goals
//!
//! - Fixed, statically known dimensions only. Vectors use a const generic length, but
//!   only the 2/3/4-dimensional aliases ([`Vec2`], [`Vec3`], [`Vec4`]) are part of the
//!   intended API; there is no dynamically-sized or general `NxM` linear algebra.
//! - [`f32`] elements only. Graphics pipelines consume single-precision data, and a
//!   generic element type would complicate the API for no benefit here.
//! - Every operation is total over its IEEE-754 input domain. Degenerate inputs (a
//!   zero-length vector passed to [`Vec3::normalize`], coincident near/far clip planes,
//!   an `up` hint parallel to the viewing direction) produce NaN or infinities instead
//!   of errors. Callers that need validation perform it before calling.
//! - [`Mat4`] is stored **row-major** (`[row][col]`), matching the element layout the
//!   transform constructors write. Transforms compose by right-multiplication:
//!   `base * transform`.

pub mod approx;
mod matrix;
mod vector;

pub use approx::feq;
pub use matrix::*;
pub use vector::*;
