//! Numerical kernel for a ray tracer: homogeneous tuples, matrices and a
//! canvas that encodes to plain-text PPM.
//!
//! Feature set:
//!
//! Tuples:
//! - [x] Points and vectors
//! - [x] Checked addition
//! - [x] Checked subtraction
//! - [x] Negation
//! - [x] Scalar multiplication and division
//! - [x] Dot
//! - [x] Cross
//! - [x] Norm
//! - [x] Normalize
//!
//! Matrices:
//! - [x] Mul
//! - [x] Tuple transform
//! - [x] Transpose
//! - [x] Submatrix
//! - [x] Minor
//! - [x] Cofactor
//! - [x] Determinant
//! - [x] Inverse
//! - [ ] Translation, scaling, rotation, shearing
//!
//! Output:
//! - [x] Canvas
//! - [x] PPM (P3)
//! - [ ] PPM (P6)

pub mod canvas;
pub mod color;
pub mod error;
pub mod matrix;
pub mod physics;
pub mod ppm;
pub mod tuple;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{Error, Result};
pub use geo_traits::{Cross, Dot, Hadamard, Norm, Norm2, Unitize};
pub use matrix::{Element, Matrix};
pub use physics::{Environment, Projectile};
pub use ppm::PpmEncoder;
pub use tuple::{point, vector, Tuple, TupleKind};
