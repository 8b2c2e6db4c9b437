//! Core compute primitives (Vector, Matrix).
//!
//! Row-major containers used by the encoder and the least-squares solver.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
