//! Numeric operations over any matrix whose elements convert to `f64`.
//!
//! These are free functions rather than trait methods so that matrices of
//! non-numeric elements do not pick up arithmetic they cannot support. All of
//! them read through [`Matrix`](crate::matrix::Matrix) and return dense
//! `f64` results.
pub mod arithmetic;
pub mod linalg;

pub use arithmetic::{
    add, ceil, cos, div, div_scalar, floor, ln, log, log10, map_f64, mul, neg, pow_elementwise,
    pow_scalar, round, scale, sin, sqrt, sub, sum, tan,
};
pub use linalg::{
    adjugate, cofactor, determinant, determinant_with, inverse, inverse_with, left_inverse,
    product, right_inverse, solve,
};
