//! Elementwise and scalar arithmetic over any numeric matrix.
//!
//! Inputs are read through [`Matrix`] and converted to `f64`; results are
//! always dense since every cell is populated. Division by zero follows
//! IEEE-754 and yields `inf` or `NaN` rather than an error.
use num_traits::AsPrimitive;

use crate::error::{MatrixError, Result};
use crate::matrix::{DenseMatrix, Matrix};

pub(crate) fn check_same_shape<A, B>(op: &'static str, a: &A, b: &B) -> Result<()>
where
    A: Matrix,
    B: Matrix,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

fn zip_with<A, B, F>(op: &'static str, a: &A, b: &B, f: F) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
    F: Fn(f64, f64) -> f64,
{
    check_same_shape(op, a, b)?;
    Ok(DenseMatrix::from_fn(a.cols(), a.rows(), |x, y| {
        f(a.cell(x, y).as_(), b.cell(x, y).as_())
    }))
}

/// Applies `f` to every cell converted to `f64`.
pub fn map_f64<M, F>(matrix: &M, f: F) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
    F: Fn(f64) -> f64,
{
    DenseMatrix::from_fn(matrix.cols(), matrix.rows(), |x, y| f(matrix.cell(x, y).as_()))
}

pub fn add<A, B>(a: &A, b: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    zip_with("add", a, b, |l, r| l + r)
}

pub fn sub<A, B>(a: &A, b: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    zip_with("sub", a, b, |l, r| l - r)
}

/// Elementwise (Hadamard) product; see [`product`](crate::math::product)
/// for the matrix product.
pub fn mul<A, B>(a: &A, b: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    zip_with("mul", a, b, |l, r| l * r)
}

pub fn div<A, B>(a: &A, b: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    zip_with("div", a, b, |l, r| l / r)
}

pub fn neg<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, |v| -v)
}

/// Multiplies every cell by `factor`.
pub fn scale<M, S>(matrix: &M, factor: S) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
    S: AsPrimitive<f64>,
{
    let factor: f64 = factor.as_();
    map_f64(matrix, |v| v * factor)
}

pub fn div_scalar<M, S>(matrix: &M, divisor: S) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
    S: AsPrimitive<f64>,
{
    let divisor: f64 = divisor.as_();
    map_f64(matrix, |v| v / divisor)
}

pub fn sum<M>(matrix: &M) -> f64
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    matrix.iter().map(|(_, _, v)| v.as_()).sum()
}

pub fn pow_scalar<M, S>(matrix: &M, exponent: S) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
    S: AsPrimitive<f64>,
{
    let exponent: f64 = exponent.as_();
    map_f64(matrix, |v| v.powf(exponent))
}

/// Raises each cell of `base` to the matching cell of `exponents`.
pub fn pow_elementwise<A, B>(base: &A, exponents: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    zip_with("pow", base, exponents, f64::powf)
}

pub fn ln<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::ln)
}

pub fn log<M, S>(matrix: &M, base: S) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
    S: AsPrimitive<f64>,
{
    let base: f64 = base.as_();
    map_f64(matrix, |v| v.log(base))
}

pub fn log10<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::log10)
}

pub fn sqrt<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::sqrt)
}

pub fn sin<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::sin)
}

pub fn cos<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::cos)
}

pub fn tan<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::tan)
}

pub fn floor<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::floor)
}

pub fn ceil<M>(matrix: &M) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    map_f64(matrix, f64::ceil)
}

/// Rounds every cell to `decimals` places (half away from zero).
pub fn round<M>(matrix: &M, decimals: i32) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let factor = 10f64.powi(decimals);
    map_f64(matrix, |v| (v * factor).round() / factor)
}
