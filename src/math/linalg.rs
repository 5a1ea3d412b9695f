//! Matrix product, determinant, cofactors and inverses.
//!
//! Determinants are computed by recursive cofactor expansion along the first
//! row. That costs O(n!) and does no pivoting, so it is only practical for
//! small matrices (roughly n <= 10); a warning is logged above
//! [`LinalgConfig::expansion_warn_dim`]. The inverse is the adjugate divided
//! by the determinant and is refused only when the determinant is exactly
//! zero.
use num_traits::AsPrimitive;

use crate::config::LinalgConfig;
use crate::error::{MatrixError, Result};
use crate::math::arithmetic::div_scalar;
use crate::matrix::{DenseMatrix, Matrix, Transposed};

/// Matrix product `a · b`.
///
/// Needs `a.cols() == b.rows()`; the result has `b.cols()` columns and
/// `a.rows()` rows, with `result[x, y] = Σ_i a[i, y] * b[x, i]`.
pub fn product<A, B>(a: &A, b: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    if a.cols() != b.rows() {
        return Err(MatrixError::ShapeMismatch {
            op: "product",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let inner = a.cols();
    Ok(DenseMatrix::from_fn(b.cols(), a.rows(), |x, y| {
        (0..inner)
            .map(|i| a.cell(i, y).as_() * b.cell(x, i).as_())
            .sum()
    }))
}

fn require_square<M: Matrix>(matrix: &M) -> Result<usize> {
    if matrix.cols() != matrix.rows() {
        return Err(MatrixError::NotSquare {
            cols: matrix.cols(),
            rows: matrix.rows(),
        });
    }
    Ok(matrix.cols())
}

fn warn_if_large(op: &str, dim: usize, config: &LinalgConfig) {
    if dim > config.expansion_warn_dim {
        log::warn!(
            "{}: cofactor expansion of a {}x{} matrix is factorial-time and may not finish",
            op,
            dim,
            dim
        );
    }
}

/// The `(cols - 1) x (rows - 1)` matrix left after dropping column `col` and
/// row `row`, packed row-major.
fn minor<M>(matrix: &M, col: usize, row: usize) -> DenseMatrix<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    DenseMatrix::from_fn(matrix.cols() - 1, matrix.rows() - 1, |x, y| {
        let src_x = if x < col { x } else { x + 1 };
        let src_y = if y < row { y } else { y + 1 };
        matrix.cell(src_x, src_y).as_()
    })
}

/// Expansion along row 0 of a matrix already known to be square.
fn expand<M>(matrix: &M) -> f64
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let value = |x: usize, y: usize| -> f64 { matrix.cell(x, y).as_() };
    match matrix.cols() {
        0 => 1.0,
        1 => value(0, 0),
        2 => value(0, 0) * value(1, 1) - value(1, 0) * value(0, 1),
        n => {
            let mut total = 0.0;
            let mut sign = 1.0;
            for i in 0..n {
                total += sign * value(i, 0) * expand(&minor(matrix, i, 0));
                sign = -sign;
            }
            total
        }
    }
}

pub fn determinant<M>(matrix: &M) -> Result<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    determinant_with(matrix, &LinalgConfig::default())
}

pub fn determinant_with<M>(matrix: &M, config: &LinalgConfig) -> Result<f64>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let n = require_square(matrix)?;
    log::debug!("Computing determinant of a {}x{} matrix", n, n);
    warn_if_large("determinant", n, config);
    Ok(expand(matrix))
}

fn cofactor_with<M>(matrix: &M, config: &LinalgConfig) -> Result<DenseMatrix<f64>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let n = require_square(matrix)?;
    warn_if_large("cofactor", n, config);
    Ok(DenseMatrix::from_fn(n, n, |x, y| {
        let d = expand(&minor(matrix, x, y));
        if (x + y) % 2 == 0 {
            d
        } else {
            -d
        }
    }))
}

/// Matrix of signed minors: `C[x, y] = (-1)^(x + y) * det(minor(x, y))`.
pub fn cofactor<M>(matrix: &M) -> Result<DenseMatrix<f64>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    cofactor_with(matrix, &LinalgConfig::default())
}

/// Transpose of the cofactor matrix, returned as a view over it.
pub fn adjugate<M>(matrix: &M) -> Result<Transposed<DenseMatrix<f64>>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    Ok(Transposed::new(cofactor(matrix)?))
}

pub fn inverse<M>(matrix: &M) -> Result<DenseMatrix<f64>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    inverse_with(matrix, &LinalgConfig::default())
}

pub fn inverse_with<M>(matrix: &M, config: &LinalgConfig) -> Result<DenseMatrix<f64>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let det = determinant_with(matrix, config)?;
    if det == 0.0 {
        log::debug!(
            "Refusing to invert a {}x{} matrix with zero determinant",
            matrix.cols(),
            matrix.rows()
        );
        return Err(MatrixError::SingularMatrix);
    }
    let adjugate = Transposed::new(cofactor_with(matrix, config)?);
    Ok(div_scalar(&adjugate, det))
}

/// `(Aᵗ · A)⁻¹ · Aᵗ`, a left inverse for matrices with independent columns.
pub fn left_inverse<M>(matrix: &M) -> Result<DenseMatrix<f64>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let transposed = matrix.as_transposed();
    let gram = product(&transposed, matrix)?;
    product(&inverse(&gram)?, &transposed)
}

/// `Aᵗ · (A · Aᵗ)⁻¹`, a right inverse for matrices with independent rows.
pub fn right_inverse<M>(matrix: &M) -> Result<DenseMatrix<f64>>
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let transposed = matrix.as_transposed();
    let gram = product(matrix, &transposed)?;
    product(&transposed, &inverse(&gram)?)
}

/// Solves `coefficients · X = constants` as `coefficients⁻¹ · constants`.
pub fn solve<A, B>(coefficients: &A, constants: &B) -> Result<DenseMatrix<f64>>
where
    A: Matrix,
    A::Elem: AsPrimitive<f64>,
    B: Matrix,
    B::Elem: AsPrimitive<f64>,
{
    product(&inverse(coefficients)?, constants)
}
