//! Integration tests for elementwise arithmetic and the linear-algebra
//! routines.

mod common;

use common::{assert_close, init_logging};
use matrix_grid::config::LinalgConfig;
use matrix_grid::math::{self, adjugate, cofactor, determinant, inverse, product};
use matrix_grid::matrix::{sparse_matrix, DenseMatrix, Matrix};
use matrix_grid::MatrixError;

fn a() -> DenseMatrix<i32> {
    DenseMatrix::from_iter_exact(3, 2, 1..=6).unwrap()
}

fn half() -> DenseMatrix<f64> {
    DenseMatrix::from_fn(3, 2, |_, _| 0.5)
}

fn c() -> DenseMatrix<i32> {
    DenseMatrix::new(2, 4, vec![3, 7, 2, 2, 1, 0, 9, 5]).unwrap()
}

fn dense(cols: usize, rows: usize, data: Vec<f64>) -> DenseMatrix<f64> {
    DenseMatrix::new(cols, rows, data).expect("test matrix has the wrong element count")
}

fn assert_matrix_close<M: Matrix<Elem = f64>>(actual: &M, expected: &DenseMatrix<f64>) {
    assert_eq!(actual.shape(), expected.shape());
    for (x, y, value) in actual.iter() {
        assert_close(value, expected.get(x, y).unwrap());
    }
}

fn identity(n: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(n, n, |x, y| if x == y { 1.0 } else { 0.0 })
}

// ---------------------------------------------------------------------------
// Elementwise arithmetic
// ---------------------------------------------------------------------------

#[test]
fn addition() {
    let sum = math::add(&a(), &half()).unwrap();
    assert_eq!(sum, dense(3, 2, vec![1.5, 2.5, 3.5, 4.5, 5.5, 6.5]));
    assert!(matches!(
        math::add(&a(), &c()),
        Err(MatrixError::ShapeMismatch {
            op: "add",
            left: (3, 2),
            right: (2, 4)
        })
    ));
}

#[test]
fn subtraction() {
    let diff = math::sub(&a(), &half()).unwrap();
    assert_eq!(diff, dense(3, 2, vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5]));
    assert!(math::sub(&a(), &c()).is_err());
}

#[test]
fn multiplication_by_number() {
    assert_eq!(
        math::scale(&a(), 2.0),
        dense(3, 2, vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0])
    );
    assert_eq!(math::scale(&c(), 0.8), math::map_f64(&c(), |v| 0.8 * v));
    assert_eq!(math::scale(&a(), 3), math::scale(&a(), 3.0));
}

#[test]
fn elementwise_multiplication() {
    assert_eq!(
        math::mul(&a(), &half()).unwrap(),
        dense(3, 2, vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0])
    );
    assert!(matches!(
        math::mul(&a(), &c()),
        Err(MatrixError::ShapeMismatch { op: "mul", .. })
    ));
}

#[test]
fn elementwise_and_scalar_division() {
    assert_eq!(
        math::div(&a(), &half()).unwrap(),
        dense(3, 2, vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0])
    );
    assert_eq!(
        math::div_scalar(&a(), 2),
        dense(3, 2, vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0])
    );
    let by_zero = math::div_scalar(&a(), 0.0);
    assert!(by_zero.to_vec().iter().all(|v| v.is_infinite()));
}

#[test]
fn negation_and_sum() {
    assert_eq!(math::neg(&a()), dense(3, 2, vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0]));
    assert_eq!(math::sum(&a()), 21.0);
    assert_eq!(math::sum(&half()), 3.0);
}

#[test]
fn arithmetic_accepts_sparse_and_views() {
    let sparse = sparse_matrix(2, 3, 0, |b| {
        b.entry(0, 0, 1)?.entry(1, 2, 6)?;
        Ok(())
    })
    .unwrap();
    let source = a();
    let t = source.as_transposed();
    assert_eq!(
        math::add(&sparse, &t).unwrap(),
        dense(2, 3, vec![2.0, 4.0, 2.0, 5.0, 3.0, 12.0])
    );
}

#[test]
fn powers_and_roots() {
    let m = dense(3, 1, vec![1.0, 4.0, 9.0]);
    assert_eq!(math::sqrt(&m), dense(3, 1, vec![1.0, 2.0, 3.0]));
    assert_eq!(math::pow_scalar(&a(), 2), dense(3, 2, vec![1.0, 4.0, 9.0, 16.0, 25.0, 36.0]));
    let exponents = DenseMatrix::new(3, 1, vec![0, 1, 2]).unwrap();
    assert_eq!(
        math::pow_elementwise(&m, &exponents).unwrap(),
        dense(3, 1, vec![1.0, 4.0, 81.0])
    );
    assert!(math::pow_elementwise(&m, &a()).is_err());
}

#[test]
fn logarithms_and_trigonometry() {
    let e = dense(1, 1, vec![std::f64::consts::E]);
    assert_close(math::ln(&e).get(0, 0).unwrap(), 1.0);
    assert_close(math::log(&dense(1, 1, vec![8.0]), 2).get(0, 0).unwrap(), 3.0);
    assert_close(math::log10(&dense(1, 1, vec![100.0])).get(0, 0).unwrap(), 2.0);

    let zero = dense(1, 1, vec![0.0]);
    assert_eq!(math::sin(&zero).get(0, 0).unwrap(), 0.0);
    assert_eq!(math::cos(&zero).get(0, 0).unwrap(), 1.0);
    assert_eq!(math::tan(&zero).get(0, 0).unwrap(), 0.0);
}

#[test]
fn rounding() {
    let m = dense(3, 1, vec![1.25, -2.5, 3.14159]);
    assert_eq!(math::floor(&m), dense(3, 1, vec![1.0, -3.0, 3.0]));
    assert_eq!(math::ceil(&m), dense(3, 1, vec![2.0, -2.0, 4.0]));
    let rounded = math::round(&m, 2);
    assert_close(rounded.get(2, 0).unwrap(), 3.14);
    assert_eq!(math::round(&m, 0), dense(3, 1, vec![1.0, -3.0, 3.0]));
}

// ---------------------------------------------------------------------------
// Matrix product
// ---------------------------------------------------------------------------

#[test]
fn product_of_four_by_two_and_two_by_three() {
    // c has 2 columns and 4 rows, a has 3 columns and 2 rows
    let p = product(&c(), &a()).unwrap();
    assert_eq!(p.shape(), (3, 4));
    assert_eq!(
        p,
        dense(
            3,
            4,
            vec![31.0, 41.0, 51.0, 10.0, 14.0, 18.0, 1.0, 2.0, 3.0, 29.0, 43.0, 57.0]
        )
    );
}

#[test]
fn product_rejects_mismatched_inner_dimension() {
    assert_eq!(
        product(&a(), &c()).unwrap_err(),
        MatrixError::ShapeMismatch {
            op: "product",
            left: (3, 2),
            right: (2, 4)
        }
    );
    assert!(product(&a(), &half()).is_err());
}

#[test]
fn product_with_transposed_view() {
    let b = half();
    assert_eq!(
        product(&a(), &b.as_transposed()).unwrap(),
        dense(2, 2, vec![3.0, 3.0, 7.5, 7.5])
    );
}

#[test]
fn product_with_identity_is_unchanged() {
    let m = dense(3, 3, vec![2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0]);
    assert_eq!(product(&m, &identity(3)).unwrap(), m);
    assert_eq!(product(&identity(3), &m).unwrap(), m);
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

#[test]
fn determinant_base_cases() {
    assert_eq!(determinant(&DenseMatrix::new(1, 1, vec![5]).unwrap()).unwrap(), 5.0);
    assert_eq!(
        determinant(&DenseMatrix::new(2, 2, vec![1, 2, 3, 4]).unwrap()).unwrap(),
        -2.0
    );
    let empty: DenseMatrix<f64> = DenseMatrix::new(0, 0, vec![]).unwrap();
    assert_eq!(determinant(&empty).unwrap(), 1.0);
}

#[test]
fn determinant_of_larger_matrices() {
    init_logging();
    let scaled_identity = DenseMatrix::from_fn(3, 3, |x, y| if x == y { 3 } else { 0 });
    assert_eq!(determinant(&scaled_identity).unwrap(), 27.0);

    let m = DenseMatrix::new(3, 3, vec![2, -3, 1, 2, 0, -1, 1, 4, 5]).unwrap();
    assert_eq!(determinant(&m).unwrap(), 49.0);

    let upper = DenseMatrix::new(
        4,
        4,
        vec![1, 5, 6, 7, 0, 2, 8, 9, 0, 0, 3, 1, 0, 0, 0, 4],
    )
    .unwrap();
    assert_eq!(determinant(&upper).unwrap(), 24.0);
}

#[test]
fn determinant_requires_square_matrix() {
    assert_eq!(
        determinant(&a()).unwrap_err(),
        MatrixError::NotSquare { cols: 3, rows: 2 }
    );
}

#[test]
fn determinant_ignores_storage_and_orientation() {
    let sparse = sparse_matrix(3, 3, 0, |b| {
        b.entry(0, 0, 2)?.entry(1, 1, 5)?.entry(2, 2, 7)?.entry(2, 0, 4)?;
        Ok(())
    })
    .unwrap();
    assert_eq!(determinant(&sparse).unwrap(), 70.0);
    assert_eq!(determinant(&sparse.as_transposed()).unwrap(), 70.0);
}

#[test]
fn determinant_with_low_warning_threshold_gives_same_result() {
    init_logging();
    let m = DenseMatrix::new(3, 3, vec![2, -3, 1, 2, 0, -1, 1, 4, 5]).unwrap();
    let config = LinalgConfig::new(1);
    assert_eq!(math::determinant_with(&m, &config).unwrap(), 49.0);
}

// ---------------------------------------------------------------------------
// Cofactor, adjugate and inverse
// ---------------------------------------------------------------------------

#[test]
fn cofactor_and_adjugate_of_two_by_two() {
    let m = DenseMatrix::new(2, 2, vec![4, 7, 2, 6]).unwrap();
    assert_eq!(cofactor(&m).unwrap(), dense(2, 2, vec![6.0, -2.0, -7.0, 4.0]));
    assert_eq!(adjugate(&m).unwrap(), dense(2, 2, vec![6.0, -7.0, -2.0, 4.0]));
    assert!(cofactor(&a()).is_err());
}

#[test]
fn inverse_of_two_by_two() {
    let m = DenseMatrix::new(2, 2, vec![4, 7, 2, 6]).unwrap();
    assert_eq!(determinant(&m).unwrap(), 10.0);
    assert_eq!(inverse(&m).unwrap(), dense(2, 2, vec![0.6, -0.7, -0.2, 0.4]));
}

#[test]
fn inverse_of_one_by_one() {
    let m = DenseMatrix::new(1, 1, vec![5]).unwrap();
    assert_eq!(inverse(&m).unwrap(), dense(1, 1, vec![0.2]));
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = DenseMatrix::new(3, 3, vec![2, -3, 1, 2, 0, -1, 1, 4, 5]).unwrap();
    let inv = inverse(&m).unwrap();
    assert_matrix_close(&product(&m, &inv).unwrap(), &identity(3));
    assert_matrix_close(&product(&inv, &m).unwrap(), &identity(3));
}

#[test]
fn inverse_of_singular_matrix_fails() {
    init_logging();
    let m = DenseMatrix::new(2, 2, vec![1, 2, 2, 4]).unwrap();
    assert_eq!(inverse(&m).unwrap_err(), MatrixError::SingularMatrix);
    let zeros = DenseMatrix::filled(3, 3, 0.0);
    assert_eq!(inverse(&zeros).unwrap_err(), MatrixError::SingularMatrix);
}

#[test]
fn inverse_requires_square_matrix() {
    assert!(matches!(
        inverse(&a()),
        Err(MatrixError::NotSquare { cols: 3, rows: 2 })
    ));
}

// ---------------------------------------------------------------------------
// Pseudo-inverses and solving
// ---------------------------------------------------------------------------

#[test]
fn left_inverse_of_tall_matrix() {
    let tall = DenseMatrix::new(2, 3, vec![1, 0, 0, 1, 1, 1]).unwrap();
    let left = math::left_inverse(&tall).unwrap();
    assert_eq!(left.shape(), (3, 2));
    assert_matrix_close(&product(&left, &tall).unwrap(), &identity(2));
}

#[test]
fn right_inverse_of_wide_matrix() {
    let wide = DenseMatrix::new(3, 2, vec![1, 0, 1, 0, 1, 1]).unwrap();
    let right = math::right_inverse(&wide).unwrap();
    assert_eq!(right.shape(), (2, 3));
    assert_matrix_close(&product(&wide, &right).unwrap(), &identity(2));
}

#[test]
fn pseudo_inverse_of_rank_deficient_matrix_fails() {
    let dependent = DenseMatrix::new(2, 3, vec![1, 2, 2, 4, 3, 6]).unwrap();
    assert_eq!(
        math::left_inverse(&dependent).unwrap_err(),
        MatrixError::SingularMatrix
    );
}

#[test]
fn solve_linear_system() {
    // 2x + y = 5, x + 3y = 10
    let coefficients = DenseMatrix::new(2, 2, vec![2, 1, 1, 3]).unwrap();
    let constants = DenseMatrix::new(1, 2, vec![5, 10]).unwrap();
    let solution = math::solve(&coefficients, &constants).unwrap();
    assert_matrix_close(&solution, &dense(1, 2, vec![1.0, 3.0]));
}
