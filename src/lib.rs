//! matrix-grid: generic two-dimensional matrices.
//!
//! The crate is built around one contract, [`matrix::Matrix`] (read) and
//! [`matrix::MatrixMut`] (write), with interchangeable storage behind it:
//! dense row-major stores, sparse stores that keep only non-zero cells, and
//! zero-copy transposed views. Numeric operations in [`math`] (elementwise
//! arithmetic, matrix product, determinant, adjugate, inverse) only use the
//! contract, so they accept any store or view.
//!
//! Nothing here is synchronized. Mutable matrices and the views over them
//! must not be written from several threads without external locking.
pub mod config;
pub mod error;
pub mod format;
pub mod math;
pub mod matrix;

pub use error::{MatrixError, Result};
pub use matrix::{
    DenseMatrix, Matrix, MatrixMut, MutableDenseMatrix, MutableSparseMatrix, SharedMatrix, Sparse,
    SparseMatrix, SparseMatrixBuilder, Transposed,
};
