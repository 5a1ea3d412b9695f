use thiserror::Error;

/// Errors raised by matrix construction, access and numeric operations.
///
/// Shapes are reported as `(cols, rows)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("index ({x}, {y}) out of range for a {cols}x{rows} matrix")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
    #[error("expected {expected} elements, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("{op}: shapes do not match, left is {left:?} and right is {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix is not square ({cols} columns, {rows} rows)")]
    NotSquare { cols: usize, rows: usize },
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
}

pub type Result<T> = std::result::Result<T, MatrixError>;
