use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::format::write_matrix;
use crate::matrix::{hash_matrix, matrix_eq, Matrix, MatrixMut};

/// Immutable dense matrix backed by a row-major `Vec`.
///
/// The contents never change after construction; convert with
/// [`DenseMatrix::into_mutable`] to edit a copy-free mutable version.
#[derive(Clone, Debug)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    cols: usize,
    rows: usize,
}

/// Dense matrix with in-place writes.
#[derive(Clone, Debug)]
pub struct MutableDenseMatrix<T> {
    data: Vec<T>,
    cols: usize,
    rows: usize,
}

/// Calls `init` once per coordinate, row-major, collecting the results.
pub(crate) fn row_major<T, F>(cols: usize, rows: usize, mut init: F) -> Vec<T>
where
    F: FnMut(usize, usize) -> T,
{
    let mut data = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            data.push(init(x, y));
        }
    }
    data
}

fn try_row_major<T, E, F>(cols: usize, rows: usize, mut init: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(usize, usize) -> std::result::Result<T, E>,
{
    let mut data = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            data.push(init(x, y)?);
        }
    }
    Ok(data)
}

fn check_arity<T>(cols: usize, rows: usize, data: &[T]) -> Result<()> {
    let expected = cols * rows;
    if data.len() != expected {
        return Err(MatrixError::ArityMismatch {
            expected,
            found: data.len(),
        });
    }
    Ok(())
}

/// Takes exactly `cols * rows` elements; a shorter or longer sequence is an
/// error. The sequence must be finite.
fn collect_exact<T, I>(cols: usize, rows: usize, elements: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let expected = cols * rows;
    let mut iter = elements.into_iter();
    let data: Vec<T> = iter.by_ref().take(expected).collect();
    if data.len() < expected {
        return Err(MatrixError::ArityMismatch {
            expected,
            found: data.len(),
        });
    }
    let extra = iter.count();
    if extra > 0 {
        return Err(MatrixError::ArityMismatch {
            expected,
            found: expected + extra,
        });
    }
    Ok(data)
}

impl<T> DenseMatrix<T> {
    /// Builds a matrix from row-major `data`, which must hold exactly
    /// `cols * rows` elements.
    pub fn new(cols: usize, rows: usize, data: Vec<T>) -> Result<Self> {
        check_arity(cols, rows, &data)?;
        Ok(Self { data, cols, rows })
    }

    pub fn from_fn<F>(cols: usize, rows: usize, init: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: row_major(cols, rows, init),
            cols,
            rows,
        }
    }

    pub fn try_from_fn<E, F>(cols: usize, rows: usize, init: F) -> std::result::Result<Self, E>
    where
        F: FnMut(usize, usize) -> std::result::Result<T, E>,
    {
        Ok(Self {
            data: try_row_major(cols, rows, init)?,
            cols,
            rows,
        })
    }

    pub fn from_iter_exact<I>(cols: usize, rows: usize, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self {
            data: collect_exact(cols, rows, elements)?,
            cols,
            rows,
        })
    }

    pub fn filled(cols: usize, rows: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; cols * rows],
            cols,
            rows,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn into_mutable(self) -> MutableDenseMatrix<T> {
        MutableDenseMatrix {
            data: self.data,
            cols: self.cols,
            rows: self.rows,
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }
}

impl<T> MutableDenseMatrix<T> {
    /// Builds a matrix from row-major `data`, which must hold exactly
    /// `cols * rows` elements.
    pub fn new(cols: usize, rows: usize, data: Vec<T>) -> Result<Self> {
        check_arity(cols, rows, &data)?;
        Ok(Self { data, cols, rows })
    }

    pub fn from_fn<F>(cols: usize, rows: usize, init: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: row_major(cols, rows, init),
            cols,
            rows,
        }
    }

    pub fn try_from_fn<E, F>(cols: usize, rows: usize, init: F) -> std::result::Result<Self, E>
    where
        F: FnMut(usize, usize) -> std::result::Result<T, E>,
    {
        Ok(Self {
            data: try_row_major(cols, rows, init)?,
            cols,
            rows,
        })
    }

    pub fn from_iter_exact<I>(cols: usize, rows: usize, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self {
            data: collect_exact(cols, rows, elements)?,
            cols,
            rows,
        })
    }

    pub fn filled(cols: usize, rows: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; cols * rows],
            cols,
            rows,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn freeze(self) -> DenseMatrix<T> {
        DenseMatrix {
            data: self.data,
            cols: self.cols,
            rows: self.rows,
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }
}

impl<T: Clone> Matrix for DenseMatrix<T> {
    type Elem = T;

    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[self.offset(x, y)].clone()
    }
}

impl<T: Clone> Matrix for MutableDenseMatrix<T> {
    type Elem = T;

    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[self.offset(x, y)].clone()
    }
}

impl<T: Clone> MatrixMut for MutableDenseMatrix<T> {
    fn set_cell(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.cols && y < self.rows);
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }
}

// `(x, y)` indexing; panics when out of range.
impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.cols && y < self.rows,
            "index ({}, {}) out of range for a {}x{} matrix",
            x,
            y,
            self.cols,
            self.rows
        );
        &self.data[self.offset(x, y)]
    }
}

impl<T> Index<(usize, usize)> for MutableDenseMatrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.cols && y < self.rows,
            "index ({}, {}) out of range for a {}x{} matrix",
            x,
            y,
            self.cols,
            self.rows
        );
        &self.data[self.offset(x, y)]
    }
}

impl<T> IndexMut<(usize, usize)> for MutableDenseMatrix<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < self.cols && y < self.rows,
            "index ({}, {}) out of range for a {}x{} matrix",
            x,
            y,
            self.cols,
            self.rows
        );
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }
}

impl<T> From<MutableDenseMatrix<T>> for DenseMatrix<T> {
    fn from(value: MutableDenseMatrix<T>) -> Self {
        value.freeze()
    }
}

impl<T> From<DenseMatrix<T>> for MutableDenseMatrix<T> {
    fn from(value: DenseMatrix<T>) -> Self {
        value.into_mutable()
    }
}

impl<T, M> PartialEq<M> for DenseMatrix<T>
where
    T: Clone + PartialEq,
    M: Matrix<Elem = T>,
{
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Clone + Eq> Eq for DenseMatrix<T> {}

impl<T: Clone + Hash> Hash for DenseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_matrix(self, state)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}

impl<T, M> PartialEq<M> for MutableDenseMatrix<T>
where
    T: Clone + PartialEq,
    M: Matrix<Elem = T>,
{
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Clone + Eq> Eq for MutableDenseMatrix<T> {}

impl<T: Clone + Hash> Hash for MutableDenseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_matrix(self, state)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for MutableDenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}
