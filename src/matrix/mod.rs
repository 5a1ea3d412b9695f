//! The matrix contract and its storage strategies.
//!
//! [`Matrix`] is the read capability every store and view implements;
//! [`MatrixMut`] adds in-place writes. Coordinates are always `(x, y)`, that is
//! `(column, row)`, zero-based, and every helper visits cells in row-major
//! order.
//!
//! Implementors only provide the dimensions and an unchecked cell accessor
//! ([`Matrix::cell`] / [`MatrixMut::set_cell`]); bounds checking, iteration,
//! structural equality and hashing are shared so that a dense store, a sparse
//! store and a view over either behave identically.
pub mod dense;
pub mod sparse;
pub mod transposed;

use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::{MatrixError, Result};

pub use dense::{DenseMatrix, MutableDenseMatrix};
pub use sparse::{
    mutable_sparse_matrix, sparse_matrix, MutableSparseMatrix, NonZeroIndices, NonZeroIndicesMut,
    Sparse, SparseMatrix, SparseMatrixBuilder,
};
pub use transposed::{SharedMatrix, Transposed};

/// Read access to a fixed-size rectangular grid.
pub trait Matrix {
    type Elem;

    fn cols(&self) -> usize;

    fn rows(&self) -> usize;

    /// Reads the cell at column `x`, row `y`.
    ///
    /// The coordinate must already be known to be in range; use
    /// [`Matrix::get`] for checked access.
    fn cell(&self, x: usize, y: usize) -> Self::Elem;

    fn size(&self) -> usize {
        self.cols() * self.rows()
    }

    /// `(cols, rows)`
    fn shape(&self) -> (usize, usize) {
        (self.cols(), self.rows())
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols() && y < self.rows()
    }

    fn check_index(&self, x: usize, y: usize) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                x,
                y,
                cols: self.cols(),
                rows: self.rows(),
            })
        }
    }

    fn get(&self, x: usize, y: usize) -> Result<Self::Elem> {
        self.check_index(x, y)?;
        Ok(self.cell(x, y))
    }

    fn row(&self, y: usize) -> Result<Vec<Self::Elem>> {
        if y >= self.rows() {
            return Err(MatrixError::IndexOutOfRange {
                x: 0,
                y,
                cols: self.cols(),
                rows: self.rows(),
            });
        }
        Ok((0..self.cols()).map(|x| self.cell(x, y)).collect())
    }

    fn column(&self, x: usize) -> Result<Vec<Self::Elem>> {
        if x >= self.cols() {
            return Err(MatrixError::IndexOutOfRange {
                x,
                y: 0,
                cols: self.cols(),
                rows: self.rows(),
            });
        }
        Ok((0..self.rows()).map(|y| self.cell(x, y)).collect())
    }

    /// Iterates `(x, y, value)` in row-major order.
    fn iter(&self) -> Cells<'_, Self> {
        Cells::new(self)
    }

    fn to_vec(&self) -> Vec<Self::Elem> {
        self.iter().map(|(_, _, value)| value).collect()
    }

    fn for_each_indexed<F>(&self, mut action: F)
    where
        Self: Sized,
        F: FnMut(usize, usize, Self::Elem),
    {
        for (x, y, value) in self.iter() {
            action(x, y, value);
        }
    }

    fn filter_indexed<F>(&self, mut predicate: F) -> Vec<Self::Elem>
    where
        Self: Sized,
        F: FnMut(usize, usize, &Self::Elem) -> bool,
    {
        self.iter()
            .filter(|(x, y, value)| predicate(*x, *y, value))
            .map(|(_, _, value)| value)
            .collect()
    }

    /// First row-major coordinate holding `value`.
    fn position(&self, value: &Self::Elem) -> Option<(usize, usize)>
    where
        Self::Elem: PartialEq,
    {
        self.iter()
            .find(|(_, _, candidate)| candidate == value)
            .map(|(x, y, _)| (x, y))
    }

    fn map<U, F>(&self, mut transform: F) -> DenseMatrix<U>
    where
        Self: Sized,
        F: FnMut(Self::Elem) -> U,
    {
        DenseMatrix::from_fn(self.cols(), self.rows(), |x, y| transform(self.cell(x, y)))
    }

    fn map_indexed<U, F>(&self, mut transform: F) -> DenseMatrix<U>
    where
        Self: Sized,
        F: FnMut(usize, usize, Self::Elem) -> U,
    {
        DenseMatrix::from_fn(self.cols(), self.rows(), |x, y| {
            transform(x, y, self.cell(x, y))
        })
    }

    /// A read-only view with the axes swapped. The view borrows `self`.
    fn as_transposed(&self) -> Transposed<&Self> {
        Transposed::new(self)
    }
}

/// Write access on top of [`Matrix`].
pub trait MatrixMut: Matrix {
    /// Overwrites the cell at column `x`, row `y`.
    ///
    /// The coordinate must already be known to be in range; use
    /// [`MatrixMut::set`] for checked access.
    fn set_cell(&mut self, x: usize, y: usize, value: Self::Elem);

    fn set(&mut self, x: usize, y: usize, value: Self::Elem) -> Result<()> {
        self.check_index(x, y)?;
        self.set_cell(x, y, value);
        Ok(())
    }

    fn update<F>(&mut self, x: usize, y: usize, f: F) -> Result<()>
    where
        Self: Sized,
        F: FnOnce(Self::Elem) -> Self::Elem,
    {
        let current = self.get(x, y)?;
        self.set_cell(x, y, f(current));
        Ok(())
    }

    /// A writable view with the axes swapped; writes land in `self`.
    fn as_transposed_mut(&mut self) -> Transposed<&mut Self> {
        Transposed::new(self)
    }
}

impl<M: Matrix + ?Sized> Matrix for &M {
    type Elem = M::Elem;

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cell(&self, x: usize, y: usize) -> Self::Elem {
        (**self).cell(x, y)
    }
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    type Elem = M::Elem;

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cell(&self, x: usize, y: usize) -> Self::Elem {
        (**self).cell(x, y)
    }
}

impl<M: MatrixMut + ?Sized> MatrixMut for &mut M {
    fn set_cell(&mut self, x: usize, y: usize, value: Self::Elem) {
        (**self).set_cell(x, y, value)
    }
}

/// Row-major iterator over `(x, y, value)`.
pub struct Cells<'a, M: ?Sized> {
    matrix: &'a M,
    next: usize,
    end: usize,
}

impl<'a, M: Matrix + ?Sized> Cells<'a, M> {
    fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            next: 0,
            end: matrix.size(),
        }
    }
}

impl<M: Matrix + ?Sized> Iterator for Cells<'_, M> {
    type Item = (usize, usize, M::Elem);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let cols = self.matrix.cols();
        let (x, y) = (self.next % cols, self.next / cols);
        self.next += 1;
        Some((x, y, self.matrix.cell(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<M: Matrix + ?Sized> ExactSizeIterator for Cells<'_, M> {}

impl<M: Matrix + ?Sized> FusedIterator for Cells<'_, M> {}

/// Structural equality: same shape and equal values at every coordinate,
/// whatever the storage behind either side.
pub fn matrix_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix<Elem = A::Elem> + ?Sized,
    A::Elem: PartialEq,
{
    a.shape() == b.shape() && a.iter().all(|(x, y, value)| value == b.cell(x, y))
}

/// Feeds the shape and then every value, row-major, into `state`.
///
/// Consistent with [`matrix_eq`] for every store and view. Optional elements
/// contribute through `Option`'s own hash, so `None` cells hash to a fixed
/// value.
pub fn hash_matrix<M, H>(matrix: &M, state: &mut H)
where
    M: Matrix + ?Sized,
    M::Elem: Hash,
    H: Hasher,
{
    matrix.cols().hash(state);
    matrix.rows().hash(state);
    for (_, _, value) in matrix.iter() {
        value.hash(state);
    }
}
