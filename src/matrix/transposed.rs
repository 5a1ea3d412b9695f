//! Axis-swapping views.
//!
//! [`Transposed`] wraps anything implementing [`Matrix`], usually a borrow,
//! and swaps `x` and `y` on every access. It holds no storage or cache of its
//! own, so creating one is cheap and two views of the same matrix always
//! agree. The borrowed forms cannot outlive the matrix they view.
//!
//! Rust's borrow rules allow only one writable view at a time. When several
//! views (or a view and its source) must be held at once and see each other's
//! writes, wrap the matrix in a [`SharedMatrix`] and view clones of the
//! handle. `SharedMatrix` is single-threaded (`!Send`); sharing a mutable
//! matrix across threads needs external locking around an owned matrix
//! instead.
use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::format::write_matrix;
use crate::matrix::{hash_matrix, matrix_eq, Matrix, MatrixMut};

#[derive(Clone, Copy, Debug)]
pub struct Transposed<M> {
    inner: M,
}

impl<M> Transposed<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Matrix> Matrix for Transposed<M> {
    type Elem = M::Elem;

    fn cols(&self) -> usize {
        self.inner.rows()
    }

    fn rows(&self) -> usize {
        self.inner.cols()
    }

    fn cell(&self, x: usize, y: usize) -> Self::Elem {
        self.inner.cell(y, x)
    }
}

impl<M: MatrixMut> MatrixMut for Transposed<M> {
    fn set_cell(&mut self, x: usize, y: usize, value: Self::Elem) {
        self.inner.set_cell(y, x, value)
    }
}

impl<M, N> PartialEq<N> for Transposed<M>
where
    M: Matrix,
    M::Elem: PartialEq,
    N: Matrix<Elem = M::Elem>,
{
    fn eq(&self, other: &N) -> bool {
        matrix_eq(self, other)
    }
}

impl<M> Eq for Transposed<M>
where
    M: Matrix,
    M::Elem: Eq,
{
}

impl<M> Hash for Transposed<M>
where
    M: Matrix,
    M::Elem: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_matrix(self, state)
    }
}

impl<M> fmt::Display for Transposed<M>
where
    M: Matrix,
    M::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}

/// Cloneable handle to one matrix; every clone reads and writes the same
/// cells.
///
/// The handle is `!Send`. Writes go through `RefCell::borrow_mut`, so a write
/// through any clone or view panics with "already borrowed" while a `Ref`
/// returned by [`SharedMatrix::borrow`] is still alive. Drop the `Ref` before
/// writing.
///
/// ```
/// use matrix_grid::matrix::{Matrix, MatrixMut, MutableDenseMatrix, SharedMatrix, Transposed};
///
/// let shared = SharedMatrix::new(MutableDenseMatrix::new(2, 1, vec![1, 2]).unwrap());
/// let mut view = Transposed::new(shared.clone());
/// let other = Transposed::new(shared.clone());
///
/// view.set(0, 1, 20).unwrap();
/// assert_eq!(other.get(0, 1).unwrap(), 20);
/// assert_eq!(shared.get(1, 0).unwrap(), 20);
/// ```
pub struct SharedMatrix<M> {
    inner: Rc<RefCell<M>>,
}

impl<M> SharedMatrix<M> {
    pub fn new(matrix: M) -> Self {
        Self {
            inner: Rc::new(RefCell::new(matrix)),
        }
    }

    /// Writes through any handle panic while the returned `Ref` is held.
    pub fn borrow(&self) -> Ref<'_, M> {
        self.inner.borrow()
    }

    /// Whether both handles point at the same matrix.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the matrix if this is the last handle to it.
    pub fn try_unwrap(self) -> std::result::Result<M, Self> {
        Rc::try_unwrap(self.inner)
            .map(RefCell::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<M> Clone for SharedMatrix<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for SharedMatrix<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedMatrix").field(&self.inner.borrow()).finish()
    }
}

impl<M: Matrix> Matrix for SharedMatrix<M> {
    type Elem = M::Elem;

    fn cols(&self) -> usize {
        self.inner.borrow().cols()
    }

    fn rows(&self) -> usize {
        self.inner.borrow().rows()
    }

    fn cell(&self, x: usize, y: usize) -> Self::Elem {
        self.inner.borrow().cell(x, y)
    }
}

impl<M: MatrixMut> MatrixMut for SharedMatrix<M> {
    fn set_cell(&mut self, x: usize, y: usize, value: Self::Elem) {
        self.inner.borrow_mut().set_cell(x, y, value)
    }
}

impl<M, N> PartialEq<N> for SharedMatrix<M>
where
    M: Matrix,
    M::Elem: PartialEq,
    N: Matrix<Elem = M::Elem>,
{
    fn eq(&self, other: &N) -> bool {
        matrix_eq(self, other)
    }
}

impl<M> Eq for SharedMatrix<M>
where
    M: Matrix,
    M::Elem: Eq,
{
}

impl<M> Hash for SharedMatrix<M>
where
    M: Matrix,
    M::Elem: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_matrix(self, state)
    }
}

impl<M> fmt::Display for SharedMatrix<M>
where
    M: Matrix,
    M::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}
