//! Sparse storage: a map from `(x, y)` to value plus a per-matrix "zero".
//!
//! Every store keeps its map canonical: no entry ever holds a value equal to
//! the matrix's zero. Writing the zero removes the entry instead of storing
//! it. The zero is an ordinary value of the element type and has nothing to
//! do with `None`; a `SparseMatrix<Option<i32>>` whose zero is `Some(1)`
//! stores `None` cells like any other non-zero value.
//!
//! The non-zero map operations ([`Sparse::map_non_zero`] and friends) only
//! visit stored entries. They assume `transform(zero) == new_zero`; when that
//! does not hold, cells that were zero keep reading as `new_zero` rather than
//! `transform(zero)`. Storage size stays proportional to the number of
//! entries in exchange.
use std::collections::hash_map::{self, HashMap};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Copied;

use crate::error::{MatrixError, Result};
use crate::format::write_matrix;
use crate::matrix::{hash_matrix, matrix_eq, Matrix, MatrixMut};

type Entries<T> = HashMap<(usize, usize), T>;

/// Inserts `value` at `key`, or drops the entry when `value` is the zero.
fn put<T: PartialEq>(entries: &mut Entries<T>, zero: &T, key: (usize, usize), value: T) {
    if value == *zero {
        entries.remove(&key);
    } else {
        entries.insert(key, value);
    }
}

fn out_of_range(cols: usize, rows: usize, x: usize, y: usize) -> Result<()> {
    if x < cols && y < rows {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfRange { x, y, cols, rows })
    }
}

/// Read-side operations shared by the sparse stores.
pub trait Sparse: Matrix {
    fn zero(&self) -> &Self::Elem;

    fn entries(&self) -> &HashMap<(usize, usize), Self::Elem>;

    /// The coordinates of every stored (non-zero) cell.
    fn non_zero_indices(&self) -> NonZeroIndices<'_, Self::Elem> {
        NonZeroIndices {
            entries: self.entries(),
        }
    }

    fn non_zero_count(&self) -> usize {
        self.entries().len()
    }

    fn is_non_zero(&self, x: usize, y: usize) -> bool {
        self.entries().contains_key(&(x, y))
    }

    fn for_each_indexed_non_zero<F>(&self, mut action: F)
    where
        Self: Sized,
        F: FnMut(usize, usize, &Self::Elem),
    {
        for (&(x, y), value) in self.entries() {
            action(x, y, value);
        }
    }

    fn for_each_non_zero<F>(&self, mut action: F)
    where
        Self: Sized,
        F: FnMut(&Self::Elem),
    {
        self.for_each_indexed_non_zero(|_, _, value| action(value))
    }

    /// Applies `transform` to stored entries only; see the module docs for
    /// the `transform(zero) == new_zero` assumption.
    fn map_indexed_non_zero_with_zero<U, F>(&self, new_zero: U, mut transform: F) -> SparseMatrix<U>
    where
        Self: Sized,
        U: PartialEq,
        F: FnMut(usize, usize, &Self::Elem) -> U,
    {
        let mut entries = HashMap::with_capacity(self.entries().len());
        for (&key, value) in self.entries() {
            put(&mut entries, &new_zero, key, transform(key.0, key.1, value));
        }
        SparseMatrix {
            cols: self.cols(),
            rows: self.rows(),
            zero: new_zero,
            entries,
        }
    }

    fn map_non_zero_with_zero<U, F>(&self, new_zero: U, mut transform: F) -> SparseMatrix<U>
    where
        Self: Sized,
        U: PartialEq,
        F: FnMut(&Self::Elem) -> U,
    {
        self.map_indexed_non_zero_with_zero(new_zero, |_, _, value| transform(value))
    }

    fn map_indexed_non_zero<F>(&self, transform: F) -> SparseMatrix<Self::Elem>
    where
        Self: Sized,
        Self::Elem: Clone + PartialEq,
        F: FnMut(usize, usize, &Self::Elem) -> Self::Elem,
    {
        self.map_indexed_non_zero_with_zero(self.zero().clone(), transform)
    }

    fn map_non_zero<F>(&self, transform: F) -> SparseMatrix<Self::Elem>
    where
        Self: Sized,
        Self::Elem: Clone + PartialEq,
        F: FnMut(&Self::Elem) -> Self::Elem,
    {
        self.map_non_zero_with_zero(self.zero().clone(), transform)
    }
}

/// Immutable sparse matrix.
#[derive(Clone, Debug)]
pub struct SparseMatrix<T> {
    cols: usize,
    rows: usize,
    zero: T,
    entries: Entries<T>,
}

/// Sparse matrix with in-place writes.
#[derive(Clone, Debug)]
pub struct MutableSparseMatrix<T> {
    cols: usize,
    rows: usize,
    zero: T,
    entries: Entries<T>,
}

impl<T> SparseMatrix<T> {
    pub fn into_mutable(self) -> MutableSparseMatrix<T> {
        MutableSparseMatrix {
            cols: self.cols,
            rows: self.rows,
            zero: self.zero,
            entries: self.entries,
        }
    }
}

impl<T> MutableSparseMatrix<T> {
    /// A live view of the stored coordinates. Removing a coordinate through
    /// it removes the value too, so the cell reads as zero afterwards.
    pub fn non_zero_indices_mut(&mut self) -> NonZeroIndicesMut<'_, T> {
        NonZeroIndicesMut {
            entries: &mut self.entries,
        }
    }

    pub fn freeze(self) -> SparseMatrix<T> {
        SparseMatrix {
            cols: self.cols,
            rows: self.rows,
            zero: self.zero,
            entries: self.entries,
        }
    }
}

impl<T: Clone> Matrix for SparseMatrix<T> {
    type Elem = T;

    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.cols && y < self.rows);
        self.entries
            .get(&(x, y))
            .unwrap_or(&self.zero)
            .clone()
    }
}

impl<T: Clone> Sparse for SparseMatrix<T> {
    fn zero(&self) -> &T {
        &self.zero
    }

    fn entries(&self) -> &HashMap<(usize, usize), T> {
        &self.entries
    }
}

impl<T: Clone> Matrix for MutableSparseMatrix<T> {
    type Elem = T;

    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.cols && y < self.rows);
        self.entries
            .get(&(x, y))
            .unwrap_or(&self.zero)
            .clone()
    }
}

impl<T: Clone + PartialEq> MatrixMut for MutableSparseMatrix<T> {
    fn set_cell(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.cols && y < self.rows);
        put(&mut self.entries, &self.zero, (x, y), value);
    }
}

impl<T: Clone> Sparse for MutableSparseMatrix<T> {
    fn zero(&self) -> &T {
        &self.zero
    }

    fn entries(&self) -> &HashMap<(usize, usize), T> {
        &self.entries
    }
}

/// Read-only set of stored coordinates.
pub struct NonZeroIndices<'a, T> {
    entries: &'a Entries<T>,
}

impl<T> Clone for NonZeroIndices<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NonZeroIndices<'_, T> {}

impl<'a, T> NonZeroIndices<'a, T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.entries.contains_key(&(x, y))
    }

    pub fn iter(&self) -> Copied<hash_map::Keys<'a, (usize, usize), T>> {
        self.entries.keys().copied()
    }

    pub fn to_set(&self) -> HashSet<(usize, usize)> {
        self.iter().collect()
    }
}

impl<'a, T> IntoIterator for NonZeroIndices<'a, T> {
    type Item = (usize, usize);
    type IntoIter = Copied<hash_map::Keys<'a, (usize, usize), T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.keys().copied()
    }
}

impl<T> fmt::Debug for NonZeroIndices<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Live, mutable set of stored coordinates of a [`MutableSparseMatrix`].
pub struct NonZeroIndicesMut<'a, T> {
    entries: &'a mut Entries<T>,
}

impl<T> NonZeroIndicesMut<'_, T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.entries.contains_key(&(x, y))
    }

    pub fn iter(&self) -> Copied<hash_map::Keys<'_, (usize, usize), T>> {
        self.entries.keys().copied()
    }

    pub fn to_set(&self) -> HashSet<(usize, usize)> {
        self.iter().collect()
    }

    /// Drops the entry at `(x, y)`; returns whether one was stored.
    pub fn remove(&mut self, x: usize, y: usize) -> bool {
        let removed = self.entries.remove(&(x, y)).is_some();
        if removed {
            log::trace!("Removed sparse entry at ({}, {})", x, y);
        }
        removed
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|&(x, y), _| keep(x, y));
        log::trace!(
            "Retained {} of {} sparse entries",
            self.entries.len(),
            before
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> fmt::Debug for NonZeroIndicesMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Accumulates entries for a sparse matrix.
///
/// `entry` follows the same rule as [`MatrixMut::set`] on a sparse store:
/// writing the zero clears the coordinate. [`build`](Self::build) and
/// [`build_mutable`](Self::build_mutable) consume the builder and hand its
/// map to the new matrix.
#[derive(Debug)]
pub struct SparseMatrixBuilder<T> {
    cols: usize,
    rows: usize,
    zero: T,
    entries: Entries<T>,
}

impl<T: PartialEq> SparseMatrixBuilder<T> {
    pub fn new(cols: usize, rows: usize, zero: T) -> Self {
        Self {
            cols,
            rows,
            zero,
            entries: HashMap::new(),
        }
    }

    /// A builder whose zero is `T::default()`, e.g. `0.0` or `None`.
    pub fn with_default_zero(cols: usize, rows: usize) -> Self
    where
        T: Default,
    {
        Self::new(cols, rows, T::default())
    }

    pub fn entry(&mut self, x: usize, y: usize, value: T) -> Result<&mut Self> {
        out_of_range(self.cols, self.rows, x, y)?;
        put(&mut self.entries, &self.zero, (x, y), value);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> SparseMatrix<T> {
        log::trace!(
            "Building {}x{} sparse matrix with {} entries",
            self.cols,
            self.rows,
            self.entries.len()
        );
        SparseMatrix {
            cols: self.cols,
            rows: self.rows,
            zero: self.zero,
            entries: self.entries,
        }
    }

    pub fn build_mutable(self) -> MutableSparseMatrix<T> {
        self.build().into_mutable()
    }
}

/// Builds an immutable sparse matrix by running `init` against a fresh
/// builder.
///
/// ```
/// use matrix_grid::matrix::{sparse_matrix, Matrix, Sparse};
///
/// let m = sparse_matrix(1000, 800, 0.0, |b| {
///     b.entry(0, 0, 5.5)?.entry(300, 500, 12.3)?;
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(m.non_zero_count(), 2);
/// assert_eq!(m.get(1, 1).unwrap(), 0.0);
/// ```
pub fn sparse_matrix<T, F>(cols: usize, rows: usize, zero: T, init: F) -> Result<SparseMatrix<T>>
where
    T: PartialEq,
    F: FnOnce(&mut SparseMatrixBuilder<T>) -> Result<()>,
{
    let mut builder = SparseMatrixBuilder::new(cols, rows, zero);
    init(&mut builder)?;
    Ok(builder.build())
}

pub fn mutable_sparse_matrix<T, F>(
    cols: usize,
    rows: usize,
    zero: T,
    init: F,
) -> Result<MutableSparseMatrix<T>>
where
    T: PartialEq,
    F: FnOnce(&mut SparseMatrixBuilder<T>) -> Result<()>,
{
    let mut builder = SparseMatrixBuilder::new(cols, rows, zero);
    init(&mut builder)?;
    Ok(builder.build_mutable())
}

impl<T, M> PartialEq<M> for SparseMatrix<T>
where
    T: Clone + PartialEq,
    M: Matrix<Elem = T>,
{
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Clone + Eq> Eq for SparseMatrix<T> {}

impl<T: Clone + Hash> Hash for SparseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_matrix(self, state)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}

impl<T, M> PartialEq<M> for MutableSparseMatrix<T>
where
    T: Clone + PartialEq,
    M: Matrix<Elem = T>,
{
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Clone + Eq> Eq for MutableSparseMatrix<T> {}

impl<T: Clone + Hash> Hash for MutableSparseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_matrix(self, state)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for MutableSparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}
