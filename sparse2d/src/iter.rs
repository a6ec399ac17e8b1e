//! Iterators over stored cells
//!
//! Both iterators drive the same walk as [`Cursor`](crate::Cursor) and
//! yield cells in row-major, column-ascending order, optionally restricted
//! to a half-open rectangle.

use std::iter::FusedIterator;

use sparse2d_core::Scan;

use crate::cell::{Cell, CellMut, CellView};
use crate::matrix::SparseMatrix;
use crate::walk::{ExclusiveWalk, SharedWalk};

/// Iterator over read-only cell views
///
/// Created by [`SparseMatrix::iter`] and [`SparseMatrix::iter_within`].
pub struct Iter<'a, R, C, E>
where
    R: Ord,
    C: Ord,
{
    walk: SharedWalk<'a, R, C, E>,
    scan: Scan<R, C>,
}

impl<'a, R: Ord, C: Ord, E> Iter<'a, R, C, E> {
    pub(crate) fn new(walk: SharedWalk<'a, R, C, E>, scan: Scan<R, C>) -> Self {
        Self { walk, scan }
    }

    /// Traversal mode of this iterator
    pub fn window(&self) -> &Scan<R, C> {
        &self.scan
    }
}

impl<'a, R: Ord, C: Ord, E> Iterator for Iter<'a, R, C, E> {
    type Item = Cell<'a, R, C, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col, elt) = self.walk.next_cell(&self.scan)?;
        Some(CellView::new(row, col, elt))
    }
}

impl<R: Ord, C: Ord, E> FusedIterator for Iter<'_, R, C, E> {}

/// Iterator over cell views with mutable elements
///
/// Created by [`SparseMatrix::iter_mut`] and [`SparseMatrix::iter_within_mut`].
pub struct IterMut<'a, R, C, E>
where
    R: Ord,
    C: Ord,
{
    walk: ExclusiveWalk<'a, R, C, E>,
    scan: Scan<R, C>,
}

impl<'a, R: Ord, C: Ord, E> IterMut<'a, R, C, E> {
    pub(crate) fn new(walk: ExclusiveWalk<'a, R, C, E>, scan: Scan<R, C>) -> Self {
        Self { walk, scan }
    }

    /// Traversal mode of this iterator
    pub fn window(&self) -> &Scan<R, C> {
        &self.scan
    }
}

impl<'a, R: Ord, C: Ord, E> Iterator for IterMut<'a, R, C, E> {
    type Item = CellMut<'a, R, C, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col, elt) = self.walk.next_cell(&self.scan)?;
        Some(CellView::new(row, col, elt))
    }
}

impl<R: Ord, C: Ord, E> FusedIterator for IterMut<'_, R, C, E> {}

impl<'a, E, R: Ord, C: Ord> IntoIterator for &'a SparseMatrix<E, R, C> {
    type Item = Cell<'a, R, C, E>;
    type IntoIter = Iter<'a, R, C, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, R: Ord, C: Ord> IntoIterator for &'a mut SparseMatrix<E, R, C> {
    type Item = CellMut<'a, R, C, E>;
    type IntoIter = IterMut<'a, R, C, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
