//! Restartable traversal positions
//!
//! A [`Cursor`] records where a traversal stands as owned copies of the row
//! and column keys, plus the [`Scan`] it follows. It does not borrow the
//! matrix: every operation takes the matrix as an argument, so a cursor can
//! be cloned, stored, and resumed later. Erasing other cells never disturbs
//! it, and advancing a cursor whose own cell was erased continues with the
//! next stored cell after that position.

use std::ops::Bound;

use sparse2d_core::{Result, Scan, SparseError};

use crate::cell::{Cell, CellMut, CellView};
use crate::matrix::SparseMatrix;
use crate::walk::{SharedWalk, Walk};

/// Position of a full-scan or bounded traversal over a [`SparseMatrix`]
///
/// Created by [`SparseMatrix::begin`], [`SparseMatrix::begin_within`] and
/// [`SparseMatrix::end`]. Cursors compare equal when both are at the end
/// marker or both reference the same cell; only compare cursors taken from
/// the same matrix.
///
/// Each [`Cursor::advance`] looks the current row and column up again, so a
/// cursor traversal of `n` cells costs `O(n log n)`. Bulk scans that do not
/// erase along the way should use [`SparseMatrix::iter`] or
/// [`SparseMatrix::iter_within`], which are amortized linear.
#[derive(Debug, Clone)]
pub struct Cursor<R, C> {
    pos: Option<(R, C)>,
    scan: Scan<R, C>,
}

impl<R, C> Cursor<R, C> {
    pub(crate) const fn end(scan: Scan<R, C>) -> Self {
        Self { pos: None, scan }
    }

    /// Check if the cursor is at the end marker
    pub fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// Row key of the referenced cell, `None` at the end marker
    pub fn row(&self) -> Option<&R> {
        self.pos.as_ref().map(|(row, _)| row)
    }

    /// Column key of the referenced cell, `None` at the end marker
    pub fn col(&self) -> Option<&C> {
        self.pos.as_ref().map(|(_, col)| col)
    }

    /// Traversal mode this cursor follows
    pub fn scan(&self) -> &Scan<R, C> {
        &self.scan
    }

    pub(crate) fn position(&self) -> Option<&(R, C)> {
        self.pos.as_ref()
    }

    pub(crate) fn into_position(self) -> Option<(R, C)> {
        self.pos
    }
}

impl<R: Ord + Clone, C: Ord + Clone> Cursor<R, C> {
    /// Cursor at the first cell `scan` visits in `matrix`.
    pub(crate) fn first<E>(matrix: &SparseMatrix<E, R, C>, scan: Scan<R, C>) -> Self {
        let pos = matrix
            .walk(&scan)
            .next_cell(&scan)
            .map(|(row, col, _)| (row.clone(), col.clone()));
        Self { pos, scan }
    }

    /// Move to the next cell in traversal order
    ///
    /// Advancing a cursor at the end marker does nothing. A cursor that
    /// walks off the last visited cell becomes the end marker.
    pub fn advance<E>(&mut self, matrix: &SparseMatrix<E, R, C>) {
        let Some((row, col)) = self.pos.as_ref() else {
            return;
        };

        let rows = matrix
            .rows
            .range((Bound::Excluded(row), Bound::Unbounded));
        let mut walk: SharedWalk<'_, R, C, E> = match matrix.rows.get_key_value(row) {
            Some((key, cells)) => Walk::resume(key, cells.range_from(Bound::Excluded(col)), rows),
            None => Walk::new(rows),
        };
        let next = walk
            .next_cell(&self.scan)
            .map(|(row, col, _)| (row.clone(), col.clone()));

        self.pos = next;
    }

    /// Dereference the cursor into a read-only view
    ///
    /// Returns [`SparseError::CursorAtEnd`] at the end marker and
    /// [`SparseError::StaleCursor`] if the referenced cell has been erased.
    pub fn try_cell<'a, E>(&self, matrix: &'a SparseMatrix<E, R, C>) -> Result<Cell<'a, R, C, E>> {
        let (row, col) = self.pos.as_ref().ok_or(SparseError::CursorAtEnd)?;
        let (row, cells) = matrix
            .rows
            .get_key_value(row)
            .ok_or(SparseError::StaleCursor)?;
        let (col, elt) = cells.get_key_value(col).ok_or(SparseError::StaleCursor)?;
        Ok(CellView::new(row, col, elt))
    }

    /// Dereference the cursor into a view with a mutable element
    ///
    /// Fails the same way as [`Cursor::try_cell`].
    pub fn try_cell_mut<'a, E>(
        &self,
        matrix: &'a mut SparseMatrix<E, R, C>,
    ) -> Result<CellMut<'a, R, C, E>> {
        let (row, col) = self.pos.as_ref().ok_or(SparseError::CursorAtEnd)?;
        let (row, cells) = matrix
            .rows
            .range_mut((Bound::Included(row), Bound::Included(row)))
            .next()
            .ok_or(SparseError::StaleCursor)?;
        let (col, elt) = cells
            .get_key_value_mut(col)
            .ok_or(SparseError::StaleCursor)?;
        Ok(CellView::new(row, col, elt))
    }

    /// Dereference the cursor into a read-only view
    ///
    /// # Panics
    ///
    /// Panics at the end marker or if the referenced cell has been erased.
    #[track_caller]
    pub fn cell<'a, E>(&self, matrix: &'a SparseMatrix<E, R, C>) -> Cell<'a, R, C, E> {
        match self.try_cell(matrix) {
            Ok(cell) => cell,
            Err(err) => panic!("cannot dereference cursor: {err}"),
        }
    }

    /// Dereference the cursor into a view with a mutable element
    ///
    /// # Panics
    ///
    /// Panics at the end marker or if the referenced cell has been erased.
    #[track_caller]
    pub fn cell_mut<'a, E>(&self, matrix: &'a mut SparseMatrix<E, R, C>) -> CellMut<'a, R, C, E> {
        match self.try_cell_mut(matrix) {
            Ok(cell) => cell,
            Err(err) => panic!("cannot dereference cursor: {err}"),
        }
    }
}

impl<R: PartialEq, C: PartialEq> PartialEq for Cursor<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<R: Eq, C: Eq> Eq for Cursor<R, C> {}
