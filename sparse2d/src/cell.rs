//! Views of a single stored cell
//!
//! A [`CellView`] is materialized for one traversal position and borrows
//! the matrix for as long as it lives, so the matrix cannot be restructured
//! underneath it. The element reference is generic: [`Cell`] hands out
//! `&E`, [`CellMut`] hands out `&mut E`.

use std::fmt;

/// Accessor for the row key, column key and element of one cell
pub struct CellView<'a, R, C, P> {
    row: &'a R,
    col: &'a C,
    elt: P,
}

/// Read-only cell view
pub type Cell<'a, R, C, E> = CellView<'a, R, C, &'a E>;

/// Cell view with a mutable element
pub type CellMut<'a, R, C, E> = CellView<'a, R, C, &'a mut E>;

impl<'a, R, C, P> CellView<'a, R, C, P> {
    pub(crate) fn new(row: &'a R, col: &'a C, elt: P) -> Self {
        Self { row, col, elt }
    }

    /// Borrow the row key
    pub fn row_key(&self) -> &'a R {
        self.row
    }

    /// Borrow the column key
    pub fn col_key(&self) -> &'a C {
        self.col
    }

    /// Take the element reference out of the view
    pub fn into_elt(self) -> P {
        self.elt
    }

    /// Split the view into its key references and element reference
    pub fn into_parts(self) -> (&'a R, &'a C, P) {
        (self.row, self.col, self.elt)
    }
}

impl<R: Clone, C: Clone, P> CellView<'_, R, C, P> {
    /// Row key of the cell
    pub fn row(&self) -> R {
        self.row.clone()
    }

    /// Column key of the cell
    pub fn col(&self) -> C {
        self.col.clone()
    }
}

impl<'a, R, C, E> CellView<'a, R, C, &'a E> {
    /// Element stored in the cell
    pub fn elt(&self) -> &'a E {
        self.elt
    }
}

impl<'a, R, C, E> CellView<'a, R, C, &'a mut E> {
    /// Element stored in the cell
    pub fn elt(&self) -> &E {
        &*self.elt
    }

    /// Element stored in the cell, for in-place mutation
    pub fn elt_mut(&mut self) -> &mut E {
        &mut *self.elt
    }
}

impl<R, C, E> Clone for CellView<'_, R, C, &E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, C, E> Copy for CellView<'_, R, C, &E> {}

impl<R: fmt::Debug, C: fmt::Debug, P: fmt::Debug> fmt::Debug for CellView<'_, R, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellView")
            .field("row", self.row)
            .field("col", self.col)
            .field("elt", &self.elt)
            .finish()
    }
}
