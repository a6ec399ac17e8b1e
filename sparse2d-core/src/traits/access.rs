//! Format-agnostic read access to sparse containers
//!
//! Generic code that only needs to look cells up, or to pull a whole row or
//! column out of a container, should be written against these traits rather
//! than against a concrete matrix type.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Core read access to a sparse two-dimensional container
///
/// This trait provides the minimal interface every container offers,
/// regardless of how its cells are stored.
pub trait SparseAccess {
    /// Row key type
    type Row: Ord;
    /// Column key type
    type Col: Ord;
    /// Element type stored in the cells
    type Element;

    /// Get the element stored at a position
    ///
    /// Returns `None` if the cell is not stored.
    fn get_element(&self, row: &Self::Row, col: &Self::Col) -> Option<&Self::Element>;

    /// Get the number of stored cells
    fn nnz(&self) -> usize;

    /// Check if a position holds a stored cell
    fn contains_cell(&self, row: &Self::Row, col: &Self::Col) -> bool {
        self.get_element(row, col).is_some()
    }

    /// Check if no cell is stored
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }
}

/// Extension trait for whole row/column extraction (requires alloc)
///
/// Only available when the `alloc` feature is enabled.
#[cfg(feature = "alloc")]
pub trait SliceAccess: SparseAccess {
    /// Get every stored cell of a row, in ascending column order
    fn row_cells(&self, row: &Self::Row) -> Vec<(&Self::Col, &Self::Element)>;

    /// Get every stored cell of a column, in ascending row order
    fn col_cells(&self, col: &Self::Col) -> Vec<(&Self::Row, &Self::Element)>;
}
