//! Row storage: an ordered mapping from column key to element
//!
//! A [`Row`] never exists empty inside a matrix. The matrix drops a row as
//! soon as its last cell is erased, so callers only ever observe non-empty
//! rows through [`SparseMatrix::row`](crate::SparseMatrix::row).

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::ops::Bound;

/// One row of a sparse matrix, cells ordered by ascending column key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<C, E> {
    cells: BTreeMap<C, E>,
}

impl<C, E> Row<C, E> {
    pub(crate) const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Get the number of stored cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no stored cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(column, element)` pairs in ascending column order
    pub fn iter(&self) -> btree_map::Iter<'_, C, E> {
        self.cells.iter()
    }
}

impl<C: Ord, E> Row<C, E> {
    /// Get the smallest stored column key
    pub fn first_col(&self) -> Option<&C> {
        self.cells.first_key_value().map(|(col, _)| col)
    }

    /// Get the largest stored column key
    pub fn last_col(&self) -> Option<&C> {
        self.cells.last_key_value().map(|(col, _)| col)
    }

    /// Get the element stored in a column
    pub fn get(&self, col: &C) -> Option<&E> {
        self.cells.get(col)
    }

    /// Check if a column holds a stored cell
    pub fn contains(&self, col: &C) -> bool {
        self.cells.contains_key(col)
    }

    pub(crate) fn get_mut(&mut self, col: &C) -> Option<&mut E> {
        self.cells.get_mut(col)
    }

    pub(crate) fn get_key_value(&self, col: &C) -> Option<(&C, &E)> {
        self.cells.get_key_value(col)
    }

    /// Stored key together with a mutable element, for cell views.
    pub(crate) fn get_key_value_mut(&mut self, col: &C) -> Option<(&C, &mut E)> {
        self.cells
            .range_mut((Bound::Included(col), Bound::Included(col)))
            .next()
    }

    /// Store `elt` unless the column is already occupied.
    pub(crate) fn insert_if_absent(&mut self, col: C, elt: E) -> bool {
        match self.cells.entry(col) {
            Entry::Vacant(slot) => {
                slot.insert(elt);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub(crate) fn replace(&mut self, col: C, elt: E) -> Option<E> {
        self.cells.insert(col, elt)
    }

    pub(crate) fn remove(&mut self, col: &C) -> Option<E> {
        self.cells.remove(col)
    }

    pub(crate) fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&C, &mut E) -> bool,
    {
        self.cells.retain(keep);
    }

    /// Cells from `lower` to the end of the row.
    pub(crate) fn range_from(&self, lower: Bound<&C>) -> btree_map::Range<'_, C, E> {
        self.cells.range((lower, Bound::Unbounded))
    }

    pub(crate) fn range_from_mut(&mut self, lower: Bound<&C>) -> btree_map::RangeMut<'_, C, E> {
        self.cells.range_mut((lower, Bound::Unbounded))
    }
}

impl<'a, C, E> IntoIterator for &'a Row<C, E> {
    type Item = (&'a C, &'a E);
    type IntoIter = btree_map::Iter<'a, C, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
