//! Shared traversal engine behind cursors and iterators
//!
//! Every traversal (cursor advance, shared and mutable iteration, full or
//! bounded) runs through [`Walk::next_cell`]. A walk holds an iterator over
//! the remaining rows and, for the row it is currently in, an iterator over
//! the remaining cells of that row. Moving to the next cell is:
//!
//! 1. take the next cell of the current row;
//! 2. while the row is exhausted, or the cell's column is at or past the end
//!    of the column window, move to the next row;
//! 3. a row at or past the end of the row window ends the walk for good;
//! 4. a new row is entered at its first column, or at the first column not
//!    below the start of the column window (one lower-bound search per row).
//!
//! Columns are stored in ascending order, so a cell past the column window
//! means nothing further in that row can match and the whole remainder of
//! the row is skipped.

use std::collections::btree_map;
use std::ops::Bound;

use sparse2d_core::Scan;

use crate::row::Row;

/// Access to the cells of one row, shared or exclusive
pub(crate) trait RowHandle<'a, C: 'a> {
    /// Element reference handed out for each cell
    type Elt;
    /// Iterator over the cells of the row from some lower bound
    type Cells: Iterator<Item = (&'a C, Self::Elt)>;

    fn open(self, lower: Bound<&C>) -> Self::Cells;
}

impl<'a, C: Ord + 'a, E: 'a> RowHandle<'a, C> for &'a Row<C, E> {
    type Elt = &'a E;
    type Cells = btree_map::Range<'a, C, E>;

    fn open(self, lower: Bound<&C>) -> Self::Cells {
        self.range_from(lower)
    }
}

impl<'a, C: Ord + 'a, E: 'a> RowHandle<'a, C> for &'a mut Row<C, E> {
    type Elt = &'a mut E;
    type Cells = btree_map::RangeMut<'a, C, E>;

    fn open(self, lower: Bound<&C>) -> Self::Cells {
        self.range_from_mut(lower)
    }
}

/// Walk over shared rows
pub(crate) type SharedWalk<'a, R, C, E> =
    Walk<'a, R, C, btree_map::Range<'a, R, Row<C, E>>, &'a Row<C, E>>;

/// Walk over exclusive rows
pub(crate) type ExclusiveWalk<'a, R, C, E> =
    Walk<'a, R, C, btree_map::RangeMut<'a, R, Row<C, E>>, &'a mut Row<C, E>>;

pub(crate) struct Walk<'a, R: 'a, C: 'a, I, H>
where
    H: RowHandle<'a, C>,
{
    rows: I,
    current: Option<(&'a R, H::Cells)>,
    done: bool,
}

impl<'a, R, C, I, H> Walk<'a, R, C, I, H>
where
    R: Ord + 'a,
    C: Ord + 'a,
    I: Iterator<Item = (&'a R, H)>,
    H: RowHandle<'a, C>,
{
    /// Start before the first row yielded by `rows`.
    pub(crate) fn new(rows: I) -> Self {
        Self {
            rows,
            current: None,
            done: false,
        }
    }

    /// Continue inside `row` with its remaining `cells`, then the following `rows`.
    pub(crate) fn resume(row: &'a R, cells: H::Cells, rows: I) -> Self {
        Self {
            rows,
            current: Some((row, cells)),
            done: false,
        }
    }

    /// Move to the next cell visited by `scan`, or `None` once the walk is over.
    pub(crate) fn next_cell(&mut self, scan: &Scan<R, C>) -> Option<(&'a R, &'a C, H::Elt)> {
        if self.done {
            return None;
        }

        loop {
            if let Some((row, cells)) = self.current.as_mut() {
                if let Some((col, elt)) = cells.next() {
                    if scan.col_before_end(col) {
                        return Some((*row, col, elt));
                    }
                }
            }

            self.current = None;
            let Some((row, handle)) = self.rows.next() else {
                self.done = true;
                return None;
            };
            if !scan.row_before_end(row) {
                self.done = true;
                return None;
            }
            self.current = Some((row, handle.open(scan.first_col())));
        }
    }
}
