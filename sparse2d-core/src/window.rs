//! Half-open traversal windows
//!
//! A [`Rect`] is the rectangle `[rows.start, rows.end) x [cols.start, cols.end)`
//! and a [`Scan`] selects whether a traversal covers the whole matrix or
//! only such a rectangle.

use core::ops::{Bound, Range};

/// Half-open rectangle over row and column keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rect<R, C> {
    /// Row window, `start` included, `end` excluded
    pub rows: Range<R>,
    /// Column window, `start` included, `end` excluded
    pub cols: Range<C>,
}

impl<R, C> Rect<R, C> {
    /// Create a rectangle from its row and column windows
    pub const fn new(rows: Range<R>, cols: Range<C>) -> Self {
        Self { rows, cols }
    }
}

impl<R: Ord, C: Ord> Rect<R, C> {
    /// Check if a position falls within the rectangle
    pub fn contains(&self, row: &R, col: &C) -> bool {
        self.rows.start <= *row
            && *row < self.rows.end
            && self.cols.start <= *col
            && *col < self.cols.end
    }

    /// Check if no position can fall within the rectangle
    pub fn is_empty(&self) -> bool {
        self.rows.start >= self.rows.end || self.cols.start >= self.cols.end
    }
}

/// Traversal mode of a cursor or iterator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scan<R, C> {
    /// Every stored cell
    All,
    /// Only the stored cells inside the rectangle
    Within(Rect<R, C>),
}

impl<R, C> Default for Scan<R, C> {
    fn default() -> Self {
        Scan::All
    }
}

impl<R: Ord, C: Ord> Scan<R, C> {
    /// Check if the scan is restricted to a rectangle
    pub fn is_bounded(&self) -> bool {
        matches!(self, Scan::Within(_))
    }

    /// Lower bound of the first row a traversal may visit
    pub fn first_row(&self) -> Bound<&R> {
        match self {
            Scan::All => Bound::Unbounded,
            Scan::Within(rect) => Bound::Included(&rect.rows.start),
        }
    }

    /// Lower bound of the first column visited within each row
    pub fn first_col(&self) -> Bound<&C> {
        match self {
            Scan::All => Bound::Unbounded,
            Scan::Within(rect) => Bound::Included(&rect.cols.start),
        }
    }

    /// Check if `row` is still before the end of the row window
    pub fn row_before_end(&self, row: &R) -> bool {
        match self {
            Scan::All => true,
            Scan::Within(rect) => *row < rect.rows.end,
        }
    }

    /// Check if `col` is still before the end of the column window
    pub fn col_before_end(&self, col: &C) -> bool {
        match self {
            Scan::All => true,
            Scan::Within(rect) => *col < rect.cols.end,
        }
    }

    /// Check if a position is visited by this scan
    pub fn contains(&self, row: &R, col: &C) -> bool {
        match self {
            Scan::All => true,
            Scan::Within(rect) => rect.contains(row, col),
        }
    }
}
