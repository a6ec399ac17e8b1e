//! The sparse matrix container
//!
//! Storage is an ordered map from row key to [`Row`], and each row an
//! ordered map from column key to element. Only stored cells consume
//! memory, and a row exists exactly as long as it holds at least one cell.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::ops::{Bound, Range};

use sparse2d_core::{MatrixKey, Rect, Scan, SliceAccess, SparseAccess};

use crate::cell::{CellMut, CellView};
use crate::cursor::Cursor;
use crate::iter::{Iter, IterMut};
use crate::row::Row;
use crate::walk::{ExclusiveWalk, SharedWalk, Walk};

/// Two-dimensional sparse associative container
///
/// Cells are addressed by a row key and a column key, each ordered by its
/// own `Ord` implementation. Wrap keys in [`std::cmp::Reverse`] or a custom
/// newtype to traverse an axis in another order.
///
/// # Examples
///
/// ```
/// use sparse2d::SparseMatrix;
///
/// let mut m: SparseMatrix<&str> = SparseMatrix::new();
/// m.put(1, 2, "a");
/// m.put(1, 5, "b");
/// m.put(3, 1, "c");
///
/// assert_eq!(m.len(), 3);
/// assert_eq!((m.row_lower(), m.row_upper()), (1, 4));
/// assert_eq!((m.col_lower(), m.col_upper()), (1, 6));
///
/// let window: Vec<_> = m
///     .iter_within(1..4, 2..6)
///     .map(|cell| (cell.row(), cell.col(), *cell.elt()))
///     .collect();
/// assert_eq!(window, vec![(1, 2, "a"), (1, 5, "b")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<E, R = usize, C = usize> {
    pub(crate) rows: BTreeMap<R, Row<C, E>>,
}

impl<E, R, C> SparseMatrix<E, R, C> {
    /// Create an empty matrix
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Check if no cell is stored
    pub fn is_empty(&self) -> bool {
        // rows are never kept empty
        self.rows.is_empty()
    }

    /// Get the total number of stored cells
    ///
    /// Sums the row sizes, so this is linear in the number of rows.
    pub fn len(&self) -> usize {
        self.rows.values().map(Row::len).sum()
    }

    /// Get the number of rows holding at least one cell
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over the non-empty rows in ascending row order
    pub fn rows(&self) -> btree_map::Iter<'_, R, Row<C, E>> {
        self.rows.iter()
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = self.rows.len(), "clearing sparse matrix");
        self.rows.clear();
    }
}

impl<E, R: Ord, C: Ord> SparseMatrix<E, R, C> {
    /// Count the cells stored at a position, either 0 or 1
    pub fn count(&self, row: &R, col: &C) -> usize {
        usize::from(self.contains(row, col))
    }

    /// Check if a position holds a stored cell
    pub fn contains(&self, row: &R, col: &C) -> bool {
        self.rows.get(row).is_some_and(|cells| cells.contains(col))
    }

    /// Get the element stored at a position
    pub fn get(&self, row: &R, col: &C) -> Option<&E> {
        self.rows.get(row)?.get(col)
    }

    /// Get the element stored at a position for in-place mutation
    pub fn get_mut(&mut self, row: &R, col: &C) -> Option<&mut E> {
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Get a stored row
    pub fn row(&self, row: &R) -> Option<&Row<C, E>> {
        self.rows.get(row)
    }

    /// Store an element unless the position is already occupied
    ///
    /// Creates the row on first use. The first element stored at a position
    /// is kept: a repeated `put` leaves it untouched, drops `elt` and returns
    /// `false`. Use [`SparseMatrix::replace`] to overwrite.
    pub fn put(&mut self, row: R, col: C, elt: E) -> bool {
        self.row_entry(row).insert_if_absent(col, elt)
    }

    /// Store an element, overwriting and returning any previous one
    pub fn replace(&mut self, row: R, col: C, elt: E) -> Option<E> {
        self.row_entry(row).replace(col, elt)
    }

    fn row_entry(&mut self, row: R) -> &mut Row<C, E> {
        match self.rows.entry(row) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("creating sparse matrix row");
                slot.insert(Row::new())
            }
        }
    }

    /// Erase the cell at a position, returning how many cells were removed
    ///
    /// A row left without cells is removed from the matrix.
    pub fn erase(&mut self, row: &R, col: &C) -> usize {
        usize::from(self.remove(row, col).is_some())
    }

    /// Remove the cell at a position and return its element
    ///
    /// A row left without cells is removed from the matrix.
    pub fn remove(&mut self, row: &R, col: &C) -> Option<E> {
        let cells = self.rows.get_mut(row)?;
        let elt = cells.remove(col)?;
        if cells.is_empty() {
            self.rows.remove(row);
            #[cfg(feature = "tracing")]
            tracing::trace!("dropped empty sparse matrix row");
        }
        Some(elt)
    }

    /// Keep only the cells for which `keep` returns `true`
    ///
    /// Rows left without cells are removed.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(CellMut<'_, R, C, E>) -> bool,
    {
        self.rows.retain(|row, cells| {
            cells.retain(|col, elt| keep(CellView::new(row, col, elt)));
            !cells.is_empty()
        });
    }

    /// Smallest and largest stored row keys
    pub fn row_span(&self) -> Option<(&R, &R)> {
        let (first, _) = self.rows.first_key_value()?;
        let (last, _) = self.rows.last_key_value()?;
        Some((first, last))
    }

    /// Smallest and largest stored column keys, over all rows
    pub fn col_span(&self) -> Option<(&C, &C)> {
        let first = self.rows.values().filter_map(Row::first_col).min()?;
        let last = self.rows.values().filter_map(Row::last_col).max()?;
        Some((first, last))
    }

    /// Iterate over every stored cell in row-major, column-ascending order
    pub fn iter(&self) -> Iter<'_, R, C, E> {
        let scan = Scan::All;
        Iter::new(self.walk(&scan), scan)
    }

    /// Iterate over every stored cell with mutable elements
    pub fn iter_mut(&mut self) -> IterMut<'_, R, C, E> {
        let scan = Scan::All;
        IterMut::new(self.walk_mut(&scan), scan)
    }

    /// Iterate over the stored cells inside the half-open rectangle
    /// `rows x cols`, in row-major, column-ascending order
    pub fn iter_within(&self, rows: Range<R>, cols: Range<C>) -> Iter<'_, R, C, E> {
        let scan = Scan::Within(Rect::new(rows, cols));
        Iter::new(self.walk(&scan), scan)
    }

    /// Iterate over the stored cells inside `rows x cols` with mutable elements
    pub fn iter_within_mut(&mut self, rows: Range<R>, cols: Range<C>) -> IterMut<'_, R, C, E> {
        let scan = Scan::Within(Rect::new(rows, cols));
        IterMut::new(self.walk_mut(&scan), scan)
    }

    /// Walk positioned before the first row `scan` may visit.
    pub(crate) fn walk(&self, scan: &Scan<R, C>) -> SharedWalk<'_, R, C, E> {
        Walk::new(self.rows.range((scan.first_row(), Bound::Unbounded)))
    }

    pub(crate) fn walk_mut(&mut self, scan: &Scan<R, C>) -> ExclusiveWalk<'_, R, C, E> {
        Walk::new(self.rows.range_mut((scan.first_row(), Bound::Unbounded)))
    }
}

impl<E, R: MatrixKey, C: MatrixKey> SparseMatrix<E, R, C> {
    /// Smallest stored row key, or the origin when empty
    pub fn row_lower(&self) -> R {
        self.rows
            .first_key_value()
            .map_or_else(R::origin, |(row, _)| row.clone())
    }

    /// One past the largest stored row key, or the origin when empty
    ///
    /// # Panics
    ///
    /// Panics if the largest stored row key has no successor.
    pub fn row_upper(&self) -> R {
        self.rows
            .last_key_value()
            .map_or_else(R::origin, |(row, _)| row.successor())
    }

    /// Smallest stored column key, or the origin when empty
    ///
    /// Scans the first column of every row.
    pub fn col_lower(&self) -> C {
        self.rows
            .values()
            .filter_map(Row::first_col)
            .min()
            .map_or_else(C::origin, C::clone)
    }

    /// One past the largest stored column key, or the origin when empty
    ///
    /// Scans the last column of every row.
    ///
    /// # Panics
    ///
    /// Panics if the largest stored column key has no successor.
    pub fn col_upper(&self) -> C {
        self.rows
            .values()
            .filter_map(Row::last_col)
            .max()
            .map_or_else(C::origin, C::successor)
    }

    /// Tight half-open rectangle containing every stored cell
    pub fn bounding_rect(&self) -> Rect<R, C> {
        Rect::new(
            self.row_lower()..self.row_upper(),
            self.col_lower()..self.col_upper(),
        )
    }
}

impl<E, R: Ord + Clone, C: Ord + Clone> SparseMatrix<E, R, C> {
    /// Cursor at the first stored cell, or the end marker when empty
    pub fn begin(&self) -> Cursor<R, C> {
        Cursor::first(self, Scan::All)
    }

    /// Cursor at the first stored cell inside the half-open rectangle
    /// `rows x cols`, or the end marker when the rectangle holds no cell
    ///
    /// Pair with [`SparseMatrix::end`] like a full-scan cursor.
    pub fn begin_within(&self, rows: Range<R>, cols: Range<C>) -> Cursor<R, C> {
        Cursor::first(self, Scan::Within(Rect::new(rows, cols)))
    }

    /// End marker shared by full-scan and bounded cursors
    pub fn end(&self) -> Cursor<R, C> {
        Cursor::end(Scan::All)
    }

    /// Remove the cell a cursor references and return its element
    ///
    /// The cursor is consumed. An end marker removes nothing. A row left
    /// without cells is removed from the matrix.
    pub fn erase_at(&mut self, cursor: Cursor<R, C>) -> Option<E> {
        let (row, col) = cursor.into_position()?;
        self.remove(&row, &col)
    }

    /// Remove every cell from `first` up to, not including, `last`
    ///
    /// Cells are removed in traversal order. The traversal steps past each
    /// cell before the cell is removed, and stops at the end marker even if
    /// `last` is never reached. Returns the number of removed cells.
    pub fn erase_range(&mut self, mut first: Cursor<R, C>, last: &Cursor<R, C>) -> usize {
        let mut removed = 0;
        while first != *last {
            let Some((row, col)) = first.position().cloned() else {
                break;
            };
            first.advance(self);
            removed += self.erase(&row, &col);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(removed, "erased cursor range");
        removed
    }
}

impl<E, R, C> Default for SparseMatrix<E, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R: Ord, C: Ord> SparseAccess for SparseMatrix<E, R, C> {
    type Row = R;
    type Col = C;
    type Element = E;

    fn get_element(&self, row: &R, col: &C) -> Option<&E> {
        self.get(row, col)
    }

    fn nnz(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E, R: Ord, C: Ord> SliceAccess for SparseMatrix<E, R, C> {
    fn row_cells(&self, row: &R) -> Vec<(&C, &E)> {
        self.rows
            .get(row)
            .map(|cells| cells.iter().collect())
            .unwrap_or_default()
    }

    fn col_cells(&self, col: &C) -> Vec<(&R, &E)> {
        self.rows
            .iter()
            .filter_map(|(row, cells)| cells.get(col).map(|elt| (row, elt)))
            .collect()
    }
}

impl<E, R: Ord, C: Ord> FromIterator<(R, C, E)> for SparseMatrix<E, R, C> {
    fn from_iter<I: IntoIterator<Item = (R, C, E)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        matrix.extend(iter);
        matrix
    }
}

impl<E, R: Ord, C: Ord> Extend<(R, C, E)> for SparseMatrix<E, R, C> {
    fn extend<I: IntoIterator<Item = (R, C, E)>>(&mut self, iter: I) {
        for (row, col, elt) in iter {
            self.put(row, col, elt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Reverse;

    fn scenario() -> SparseMatrix<&'static str, i32, i32> {
        [(1, 2, "a"), (1, 5, "b"), (3, 1, "c")].into_iter().collect()
    }

    fn triples<E: Copy>(cells: Iter<'_, i32, i32, E>) -> Vec<(i32, i32, E)> {
        cells.map(|cell| (cell.row(), cell.col(), *cell.elt())).collect()
    }

    #[test]
    fn test_empty_matrix() {
        let m: SparseMatrix<f64> = SparseMatrix::new();

        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!((m.row_lower(), m.row_upper()), (0, 0));
        assert_eq!((m.col_lower(), m.col_upper()), (0, 0));
        assert_eq!(m.row_span(), None);
        assert_eq!(m.col_span(), None);
        assert_eq!(m.get(&0, &0), None);
        assert_eq!(m.count(&3, &4), 0);
        assert_eq!(m.begin(), m.end());
        assert!(m.iter().next().is_none());
    }

    #[test]
    fn test_scenario_bounds_and_windows() {
        let m = scenario();

        assert_eq!(m.len(), 3);
        assert_eq!(m.row_count(), 2);
        assert_eq!((m.row_lower(), m.row_upper()), (1, 4));
        assert_eq!((m.col_lower(), m.col_upper()), (1, 6));
        assert_eq!(m.bounding_rect(), Rect::new(1..4, 1..6));
        assert_eq!(m.row_span(), Some((&1, &3)));
        assert_eq!(m.col_span(), Some((&1, &5)));

        assert_eq!(triples(m.iter_within(1..4, 2..6)), vec![(1, 2, "a"), (1, 5, "b")]);
        assert_eq!(triples(m.iter_within(0..3, 0..10)), vec![(1, 2, "a"), (1, 5, "b")]);
        assert_eq!(
            triples(m.iter()),
            vec![(1, 2, "a"), (1, 5, "b"), (3, 1, "c")]
        );
    }

    #[test]
    fn test_put_and_get() {
        let mut m: SparseMatrix<u32, u32, u32> = SparseMatrix::new();

        assert!(m.put(4, 9, 40));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&4, &9), Some(&40));
        assert_eq!(m.count(&4, &9), 1);
        assert_eq!(m.get(&4, &8), None);
        assert_eq!(m.get(&5, &9), None);

        if let Some(elt) = m.get_mut(&4, &9) {
            *elt += 2;
        }
        assert_eq!(m.get(&4, &9), Some(&42));
    }

    #[test]
    fn test_put_keeps_first_element() {
        let mut m: SparseMatrix<&str> = SparseMatrix::new();

        assert!(m.put(2, 3, "first"));
        assert!(!m.put(2, 3, "second"));
        assert_eq!(m.get(&2, &3), Some(&"first"));
        assert_eq!(m.len(), 1);

        assert_eq!(m.replace(2, 3, "third"), Some("first"));
        assert_eq!(m.get(&2, &3), Some(&"third"));
        assert_eq!(m.replace(2, 4, "fourth"), None);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_erase_drops_empty_rows() {
        let mut m = scenario();

        assert_eq!(m.erase(&3, &1), 1);
        assert_eq!(m.get(&3, &1), None);
        assert_eq!(m.row_upper(), 2);
        assert_eq!(m.row_count(), 1);
        assert!(m.row(&3).is_none());

        assert_eq!(m.erase(&3, &1), 0);
        assert_eq!(m.erase(&1, &3), 0);
        assert_eq!(m.len(), 2);

        assert_eq!(m.remove(&1, &2), Some("a"));
        assert_eq!(m.col_lower(), 5);
        assert_eq!(m.remove(&1, &5), Some("b"));
        assert!(m.is_empty());
        assert_eq!((m.row_lower(), m.row_upper()), (0, 0));
    }

    #[test]
    fn test_erase_at_mid_traversal() {
        let mut m = scenario();
        m.put(3, 4, "d");

        let mut cur = m.begin();
        cur.advance(&m);
        let resume = cur.clone();
        assert_eq!(m.erase_at(cur), Some("b"));

        let mut rest = Vec::new();
        let mut cur = resume;
        cur.advance(&m);
        while cur != m.end() {
            let cell = cur.cell(&m);
            rest.push((cell.row(), cell.col(), *cell.elt()));
            cur.advance(&m);
        }
        assert_eq!(rest, vec![(3, 1, "c"), (3, 4, "d")]);
        assert_eq!(triples(m.iter()), vec![(1, 2, "a"), (3, 1, "c"), (3, 4, "d")]);
        assert_eq!(m.erase_at(m.end()), None);
    }

    #[test]
    fn test_erase_range_full_and_partial() {
        let mut m: SparseMatrix<i32, i32, i32> =
            (0..4).flat_map(|r| (0..3).map(move |c| (r, c, r * 10 + c))).collect();

        // stop before (2, 1)
        let mut stop = m.begin();
        for _ in 0..7 {
            stop.advance(&m);
        }
        assert_eq!((stop.row(), stop.col()), (Some(&2), Some(&1)));

        let removed = m.erase_range(m.begin(), &stop);
        assert_eq!(removed, 7);
        assert_eq!(m.row_lower(), 2);
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.get(&2, &1), Some(&21));

        let end = m.end();
        assert_eq!(m.erase_range(m.begin(), &end), 5);
        assert!(m.is_empty());
    }

    #[test]
    fn test_erase_range_bounded() {
        let mut m: SparseMatrix<i32, i32, i32> =
            (0..5).flat_map(|r| (0..5).map(move |c| (r, c, r * 10 + c))).collect();

        let end = m.end();
        let removed = m.erase_range(m.begin_within(1..3, 1..4), &end);
        assert_eq!(removed, 6);
        assert_eq!(m.len(), 19);
        assert!(m.iter_within(1..3, 1..4).next().is_none());
        assert_eq!(m.get(&1, &0), Some(&10));
        assert_eq!(m.get(&2, &4), Some(&24));
    }

    #[test]
    fn test_erase_range_unreachable_last_stops_at_end() {
        let mut m = scenario();
        let outside = m.begin();

        // `outside` is (1, 2), never visited by a window starting at row 2
        let removed = m.erase_range(m.begin_within(2..9, 0..9), &outside);
        assert_eq!(removed, 1);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_iter_mut_and_retain() {
        let mut m: SparseMatrix<i32, i32, i32> =
            (0..3).flat_map(|r| (0..3).map(move |c| (r, c, r + c))).collect();

        for mut cell in m.iter_within_mut(0..2, 1..3) {
            *cell.elt_mut() *= 100;
        }
        assert_eq!(m.get(&1, &2), Some(&300));
        assert_eq!(m.get(&2, &2), Some(&4));

        for mut cell in &mut m {
            *cell.elt_mut() += 1;
        }
        assert_eq!(m.get(&0, &0), Some(&1));

        m.retain(|cell| cell.row() != 2 && *cell.elt() < 100);
        assert_eq!(m.row_count(), 2);
        assert_eq!(triples(m.iter()), vec![(0, 0, 1), (1, 0, 2)]);
    }

    #[test]
    fn test_clear() {
        let mut m = scenario();
        m.clear();

        assert!(m.is_empty());
        assert_eq!(m.begin(), m.end());
        assert_eq!(m, SparseMatrix::default());
    }

    #[test]
    fn test_max_key_outside_half_open_windows() {
        let mut m: SparseMatrix<char, u8, u8> = SparseMatrix::new();
        m.put(u8::MAX, 3, 'z');

        assert_eq!(m.iter_within(0..u8::MAX, 0..u8::MAX).count(), 0);
        assert!(m.begin_within(0..u8::MAX, 0..u8::MAX).is_end());
        assert_eq!(m.row_span(), Some((&u8::MAX, &u8::MAX)));
        assert_eq!((m.col_lower(), m.col_upper()), (3, 4));
        assert_eq!(m.row_lower(), u8::MAX);
    }

    #[test]
    #[should_panic(expected = "matrix key 255 has no successor")]
    fn test_row_upper_panics_on_max_row_key() {
        let mut m: SparseMatrix<char, u8, u8> = SparseMatrix::new();
        m.put(u8::MAX, 3, 'z');
        let _ = m.row_upper();
    }

    #[test]
    #[should_panic(expected = "matrix key 255 has no successor")]
    fn test_col_upper_panics_on_max_col_key() {
        let mut m: SparseMatrix<char, u8, u8> = SparseMatrix::new();
        m.put(0, u8::MAX, 'z');
        let _ = m.col_upper();
    }

    #[test]
    fn test_access_traits() {
        let m = scenario();

        assert_eq!(m.get_element(&1, &5), Some(&"b"));
        assert!(m.contains_cell(&3, &1));
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.row_cells(&1), vec![(&2, &"a"), (&5, &"b")]);
        assert!(m.row_cells(&2).is_empty());
        assert_eq!(m.col_cells(&1), vec![(&3, &"c")]);
    }

    #[test]
    fn test_reverse_ordered_keys() {
        let m: SparseMatrix<char, Reverse<i32>, Reverse<i32>> = [
            (Reverse(1), Reverse(1), 'a'),
            (Reverse(1), Reverse(4), 'b'),
            (Reverse(5), Reverse(2), 'c'),
        ]
        .into_iter()
        .collect();

        let order: Vec<(i32, i32)> = m.iter().map(|cell| (cell.row().0, cell.col().0)).collect();
        assert_eq!(order, vec![(5, 2), (1, 4), (1, 1)]);

        // descending window: rows 5 down to 2, columns 4 down to 2
        let window: Vec<char> = m
            .iter_within(Reverse(5)..Reverse(1), Reverse(4)..Reverse(1))
            .map(|cell| *cell.elt())
            .collect();
        assert_eq!(window, vec!['c']);
    }

    #[test]
    fn test_random_traversals_match_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut m: SparseMatrix<u32, i32, i32> = SparseMatrix::new();
        let mut model: BTreeMap<(i32, i32), u32> = BTreeMap::new();

        for step in 0..600u32 {
            let (row, col) = (rng.gen_range(-10..10), rng.gen_range(-10..10));
            if rng.gen_bool(0.3) {
                assert_eq!(m.erase(&row, &col), usize::from(model.remove(&(row, col)).is_some()));
            } else {
                let inserted = m.put(row, col, step);
                assert_eq!(inserted, !model.contains_key(&(row, col)));
                model.entry((row, col)).or_insert(step);
            }
        }

        assert_eq!(m.len(), model.len());
        let all: Vec<(i32, i32, u32)> = triples(m.iter());
        let expected: Vec<(i32, i32, u32)> = model.iter().map(|(&(r, c), &e)| (r, c, e)).collect();
        assert_eq!(all, expected);

        for _ in 0..50 {
            let (r0, c0) = (rng.gen_range(-12..12), rng.gen_range(-12..12));
            let (r1, c1) = (r0 + rng.gen_range(0..8), c0 + rng.gen_range(0..8));

            let expected: Vec<(i32, i32, u32)> = model
                .iter()
                .filter(|((r, c), _)| (r0..r1).contains(r) && (c0..c1).contains(c))
                .map(|(&(r, c), &e)| (r, c, e))
                .collect();
            assert_eq!(triples(m.iter_within(r0..r1, c0..c1)), expected);

            let mut cursor_cells = Vec::new();
            let mut cur = m.begin_within(r0..r1, c0..c1);
            while cur != m.end() {
                let cell = cur.cell(&m);
                cursor_cells.push((cell.row(), cell.col(), *cell.elt()));
                cur.advance(&m);
            }
            assert_eq!(cursor_cells, expected);
        }

        if let (Some(&(r_lo, _)), Some(&(r_hi, _))) = (model.keys().next(), model.keys().last()) {
            assert_eq!((m.row_lower(), m.row_upper()), (r_lo, r_hi + 1));
        }
        let c_lo = model.keys().map(|&(_, c)| c).min();
        let c_hi = model.keys().map(|&(_, c)| c).max();
        assert_eq!(m.col_span(), c_lo.as_ref().zip(c_hi.as_ref()));
    }
}
