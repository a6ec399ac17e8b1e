//! sparse2d - two-dimensional sparse associative container
//!
//! A matrix indexed by independently ordered row and column keys where only
//! explicitly stored cells consume memory. Rows and columns are kept in
//! key order, so a whole matrix or any half-open rectangle of it can be
//! traversed in row-major, column-ascending order without visiting absent
//! cells.
//!
//! ## Architecture
//!
//! - **sparse2d-core**: key ordering, traversal windows, errors and access
//!   traits (`no_std`)
//! - **sparse2d**: the concrete [`SparseMatrix`], its cursors, cell views
//!   and iterators
//!
//! ## Quick Start
//!
//! ```rust
//! use sparse2d::SparseMatrix;
//!
//! let mut m: SparseMatrix<f64, u32, u32> = SparseMatrix::new();
//! m.put(10, 3, 1.5);
//! m.put(10, 8, 2.5);
//! m.put(42, 3, -1.0);
//!
//! // Cursor traversal of a rectangle, erasing in place
//! let mut cur = m.begin_within(0..20, 0..10);
//! while cur != m.end() {
//!     let doomed = *cur.cell(&m).elt() > 2.0;
//!     let here = cur.clone();
//!     cur.advance(&m);
//!     if doomed {
//!         m.erase_at(here);
//!     }
//! }
//! assert_eq!(m.len(), 2);
//! ```
//!
//! ## Features
//!
//! - **tracing** (default): emit `tracing` events when rows are created or
//!   dropped and when ranges are erased

pub use sparse2d_core::{MatrixKey, Rect, Result, Scan, SparseAccess, SliceAccess, SparseError};

mod walk;

pub mod cell;
pub mod cursor;
pub mod iter;
pub mod matrix;
pub mod row;

pub use cell::{Cell, CellMut, CellView};
pub use cursor::Cursor;
pub use iter::{Iter, IterMut};
pub use matrix::SparseMatrix;
pub use row::Row;
