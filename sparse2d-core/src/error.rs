//! Error types for sparse2d cursor operations

/// Errors that can occur when a cursor is used against a matrix
///
/// Absence of a cell is never an error: lookups report it through
/// `Option` and erasures through a zero count. Only cursor misuse
/// ends up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// The cursor is at the end marker and references no cell
    CursorAtEnd,
    /// The cell the cursor references has been erased
    StaleCursor,
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SparseError::CursorAtEnd => "cursor is at the end marker",
            SparseError::StaleCursor => "cursor references an erased cell",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SparseError {}

/// Result type for sparse2d cursor operations
pub type Result<T> = core::result::Result<T, SparseError>;
