//! Abstract interfaces for sparse two-dimensional containers
//!
//! Traits are pure interfaces - concrete containers live in `sparse2d`.

pub mod access;

pub use access::SparseAccess;
#[cfg(feature = "alloc")]
pub use access::SliceAccess;
