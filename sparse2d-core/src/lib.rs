#![no_std]

//! sparse2d core - key, window and access definitions
//!
//! This crate provides the pure definitions shared by two-dimensional
//! sparse containers: the key ordering capability, half-open traversal
//! windows, the error type and the access traits. It performs no
//! allocation unless the `alloc` feature is enabled.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod key;
pub mod traits;
pub mod window;

pub use error::*;
pub use key::MatrixKey;
pub use traits::*;
pub use window::{Rect, Scan};
