#![no_std]

//! matview-core - Matrix archetype and zero-copy transposed views
//!
//! This crate defines the traits a matrix implementation exposes (dimension
//! queries, entry access, row/column/raw traversal), the compile-time
//! capability categories that classify those implementations, and
//! [`TransposeMatrix`], a borrowed view that presents any such matrix as its
//! transpose without copying data.
//!
//! Nothing here allocates. Concrete storage lives in the `matview` crate.

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod traits;
pub mod transpose;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use transpose::{Transpose, TransposeMatrix};
pub use validation::{checked_len, validate_dense_len, validate_index, validate_sorted_indices};
