//! matview - Reference matrices with zero-copy transposed views
//!
//! This crate provides concrete matrix storage implementing the
//! `matview-core` archetype, so that [`TransposeMatrix`] views can be
//! formed over real data:
//!
//! - [`DenseMatrix`]: row-major storage, row and column traversal
//! - [`SparseRowMatrix`]: one sparse vector per row, row traversal only
//! - [`SparseColMatrix`]: one sparse vector per column, column traversal only
//! - [`CooMatrix`]: coordinate triplets, full generic interface
//!
//! ## Quick Start
//!
//! ```rust
//! use matview::{Matrix, MatrixMut, SparseRowMatrix, Transpose};
//!
//! let mut a = SparseRowMatrix::<i64>::from_triplets(2, 3, [(0, 0, 1), (1, 2, 5)]).unwrap();
//!
//! let mut view = a.transpose_mut();
//! assert_eq!(view.dimensions(), (3, 2));
//! assert_eq!(view.entry(2, 1), Some(5));
//! view.set_entry(0, 1, 9);
//!
//! assert_eq!(a.entry(1, 0), Some(9));
//! ```

// Re-export the archetype and the view
pub use matview_core::{
    // Core traits
    ColIterable, ColIterableMut, Matrix, MatrixElement, MatrixMut, RawIterable, RawIterableMut,
    RowIterable, RowIterableMut,
    // Categories
    CategoryKind, ColMatrixTag, GenericMatrixTag, MatrixCategory, RowColMatrixTag, RowMatrixTag,
    // Views
    IndexedEntry, Transpose, TransposeMatrix,
    // Error handling
    DataType, MatrixError, Result,
};

pub mod coo;
pub mod dense;
pub mod sparse;

pub use coo::{CooMatrix, CooParts};
pub use dense::DenseMatrix;
pub use sparse::{SparseColMatrix, SparseRowMatrix, SparseVector};

/// Panic with the wrapped matrix's own out-of-range message
///
/// Matrices in this crate treat an invalid index like slice indexing does.
#[track_caller]
pub(crate) fn assert_in_bounds(i: usize, j: usize, nrows: usize, ncols: usize) {
    if let Err(err) = matview_core::validate_index(i, j, nrows, ncols) {
        panic!("{err}");
    }
}
