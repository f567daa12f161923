//! Abstract interfaces of the matrix archetype
//!
//! Traits are pure interfaces; the only implementations here are the
//! forwarding impls for references.

pub mod category;
pub mod element;
pub mod iter;
pub mod matrix;

pub use category::{
    CategoryKind, ColMatrixTag, GenericMatrixTag, MatrixCategory, RowColMatrixTag, RowMatrixTag,
};
pub use element::{DataType, MatrixElement};
pub use iter::{
    ColIterable, ColIterableMut, IndexedEntry, RawIterable, RawIterableMut, RowIterable,
    RowIterableMut,
};
pub use matrix::{Matrix, MatrixMut};
