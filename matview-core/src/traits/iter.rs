//! Traversal traits
//!
//! Row and column traversal yield one line vector per row (column) in
//! ascending index order. Raw traversal visits every stored entry in an
//! order chosen by the implementation, stable within one traversal. Each
//! accessor comes in a read-only and a read-write form.

use super::matrix::{Matrix, MatrixMut};

/// A stored entry together with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedEntry<V> {
    pub row: usize,
    pub col: usize,
    pub value: V,
}

impl<V> IndexedEntry<V> {
    pub const fn new(row: usize, col: usize, value: V) -> Self {
        Self { row, col, value }
    }

    /// Row index of the entry
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Column index of the entry
    pub fn col_index(&self) -> usize {
        self.col
    }

    /// The same entry with row and column indices exchanged
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
            value: self.value,
        }
    }

    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> IndexedEntry<U> {
        IndexedEntry {
            row: self.row,
            col: self.col,
            value: f(self.value),
        }
    }
}

impl<V: Copy> IndexedEntry<&V> {
    pub fn copied(self) -> IndexedEntry<V> {
        self.map(|value| *value)
    }
}

impl<V: Copy> IndexedEntry<&mut V> {
    pub fn copied(self) -> IndexedEntry<V> {
        self.map(|value| *value)
    }
}

/// Matrices that can be traversed row by row
pub trait RowIterable: Matrix {
    /// Read-only view of one row
    type Row<'a>
    where
        Self: 'a;

    /// Iterator over all rows in ascending order
    type Rows<'a>: Iterator<Item = Self::Row<'a>>
    where
        Self: 'a;

    fn rows(&self) -> Self::Rows<'_>;
}

/// Matrices whose rows can be modified in place during traversal
pub trait RowIterableMut: RowIterable + MatrixMut {
    /// Read-write view of one row
    type RowMut<'a>
    where
        Self: 'a;

    type RowsMut<'a>: Iterator<Item = Self::RowMut<'a>>
    where
        Self: 'a;

    fn rows_mut(&mut self) -> Self::RowsMut<'_>;
}

/// Matrices that can be traversed column by column
pub trait ColIterable: Matrix {
    /// Read-only view of one column
    type Col<'a>
    where
        Self: 'a;

    /// Iterator over all columns in ascending order
    type Cols<'a>: Iterator<Item = Self::Col<'a>>
    where
        Self: 'a;

    fn cols(&self) -> Self::Cols<'_>;
}

/// Matrices whose columns can be modified in place during traversal
pub trait ColIterableMut: ColIterable + MatrixMut {
    /// Read-write view of one column
    type ColMut<'a>
    where
        Self: 'a;

    type ColsMut<'a>: Iterator<Item = Self::ColMut<'a>>
    where
        Self: 'a;

    fn cols_mut(&mut self) -> Self::ColsMut<'_>;
}

/// Unordered traversal of every stored entry
pub trait RawIterable: Matrix {
    type Raw<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Like [`RawIterable::Raw`], with the position of each entry
    type RawIndexed<'a>: Iterator<Item = IndexedEntry<&'a Self::Element>>
    where
        Self: 'a;

    fn raw(&self) -> Self::Raw<'_>;

    fn raw_indexed(&self) -> Self::RawIndexed<'_>;
}

/// Unordered in-place modification of every stored entry
pub trait RawIterableMut: RawIterable + MatrixMut {
    type RawMut<'a>: Iterator<Item = &'a mut Self::Element>
    where
        Self: 'a;

    type RawIndexedMut<'a>: Iterator<Item = IndexedEntry<&'a mut Self::Element>>
    where
        Self: 'a;

    fn raw_mut(&mut self) -> Self::RawMut<'_>;

    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_>;
}

// Shared references expose the read-only half of every traversal trait.

impl<'m, M: RowIterable + ?Sized> RowIterable for &'m M {
    type Row<'a> = M::Row<'a> where Self: 'a;
    type Rows<'a> = M::Rows<'a> where Self: 'a;

    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }
}

impl<'m, M: ColIterable + ?Sized> ColIterable for &'m M {
    type Col<'a> = M::Col<'a> where Self: 'a;
    type Cols<'a> = M::Cols<'a> where Self: 'a;

    fn cols(&self) -> Self::Cols<'_> {
        (**self).cols()
    }
}

impl<'m, M: RawIterable + ?Sized> RawIterable for &'m M {
    type Raw<'a> = M::Raw<'a> where Self: 'a;
    type RawIndexed<'a> = M::RawIndexed<'a> where Self: 'a;

    fn raw(&self) -> Self::Raw<'_> {
        (**self).raw()
    }

    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        (**self).raw_indexed()
    }
}

// Exclusive references expose both halves.

impl<'m, M: RowIterable + ?Sized> RowIterable for &'m mut M {
    type Row<'a> = M::Row<'a> where Self: 'a;
    type Rows<'a> = M::Rows<'a> where Self: 'a;

    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }
}

impl<'m, M: RowIterableMut + ?Sized> RowIterableMut for &'m mut M {
    type RowMut<'a> = M::RowMut<'a> where Self: 'a;
    type RowsMut<'a> = M::RowsMut<'a> where Self: 'a;

    fn rows_mut(&mut self) -> Self::RowsMut<'_> {
        (**self).rows_mut()
    }
}

impl<'m, M: ColIterable + ?Sized> ColIterable for &'m mut M {
    type Col<'a> = M::Col<'a> where Self: 'a;
    type Cols<'a> = M::Cols<'a> where Self: 'a;

    fn cols(&self) -> Self::Cols<'_> {
        (**self).cols()
    }
}

impl<'m, M: ColIterableMut + ?Sized> ColIterableMut for &'m mut M {
    type ColMut<'a> = M::ColMut<'a> where Self: 'a;
    type ColsMut<'a> = M::ColsMut<'a> where Self: 'a;

    fn cols_mut(&mut self) -> Self::ColsMut<'_> {
        (**self).cols_mut()
    }
}

impl<'m, M: RawIterable + ?Sized> RawIterable for &'m mut M {
    type Raw<'a> = M::Raw<'a> where Self: 'a;
    type RawIndexed<'a> = M::RawIndexed<'a> where Self: 'a;

    fn raw(&self) -> Self::Raw<'_> {
        (**self).raw()
    }

    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        (**self).raw_indexed()
    }
}

impl<'m, M: RawIterableMut + ?Sized> RawIterableMut for &'m mut M {
    type RawMut<'a> = M::RawMut<'a> where Self: 'a;
    type RawIndexedMut<'a> = M::RawIndexedMut<'a> where Self: 'a;

    fn raw_mut(&mut self) -> Self::RawMut<'_> {
        (**self).raw_mut()
    }

    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_> {
        (**self).raw_indexed_mut()
    }
}
