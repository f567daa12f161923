//! Sparse matrix stored as one sparse vector per column

use log::debug;
use matview_core::{
    validate_index, ColIterable, ColIterableMut, ColMatrixTag, IndexedEntry, Matrix,
    MatrixElement, MatrixMut, RawIterable, RawIterableMut, Result,
};

use super::lines::SparseLines;
use super::vector::{SparseLineMut, SparseVector};
use super::{SparseIndexed, SparseIndexedMut, SparseLinesMut, SparseRaw, SparseRawMut};
use crate::assert_in_bounds;

/// Storage is (col, row); raw positions are reported as (row, col).
fn column_major<V>(col: usize, row: usize, value: V) -> IndexedEntry<V> {
    IndexedEntry::new(row, col, value)
}

/// Column-oriented sparse matrix
///
/// Supports column traversal only. Entries not stored are absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SparseLines<T>",
        into = "SparseLines<T>",
        bound(
            serialize = "T: serde::Serialize + Clone",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseColMatrix<T> {
    storage: SparseLines<T>,
}

impl<T: MatrixElement> SparseColMatrix<T> {
    /// Create an empty `nrows` x `ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            storage: SparseLines::new(ncols, nrows),
        }
    }

    /// Create a matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same position.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (i, j, value) in triplets {
            if let Err(err) = validate_index(i, j, nrows, ncols) {
                debug!("rejecting sparse col {nrows}x{ncols} {} matrix: {err}", T::data_type());
                return Err(err);
            }
            matrix.storage.insert(j, i, value);
        }
        debug!(
            "built sparse col {nrows}x{ncols} {} matrix with {} entries",
            T::data_type(),
            matrix.nnz()
        );
        Ok(matrix)
    }

    pub fn nnz(&self) -> usize {
        self.storage.nnz()
    }

    /// Stored entries of column `j`
    pub fn col(&self, j: usize) -> &SparseVector<T> {
        self.storage.line(j)
    }
}

#[cfg(feature = "serde")]
impl<T> TryFrom<SparseLines<T>> for SparseColMatrix<T> {
    type Error = matview_core::MatrixError;

    fn try_from(storage: SparseLines<T>) -> Result<Self> {
        if let Some((j, i)) = storage.out_of_range() {
            validate_index(i, j, storage.minor_dim(), storage.major_dim())?;
        }
        Ok(Self { storage })
    }
}

#[cfg(feature = "serde")]
impl<T> From<SparseColMatrix<T>> for SparseLines<T> {
    fn from(matrix: SparseColMatrix<T>) -> Self {
        matrix.storage
    }
}

impl<T: MatrixElement> Matrix for SparseColMatrix<T> {
    type Element = T;
    type Category = ColMatrixTag;

    fn rowdim(&self) -> usize {
        self.storage.minor_dim()
    }

    fn coldim(&self) -> usize {
        self.storage.major_dim()
    }

    fn entry(&self, i: usize, j: usize) -> Option<T> {
        assert_in_bounds(i, j, self.rowdim(), self.coldim());
        self.storage.get(j, i)
    }
}

impl<T: MatrixElement> MatrixMut for SparseColMatrix<T> {
    fn set_entry(&mut self, i: usize, j: usize, a_ij: T) {
        assert_in_bounds(i, j, self.rowdim(), self.coldim());
        self.storage.insert(j, i, a_ij);
    }

    fn erase_entry(&mut self, i: usize, j: usize) {
        assert_in_bounds(i, j, self.rowdim(), self.coldim());
        self.storage.remove(j, i);
    }
}

impl<T: MatrixElement> ColIterable for SparseColMatrix<T> {
    type Col<'a> = &'a SparseVector<T>;
    type Cols<'a> = std::slice::Iter<'a, SparseVector<T>>;

    fn cols(&self) -> Self::Cols<'_> {
        self.storage.lines()
    }
}

impl<T: MatrixElement> ColIterableMut for SparseColMatrix<T> {
    type ColMut<'a> = SparseLineMut<'a, T>;
    type ColsMut<'a> = SparseLinesMut<'a, T>;

    /// Each column accepts row indices below [`Matrix::rowdim`].
    fn cols_mut(&mut self) -> Self::ColsMut<'_> {
        self.storage.lines_mut()
    }
}

impl<T: MatrixElement> RawIterable for SparseColMatrix<T> {
    type Raw<'a> = SparseRaw<'a, T>;
    type RawIndexed<'a> = SparseIndexed<'a, T>;

    fn raw(&self) -> Self::Raw<'_> {
        SparseRaw::new(self.storage.entries())
    }

    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        SparseIndexed::new(self.storage.entries(), column_major)
    }
}

impl<T: MatrixElement> RawIterableMut for SparseColMatrix<T> {
    type RawMut<'a> = SparseRawMut<'a, T>;
    type RawIndexedMut<'a> = SparseIndexedMut<'a, T>;

    fn raw_mut(&mut self) -> Self::RawMut<'_> {
        SparseRawMut::new(self.storage.entries_mut())
    }

    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_> {
        SparseIndexedMut::new(self.storage.entries_mut(), column_major)
    }
}
