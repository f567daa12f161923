//! Sparse matrix stored as one sparse vector per row

use log::debug;
use matview_core::{
    validate_index, IndexedEntry, Matrix, MatrixElement, MatrixMut, RawIterable, RawIterableMut,
    Result, RowIterable, RowIterableMut, RowMatrixTag,
};

use super::lines::SparseLines;
use super::vector::{SparseLineMut, SparseVector};
use super::{SparseIndexed, SparseIndexedMut, SparseLinesMut, SparseRaw, SparseRawMut};
use crate::assert_in_bounds;

/// Row-oriented sparse matrix
///
/// Supports row traversal only. Entries not stored are absent: reads
/// return `None` and erasing removes the stored entry.
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
pub struct SparseRowMatrix<T> {
    storage: SparseLines<T>,
}

impl<T: MatrixElement> SparseRowMatrix<T> {
    /// Create an empty `nrows` x `ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            storage: SparseLines::new(nrows, ncols),
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
                debug!("rejecting sparse row {nrows}x{ncols} {} matrix: {err}", T::data_type());
                return Err(err);
            }
            matrix.storage.insert(i, j, value);
        }
        debug!(
            "built sparse row {nrows}x{ncols} {} matrix with {} entries",
            T::data_type(),
            matrix.nnz()
        );
        Ok(matrix)
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.storage.nnz()
    }

    /// Stored entries of row `i`
    pub fn row(&self, i: usize) -> &SparseVector<T> {
        self.storage.line(i)
    }
}

#[cfg(feature = "serde")]
impl<T> TryFrom<SparseLines<T>> for SparseRowMatrix<T> {
    type Error = matview_core::MatrixError;

    fn try_from(storage: SparseLines<T>) -> Result<Self> {
        if let Some((i, j)) = storage.out_of_range() {
            validate_index(i, j, storage.major_dim(), storage.minor_dim())?;
        }
        Ok(Self { storage })
    }
}

#[cfg(feature = "serde")]
impl<T> From<SparseRowMatrix<T>> for SparseLines<T> {
    fn from(matrix: SparseRowMatrix<T>) -> Self {
        matrix.storage
    }
}

impl<T: MatrixElement> Matrix for SparseRowMatrix<T> {
    type Element = T;
    type Category = RowMatrixTag;

    fn rowdim(&self) -> usize {
        self.storage.major_dim()
    }

    fn coldim(&self) -> usize {
        self.storage.minor_dim()
    }

    fn entry(&self, i: usize, j: usize) -> Option<T> {
        assert_in_bounds(i, j, self.rowdim(), self.coldim());
        self.storage.get(i, j)
    }
}

impl<T: MatrixElement> MatrixMut for SparseRowMatrix<T> {
    fn set_entry(&mut self, i: usize, j: usize, a_ij: T) {
        assert_in_bounds(i, j, self.rowdim(), self.coldim());
        self.storage.insert(i, j, a_ij);
    }

    fn erase_entry(&mut self, i: usize, j: usize) {
        assert_in_bounds(i, j, self.rowdim(), self.coldim());
        self.storage.remove(i, j);
    }
}

impl<T: MatrixElement> RowIterable for SparseRowMatrix<T> {
    type Row<'a> = &'a SparseVector<T>;
    type Rows<'a> = std::slice::Iter<'a, SparseVector<T>>;

    fn rows(&self) -> Self::Rows<'_> {
        self.storage.lines()
    }
}

impl<T: MatrixElement> RowIterableMut for SparseRowMatrix<T> {
    type RowMut<'a> = SparseLineMut<'a, T>;
    type RowsMut<'a> = SparseLinesMut<'a, T>;

    /// Each row accepts column indices below [`Matrix::coldim`].
    fn rows_mut(&mut self) -> Self::RowsMut<'_> {
        self.storage.lines_mut()
    }
}

impl<T: MatrixElement> RawIterable for SparseRowMatrix<T> {
    type Raw<'a> = SparseRaw<'a, T>;
    type RawIndexed<'a> = SparseIndexed<'a, T>;

    fn raw(&self) -> Self::Raw<'_> {
        SparseRaw::new(self.storage.entries())
    }

    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        SparseIndexed::new(self.storage.entries(), IndexedEntry::new)
    }
}

impl<T: MatrixElement> RawIterableMut for SparseRowMatrix<T> {
    type RawMut<'a> = SparseRawMut<'a, T>;
    type RawIndexedMut<'a> = SparseIndexedMut<'a, T>;

    fn raw_mut(&mut self) -> Self::RawMut<'_> {
        SparseRawMut::new(self.storage.entries_mut())
    }

    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_> {
        SparseIndexedMut::new(self.storage.entries_mut(), IndexedEntry::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matview_core::{CategoryKind, MatrixError};

    fn sample() -> SparseRowMatrix<i64> {
        SparseRowMatrix::from_triplets(2, 3, [(0, 0, 1), (1, 2, 5)]).unwrap()
    }

    #[test]
    fn test_from_triplets_validates_indices() {
        let err = SparseRowMatrix::<f32>::from_triplets(2, 3, [(2, 0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 3
            }
        );
    }

    #[test]
    fn test_entries_and_erase() {
        let mut m = sample();
        assert_eq!(m.category(), CategoryKind::Row);
        assert_eq!(m.nnz(), 2);

        let mut x = -1;
        assert!(!m.get_entry(&mut x, 1, 0));
        assert_eq!(x, -1);
        assert!(m.get_entry(&mut x, 1, 2));
        assert_eq!(x, 5);

        m.erase_entry(1, 2);
        assert_eq!(m.entry(1, 2), None);
        // erasing an absent entry is a no-op
        m.erase_entry(1, 2);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_rows() {
        let m = sample();
        let rows: Vec<Vec<(usize, i64)>> = m
            .rows()
            .map(|row| row.iter().map(|(j, v)| (j, *v)).collect())
            .collect();
        assert_eq!(rows, vec![vec![(0, 1)], vec![(2, 5)]]);
        assert_eq!(m.row(1).get(2), Some(5));
    }

    #[test]
    fn test_raw_indexed_mut() {
        let mut m = sample();
        for entry in m.raw_indexed_mut() {
            *entry.value *= (entry.row + entry.col + 1) as i64;
        }
        assert_eq!(m.raw().copied().collect::<Vec<_>>(), vec![1, 20]);
        let positions: Vec<(usize, usize)> =
            m.raw_indexed().map(|e| (e.row_index(), e.col_index())).collect();
        assert_eq!(positions, vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_rows_mut_insert() {
        let mut m = sample();
        for (i, mut row) in m.rows_mut().enumerate() {
            assert_eq!(row.len(), 3);
            row.insert(1, i as i64 + 10);
        }
        assert_eq!(m.entry(0, 1), Some(10));
        assert_eq!(m.entry(1, 1), Some(11));
        assert_eq!(m.nnz(), 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_rows_mut_insert_past_coldim_panics() {
        let mut m = sample();
        if let Some(mut row) = m.rows_mut().next() {
            row.insert(3, 1);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_column_past_coldim() {
        let json = r#"{"minor_dim":3,"lines":[{"indices":[0],"values":[1]},{"indices":[4],"values":[2]}]}"#;
        let err = serde_json::from_str::<SparseRowMatrix<i64>>(json).unwrap_err();
        assert!(err.to_string().contains("Index (1, 4) out of bounds for 2x3 matrix"));

        let json = serde_json::to_string(&sample()).unwrap();
        let back: SparseRowMatrix<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
