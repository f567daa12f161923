//! Dense row-major matrix
//!
//! Every position holds an explicit value, so entry reads always succeed and
//! erasing an entry leaves the stored value in place.

use log::debug;
use matview_core::{
    validate_dense_len, ColIterable, ColIterableMut, IndexedEntry, Matrix, MatrixElement,
    MatrixMut, RawIterable, RawIterableMut, Result, RowColMatrixTag, RowIterable, RowIterableMut,
};

use crate::assert_in_bounds;

/// Dense matrix stored row by row in one contiguous buffer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "DenseParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

/// Unchecked serialized form of a [`DenseMatrix`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DenseParts<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<DenseParts<T>> for DenseMatrix<T> {
    type Error = matview_core::MatrixError;

    fn try_from(parts: DenseParts<T>) -> Result<Self> {
        Self::from_vec(parts.nrows, parts.ncols, parts.data)
    }
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Create an `nrows` x `ncols` matrix filled with zeros
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| T::zero())
    }

    /// Create a matrix from row-major data
    ///
    /// Fails if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        if let Err(err) = validate_dense_len(nrows, ncols, data.len()) {
            debug!("rejecting dense {nrows}x{ncols} {} matrix: {err}", T::data_type());
            return Err(err);
        }
        debug!("built dense {nrows}x{ncols} {} matrix", T::data_type());
        Ok(Self { nrows, ncols, data })
    }

    /// Create a matrix whose (i, j) entry is `f(i, j)`
    pub fn from_fn<F: FnMut(usize, usize) -> T>(nrows: usize, ncols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(nrows.saturating_mul(ncols));
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        debug!("built dense {nrows}x{ncols} {} matrix", T::data_type());
        Self { nrows, ncols, data }
    }

    /// Row-major backing storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Release the row-major backing storage
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert_in_bounds(i, j, self.nrows, self.ncols);
        i * self.ncols + j
    }
}

impl<T: MatrixElement + bytemuck::Pod> DenseMatrix<T> {
    /// Backing storage reinterpreted as raw bytes, without copying
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<T: MatrixElement> Matrix for DenseMatrix<T> {
    type Element = T;
    type Category = RowColMatrixTag;

    fn rowdim(&self) -> usize {
        self.nrows
    }

    fn coldim(&self) -> usize {
        self.ncols
    }

    fn entry(&self, i: usize, j: usize) -> Option<T> {
        Some(self.data[self.offset(i, j)])
    }
}

impl<T: MatrixElement> MatrixMut for DenseMatrix<T> {
    fn set_entry(&mut self, i: usize, j: usize, a_ij: T) {
        let offset = self.offset(i, j);
        self.data[offset] = a_ij;
    }

    /// Dense storage keeps every position; the value is retained.
    fn erase_entry(&mut self, i: usize, j: usize) {
        assert_in_bounds(i, j, self.nrows, self.ncols);
    }
}

/// Iterator over the rows of a dense matrix
#[derive(Debug, Clone)]
pub struct DenseRows<'a, T> {
    data: &'a [T],
    ncols: usize,
    remaining: usize,
}

impl<'a, T> Iterator for DenseRows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (row, rest) = self.data.split_at(self.ncols);
        self.data = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for DenseRows<'_, T> {}

/// Iterator over the rows of a dense matrix, yielding mutable slices
#[derive(Debug)]
pub struct DenseRowsMut<'a, T> {
    data: &'a mut [T],
    ncols: usize,
    remaining: usize,
}

impl<'a, T> Iterator for DenseRowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let data = std::mem::take(&mut self.data);
        let (row, rest) = data.split_at_mut(self.ncols);
        self.data = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for DenseRowsMut<'_, T> {}

/// One column of a dense matrix, read through a stride
#[derive(Debug, Clone)]
pub struct DenseCol<'a, T> {
    iter: std::iter::StepBy<std::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for DenseCol<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for DenseCol<'_, T> {}

/// Iterator over the columns of a dense matrix
#[derive(Debug, Clone)]
pub struct DenseCols<'a, T> {
    data: &'a [T],
    ncols: usize,
    next: usize,
}

impl<'a, T> Iterator for DenseCols<'a, T> {
    type Item = DenseCol<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.ncols {
            return None;
        }
        let start = self.data.get(self.next..).unwrap_or(&[]);
        self.next += 1;
        Some(DenseCol {
            iter: start.iter().step_by(self.ncols),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ncols - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for DenseCols<'_, T> {}

/// One column of a dense matrix, yielding mutable references
///
/// Columns interleave in memory, so the references of every column are
/// gathered up front when the traversal starts. Values are never copied.
#[derive(Debug)]
pub struct DenseColMut<'a, T> {
    iter: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> Iterator for DenseColMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for DenseColMut<'_, T> {}

/// Raw traversal reporting each entry's position
#[derive(Debug, Clone)]
pub struct DenseIndexed<I> {
    iter: std::iter::Enumerate<I>,
    ncols: usize,
}

impl<I: Iterator> Iterator for DenseIndexed<I> {
    type Item = IndexedEntry<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let (k, value) = self.iter.next()?;
        Some(IndexedEntry::new(k / self.ncols, k % self.ncols, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: MatrixElement> RowIterable for DenseMatrix<T> {
    type Row<'a> = &'a [T];
    type Rows<'a> = DenseRows<'a, T>;

    fn rows(&self) -> Self::Rows<'_> {
        DenseRows {
            data: &self.data,
            ncols: self.ncols,
            remaining: self.nrows,
        }
    }
}

impl<T: MatrixElement> RowIterableMut for DenseMatrix<T> {
    type RowMut<'a> = &'a mut [T];
    type RowsMut<'a> = DenseRowsMut<'a, T>;

    fn rows_mut(&mut self) -> Self::RowsMut<'_> {
        DenseRowsMut {
            data: &mut self.data,
            ncols: self.ncols,
            remaining: self.nrows,
        }
    }
}

impl<T: MatrixElement> ColIterable for DenseMatrix<T> {
    type Col<'a> = DenseCol<'a, T>;
    type Cols<'a> = DenseCols<'a, T>;

    fn cols(&self) -> Self::Cols<'_> {
        DenseCols {
            data: &self.data,
            ncols: self.ncols,
            next: 0,
        }
    }
}

impl<T: MatrixElement> ColIterableMut for DenseMatrix<T> {
    type ColMut<'a> = DenseColMut<'a, T>;
    type ColsMut<'a> = std::vec::IntoIter<DenseColMut<'a, T>>;

    fn cols_mut(&mut self) -> Self::ColsMut<'_> {
        let mut cols: Vec<Vec<&mut T>> = (0..self.ncols)
            .map(|_| Vec::with_capacity(self.nrows))
            .collect();
        for (k, value) in self.data.iter_mut().enumerate() {
            cols[k % self.ncols].push(value);
        }
        cols.into_iter()
            .map(|col| DenseColMut {
                iter: col.into_iter(),
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<T: MatrixElement> RawIterable for DenseMatrix<T> {
    type Raw<'a> = std::slice::Iter<'a, T>;
    type RawIndexed<'a> = DenseIndexed<std::slice::Iter<'a, T>>;

    fn raw(&self) -> Self::Raw<'_> {
        self.data.iter()
    }

    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        DenseIndexed {
            iter: self.data.iter().enumerate(),
            ncols: self.ncols,
        }
    }
}

impl<T: MatrixElement> RawIterableMut for DenseMatrix<T> {
    type RawMut<'a> = std::slice::IterMut<'a, T>;
    type RawIndexedMut<'a> = DenseIndexed<std::slice::IterMut<'a, T>>;

    fn raw_mut(&mut self) -> Self::RawMut<'_> {
        self.data.iter_mut()
    }

    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_> {
        DenseIndexed {
            iter: self.data.iter_mut().enumerate(),
            ncols: self.ncols,
        }
    }
}
