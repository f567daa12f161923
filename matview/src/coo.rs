//! Coordinate (COO) matrix
//!
//! Entries are kept as parallel row index, column index and value arrays in
//! insertion order, with a hash index from position to slot. The format
//! declares no traversal preference and implements the whole interface.

use hashbrown::HashMap;
use log::debug;
use matview_core::{
    validate_index, ColIterable, ColIterableMut, GenericMatrixTag, IndexedEntry, Matrix,
    MatrixElement, MatrixMut, RawIterable, RawIterableMut, Result, RowIterable, RowIterableMut,
};

use crate::assert_in_bounds;

/// Sparse matrix in coordinate format
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "CooParts<T>",
        into = "CooParts<T>",
        bound(
            serialize = "T: serde::Serialize + Clone",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct CooMatrix<T> {
    nrows: usize,
    ncols: usize,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
    slots: HashMap<(usize, usize), usize>,
}

/// Dimensions and `(row, col, value)` triplets of a [`CooMatrix`]
///
/// This is the serialized form; the slot index is rebuilt on conversion,
/// which fails like [`CooMatrix::from_triplets`] on triplets outside the
/// dimensions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooParts<T> {
    pub nrows: usize,
    pub ncols: usize,
    pub entries: Vec<(usize, usize, T)>,
}

impl<T> CooMatrix<T> {
    fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
            slots: HashMap::new(),
        }
    }

    fn insert(&mut self, i: usize, j: usize, value: T) {
        match self.slots.get(&(i, j)) {
            Some(&slot) => self.values[slot] = value,
            None => {
                self.slots.insert((i, j), self.values.len());
                self.row_indices.push(i);
                self.col_indices.push(j);
                self.values.push(value);
            }
        }
    }

    fn remove(&mut self, i: usize, j: usize) -> Option<T> {
        let slot = self.slots.remove(&(i, j))?;
        self.row_indices.swap_remove(slot);
        self.col_indices.swap_remove(slot);
        let value = self.values.swap_remove(slot);
        // the former last entry now lives in `slot`
        if slot < self.values.len() {
            self.slots
                .insert((self.row_indices[slot], self.col_indices[slot]), slot);
        }
        Some(value)
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Create an empty `nrows` x `ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::empty(nrows, ncols)
    }

    /// Create a matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same position.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::empty(nrows, ncols);
        for (i, j, value) in triplets {
            if let Err(err) = validate_index(i, j, nrows, ncols) {
                debug!("rejecting coo {nrows}x{ncols} {} matrix: {err}", T::data_type());
                return Err(err);
            }
            matrix.insert(i, j, value);
        }
        debug!(
            "built coo {nrows}x{ncols} {} matrix with {} entries",
            T::data_type(),
            matrix.nnz()
        );
        Ok(matrix)
    }
}

impl<T: MatrixElement> TryFrom<CooParts<T>> for CooMatrix<T> {
    type Error = matview_core::MatrixError;

    fn try_from(parts: CooParts<T>) -> Result<Self> {
        Self::from_triplets(parts.nrows, parts.ncols, parts.entries)
    }
}

impl<T> From<CooMatrix<T>> for CooParts<T> {
    fn from(matrix: CooMatrix<T>) -> Self {
        let entries = matrix
            .row_indices
            .into_iter()
            .zip(matrix.col_indices)
            .zip(matrix.values)
            .map(|((i, j), value)| (i, j, value))
            .collect();
        Self {
            nrows: matrix.nrows,
            ncols: matrix.ncols,
            entries,
        }
    }
}

impl<T: MatrixElement> PartialEq for CooMatrix<T> {
    /// Equal when dimensions and stored entries agree, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && self.nnz() == other.nnz()
            && self
                .slots
                .iter()
                .all(|(&(i, j), &slot)| other.entry(i, j) == Some(self.values[slot]))
    }
}

impl<T: MatrixElement> Matrix for CooMatrix<T> {
    type Element = T;
    type Category = GenericMatrixTag;

    fn rowdim(&self) -> usize {
        self.nrows
    }

    fn coldim(&self) -> usize {
        self.ncols
    }

    fn entry(&self, i: usize, j: usize) -> Option<T> {
        assert_in_bounds(i, j, self.nrows, self.ncols);
        self.slots.get(&(i, j)).map(|&slot| self.values[slot])
    }
}

impl<T: MatrixElement> MatrixMut for CooMatrix<T> {
    fn set_entry(&mut self, i: usize, j: usize, a_ij: T) {
        assert_in_bounds(i, j, self.nrows, self.ncols);
        self.insert(i, j, a_ij);
    }

    fn erase_entry(&mut self, i: usize, j: usize) {
        assert_in_bounds(i, j, self.nrows, self.ncols);
        self.remove(i, j);
    }
}

/// One row (or column) of a coordinate matrix
///
/// Yields `(index, &value)` for every stored entry of the line by scanning
/// the index arrays. Entries come in storage order, which is insertion order
/// until an erase moves the last entry into the freed slot; they are not
/// sorted by index.
#[derive(Debug, Clone)]
pub struct CooLine<'a, T> {
    line: usize,
    majors: &'a [usize],
    minors: &'a [usize],
    values: &'a [T],
    pos: usize,
}

impl<'a, T> Iterator for CooLine<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.values.len() {
            let pos = self.pos;
            self.pos += 1;
            if self.majors[pos] == self.line {
                return Some((self.minors[pos], &self.values[pos]));
            }
        }
        None
    }
}

/// Iterator over the rows (or columns) of a coordinate matrix
#[derive(Debug, Clone)]
pub struct CooLines<'a, T> {
    next: usize,
    count: usize,
    majors: &'a [usize],
    minors: &'a [usize],
    values: &'a [T],
}

impl<'a, T> Iterator for CooLines<'a, T> {
    type Item = CooLine<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let line = self.next;
        self.next += 1;
        Some(CooLine {
            line,
            majors: self.majors,
            minors: self.minors,
            values: self.values,
            pos: 0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for CooLines<'_, T> {}

/// One row (or column) of a coordinate matrix, yielding mutable references
///
/// Entries of every line are grouped when the traversal starts; values are
/// never copied. Order within a line is storage order, as for [`CooLine`].
#[derive(Debug)]
pub struct CooLineMut<'a, T> {
    entries: std::vec::IntoIter<(usize, &'a mut T)>,
}

impl<'a, T> Iterator for CooLineMut<'a, T> {
    type Item = (usize, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

fn group_lines_mut<'a, T>(
    count: usize,
    majors: &[usize],
    minors: &[usize],
    values: &'a mut [T],
) -> std::vec::IntoIter<CooLineMut<'a, T>> {
    let mut lines: Vec<Vec<(usize, &'a mut T)>> = (0..count).map(|_| Vec::new()).collect();
    for ((&major, &minor), value) in majors.iter().zip(minors).zip(values.iter_mut()) {
        lines[major].push((minor, value));
    }
    lines
        .into_iter()
        .map(|entries| CooLineMut {
            entries: entries.into_iter(),
        })
        .collect::<Vec<_>>()
        .into_iter()
}

/// Raw traversal of a coordinate matrix reporting each entry's position
#[derive(Debug, Clone)]
pub struct CooIndexed<'a, I> {
    rows: std::slice::Iter<'a, usize>,
    cols: std::slice::Iter<'a, usize>,
    values: I,
}

impl<'a, I: Iterator> Iterator for CooIndexed<'a, I> {
    type Item = IndexedEntry<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.next()?;
        let row = *self.rows.next()?;
        let col = *self.cols.next()?;
        Some(IndexedEntry::new(row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T: MatrixElement> RowIterable for CooMatrix<T> {
    type Row<'a> = CooLine<'a, T>;
    type Rows<'a> = CooLines<'a, T>;

    fn rows(&self) -> Self::Rows<'_> {
        CooLines {
            next: 0,
            count: self.nrows,
            majors: &self.row_indices,
            minors: &self.col_indices,
            values: &self.values,
        }
    }
}

impl<T: MatrixElement> RowIterableMut for CooMatrix<T> {
    type RowMut<'a> = CooLineMut<'a, T>;
    type RowsMut<'a> = std::vec::IntoIter<CooLineMut<'a, T>>;

    fn rows_mut(&mut self) -> Self::RowsMut<'_> {
        group_lines_mut(
            self.nrows,
            &self.row_indices,
            &self.col_indices,
            &mut self.values,
        )
    }
}

impl<T: MatrixElement> ColIterable for CooMatrix<T> {
    type Col<'a> = CooLine<'a, T>;
    type Cols<'a> = CooLines<'a, T>;

    fn cols(&self) -> Self::Cols<'_> {
        CooLines {
            next: 0,
            count: self.ncols,
            majors: &self.col_indices,
            minors: &self.row_indices,
            values: &self.values,
        }
    }
}

impl<T: MatrixElement> ColIterableMut for CooMatrix<T> {
    type ColMut<'a> = CooLineMut<'a, T>;
    type ColsMut<'a> = std::vec::IntoIter<CooLineMut<'a, T>>;

    fn cols_mut(&mut self) -> Self::ColsMut<'_> {
        group_lines_mut(
            self.ncols,
            &self.col_indices,
            &self.row_indices,
            &mut self.values,
        )
    }
}

impl<T: MatrixElement> RawIterable for CooMatrix<T> {
    type Raw<'a> = std::slice::Iter<'a, T>;
    type RawIndexed<'a> = CooIndexed<'a, std::slice::Iter<'a, T>>;

    fn raw(&self) -> Self::Raw<'_> {
        self.values.iter()
    }

    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        CooIndexed {
            rows: self.row_indices.iter(),
            cols: self.col_indices.iter(),
            values: self.values.iter(),
        }
    }
}

impl<T: MatrixElement> RawIterableMut for CooMatrix<T> {
    type RawMut<'a> = std::slice::IterMut<'a, T>;
    type RawIndexedMut<'a> = CooIndexed<'a, std::slice::IterMut<'a, T>>;

    fn raw_mut(&mut self) -> Self::RawMut<'_> {
        self.values.iter_mut()
    }

    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_> {
        CooIndexed {
            rows: self.row_indices.iter(),
            cols: self.col_indices.iter(),
            values: self.values.iter_mut(),
        }
    }
}
