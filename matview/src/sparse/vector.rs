//! Sparse vector with sorted indices

use std::iter::{Copied, Zip};
use std::slice;

/// Iterator over `(index, &value)` pairs of a sparse vector
pub type SparseIter<'a, T> = Zip<Copied<slice::Iter<'a, usize>>, slice::Iter<'a, T>>;

/// Iterator over `(index, &mut value)` pairs of a sparse vector
pub type SparseIterMut<'a, T> = Zip<Copied<slice::Iter<'a, usize>>, slice::IterMut<'a, T>>;

/// Sparse vector storing explicit entries in ascending index order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SparseVectorParts<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct SparseVector<T> {
    indices: Vec<usize>,
    values: Vec<T>,
}

/// Unchecked serialized form of a [`SparseVector`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SparseVectorParts<T> {
    indices: Vec<usize>,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<SparseVectorParts<T>> for SparseVector<T> {
    type Error = matview_core::MatrixError;

    fn try_from(parts: SparseVectorParts<T>) -> matview_core::Result<Self> {
        if parts.indices.len() != parts.values.len() {
            return Err(matview_core::MatrixError::DimensionMismatch {
                expected: parts.indices.len(),
                actual: parts.values.len(),
            });
        }
        matview_core::validate_sorted_indices(&parts.indices)?;
        Ok(Self {
            indices: parts.indices,
            values: parts.values,
        })
    }
}

impl<T> Default for SparseVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseVector<T> {
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Stored indices, ascending
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Stored values, in index order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Reference to the entry at `index`, if stored
    pub fn get_ref(&self, index: usize) -> Option<&T> {
        let pos = self.indices.binary_search(&index).ok()?;
        Some(&self.values[pos])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let pos = self.indices.binary_search(&index).ok()?;
        Some(&mut self.values[pos])
    }

    /// Store `value` at `index`, returning the previous entry
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        match self.indices.binary_search(&index) {
            Ok(pos) => Some(std::mem::replace(&mut self.values[pos], value)),
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
                None
            }
        }
    }

    /// Remove the entry at `index`, if stored
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let pos = self.indices.binary_search(&index).ok()?;
        self.indices.remove(pos);
        Some(self.values.remove(pos))
    }

    /// Stored entries as `(index, &value)`, ascending
    pub fn iter(&self) -> SparseIter<'_, T> {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Stored entries as `(index, &mut value)`, ascending
    pub fn iter_mut(&mut self) -> SparseIterMut<'_, T> {
        self.indices.iter().copied().zip(self.values.iter_mut())
    }

    /// Largest stored index, if any
    pub fn last_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

impl<T: Copy> SparseVector<T> {
    /// Entry at `index`, if stored
    pub fn get(&self, index: usize) -> Option<T> {
        self.get_ref(index).copied()
    }
}

/// One line of a sparse matrix, borrowed for modification
///
/// Wraps the line's [`SparseVector`] together with the matrix dimension the
/// line's indices address, so entries can never be stored outside it.
#[derive(Debug)]
pub struct SparseLineMut<'a, T> {
    vector: &'a mut SparseVector<T>,
    len: usize,
}

impl<'a, T> SparseLineMut<'a, T> {
    pub(crate) fn new(vector: &'a mut SparseVector<T>, len: usize) -> Self {
        Self { vector, len }
    }

    /// Number of positions in the line
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored entries of the line
    pub fn as_vector(&self) -> &SparseVector<T> {
        &*self.vector
    }

    pub fn nnz(&self) -> usize {
        self.vector.nnz()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.vector.get_mut(index)
    }

    /// Store `value` at `index`, returning the previous entry
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`SparseLineMut::len`].
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        assert!(
            index < self.len,
            "Index {index} out of bounds for sparse line of length {}",
            self.len
        );
        self.vector.insert(index, value)
    }

    /// Remove the entry at `index`, if stored
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.vector.remove(index)
    }

    pub fn iter(&self) -> SparseIter<'_, T> {
        self.vector.iter()
    }

    pub fn iter_mut(&mut self) -> SparseIterMut<'_, T> {
        self.vector.iter_mut()
    }
}

impl<T: Copy> SparseLineMut<'_, T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.vector.get(index)
    }
}

impl<'a, T> IntoIterator for SparseLineMut<'a, T> {
    type Item = (usize, &'a mut T);
    type IntoIter = SparseIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SparseVector::iter_mut(self.vector)
    }
}

/// Later pairs overwrite earlier pairs with the same index.
impl<T> FromIterator<(usize, T)> for SparseVector<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut vector = Self::new();
        for (index, value) in iter {
            vector.insert(index, value);
        }
        vector
    }
}

impl<'a, T> IntoIterator for &'a SparseVector<T> {
    type Item = (usize, &'a T);
    type IntoIter = SparseIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SparseVector<T> {
    type Item = (usize, &'a mut T);
    type IntoIter = SparseIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
