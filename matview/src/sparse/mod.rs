//! Line-oriented sparse matrices
//!
//! [`SparseRowMatrix`] keeps one [`SparseVector`] per row and can only be
//! traversed by rows; [`SparseColMatrix`] keeps one per column and can only
//! be traversed by columns. Both share their storage and raw iterators.

use matview_core::IndexedEntry;

mod col;
mod lines;
mod row;
mod vector;

pub use col::SparseColMatrix;
pub use row::SparseRowMatrix;
pub use vector::{SparseIter, SparseIterMut, SparseLineMut, SparseVector};

use lines::{Entries, EntriesMut};

/// Iterator over the lines of a sparse matrix, yielding bounded mutable lines
#[derive(Debug)]
pub struct SparseLinesMut<'a, T> {
    lines: std::slice::IterMut<'a, SparseVector<T>>,
    len: usize,
}

impl<'a, T> SparseLinesMut<'a, T> {
    pub(crate) fn new(lines: std::slice::IterMut<'a, SparseVector<T>>, len: usize) -> Self {
        Self { lines, len }
    }
}

impl<'a, T> Iterator for SparseLinesMut<'a, T> {
    type Item = SparseLineMut<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let vector = self.lines.next()?;
        Some(SparseLineMut::new(vector, self.len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl<T> ExactSizeIterator for SparseLinesMut<'_, T> {}

/// Raw traversal of a sparse matrix
#[derive(Debug, Clone)]
pub struct SparseRaw<'a, T> {
    entries: Entries<'a, T>,
}

impl<'a, T> SparseRaw<'a, T> {
    pub(crate) fn new(entries: Entries<'a, T>) -> Self {
        Self { entries }
    }
}

impl<'a, T> Iterator for SparseRaw<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, _, value)| value)
    }
}

/// Raw traversal of a sparse matrix, yielding mutable references
#[derive(Debug)]
pub struct SparseRawMut<'a, T> {
    entries: EntriesMut<'a, T>,
}

impl<'a, T> SparseRawMut<'a, T> {
    pub(crate) fn new(entries: EntriesMut<'a, T>) -> Self {
        Self { entries }
    }
}

impl<'a, T> Iterator for SparseRawMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, _, value)| value)
    }
}

/// Raw traversal of a sparse matrix reporting each entry's position
#[derive(Debug, Clone)]
pub struct SparseIndexed<'a, T> {
    entries: Entries<'a, T>,
    position: fn(usize, usize, &'a T) -> IndexedEntry<&'a T>,
}

impl<'a, T> SparseIndexed<'a, T> {
    pub(crate) fn new(
        entries: Entries<'a, T>,
        position: fn(usize, usize, &'a T) -> IndexedEntry<&'a T>,
    ) -> Self {
        Self { entries, position }
    }
}

impl<'a, T> Iterator for SparseIndexed<'a, T> {
    type Item = IndexedEntry<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (major, minor, value) = self.entries.next()?;
        Some((self.position)(major, minor, value))
    }
}

/// Raw indexed traversal of a sparse matrix, yielding mutable references
#[derive(Debug)]
pub struct SparseIndexedMut<'a, T> {
    entries: EntriesMut<'a, T>,
    position: fn(usize, usize, &'a mut T) -> IndexedEntry<&'a mut T>,
}

impl<'a, T> SparseIndexedMut<'a, T> {
    pub(crate) fn new(
        entries: EntriesMut<'a, T>,
        position: fn(usize, usize, &'a mut T) -> IndexedEntry<&'a mut T>,
    ) -> Self {
        Self { entries, position }
    }
}

impl<'a, T> Iterator for SparseIndexedMut<'a, T> {
    type Item = IndexedEntry<&'a mut T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (major, minor, value) = self.entries.next()?;
        Some((self.position)(major, minor, value))
    }
}
