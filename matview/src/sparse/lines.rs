//! Shared storage for line-oriented sparse matrices
//!
//! A sparse matrix stored by rows and one stored by columns differ only in
//! which index selects the line. `SparseLines` works in (major, minor)
//! coordinates; the public matrix types map (row, col) onto them.

use std::iter::Enumerate;
use std::slice;

use super::vector::{SparseIter, SparseIterMut, SparseVector};
use super::SparseLinesMut;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct SparseLines<T> {
    minor_dim: usize,
    lines: Vec<SparseVector<T>>,
}

impl<T> SparseLines<T> {
    pub(crate) fn new(major_dim: usize, minor_dim: usize) -> Self {
        Self {
            minor_dim,
            lines: (0..major_dim).map(|_| SparseVector::new()).collect(),
        }
    }

    pub(crate) fn major_dim(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn minor_dim(&self) -> usize {
        self.minor_dim
    }

    pub(crate) fn nnz(&self) -> usize {
        self.lines.iter().map(SparseVector::nnz).sum()
    }

    pub(crate) fn line(&self, major: usize) -> &SparseVector<T> {
        &self.lines[major]
    }

    pub(crate) fn lines(&self) -> slice::Iter<'_, SparseVector<T>> {
        self.lines.iter()
    }

    pub(crate) fn lines_mut(&mut self) -> SparseLinesMut<'_, T> {
        SparseLinesMut::new(self.lines.iter_mut(), self.minor_dim)
    }

    /// First stored `(major, minor)` position whose minor index is not below
    /// the minor dimension
    #[cfg(any(feature = "serde", test))]
    pub(crate) fn out_of_range(&self) -> Option<(usize, usize)> {
        self.lines.iter().enumerate().find_map(|(major, line)| {
            line.last_index()
                .filter(|&minor| minor >= self.minor_dim)
                .map(|minor| (major, minor))
        })
    }

    pub(crate) fn insert(&mut self, major: usize, minor: usize, value: T) -> Option<T> {
        self.lines[major].insert(minor, value)
    }

    pub(crate) fn remove(&mut self, major: usize, minor: usize) -> Option<T> {
        self.lines[major].remove(minor)
    }

    pub(crate) fn entries(&self) -> Entries<'_, T> {
        Entries {
            lines: self.lines.iter().enumerate(),
            current: None,
        }
    }

    pub(crate) fn entries_mut(&mut self) -> EntriesMut<'_, T> {
        EntriesMut {
            lines: self.lines.iter_mut().enumerate(),
            current: None,
        }
    }
}

impl<T: Copy> SparseLines<T> {
    pub(crate) fn get(&self, major: usize, minor: usize) -> Option<T> {
        self.lines[major].get(minor)
    }
}

/// Every stored entry as `(major, minor, &value)`, line by line
#[derive(Debug, Clone)]
pub(crate) struct Entries<'a, T> {
    lines: Enumerate<slice::Iter<'a, SparseVector<T>>>,
    current: Option<(usize, SparseIter<'a, T>)>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((major, line)) = &mut self.current {
                if let Some((minor, value)) = line.next() {
                    return Some((*major, minor, value));
                }
            }
            let (major, line) = self.lines.next()?;
            self.current = Some((major, line.iter()));
        }
    }
}

/// Every stored entry as `(major, minor, &mut value)`, line by line
#[derive(Debug)]
pub(crate) struct EntriesMut<'a, T> {
    lines: Enumerate<slice::IterMut<'a, SparseVector<T>>>,
    current: Option<(usize, SparseIterMut<'a, T>)>,
}

impl<'a, T> Iterator for EntriesMut<'a, T> {
    type Item = (usize, usize, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((major, line)) = &mut self.current {
                if let Some((minor, value)) = line.next() {
                    return Some((*major, minor, value));
                }
            }
            let (major, line) = self.lines.next()?;
            self.current = Some((major, line.iter_mut()));
        }
    }
}
