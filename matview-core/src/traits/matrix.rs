//! Core matrix abstraction traits
//!
//! [`Matrix`] is the read-only part of the archetype every implementation
//! provides; [`MatrixMut`] adds entry modification. Shared references
//! implement the read-only traits and exclusive references implement both,
//! so an immutable matrix can only ever yield immutable views.

use super::category::{CategoryKind, MatrixCategory};
use super::element::MatrixElement;

/// Read access to a matrix of fixed dimensions
pub trait Matrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Traversal capabilities this matrix guarantees
    type Category: MatrixCategory;

    /// Number of rows
    fn rowdim(&self) -> usize;

    /// Number of columns
    fn coldim(&self) -> usize;

    /// Get the entry stored at (i, j)
    ///
    /// Returns `None` if the matrix holds no explicit entry at that position.
    /// Dense matrices always return `Some`. Index validation is left to the
    /// implementation.
    fn entry(&self, i: usize, j: usize) -> Option<Self::Element>;

    /// Copy the (i, j) entry into `x`
    ///
    /// If the entry does not exist, `x` is left unchanged and `false` is
    /// returned.
    fn get_entry(&self, x: &mut Self::Element, i: usize, j: usize) -> bool {
        match self.entry(i, j) {
            Some(value) => {
                *x = value;
                true
            }
            None => false,
        }
    }

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize) {
        (self.rowdim(), self.coldim())
    }

    /// Runtime value of this matrix's capability category
    fn category(&self) -> CategoryKind {
        <Self::Category as MatrixCategory>::KIND
    }
}

/// Write access to matrix entries
pub trait MatrixMut: Matrix {
    /// Set the entry at (i, j) to `a_ij`
    ///
    /// Sparse matrices insert the entry if it is not yet stored.
    fn set_entry(&mut self, i: usize, j: usize, a_ij: Self::Element);

    /// Erase the entry at (i, j)
    ///
    /// Takes no action if the entry is not stored. Dense matrices store every
    /// position and take no action at all.
    fn erase_entry(&mut self, i: usize, j: usize);
}

impl<'m, M: Matrix + ?Sized> Matrix for &'m M {
    type Element = M::Element;
    type Category = M::Category;

    fn rowdim(&self) -> usize {
        (**self).rowdim()
    }

    fn coldim(&self) -> usize {
        (**self).coldim()
    }

    fn entry(&self, i: usize, j: usize) -> Option<Self::Element> {
        (**self).entry(i, j)
    }

    fn get_entry(&self, x: &mut Self::Element, i: usize, j: usize) -> bool {
        (**self).get_entry(x, i, j)
    }
}

impl<'m, M: Matrix + ?Sized> Matrix for &'m mut M {
    type Element = M::Element;
    type Category = M::Category;

    fn rowdim(&self) -> usize {
        (**self).rowdim()
    }

    fn coldim(&self) -> usize {
        (**self).coldim()
    }

    fn entry(&self, i: usize, j: usize) -> Option<Self::Element> {
        (**self).entry(i, j)
    }

    fn get_entry(&self, x: &mut Self::Element, i: usize, j: usize) -> bool {
        (**self).get_entry(x, i, j)
    }
}

impl<'m, M: MatrixMut + ?Sized> MatrixMut for &'m mut M {
    fn set_entry(&mut self, i: usize, j: usize, a_ij: Self::Element) {
        (**self).set_entry(i, j, a_ij)
    }

    fn erase_entry(&mut self, i: usize, j: usize) {
        (**self).erase_entry(i, j)
    }
}
