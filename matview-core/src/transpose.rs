//! Zero-copy transposed views
//!
//! [`TransposeMatrix`] borrows a matrix and presents it with the roles of
//! rows and columns exchanged. Every call is forwarded to the borrowed
//! matrix with its indices swapped, and every row accessor forwards to the
//! borrowed matrix's column accessor (and vice versa). No entry is copied
//! and nothing is allocated.
//!
//! Which traversals a view supports follows from what the borrowed matrix
//! supports, resolved entirely at compile time:
//!
//! | borrowed matrix        | view                   |
//! |------------------------|------------------------|
//! | rows and columns       | rows and columns       |
//! | rows only              | columns only           |
//! | columns only           | rows only              |
//! | generic (everything)   | generic (everything)   |
//!
//! Raw traversal is passed through unchanged. Raw indexed traversal is also
//! passed through unchanged, so each entry reports its position in the
//! borrowed matrix's frame; [`TransposeMatrix::entries`] reports positions
//! in the view's own frame instead.

use log::trace;

use crate::traits::{
    ColIterable, ColIterableMut, IndexedEntry, Matrix, MatrixCategory, MatrixMut, RawIterable,
    RawIterableMut, RowIterable, RowIterableMut,
};

/// Matrix transpose
///
/// Holds a borrowed reference to the transposed matrix: `&A` for a read-only
/// view, `&mut A` for a read-write view. The borrow checker guarantees the
/// matrix outlives the view; dropping the view leaves the matrix untouched.
///
/// A view is itself a matrix, so it can be transposed again. The doubly
/// transposed view has the category and the entries of the original.
///
/// Input and output of the borrowed matrix are not affected by the view.
#[derive(Debug, Clone, Copy)]
pub struct TransposeMatrix<M> {
    matrix: M,
}

impl<'m, A: Matrix + ?Sized> TransposeMatrix<&'m A> {
    /// Construct a read-only transpose of `matrix`
    pub fn from_ref(matrix: &'m A) -> Self {
        trace!(
            "binding read-only transpose of {}x{} {} matrix",
            matrix.rowdim(),
            matrix.coldim(),
            matrix.category()
        );
        Self { matrix }
    }
}

impl<'m, A: Matrix + ?Sized> TransposeMatrix<&'m mut A> {
    /// Construct a read-write transpose of `matrix`
    pub fn new(matrix: &'m mut A) -> Self {
        trace!(
            "binding read-write transpose of {}x{} {} matrix",
            matrix.rowdim(),
            matrix.coldim(),
            matrix.category()
        );
        Self { matrix }
    }
}

impl<M: Matrix> TransposeMatrix<M> {
    /// The borrowed matrix, in its own (untransposed) frame
    pub fn inner(&self) -> &M {
        &self.matrix
    }

    /// Release the view and return the borrow it held
    pub fn into_inner(self) -> M {
        self.matrix
    }
}

impl<M: RawIterable> TransposeMatrix<M> {
    /// Indexed traversal with positions in the view's frame
    ///
    /// Visits the same entries in the same order as
    /// [`RawIterable::raw_indexed`], but with each entry's row and column
    /// index exchanged.
    pub fn entries(&self) -> impl Iterator<Item = IndexedEntry<&'_ M::Element>> + '_ {
        self.matrix.raw_indexed().map(IndexedEntry::transposed)
    }
}

impl<M: Matrix> Matrix for TransposeMatrix<M> {
    type Element = M::Element;
    type Category = <M::Category as MatrixCategory>::Transposed;

    #[inline]
    fn rowdim(&self) -> usize {
        self.matrix.coldim()
    }

    #[inline]
    fn coldim(&self) -> usize {
        self.matrix.rowdim()
    }

    #[inline]
    fn entry(&self, i: usize, j: usize) -> Option<Self::Element> {
        self.matrix.entry(j, i)
    }

    #[inline]
    fn get_entry(&self, x: &mut Self::Element, i: usize, j: usize) -> bool {
        self.matrix.get_entry(x, j, i)
    }
}

impl<M: MatrixMut> MatrixMut for TransposeMatrix<M> {
    #[inline]
    fn set_entry(&mut self, i: usize, j: usize, a_ij: Self::Element) {
        self.matrix.set_entry(j, i, a_ij)
    }

    #[inline]
    fn erase_entry(&mut self, i: usize, j: usize) {
        self.matrix.erase_entry(j, i)
    }
}

// Rows of the view are the columns of the borrowed matrix.

impl<M: ColIterable> RowIterable for TransposeMatrix<M> {
    type Row<'a> = M::Col<'a> where Self: 'a;
    type Rows<'a> = M::Cols<'a> where Self: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        self.matrix.cols()
    }
}

impl<M: ColIterableMut> RowIterableMut for TransposeMatrix<M> {
    type RowMut<'a> = M::ColMut<'a> where Self: 'a;
    type RowsMut<'a> = M::ColsMut<'a> where Self: 'a;

    #[inline]
    fn rows_mut(&mut self) -> Self::RowsMut<'_> {
        self.matrix.cols_mut()
    }
}

// Columns of the view are the rows of the borrowed matrix.

impl<M: RowIterable> ColIterable for TransposeMatrix<M> {
    type Col<'a> = M::Row<'a> where Self: 'a;
    type Cols<'a> = M::Rows<'a> where Self: 'a;

    #[inline]
    fn cols(&self) -> Self::Cols<'_> {
        self.matrix.rows()
    }
}

impl<M: RowIterableMut> ColIterableMut for TransposeMatrix<M> {
    type ColMut<'a> = M::RowMut<'a> where Self: 'a;
    type ColsMut<'a> = M::RowsMut<'a> where Self: 'a;

    #[inline]
    fn cols_mut(&mut self) -> Self::ColsMut<'_> {
        self.matrix.rows_mut()
    }
}

impl<M: RawIterable> RawIterable for TransposeMatrix<M> {
    type Raw<'a> = M::Raw<'a> where Self: 'a;
    type RawIndexed<'a> = M::RawIndexed<'a> where Self: 'a;

    #[inline]
    fn raw(&self) -> Self::Raw<'_> {
        self.matrix.raw()
    }

    /// Indices are reported in the borrowed matrix's frame.
    #[inline]
    fn raw_indexed(&self) -> Self::RawIndexed<'_> {
        self.matrix.raw_indexed()
    }
}

impl<M: RawIterableMut> RawIterableMut for TransposeMatrix<M> {
    type RawMut<'a> = M::RawMut<'a> where Self: 'a;
    type RawIndexedMut<'a> = M::RawIndexedMut<'a> where Self: 'a;

    #[inline]
    fn raw_mut(&mut self) -> Self::RawMut<'_> {
        self.matrix.raw_mut()
    }

    #[inline]
    fn raw_indexed_mut(&mut self) -> Self::RawIndexedMut<'_> {
        self.matrix.raw_indexed_mut()
    }
}

/// Extension trait giving every matrix `transpose` accessors
pub trait Transpose: Matrix {
    /// Read-only transposed view of `self`
    fn transpose(&self) -> TransposeMatrix<&Self> {
        TransposeMatrix::from_ref(self)
    }

    /// Read-write transposed view of `self`
    fn transpose_mut(&mut self) -> TransposeMatrix<&mut Self>
    where
        Self: MatrixMut,
    {
        TransposeMatrix::new(self)
    }
}

impl<M: Matrix + ?Sized> Transpose for M {}
