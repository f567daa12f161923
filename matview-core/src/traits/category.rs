//! Compile-time capability categories
//!
//! Every matrix declares which traversal directions it supports through an
//! associated tag type. Views read the tag of the matrix they wrap and
//! expose the complementary one, so transposing twice yields the original
//! category again.

mod sealed {
    pub trait Sealed {}
}

/// Runtime mirror of the closed set of capability categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategoryKind {
    /// Both row and column traversal
    RowCol,
    /// Row traversal only
    Row,
    /// Column traversal only
    Col,
    /// No specific guarantee; the full interface is assumed
    Generic,
}

impl CategoryKind {
    /// Category seen through a transposed view
    pub const fn transposed(self) -> Self {
        match self {
            CategoryKind::Row => CategoryKind::Col,
            CategoryKind::Col => CategoryKind::Row,
            other => other,
        }
    }

    /// Whether matrices of this category can be traversed row by row
    pub const fn has_rows(self) -> bool {
        !matches!(self, CategoryKind::Col)
    }

    /// Whether matrices of this category can be traversed column by column
    pub const fn has_cols(self) -> bool {
        !matches!(self, CategoryKind::Row)
    }
}

impl core::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryKind::RowCol => write!(f, "row+col"),
            CategoryKind::Row => write!(f, "row"),
            CategoryKind::Col => write!(f, "col"),
            CategoryKind::Generic => write!(f, "generic"),
        }
    }
}

/// Type-level capability category
///
/// Sealed: the set of categories is closed.
pub trait MatrixCategory: sealed::Sealed + Copy + Default + 'static {
    /// Category exposed by a transposed view of a matrix in this category
    type Transposed: MatrixCategory;

    /// Runtime value of this category
    const KIND: CategoryKind;
}

/// Matrices with no declared traversal guarantee
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericMatrixTag;

/// Matrices with both row and column traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowColMatrixTag;

/// Matrices with row traversal only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMatrixTag;

/// Matrices with column traversal only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColMatrixTag;

impl sealed::Sealed for GenericMatrixTag {}
impl sealed::Sealed for RowColMatrixTag {}
impl sealed::Sealed for RowMatrixTag {}
impl sealed::Sealed for ColMatrixTag {}

impl MatrixCategory for GenericMatrixTag {
    type Transposed = GenericMatrixTag;
    const KIND: CategoryKind = CategoryKind::Generic;
}

impl MatrixCategory for RowColMatrixTag {
    type Transposed = RowColMatrixTag;
    const KIND: CategoryKind = CategoryKind::RowCol;
}

impl MatrixCategory for RowMatrixTag {
    type Transposed = ColMatrixTag;
    const KIND: CategoryKind = CategoryKind::Row;
}

impl MatrixCategory for ColMatrixTag {
    type Transposed = RowMatrixTag;
    const KIND: CategoryKind = CategoryKind::Col;
}
