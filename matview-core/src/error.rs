//! Error types for matrix construction

/// Errors raised while validating matrix input
///
/// Views never produce these; they are returned by constructors of concrete
/// matrices when the supplied data does not describe a valid matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Backing data length does not match `rows * cols`
    DimensionMismatch { expected: usize, actual: usize },
    /// An entry index lies outside the declared dimensions
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// `rows * cols` does not fit in `usize`
    SizeOverflow { nrows: usize, ncols: usize },
    /// Sparse indices are not strictly ascending
    UnsortedIndices { index: usize },
}

impl MatrixError {
    /// Short, stable name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            MatrixError::DimensionMismatch { .. } => "dimension mismatch",
            MatrixError::IndexOutOfBounds { .. } => "index out of bounds",
            MatrixError::SizeOverflow { .. } => "size overflow",
            MatrixError::UnsortedIndices { .. } => "unsorted indices",
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected} elements, got {actual}")
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
            ),
            MatrixError::SizeOverflow { nrows, ncols } => {
                write!(f, "Matrix size {nrows}x{ncols} overflows usize")
            }
            MatrixError::UnsortedIndices { index } => {
                write!(f, "Sparse index {index} is out of order or repeated")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for matrix construction
pub type Result<T> = core::result::Result<T, MatrixError>;
