//! Index and size validation
//!
//! Pure checks shared by matrix implementations. Views never call these;
//! whatever a borrowed matrix does with an invalid index is what the caller
//! of a view observes.

use crate::MatrixError;

/// Check that (i, j) addresses a position of an `nrows` x `ncols` matrix
pub const fn validate_index(
    i: usize,
    j: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), MatrixError> {
    if i >= nrows || j >= ncols {
        return Err(MatrixError::IndexOutOfBounds {
            row: i,
            col: j,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Number of positions in an `nrows` x `ncols` matrix, with overflow protection
pub const fn checked_len(nrows: usize, ncols: usize) -> Result<usize, MatrixError> {
    match nrows.checked_mul(ncols) {
        Some(len) => Ok(len),
        None => Err(MatrixError::SizeOverflow { nrows, ncols }),
    }
}

/// Check that `len` stored elements describe a dense `nrows` x `ncols` matrix
pub const fn validate_dense_len(
    nrows: usize,
    ncols: usize,
    len: usize,
) -> Result<(), MatrixError> {
    let expected = match checked_len(nrows, ncols) {
        Ok(expected) => expected,
        Err(err) => return Err(err),
    };
    if expected != len {
        return Err(MatrixError::DimensionMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Check that sparse `indices` are strictly ascending
pub const fn validate_sorted_indices(indices: &[usize]) -> Result<(), MatrixError> {
    let mut k = 1;
    while k < indices.len() {
        if indices[k] <= indices[k - 1] {
            return Err(MatrixError::UnsortedIndices { index: indices[k] });
        }
        k += 1;
    }
    Ok(())
}
