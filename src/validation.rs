//! Input validation for assignment cost matrices.
//!
//! All validation runs eagerly before the solver touches the data, so callers
//! receive clear diagnostics instead of mid-run panics or garbage assignments.
//! Every check returns [`ValidationError`] on failure, which converts into
//! [`MunkresError::InvalidInput`](crate::MunkresError::InvalidInput) via
//! `From`.
//!
//! # Limits
//!
//! A hard dimension limit is enforced to prevent resource exhaustion through
//! oversized inputs:
//!
//! | Resource  | Limit  | Constant    |
//! |-----------|--------|-------------|
//! | Dimension | 10,000 | [`MAX_DIM`] |

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Resource limits
// ---------------------------------------------------------------------------

/// Maximum cost matrix side length.
///
/// Solving is `O(n^3)` time and keeps two dense `n x n` working copies, so a
/// `10_000 x 10_000` matrix is already roughly 900 MB of state.
pub const MAX_DIM: usize = 10_000;

// ---------------------------------------------------------------------------
// Cost matrix validation
// ---------------------------------------------------------------------------

/// Validate a cost matrix for [`solve`](crate::solve).
///
/// Performs the following checks in order:
///
/// 1. The side length is within [`MAX_DIM`].
/// 2. Every row has exactly as many entries as there are rows (the matrix
///    must be square; rectangular input should go through
///    [`pad_to_square`](crate::pad_to_square) first).
/// 3. No `NaN` or `Inf` entries.
/// 4. If every entry holds the same value, emits a [`tracing::warn`] (a
///    constant matrix is technically valid but often indicates a bug).
///
/// The empty matrix passes validation; [`solve`](crate::solve) maps it to an
/// empty assignment.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first violation found.
///
/// # Examples
///
/// ```
/// use munkres::validate_cost_matrix;
///
/// let matrix = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// assert!(validate_cost_matrix(&matrix).is_ok());
///
/// let ragged = vec![vec![1.0, 2.0], vec![3.0]];
/// assert!(validate_cost_matrix(&ragged).is_err());
/// ```
pub fn validate_cost_matrix(matrix: &[Vec<f64>]) -> Result<(), ValidationError> {
    let n = matrix.len();

    // 1. Dimension bound
    if n > MAX_DIM {
        return Err(ValidationError::MatrixTooLarge { n, max_dim: MAX_DIM });
    }

    // 2. Squareness
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != n {
            return Err(ValidationError::RaggedMatrix {
                row,
                len: entries.len(),
                expected: n,
            });
        }
    }

    // 3. Finiteness + 4. Constant-matrix check (warn, not error)
    let first = matrix.first().and_then(|row| row.first()).copied();
    let mut all_equal = true;
    for (row, entries) in matrix.iter().enumerate() {
        for (col, &value) in entries.iter().enumerate() {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteValue(format!(
                    "matrix[{}, {}] = {}",
                    row, col, value,
                )));
            }
            if Some(value) != first {
                all_equal = false;
            }
        }
    }

    if all_equal && n > 1 {
        tracing::warn!(
            n = n,
            "cost matrix is constant; every assignment has the same total cost"
        );
    }

    Ok(())
}
