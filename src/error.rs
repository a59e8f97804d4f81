//! Error types for the assignment solver.
//!
//! Errors are split into two tiers: [`ValidationError`] for problems with the
//! input matrix itself (shape, non-finite entries, size limits), and
//! [`MunkresError`] for everything the solver can report. Validation failures
//! convert into [`MunkresError::InvalidInput`] via `From`, so `?` works across
//! the boundary.

use thiserror::Error;

/// Primary error type for assignment solver operations.
#[derive(Debug, Error)]
pub enum MunkresError {
    /// Input validation failed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The state machine did not reach a complete assignment within its
    /// transition budget of [`step_limit`](crate::solver::step_limit)
    /// transitions. Indicates a pathological cost matrix or a bookkeeping
    /// bug, not a hard problem instance.
    #[error("assignment did not complete within {transitions} state transitions (n = {n})")]
    StepLimitExceeded {
        /// Number of state transitions executed before giving up.
        transitions: usize,
        /// Side length of the cost matrix.
        n: usize,
    },
}

/// Validation errors for cost matrices.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A row has a different number of entries than the matrix has rows.
    #[error("ragged matrix: row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Expected number of entries (the matrix side length).
        expected: usize,
    },

    /// An entry is NaN or infinite.
    #[error("non-finite value detected: {0}")]
    NonFiniteValue(String),

    /// The matrix exceeds the maximum supported dimension.
    #[error("matrix size {n}x{n} exceeds maximum supported {max_dim}x{max_dim}")]
    MatrixTooLarge {
        /// Side length of the rejected matrix.
        n: usize,
        /// The configured limit.
        max_dim: usize,
    },
}
