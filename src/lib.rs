//! Kuhn-Munkres (Hungarian) solver for the square assignment problem.
//!
//! Given an `n x n` cost matrix, [`solve`] finds the permutation of rows to
//! columns with minimal total cost in `O(n^3)` time. The crate also ships the
//! two shaping helpers most callers need on the way in: [`pad_to_square`] for
//! rectangular data and [`profit_to_cost`] for maximization problems.
//!
//! # API at a glance
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`solve`] | Minimum-cost assignment for a square matrix |
//! | [`total_cost`] | Cost of an assignment under a matrix |
//! | [`pad_to_square`] | Square up rectangular input with a fill value |
//! | [`profit_to_cost`] | Negate a profit matrix for maximization |
//! | [`validate_cost_matrix`] | Eager input validation, also run by `solve` |
//!
//! # Example
//!
//! ```rust
//! use munkres::{solve, total_cost};
//!
//! // cost[row][col]: cost of assigning worker `row` to task `col`.
//! let cost = vec![
//!     vec![400.0, 150.0, 400.0],
//!     vec![400.0, 450.0, 600.0],
//!     vec![300.0, 225.0, 300.0],
//! ];
//!
//! let assignment = solve(&cost).unwrap();
//! assert_eq!(assignment, vec![1, 0, 2]);
//! assert_eq!(total_cost(&cost, &assignment), 850.0);
//! ```
//!
//! Results are deterministic: ties between equal-cost optima are broken by
//! row-major scan order, so the same input always yields the same assignment.

pub mod error;
pub mod matrix;
pub mod solver;
pub mod validation;

pub use error::{MunkresError, ValidationError};
pub use matrix::{pad_to_square, profit_to_cost};
pub use solver::{solve, step_limit, total_cost};
pub use validation::{validate_cost_matrix, MAX_DIM};
