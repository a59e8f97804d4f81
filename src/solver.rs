//! Kuhn-Munkres (Hungarian) solver for the square assignment problem.
//!
//! Given an `n x n` cost matrix, [`solve`] finds a bijection between rows and
//! columns minimizing the total cost of the selected cells. The implementation
//! is the classical six-step machine:
//!
//! ```text
//!   reduce rows -> star zeros -> cover columns --(n covered)--> done
//!                                   ^       |
//!                                   |       v
//!                           augment path <- prime zeros <-> adjust costs
//! ```
//!
//! - **reduce rows** subtracts each row's minimum, creating a zero per row.
//! - **star zeros** greedily stars independent zeros (one per row and column)
//!   to seed the matching.
//! - **cover columns** covers every starred column; `n` covered columns mean
//!   the stars form a complete assignment.
//! - **prime zeros** primes uncovered zeros, shifting covers row-ward until it
//!   finds a primed zero with no star in its row (the start of an augmenting
//!   path) or runs out of uncovered zeros.
//! - **augment path** flips stars and primes along the alternating path,
//!   growing the matching by one.
//! - **adjust costs** applies the smallest uncovered value as a dual update,
//!   exposing at least one new uncovered zero.
//!
//! Every scan runs in row-major order and takes the first match, so the
//! returned assignment is deterministic: among equal-cost optima, the one
//! whose star pattern is reached first by these scans wins. Runtime is
//! `O(n^3)` with `O(n^2)` memory for the working copies.

use tracing::{debug, info, instrument, trace, warn};

use crate::error::MunkresError;
use crate::matrix::Grid;
use crate::validation::validate_cost_matrix;

// ---------------------------------------------------------------------------
// Step budget
// ---------------------------------------------------------------------------

/// Transition budget for an `n x n` solve.
///
/// A run needs at most `2n^2 + 2n + 3` transitions: the three opening steps,
/// then at most `n` augmentation rounds of at most `2n + 2` transitions each
/// (each cost adjustment either covers one more row or ends the round). The
/// budget doubles the quadratic term and adds headroom for tiny `n`.
pub fn step_limit(n: usize) -> usize {
    4 * n * n + 16
}

// ---------------------------------------------------------------------------
// Machine state
// ---------------------------------------------------------------------------

/// States of the solver machine, named for the action taken on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    ReduceRows,
    StarZeros,
    CoverColumns,
    PrimeZeros,
    AugmentPath,
    AdjustCosts,
    Done,
}

/// Cell annotation used by the matching bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    /// Part of the current independent zero set (the partial matching).
    Star,
    /// Candidate zero recorded while searching for an augmenting path.
    Prime,
}

/// Mutable state shared by every step of the machine.
///
/// `cost` is a working copy; the caller's matrix is never modified. `path`
/// is preallocated at `2n` entries, enough for the longest alternating path
/// (`2n - 1` cells).
struct SolveState {
    n: usize,
    cost: Grid<f64>,
    marks: Grid<Mark>,
    row_covered: Vec<bool>,
    col_covered: Vec<bool>,
    path: Vec<(usize, usize)>,
    /// Uncovered primed zero recorded by `prime_zeros`; seeds `augment_path`.
    path_start: (usize, usize),
}

impl SolveState {
    fn new(cost_matrix: &[Vec<f64>]) -> Self {
        let n = cost_matrix.len();
        Self {
            n,
            cost: Grid::from_rows(cost_matrix),
            marks: Grid::filled(n, Mark::None),
            row_covered: vec![false; n],
            col_covered: vec![false; n],
            path: vec![(0, 0); 2 * n],
            path_start: (0, 0),
        }
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    /// Subtract each row's minimum from every entry in that row.
    ///
    /// Afterwards every row contains at least one exact zero: the minimum
    /// cell computes `m - m`, which is `0.0` in IEEE arithmetic.
    fn reduce_rows(&mut self) -> Step {
        for row in 0..self.n {
            let min = self
                .cost
                .row(row)
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min);
            for value in self.cost.row_mut(row) {
                *value -= min;
            }
        }
        Step::StarZeros
    }

    /// Star uncovered zeros greedily, at most one per row and per column.
    fn star_zeros(&mut self) -> Step {
        for row in 0..self.n {
            for col in 0..self.n {
                if self.cost.get(row, col) == 0.0
                    && !self.row_covered[row]
                    && !self.col_covered[col]
                {
                    self.marks.set(row, col, Mark::Star);
                    self.row_covered[row] = true;
                    self.col_covered[col] = true;
                    break;
                }
            }
        }
        self.clear_covers();
        Step::CoverColumns
    }

    /// Cover every column containing a star.
    ///
    /// `n` covered columns mean the stars form a complete assignment.
    fn cover_columns(&mut self) -> Step {
        let mut covered = 0;
        for row in 0..self.n {
            for col in 0..self.n {
                if self.marks.get(row, col) == Mark::Star && !self.col_covered[col] {
                    self.col_covered[col] = true;
                    covered += 1;
                }
            }
        }
        if covered >= self.n {
            Step::Done
        } else {
            Step::PrimeZeros
        }
    }

    /// Prime uncovered zeros until one of them has no star in its row (an
    /// augmenting path can start there) or no uncovered zero remains.
    ///
    /// When a primed zero shares its row with a star, the row is covered and
    /// the star's column uncovered, which may expose further zeros.
    fn prime_zeros(&mut self) -> Step {
        loop {
            let (row, col) = match self.find_uncovered_zero() {
                Some(cell) => cell,
                None => return Step::AdjustCosts,
            };
            self.marks.set(row, col, Mark::Prime);
            match self.star_in_row(row) {
                Some(star_col) => {
                    self.row_covered[row] = true;
                    self.col_covered[star_col] = false;
                }
                None => {
                    self.path_start = (row, col);
                    return Step::AugmentPath;
                }
            }
        }
    }

    /// Flip the alternating path of stars and primes seeded at `path_start`,
    /// growing the matching by one star.
    ///
    /// The path alternates primed and starred zeros: starting from the
    /// recorded primed zero, it walks to the star in that column (if any),
    /// then to the prime in that star's row, and so on until it reaches a
    /// primed zero whose column holds no star.
    fn augment_path(&mut self) -> Step {
        let mut count = 0;
        self.path[0] = self.path_start;
        loop {
            match self.star_in_col(self.path[count].1) {
                Some(star_row) => {
                    let col = self.path[count].1;
                    count += 1;
                    self.path[count] = (star_row, col);
                }
                None => break,
            }
            // A starred row on the path was covered by prime_zeros and
            // therefore holds exactly one prime.
            match self.prime_in_row(self.path[count].0) {
                Some(prime_col) => {
                    let row = self.path[count].0;
                    count += 1;
                    self.path[count] = (row, prime_col);
                }
                None => {
                    debug_assert!(false, "path row {} has no prime", self.path[count].0);
                    break;
                }
            }
        }
        self.flip_path(count);
        self.clear_covers();
        self.erase_primes();
        debug!(path_len = count + 1, "augmented matching");
        Step::CoverColumns
    }

    /// Apply the smallest uncovered value as a dual update: add it to every
    /// covered row and subtract it from every uncovered column.
    ///
    /// The net effect leaves doubly covered entries raised, uncovered entries
    /// lowered, and singly covered entries unchanged. The minimum uncovered
    /// cell computes `m - m == 0.0` exactly, so the next zero search always
    /// finds fresh work.
    fn adjust_costs(&mut self) -> Step {
        let minval = self.smallest_uncovered();
        debug_assert!(
            minval.is_finite() && minval > 0.0,
            "dual adjustment must be positive and finite, got {minval}"
        );
        for row in 0..self.n {
            for col in 0..self.n {
                let mut value = self.cost.get(row, col);
                if self.row_covered[row] {
                    value += minval;
                }
                if !self.col_covered[col] {
                    value -= minval;
                }
                self.cost.set(row, col, value);
            }
        }
        Step::PrimeZeros
    }

    // ------------------------------------------------------------------
    // Scans and bookkeeping
    // ------------------------------------------------------------------

    /// First uncovered zero in row-major order.
    ///
    /// Exact comparison is deliberate: reductions and dual updates produce
    /// exact zeros (`x - x == 0.0`), so no tolerance is needed.
    fn find_uncovered_zero(&self) -> Option<(usize, usize)> {
        for row in 0..self.n {
            if self.row_covered[row] {
                continue;
            }
            for col in 0..self.n {
                if !self.col_covered[col] && self.cost.get(row, col) == 0.0 {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Smallest entry outside the covered rows and columns.
    fn smallest_uncovered(&self) -> f64 {
        let mut minval = f64::INFINITY;
        for row in 0..self.n {
            if self.row_covered[row] {
                continue;
            }
            for col in 0..self.n {
                if self.col_covered[col] {
                    continue;
                }
                let value = self.cost.get(row, col);
                if value < minval {
                    minval = value;
                }
            }
        }
        minval
    }

    #[inline]
    fn star_in_row(&self, row: usize) -> Option<usize> {
        (0..self.n).find(|&col| self.marks.get(row, col) == Mark::Star)
    }

    #[inline]
    fn star_in_col(&self, col: usize) -> Option<usize> {
        (0..self.n).find(|&row| self.marks.get(row, col) == Mark::Star)
    }

    #[inline]
    fn prime_in_row(&self, row: usize) -> Option<usize> {
        (0..self.n).find(|&col| self.marks.get(row, col) == Mark::Prime)
    }

    /// Along `path[0..=count]`, unstar stars and promote primes to stars.
    fn flip_path(&mut self, count: usize) {
        for i in 0..=count {
            let (row, col) = self.path[i];
            let next = if self.marks.get(row, col) == Mark::Star {
                Mark::None
            } else {
                Mark::Star
            };
            self.marks.set(row, col, next);
        }
    }

    fn clear_covers(&mut self) {
        self.row_covered.fill(false);
        self.col_covered.fill(false);
    }

    fn erase_primes(&mut self) {
        for row in 0..self.n {
            for col in 0..self.n {
                if self.marks.get(row, col) == Mark::Prime {
                    self.marks.set(row, col, Mark::None);
                }
            }
        }
    }

    /// Read the assignment out of the stars, one column index per row.
    fn assignment(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.n);
        for row in 0..self.n {
            let col = self.star_in_row(row);
            debug_assert!(col.is_some(), "row {row} has no star after completion");
            out.push(col.unwrap_or(0));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Solve the minimum-cost assignment problem for a square cost matrix.
///
/// Returns `assignment` where `assignment[row]` is the column assigned to
/// `row`; the assignment is a permutation of `0..n` minimizing
/// [`total_cost`]. The input is deep-copied and never modified.
///
/// Ties between equal-cost optima break deterministically: all internal
/// scans run in row-major order and take the first match.
///
/// # Arguments
///
/// * `cost_matrix` - square matrix of finite costs, `cost_matrix[row][col]`
///   being the cost of assigning `row` to `col`. Rectangular data should be
///   squared up with [`pad_to_square`](crate::pad_to_square) first; profit
///   maximization goes through [`profit_to_cost`](crate::profit_to_cost).
///
/// # Errors
///
/// * [`MunkresError::InvalidInput`] if the matrix is ragged, contains
///   non-finite values, or exceeds
///   [`MAX_DIM`](crate::validation::MAX_DIM).
/// * [`MunkresError::StepLimitExceeded`] if the machine fails to finish
///   within [`step_limit`] transitions.
///
/// # Example
///
/// ```
/// let matrix = vec![
///     vec![400.0, 150.0, 400.0],
///     vec![400.0, 450.0, 600.0],
///     vec![300.0, 225.0, 300.0],
/// ];
/// let assignment = munkres::solve(&matrix)?;
/// assert_eq!(assignment, vec![1, 0, 2]);
/// assert_eq!(munkres::total_cost(&matrix, &assignment), 850.0);
/// # Ok::<(), munkres::MunkresError>(())
/// ```
#[instrument(skip(cost_matrix), fields(n = cost_matrix.len()))]
pub fn solve(cost_matrix: &[Vec<f64>]) -> Result<Vec<usize>, MunkresError> {
    validate_cost_matrix(cost_matrix)?;

    let n = cost_matrix.len();
    if n == 0 {
        debug!("empty cost matrix, returning empty assignment");
        return Ok(Vec::new());
    }

    let mut state = SolveState::new(cost_matrix);
    let limit = step_limit(n);
    let mut transitions: usize = 0;
    let mut augmentations: usize = 0;
    let mut adjustments: usize = 0;

    let mut step = Step::ReduceRows;
    while step != Step::Done {
        if transitions >= limit {
            warn!(transitions, n, "transition budget exhausted");
            return Err(MunkresError::StepLimitExceeded { transitions, n });
        }
        step = match step {
            Step::ReduceRows => state.reduce_rows(),
            Step::StarZeros => state.star_zeros(),
            Step::CoverColumns => state.cover_columns(),
            Step::PrimeZeros => state.prime_zeros(),
            Step::AugmentPath => {
                augmentations += 1;
                state.augment_path()
            }
            Step::AdjustCosts => {
                adjustments += 1;
                state.adjust_costs()
            }
            Step::Done => break,
        };
        transitions += 1;
        trace!(?step, transitions, "state transition");
    }

    let assignment = state.assignment();
    info!(transitions, augmentations, adjustments, "assignment complete");
    Ok(assignment)
}

/// Sum the matrix entries selected by an assignment.
///
/// `assignment[row]` picks the column for `row`, the encoding returned by
/// [`solve`]. Pairing an assignment with a matrix other than the one it was
/// computed from is a caller bug; out-of-range column indices panic.
///
/// # Example
///
/// ```
/// let matrix = vec![vec![5.0, 9.0, 1.0], vec![10.0, 3.0, 2.0], vec![8.0, 7.0, 4.0]];
/// let assignment = munkres::solve(&matrix)?;
/// assert_eq!(munkres::total_cost(&matrix, &assignment), 12.0);
/// # Ok::<(), munkres::MunkresError>(())
/// ```
pub fn total_cost(matrix: &[Vec<f64>], assignment: &[usize]) -> f64 {
    debug_assert_eq!(
        assignment.len(),
        matrix.len(),
        "assignment length {} does not match matrix rows {}",
        assignment.len(),
        matrix.len()
    );
    assignment
        .iter()
        .enumerate()
        .map(|(row, &col)| matrix[row][col])
        .sum()
}
