//! Dense matrix storage and input shaping helpers.
//!
//! The solver works on square matrices. [`Grid`] is the internal working
//! representation (flat, row-major); [`pad_to_square`] and [`profit_to_cost`]
//! are convenience helpers for callers whose raw data is rectangular or
//! expressed as profits rather than costs.

/// Dense square grid stored in row-major order.
///
/// # Layout
///
/// Cell `(row, col)` lives at `cells[row * side + col]`. A `side` of zero is
/// valid and represents the empty grid.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Grid<T> {
    side: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a `side x side` grid with every cell set to `value`.
    pub(crate) fn filled(side: usize, value: T) -> Self {
        Self {
            side,
            cells: vec![value; side * side],
        }
    }

    /// Deep-copy a square matrix given as nested rows.
    ///
    /// Callers must have validated squareness already; this only
    /// `debug_assert!`s it.
    pub(crate) fn from_rows(rows: &[Vec<T>]) -> Self {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for row in rows {
            debug_assert_eq!(
                row.len(),
                side,
                "Grid::from_rows requires a square input ({} != {})",
                row.len(),
                side
            );
            cells.extend_from_slice(row);
        }
        Self { side, cells }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(
            row < self.side && col < self.side,
            "grid index ({}, {}) out of bounds for side {}",
            row,
            col,
            self.side
        );
        self.cells[row * self.side + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(
            row < self.side && col < self.side,
            "grid index ({}, {}) out of bounds for side {}",
            row,
            col,
            self.side
        );
        self.cells[row * self.side + col] = value;
    }

    /// Borrow one row as a slice.
    #[inline]
    pub(crate) fn row(&self, row: usize) -> &[T] {
        let start = row * self.side;
        &self.cells[start..start + self.side]
    }

    /// Borrow one row mutably.
    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.side;
        &mut self.cells[start..start + self.side]
    }
}

/// Pad a rectangular matrix into a square one with `fill` in the new cells.
///
/// The output side length is `max(rows, widest row)`. Rows shorter than that
/// are extended with `fill`, and whole rows of `fill` are appended as needed.
/// Choose `fill` larger than any real cost so padded cells absorb the
/// surplus rows or columns; the corresponding entries of the returned
/// assignment then point at dummy rows/columns and can be discarded.
///
/// # Example
///
/// ```rust
/// let wide = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
/// let square = munkres::pad_to_square(&wide, 100.0);
/// assert_eq!(square.len(), 3);
/// assert_eq!(square[2], vec![100.0, 100.0, 100.0]);
/// ```
pub fn pad_to_square(matrix: &[Vec<f64>], fill: f64) -> Vec<Vec<f64>> {
    let rows = matrix.len();
    let cols = matrix.iter().map(Vec::len).max().unwrap_or(0);
    let side = rows.max(cols);

    let mut out = Vec::with_capacity(side);
    for row in matrix {
        let mut padded = row.clone();
        padded.resize(side, fill);
        out.push(padded);
    }
    for _ in rows..side {
        out.push(vec![fill; side]);
    }
    out
}

/// Convert a profit matrix into a cost matrix by negating every entry.
///
/// Maximum-profit assignment on the original matrix equals minimum-cost
/// assignment on the returned one.
///
/// # Example
///
/// ```rust
/// let profit = vec![vec![5.0, 3.0], vec![2.0, 4.0]];
/// let cost = munkres::profit_to_cost(&profit);
/// let assignment = munkres::solve(&cost).unwrap();
/// assert_eq!(assignment, vec![0, 1]);
/// ```
pub fn profit_to_cost(profit: &[Vec<f64>]) -> Vec<Vec<f64>> {
    profit
        .iter()
        .map(|row| row.iter().map(|&v| -v).collect())
        .collect()
}
