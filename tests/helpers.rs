//! Shared test helpers for the munkres integration test suite.
//!
//! Provides deterministic random cost matrix generators, a brute-force
//! reference solver, and assignment checking utilities used across all test
//! modules.

// ---------------------------------------------------------------------------
// Random number generator (simple LCG for deterministic reproducibility)
// ---------------------------------------------------------------------------

/// A minimal linear congruential generator for deterministic test data.
///
/// Uses the Numerical Recipes LCG parameters. Not cryptographically secure,
/// but perfectly adequate for generating reproducible test matrices.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a new LCG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next u64 value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Generate a uniform f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform f64 in [lo, hi).
    pub fn next_f64_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Generate a uniform integer in [0, bound).
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

// ---------------------------------------------------------------------------
// Cost matrix generators
// ---------------------------------------------------------------------------

/// Generate a random square cost matrix with entries in [lo, hi).
pub fn random_cost_matrix(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| (0..n).map(|_| rng.next_f64_range(lo, hi)).collect())
        .collect()
}

/// Generate a random square cost matrix with small integer-valued entries.
///
/// Integer-valued `f64` entries keep every reduction and dual update exact,
/// so solver results can be compared against the brute-force reference with
/// strict equality instead of an epsilon.
pub fn random_integer_matrix(n: usize, max: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| (0..n).map(|_| rng.next_usize(max + 1) as f64).collect())
        .collect()
}

// ---------------------------------------------------------------------------
// Brute-force reference solver
// ---------------------------------------------------------------------------

/// Find the minimum assignment cost by enumerating all `n!` permutations.
///
/// This is an O(n!) reference used only for small test problems to verify
/// solver optimality. Works with negative entries; no pruning is applied so
/// the exploration order cannot affect the result.
///
/// # Panics
///
/// Panics if `n > 9` to keep the enumeration tractable.
pub fn brute_force_min_cost(matrix: &[Vec<f64>]) -> f64 {
    let n = matrix.len();
    assert!(n <= 9, "brute force enumeration requires n <= 9, got {n}");
    if n == 0 {
        return 0.0;
    }

    fn descend(matrix: &[Vec<f64>], row: usize, used: &mut [bool]) -> f64 {
        let n = matrix.len();
        if row == n {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for col in 0..n {
            if !used[col] {
                used[col] = true;
                let cost = matrix[row][col] + descend(matrix, row + 1, used);
                if cost < best {
                    best = cost;
                }
                used[col] = false;
            }
        }
        best
    }

    let mut used = vec![false; n];
    descend(matrix, 0, &mut used)
}

// ---------------------------------------------------------------------------
// Assignment checking utilities
// ---------------------------------------------------------------------------

/// Check that `assignment` is a permutation of `0..n`.
pub fn is_permutation(assignment: &[usize], n: usize) -> bool {
    if assignment.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &col in assignment {
        if col >= n || seen[col] {
            return false;
        }
        seen[col] = true;
    }
    true
}

/// Sum the matrix entries selected by an assignment.
///
/// An independent reimplementation of the cost sum, kept separate from
/// `munkres::total_cost` so assertions do not go through the code under test.
pub fn reference_total(matrix: &[Vec<f64>], assignment: &[usize]) -> f64 {
    assignment
        .iter()
        .enumerate()
        .map(|(row, &col)| matrix[row][col])
        .sum()
}
