//! Validated row-stochastic probability matrix.

use tracing::debug;

use crate::error::ChainError;

/// Raw square matrix of transition probabilities, one row per state.
pub type NumberMatrix = Vec<Vec<f64>>;

/// Absolute tolerance applied when checking that a row sums to 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-4;

/// An NxN row-stochastic transition matrix.
///
/// Entry `[i][j]` is the probability of moving from state `i` to state `j`.
/// For example, the row `[0.5, 0.0, 0.5]` at index 1 reads: move to state 0
/// with probability 0.5, stay with probability 0, move to state 2 with
/// probability 0.5.
///
/// The matrix is validated once on construction and never changes
/// afterwards. Accessors hand out owned copies.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    rows: NumberMatrix,
}

impl ProbabilityMatrix {
    /// Builds a probability matrix from a copy of `probabilities`.
    ///
    /// # Errors
    ///
    /// - [`ChainError::EmptyMatrix`] if there are no rows.
    /// - [`ChainError::NotSquare`] if any row length differs from the row count.
    /// - [`ChainError::NotProbabilistic`] if an entry is outside `[0, 1]`
    ///   (NaN included) or a row sum is further than
    ///   [`PROBABILITY_TOLERANCE`] from 1.
    pub fn new<R: AsRef<[f64]>>(probabilities: &[R]) -> Result<Self, ChainError> {
        if probabilities.is_empty() {
            return Err(ChainError::EmptyMatrix);
        }
        let n = probabilities.len();
        if let Some(i) = probabilities.iter().position(|r| r.as_ref().len() != n) {
            debug!(
                row = i,
                len = probabilities[i].as_ref().len(),
                n,
                "rejected non-square matrix"
            );
            return Err(ChainError::NotSquare);
        }
        for (i, row) in probabilities.iter().enumerate() {
            let row = row.as_ref();
            if row.iter().any(|p| !(0.0..=1.0).contains(p)) {
                debug!(row = i, "rejected entry outside [0, 1]");
                return Err(ChainError::NotProbabilistic);
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
                debug!(row = i, sum, "rejected row that does not sum to 1");
                return Err(ChainError::NotProbabilistic);
            }
        }

        Ok(Self {
            rows: probabilities.iter().map(|r| r.as_ref().to_vec()).collect(),
        })
    }

    /// Number of states (rows and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns a copy of the full matrix.
    pub fn value(&self) -> NumberMatrix {
        self.rows.clone()
    }

    /// Returns a copy of one row.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::RowOutOfBounds`] unless `row < self.size()`.
    pub fn row_vector(&self, row: usize) -> Result<Vec<f64>, ChainError> {
        self.checked_row(row).map(<[f64]>::to_vec)
    }

    /// Returns `true` if `row` places all of its probability on itself.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::RowOutOfBounds`] unless `row < self.size()`.
    pub fn is_absorbing(&self, row: usize) -> Result<bool, ChainError> {
        Ok(self.checked_row(row)?[row] == 1.0)
    }

    /// Draws the index of the next state from `row`.
    ///
    /// Draws `u` in `(0, 1]` and walks the row's cumulative distribution,
    /// returning the first index whose cumulative probability meets or
    /// exceeds `u`. Entries of probability 0 are never chosen. If rounding
    /// leaves the cumulative sum short of `u`, the last index with non-zero
    /// probability is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::RowOutOfBounds`] unless `row < self.size()`.
    pub fn select_from(&self, row: usize, rng: &mut impl rand::Rng) -> Result<usize, ChainError> {
        let probs = self.checked_row(row)?;
        let u = unit_draw(rng);
        let mut cumulative = 0.0;
        for (j, &p) in probs.iter().enumerate() {
            cumulative += p;
            if cumulative >= u {
                return Ok(j);
            }
        }
        // Only reachable when the row sums to slightly less than 1.
        Ok(probs
            .iter()
            .rposition(|&p| p > 0.0)
            .unwrap_or(probs.len() - 1))
    }

    fn checked_row(&self, row: usize) -> Result<&[f64], ChainError> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or(ChainError::RowOutOfBounds {
                row,
                size: self.rows.len(),
            })
    }
}

impl TryFrom<NumberMatrix> for ProbabilityMatrix {
    type Error = ChainError;

    fn try_from(probabilities: NumberMatrix) -> Result<Self, Self::Error> {
        Self::new(&probabilities)
    }
}

/// Uniform draw in `(0, 1]`: an exact zero from the generator becomes 1.
fn unit_draw(rng: &mut impl rand::Rng) -> f64 {
    let u: f64 = rng.random();
    if u == 0.0 { 1.0 } else { u }
}
