//! Stateful Markov chain over a [`ProbabilityMatrix`].

use std::fmt;

use tracing::{debug, trace};

use crate::error::ChainError;
use crate::matrix::{NumberMatrix, ProbabilityMatrix};
use crate::state::ChainState;

/// Regenerates the transition matrix after each step.
///
/// Called with the previous and the newly drawn state index. The returned
/// matrix must have the same size as the chain and is validated before it
/// replaces the current one.
pub type TransitionFn = Box<dyn FnMut(usize, usize) -> NumberMatrix + Send>;

/// A finite, discrete-time Markov chain whose states are labelled by values of type `T`.
///
/// `values[i]` labels row `i` of the transition matrix. A chain built without
/// an initial state starts in [`ChainState::NotStarted`]: it has no current
/// value, and its first transition is drawn from row 0.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use stride_chain::MarkovChain;
///
/// let mut chain = MarkovChain::new(
///     vec!["a", "b", "c"],
///     &[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
/// )
/// .unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// assert_eq!(chain.current(), None);
/// assert_eq!(chain.next(&mut rng).unwrap(), &"b");
/// assert_eq!(chain.next(&mut rng).unwrap(), &"c");
/// ```
pub struct MarkovChain<T> {
    values: Vec<T>,
    matrix: ProbabilityMatrix,
    state: ChainState,
    transition_fn: Option<TransitionFn>,
}

impl<T> MarkovChain<T> {
    /// Creates a chain that has not started yet.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProbabilityMatrix::new`] error, then returns
    /// [`ChainError::NoValues`] or [`ChainError::ValueCountMismatch`].
    pub fn new<R: AsRef<[f64]>>(values: Vec<T>, probabilities: &[R]) -> Result<Self, ChainError> {
        Self::from_matrix(values, ProbabilityMatrix::new(probabilities)?, None)
    }

    /// Creates a chain positioned at `initial_state`.
    ///
    /// # Errors
    ///
    /// As [`MarkovChain::new`], plus [`ChainError::InitialStateOutOfBounds`]
    /// unless `initial_state` is below the matrix size.
    pub fn with_initial_state<R: AsRef<[f64]>>(
        values: Vec<T>,
        probabilities: &[R],
        initial_state: usize,
    ) -> Result<Self, ChainError> {
        Self::from_matrix(
            values,
            ProbabilityMatrix::new(probabilities)?,
            Some(initial_state),
        )
    }

    /// Creates a chain from an already validated matrix.
    ///
    /// # Errors
    ///
    /// - [`ChainError::NoValues`] if `values` is empty.
    /// - [`ChainError::ValueCountMismatch`] if `values.len() != matrix.size()`.
    /// - [`ChainError::InitialStateOutOfBounds`] if `initial_state` is not below
    ///   the matrix size.
    pub fn from_matrix(
        values: Vec<T>,
        matrix: ProbabilityMatrix,
        initial_state: Option<usize>,
    ) -> Result<Self, ChainError> {
        if values.is_empty() {
            return Err(ChainError::NoValues);
        }
        let size = matrix.size();
        if values.len() != size {
            return Err(ChainError::ValueCountMismatch {
                size,
                got: values.len(),
            });
        }
        let state = match initial_state {
            None => ChainState::NotStarted,
            Some(s) if s < size => ChainState::Active(s),
            Some(s) => return Err(ChainError::InitialStateOutOfBounds { state: s, size }),
        };

        Ok(Self {
            values,
            matrix,
            state,
            transition_fn: None,
        })
    }

    /// The value of the current state, or `None` before the first transition.
    pub fn current(&self) -> Option<&T> {
        self.state.index().map(|i| &self.values[i])
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Current position of the chain.
    pub fn state(&self) -> ChainState {
        self.state
    }

    /// State labels in index order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The matrix currently used to draw transitions.
    pub fn matrix(&self) -> &ProbabilityMatrix {
        &self.matrix
    }

    /// Returns a copy of the matrix currently used to draw transitions.
    pub fn probability_matrix(&self) -> NumberMatrix {
        self.matrix.value()
    }

    /// Returns `true` if the current state loops back onto itself with probability 1.
    ///
    /// Always `false` before the first transition.
    pub fn is_terminal(&self) -> bool {
        self.state
            .index()
            .is_some_and(|i| self.matrix.is_absorbing(i) == Ok(true))
    }

    /// Returns `true` unless the chain sits in a terminal state.
    pub fn has_next(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns `true` if a transition function is installed.
    pub fn has_transition_fn(&self) -> bool {
        self.transition_fn.is_some()
    }

    /// Installs a transition function, or removes it with `None`.
    ///
    /// While installed, the function is called after every transition and
    /// its result replaces the transition matrix.
    pub fn set_transition_fn(&mut self, transition_fn: Option<TransitionFn>) {
        self.transition_fn = transition_fn;
    }

    /// Moves to the next state and returns its value.
    ///
    /// Draws from the row of the current state (row 0 before the first
    /// transition). State and matrix are only updated once the transition
    /// function, if any, has produced a valid matrix.
    ///
    /// # Errors
    ///
    /// - [`ChainError::TransitionSizeMismatch`] if the transition function
    ///   returns a matrix with the wrong number of rows.
    /// - Any [`ProbabilityMatrix::new`] error for the regenerated matrix.
    #[tracing::instrument(level = "trace", skip_all, fields(state = ?self.state))]
    pub fn next(&mut self, rng: &mut impl rand::Rng) -> Result<&T, ChainError> {
        let prev = self.state.index().unwrap_or(0);
        let next = self.matrix.select_from(prev, rng)?;

        if let Some(transition_fn) = self.transition_fn.as_mut() {
            let regenerated = transition_fn(prev, next);
            let size = self.matrix.size();
            if regenerated.len() != size {
                return Err(ChainError::TransitionSizeMismatch {
                    expected: size,
                    got: regenerated.len(),
                });
            }
            self.matrix = ProbabilityMatrix::new(&regenerated)?;
            debug!(prev, next, "transition function replaced matrix");
        }

        trace!(prev, next, "transition");
        self.state = ChainState::Active(next);
        Ok(&self.values[next])
    }
}

impl<T: fmt::Debug> fmt::Debug for MarkovChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkovChain")
            .field("values", &self.values)
            .field("matrix", &self.matrix)
            .field("state", &self.state)
            .field("has_transition_fn", &self.has_transition_fn())
            .finish()
    }
}
