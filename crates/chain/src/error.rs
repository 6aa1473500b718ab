//! Error types for the stride-chain crate.

/// Broad classification of a [`ChainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Zero-length values or probability matrix.
    EmptyInput,
    /// Values and matrix disagree on size, or a regenerated matrix has the wrong size.
    SizeMismatch,
    /// A matrix row's length differs from the row count.
    NotSquare,
    /// An entry lies outside `[0, 1]` or a row does not sum to 1.
    NotProbabilistic,
    /// A state or row index lies outside `[0, N)`.
    OutOfBounds,
}

/// Error type for all fallible operations in the stride-chain crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainError {
    /// Returned when a chain is built without any values.
    #[error("No values provided to MarkovChain")]
    NoValues,

    /// Returned when a probability matrix has no rows.
    #[error("Probabilities array must contain entries")]
    EmptyMatrix,

    /// Returned when the number of values differs from the matrix size.
    #[error("Number values should match provided matrix size of {size}")]
    ValueCountMismatch {
        /// Size of the probability matrix.
        size: usize,
        /// Number of values provided.
        got: usize,
    },

    /// Returned when a transition function produces a matrix of the wrong size.
    #[error("transition function must create NumberMatrix of length {expected}")]
    TransitionSizeMismatch {
        /// Size of the chain.
        expected: usize,
        /// Row count of the regenerated matrix.
        got: usize,
    },

    /// Returned when a row's length differs from the row count.
    #[error("Probabilities array must be square")]
    NotSquare,

    /// Returned when an entry is outside `[0, 1]` or a row does not sum to 1.
    #[error("Each probability vector must sum to 1 using values in [0, 1]")]
    NotProbabilistic,

    /// Returned when the requested initial state is not a valid index.
    #[error("initialState \"{state}\" is out of bounds. Must be between [0, {size}).")]
    InitialStateOutOfBounds {
        /// The requested initial state.
        state: usize,
        /// Size of the chain.
        size: usize,
    },

    /// Returned when a row index is not a valid index.
    #[error("aRow \"{row}\" is out of bounds. Must be between [0, {size}).")]
    RowOutOfBounds {
        /// The requested row.
        row: usize,
        /// Size of the matrix.
        size: usize,
    },
}

impl ChainError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoValues | Self::EmptyMatrix => ErrorKind::EmptyInput,
            Self::ValueCountMismatch { .. } | Self::TransitionSizeMismatch { .. } => {
                ErrorKind::SizeMismatch
            }
            Self::NotSquare => ErrorKind::NotSquare,
            Self::NotProbabilistic => ErrorKind::NotProbabilistic,
            Self::InitialStateOutOfBounds { .. } | Self::RowOutOfBounds { .. } => {
                ErrorKind::OutOfBounds
            }
        }
    }
}
