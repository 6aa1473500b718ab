//! Position of a Markov chain within its state space.

/// Where a chain currently sits.
///
/// A chain built without an initial state has not made any transition yet
/// and is [`ChainState::NotStarted`]; this is distinct from sitting at
/// index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainState {
    /// No transition has been made and no initial state was given.
    #[default]
    NotStarted,
    /// The chain sits at this zero-based state index.
    Active(usize),
}

impl ChainState {
    /// Returns the state index, or `None` if the chain has not started.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::NotStarted => None,
            Self::Active(i) => Some(i),
        }
    }

    /// Returns `true` if the chain has a current position.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }
}
