//! Finite, discrete-time Markov chains.
//!
//! This crate provides a validated row-stochastic [`ProbabilityMatrix`] with
//! weighted sampling, and a stateful [`MarkovChain`] that labels each state
//! with a caller-supplied value and walks between states one transition at
//! a time.
//!
//! ```text
//!  ┌─────────────────────┐  select_from(row)  ┌──────────────────┐
//!  │  ProbabilityMatrix  │◀───────────────────│  MarkovChain<T>  │
//!  │  (validate, sample) │                    │  (state, values) │
//!  └─────────────────────┘                    └──────────────────┘
//! ```
//!
//! Randomness is always supplied by the caller as a [`rand::Rng`], so a
//! seeded generator reproduces a walk exactly.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stride_chain::{ChainState, MarkovChain};
//!
//! let mut chain = MarkovChain::new(vec![1, 2], &[[1.0, 0.0], [1.0, 0.0]]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! assert!(chain.has_next());
//! assert_eq!(chain.next(&mut rng).unwrap(), &1);
//! assert_eq!(chain.state(), ChainState::Active(0));
//! assert!(chain.is_terminal());
//! ```

pub mod chain;
pub mod error;
pub mod matrix;
pub mod state;

pub use chain::{MarkovChain, TransitionFn};
pub use error::{ChainError, ErrorKind};
pub use matrix::{NumberMatrix, PROBABILITY_TOLERANCE, ProbabilityMatrix};
pub use state::ChainState;
