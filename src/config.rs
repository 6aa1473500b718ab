use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use stride_chain::{ChainError, MarkovChain, NumberMatrix, ProbabilityMatrix};

/// A chain definition loaded from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainToml {
    /// RNG seed; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Starting state index; the chain starts unpositioned when absent.
    #[serde(default)]
    pub initial_state: Option<usize>,

    /// Label of each state, in matrix row order.
    pub states: Vec<String>,

    /// Row-stochastic transition matrix.
    pub matrix: NumberMatrix,

    /// Walk settings.
    #[serde(default)]
    pub walk: WalkToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkToml {
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_true")]
    pub stop_at_terminal: bool,
}

impl Default for WalkToml {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            stop_at_terminal: true,
        }
    }
}

fn default_steps() -> usize {
    10
}
fn default_true() -> bool {
    true
}

impl ChainToml {
    /// Reads and parses a chain definition file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read chain file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse chain TOML: {}", path.display()))
    }

    /// Validates the transition matrix on its own.
    pub fn build_matrix(&self) -> Result<ProbabilityMatrix, ChainError> {
        ProbabilityMatrix::new(&self.matrix)
    }

    /// Builds the chain described by this definition.
    pub fn build_chain(&self) -> Result<MarkovChain<String>, ChainError> {
        MarkovChain::from_matrix(self.states.clone(), self.build_matrix()?, self.initial_state)
    }
}
