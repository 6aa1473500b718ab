//! Check command: validate a chain definition.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stride_chain::{MarkovChain, ProbabilityMatrix};

use crate::cli::CheckArgs;
use crate::config::ChainToml;

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();

    let config = ChainToml::load(&args.chain)?;
    let chain = config
        .build_chain()
        .with_context(|| format!("invalid chain definition: {}", args.chain.display()))?;
    info!(path = %args.chain.display(), n_states = chain.size(), "chain is valid");

    report(&chain, &mut io::stdout().lock())
}

/// Indices of the states that place all probability on themselves.
fn absorbing_states(matrix: &ProbabilityMatrix) -> Vec<usize> {
    (0..matrix.size())
        .filter(|&i| matrix.is_absorbing(i) == Ok(true))
        .collect()
}

fn report(chain: &MarkovChain<String>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "states: {}", chain.size())?;
    let absorbing = absorbing_states(chain.matrix());
    if absorbing.is_empty() {
        writeln!(out, "absorbing: none")?;
    } else {
        let labels: Vec<&str> = absorbing
            .iter()
            .map(|&i| chain.values()[i].as_str())
            .collect();
        writeln!(out, "absorbing: {}", labels.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_absorbing_states() {
        let m = ProbabilityMatrix::new(&[[1.0, 0.0, 0.0], [0.5, 0.0, 0.5], [0.0, 0.0, 1.0]])
            .unwrap();
        assert_eq!(absorbing_states(&m), vec![0, 2]);
    }

    #[test]
    fn reports_labels() {
        let chain = MarkovChain::new(
            vec!["home".to_string(), "road".to_string()],
            &[[1.0, 0.0], [0.5, 0.5]],
        )
        .unwrap();
        let mut out = Vec::new();
        report(&chain, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "states: 2\nabsorbing: home\n");
    }

    #[test]
    fn reports_no_absorbing_states() {
        let chain =
            MarkovChain::new(vec!["a".to_string(), "b".to_string()], &[[0.0, 1.0], [1.0, 0.0]])
                .unwrap();
        let mut out = Vec::new();
        report(&chain, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "states: 2\nabsorbing: none\n");
    }
}
