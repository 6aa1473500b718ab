//! Walk command: step a chain and print every visited state.

use std::io::{self, Write};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use stride_chain::MarkovChain;

use crate::cli::WalkArgs;
use crate::config::ChainToml;

/// Run the walk command.
pub fn run(args: WalkArgs) -> Result<()> {
    let _cmd = info_span!("walk").entered();

    let config = ChainToml::load(&args.chain)?;
    let mut chain = config
        .build_chain()
        .with_context(|| format!("invalid chain definition: {}", args.chain.display()))?;

    // CLI flags override the chain file.
    let steps = args.steps.unwrap_or(config.walk.steps);
    let seed = args.seed.or(config.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    info!(n_states = chain.size(), steps, seed = ?seed, "walking chain");

    let stdout = io::stdout();
    let taken = walk(
        &mut chain,
        steps,
        config.walk.stop_at_terminal,
        &mut rng,
        &mut stdout.lock(),
    )?;
    info!(taken, terminal = chain.is_terminal(), "walk finished");
    Ok(())
}

/// Takes up to `steps` transitions, writing `step<TAB>state` lines to `out`.
///
/// Returns the number of transitions taken.
fn walk(
    chain: &mut MarkovChain<String>,
    steps: usize,
    stop_at_terminal: bool,
    rng: &mut impl rand::Rng,
    out: &mut impl Write,
) -> Result<usize> {
    if let Some(start) = chain.current() {
        writeln!(out, "0\t{start}")?;
    }
    for step in 1..=steps {
        if stop_at_terminal && !chain.has_next() {
            return Ok(step - 1);
        }
        let value = chain.next(rng).context("transition failed")?;
        writeln!(out, "{step}\t{value}")?;
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(states: &[&str], matrix: &[&[f64]], initial_state: Option<usize>) -> MarkovChain<String> {
        let values = states.iter().map(|s| s.to_string()).collect();
        let matrix = stride_chain::ProbabilityMatrix::new(matrix).unwrap();
        MarkovChain::from_matrix(values, matrix, initial_state).unwrap()
    }

    fn run_walk(chain: &mut MarkovChain<String>, steps: usize, stop: bool) -> (usize, String) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut out = Vec::new();
        let taken = walk(chain, steps, stop, &mut rng, &mut out).unwrap();
        (taken, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_every_step() {
        let mut c = chain(
            &["a", "b", "c"],
            &[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]],
            None,
        );
        let (taken, out) = run_walk(&mut c, 4, true);
        assert_eq!(taken, 4);
        assert_eq!(out, "1\tb\n2\tc\n3\ta\n4\tb\n");
    }

    #[test]
    fn prints_initial_state_first() {
        let mut c = chain(&["x", "y"], &[&[0.0, 1.0], &[1.0, 0.0]], Some(1));
        let (_, out) = run_walk(&mut c, 2, true);
        assert_eq!(out, "0\ty\n1\tx\n2\ty\n");
    }

    #[test]
    fn stops_at_terminal_state() {
        let mut c = chain(&["done", "start"], &[&[1.0, 0.0], &[1.0, 0.0]], Some(1));
        let (taken, out) = run_walk(&mut c, 10, true);
        assert_eq!(taken, 1);
        assert_eq!(out, "0\tstart\n1\tdone\n");
    }

    #[test]
    fn keeps_looping_when_asked() {
        let mut c = chain(&["done", "start"], &[&[1.0, 0.0], &[1.0, 0.0]], None);
        let (taken, out) = run_walk(&mut c, 3, false);
        assert_eq!(taken, 3);
        assert_eq!(out, "1\tdone\n2\tdone\n3\tdone\n");
    }
}
