use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stride Markov chain walker.
#[derive(Parser)]
#[command(
    name = "stride",
    version,
    about = "Walk finite discrete-time Markov chains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Walk a chain and print every visited state.
    Walk(WalkArgs),
    /// Validate a chain definition and report its absorbing states.
    Check(CheckArgs),
}

/// Arguments for the `walk` subcommand.
#[derive(clap::Args)]
pub struct WalkArgs {
    /// Path to TOML chain definition.
    #[arg(short, long, default_value = "chain.toml")]
    pub chain: PathBuf,

    /// Override the number of transitions from the chain file.
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Override the RNG seed from the chain file.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML chain definition.
    #[arg(short, long, default_value = "chain.toml")]
    pub chain: PathBuf,
}
