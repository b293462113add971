//! Team Splitter CLI - Command-line interface
//!
//! Commands:
//! - split: Split selected players into balanced teams
//! - tune: Refine roster skills by comparing pairs of players

mod render;
mod split_cmd;
mod tune_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "teamsplit")]
#[command(about = "Balanced team splitter for pickup football")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split players into balanced teams
    Split(split_cmd::SplitArgs),
    /// Refine roster skills interactively
    Tune(tune_cmd::TuneArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => split_cmd::run(args, cli.seed),
        Commands::Tune(args) => tune_cmd::run(args, cli.seed),
    }
}
