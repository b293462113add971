//! Split command - form balanced teams from a roster
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_players(), build_split_config(), report_results()
//! - Level 3: rendering (see render.rs)
//! - Level 4: argument parsing

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use teamsplit_balance::{split_teams, OptimizerConfig, SearchStrategy, SplitConfig, SplitResult};
use teamsplit_core::{read_player_list, Roster};

use crate::render::{finalized_sheet, format_result, save_sheet};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SplitArgs {
    /// Roster JSON file (array of {name, role, skill})
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Player list file, one name per line (default: whole roster)
    #[arg(long, value_name = "FILE")]
    pub players: Option<PathBuf>,

    /// Where to write the finalized team sheet
    #[arg(long, value_name = "FILE", default_value = "final_teams.txt")]
    pub output: PathBuf,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Try every cross-team swap each round (slow)
    #[arg(long)]
    pub exhaustive: bool,

    /// Maximum optimizer rounds
    #[arg(long, default_value = "500")]
    pub max_rounds: usize,

    /// Rounds without improvement before stopping
    #[arg(long, default_value = "10")]
    pub stall_rounds: usize,

    /// Wall-clock budget for the optimizer in milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run split command
///
/// 1. Load roster and player list
/// 2. Split into teams
/// 3. Report and save the team sheet
pub fn run(args: SplitArgs, seed: Option<u64>) -> Result<()> {
    let (roster, names) = load_players(&args)?;
    let config = build_split_config(&args, seed);

    tracing::info!("Splitting {} players (roster of {})", names.len(), roster.len());

    let result = split_teams(&roster, &names, &config)?;

    report_results(&result, &args)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the roster and the names taking part
fn load_players(args: &SplitArgs) -> Result<(Roster, Vec<String>)> {
    let roster = Roster::load(&args.roster)?;

    let names = match &args.players {
        Some(path) => read_player_list(path)?,
        None => roster.players().iter().map(|p| p.name.clone()).collect(),
    };

    Ok((roster, names))
}

/// Map command arguments onto the split configuration
fn build_split_config(args: &SplitArgs, seed: Option<u64>) -> SplitConfig {
    let strategy = if args.exhaustive {
        SearchStrategy::Exhaustive
    } else {
        SearchStrategy::SkillDelta
    };

    let mut optimizer = OptimizerConfig::default()
        .with_strategy(strategy)
        .with_max_rounds(args.max_rounds)
        .with_stall_rounds(args.stall_rounds);
    if let Some(ms) = args.time_limit_ms {
        optimizer = optimizer.with_time_limit_ms(ms);
    }

    SplitConfig {
        seed,
        ..SplitConfig::default()
    }
    .with_optimizer(optimizer)
}

/// Print the result and write the finalized team sheet
fn report_results(result: &SplitResult, args: &SplitArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print!("{}", format_result(result));
    }

    // Shuffle order follows the run's seed
    let mut rng = ChaCha8Rng::seed_from_u64(result.seed);
    let sheet = finalized_sheet(&result.teams, &mut rng);
    save_sheet(&args.output, &sheet)?;
    tracing::info!("Team sheet written to {}", args.output.display());

    Ok(())
}
