//! Tune command - refine roster skills by pairwise comparison
//!
//! Shows two random players sharing a role and asks which one is stronger.
//! Answers: `a`, `b`, `eq`, `no`, `save`, `quit`. Changes are saved to the
//! roster file right away.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use teamsplit_core::{apply_judgement, pick_same_role_pair, Judgement, Roster};

#[derive(Args)]
pub struct TuneArgs {
    /// Roster JSON file to tune (updated in place)
    #[arg(value_name = "FILE")]
    pub roster: PathBuf,
}

/// What the user asked for at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Judge(Judgement),
    Save,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        "save" => Some(Command::Save),
        "quit" | "q" => Some(Command::Quit),
        other => other.parse().ok().map(Command::Judge),
    }
}

/// Run tune command
pub fn run(args: TuneArgs, seed: Option<u64>) -> Result<()> {
    let mut roster = Roster::load(&args.roster)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!("Tuning {} players from {} (seed {})", roster.len(), args.roster.display(), seed);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let changes = tune_loop(&mut roster, &args.roster, &mut rng, stdin.lock(), stdout.lock())?;

    tracing::info!("Tuning finished, {} changes", changes);
    Ok(())
}

/// Prompt loop; returns the number of changed pairs.
///
/// Ends on `quit` or end of input.
fn tune_loop<R, I, O>(roster: &mut Roster, path: &Path, rng: &mut R, input: I, mut output: O) -> Result<usize>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    let mut changes = 0;

    loop {
        let Some((first, second)) = pick_same_role_pair(roster, rng) else {
            bail!("No role has two players to compare");
        };
        writeln!(
            output,
            "a) {}  vs  b) {}   [a/b/eq/no/save/quit]",
            roster.players()[first],
            roster.players()[second]
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Some(Command::Judge(judgement)) => {
                if apply_judgement(roster, first, second, judgement) {
                    changes += 1;
                    roster.save(path)?;
                    tracing::debug!(
                        "Updated {} and {}",
                        roster.players()[first],
                        roster.players()[second]
                    );
                }
            }
            Some(Command::Save) => {
                roster.save(path)?;
                writeln!(output, "Saved {}", path.display())?;
            }
            Some(Command::Quit) => break,
            None => writeln!(output, "Unknown answer, use a, b, eq, no, save or quit")?,
        }
    }

    Ok(changes)
}
