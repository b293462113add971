//! Output rendering for split results

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use teamsplit_balance::SplitResult;
use teamsplit_core::{Role, TeamSet};

/// Every team with its players, then the balance summary
pub fn format_result(result: &SplitResult) -> String {
    let mut out = String::new();
    for team in result.teams.teams() {
        let _ = writeln!(out, "{}", team);
    }
    out.push_str(&format_summary(result));
    out
}

/// Balance summary lines
pub fn format_summary(result: &SplitResult) -> String {
    let mut out = String::new();
    let balance = &result.balance;
    let opt = &result.optimization;
    let (a, b) = balance.teams_for_max_skill_diff;

    let _ = writeln!(out, "=== Balance ===");
    let _ = writeln!(out, "Seed:            {}", result.seed);
    let _ = writeln!(
        out,
        "Score:           {:.4} (skill {:.4}, roles {:.4})",
        balance.score.total(),
        balance.score.skill_variance,
        balance.score.role_imbalance
    );
    if result.teams.len() > 1 {
        let _ = writeln!(
            out,
            "Max skill diff:  {} ({} vs {})",
            balance.max_skill_diff,
            result.teams.team(a).name(),
            result.teams.team(b).name()
        );
    }
    for role in Role::ALL {
        let _ = writeln!(out, "Max {:<11}  {}", format!("{:?}s:", role), balance.role_diff(role));
    }
    let _ = writeln!(
        out,
        "Optimizer:       {} rounds, {} swaps, {:?}",
        opt.rounds, opt.swaps_applied, opt.stop_reason
    );
    out
}

/// Finalized team sheet: per team a header, goalies first, then the
/// remaining names in shuffled order
pub fn finalized_sheet<R: Rng + ?Sized>(teams: &TeamSet, rng: &mut R) -> String {
    let mut out = String::new();
    for (i, team) in teams.teams().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "Team {}", team.name());

        let ordered = team.goalies_first();
        let split = ordered.iter().take_while(|p| p.role.is_goalie()).count();
        let (goalies, field) = ordered.split_at(split);
        let mut field = field.to_vec();
        field.shuffle(rng);

        for p in goalies.iter().chain(field.iter()) {
            let _ = writeln!(out, "{}", p.name);
        }
    }
    out
}

/// Write the finalized team sheet
pub fn save_sheet(path: &Path, sheet: &str) -> Result<()> {
    std::fs::write(path, sheet).with_context(|| format!("Failed to write teams to {}", path.display()))?;
    Ok(())
}
