//! Split orchestration
//!
//! Resolve the player filter, plan the teams, draft field players, hand out
//! goalies and optimize. One generator, seeded once, drives every stage.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use teamsplit_core::{
    balance_report, BalanceReport, ConfigurationError, Player, Roster, SplitError, TeamSet,
};

use crate::config::SplitConfig;
use crate::draft::snake_draft;
use crate::goalies::distribute_goalies;
use crate::optimizer::{optimize, OptimizationReport};
use crate::planner::{plan_teams, TeamPlan};

/// Outcome of a split run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplitResult {
    /// Seed the run used (drawn from entropy if none was configured)
    pub seed: u64,
    pub teams: TeamSet,
    pub optimization: OptimizationReport,
    pub balance: BalanceReport,
}

/// Split the players named in `filter` into balanced teams
pub fn split_teams<S: AsRef<str>>(
    roster: &Roster,
    filter: &[S],
    config: &SplitConfig,
) -> Result<SplitResult, SplitError> {
    let players = roster.resolve(filter)?;
    let plan = plan_teams(players.len(), config.four_team_threshold)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    match config.seed {
        Some(_) => tracing::info!("Seed: {}", seed),
        None => tracing::info!("Seed: {} (random, pass --seed {} to reproduce)", seed, seed),
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut teams = initial_assignment(players, &plan, &mut rng);
    let optimization = optimize(&mut teams, &config.optimizer, &mut rng);

    check_sizes(&teams)?;

    Ok(SplitResult {
        seed,
        balance: balance_report(&teams),
        teams,
        optimization,
    })
}

/// Snake draft of field players followed by goalie distribution
pub fn initial_assignment<R: Rng + ?Sized>(players: Vec<Player>, plan: &TeamPlan, rng: &mut R) -> TeamSet {
    let (goalies, field): (Vec<Player>, Vec<Player>) = players.into_iter().partition(|p| p.role.is_goalie());

    let goalie_targets = plan.goalie_targets(goalies.len());
    let field_targets = plan.field_targets(&goalie_targets);
    tracing::info!(
        "Forming {} teams: sizes {:?}, goalies {:?}",
        plan.team_count,
        plan.sizes,
        goalie_targets
    );

    let mut teams = TeamSet::with_colors(plan.team_count);
    snake_draft(&mut teams, field, &field_targets, rng);
    distribute_goalies(&mut teams, goalies, &goalie_targets, rng);
    teams
}

/// Sizes must differ by at most one player
fn check_sizes(teams: &TeamSet) -> Result<(), ConfigurationError> {
    let sizes = teams.sizes();
    let min = sizes.iter().copied().min().unwrap_or(0);
    let max = sizes.iter().copied().max().unwrap_or(0);
    if max - min > 1 {
        return Err(ConfigurationError::SizeImbalance { min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamsplit_core::{Role, RosterError, Team};

    fn roster(count: usize, goalies: usize) -> Roster {
        let field = [Role::Defender, Role::Midfielder, Role::Striker];
        let players = (0..count)
            .map(|i| {
                let role = if i < goalies { Role::Goalie } else { field[(i - goalies) % 3] };
                Player::new(format!("P{:02}", i), role, 50 + ((i * 37) % 46) as u32)
            })
            .collect();
        Roster::new(players).unwrap()
    }

    fn names(roster: &Roster) -> Vec<String> {
        roster.players().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_split_keeps_every_player_once() {
        let roster = roster(23, 4);
        let result = split_teams(&roster, &names(&roster), &SplitConfig::seeded(42)).unwrap();

        assert_eq!(result.teams.sizes(), vec![12, 11]);
        for p in roster.players() {
            let holders = result.teams.teams().iter().filter(|t| t.contains(&p.name)).count();
            assert_eq!(holders, 1, "{} should be in exactly one team", p.name);
        }
    }

    #[test]
    fn test_split_uses_filter_subset() {
        let roster = roster(10, 2);
        let filter = ["P00", "P03", "P04", "P05", "P07"];
        let result = split_teams(&roster, &filter, &SplitConfig::seeded(1)).unwrap();

        assert_eq!(result.teams.player_count(), 5);
        assert_eq!(result.teams.team_of("P01"), None);
    }

    #[test]
    fn test_split_reports_seed_used() {
        let roster = roster(8, 2);
        let result = split_teams(&roster, &names(&roster), &SplitConfig::default()).unwrap();
        let again = split_teams(&roster, &names(&roster), &SplitConfig::seeded(result.seed)).unwrap();
        assert_eq!(result.teams, again.teams);
    }

    #[test]
    fn test_split_errors() {
        let roster = roster(6, 1);
        let config = SplitConfig::seeded(3);

        let empty: [&str; 0] = [];
        assert_eq!(
            split_teams(&roster, &empty, &config).unwrap_err(),
            SplitError::Configuration(ConfigurationError::EmptyRoster)
        );
        assert_eq!(
            split_teams(&roster, &["P01"], &config).unwrap_err(),
            SplitError::Configuration(ConfigurationError::TooFewPlayers { players: 1, teams: 2 })
        );
        assert_eq!(
            split_teams(&roster, &["P01", "Ghost"], &config).unwrap_err(),
            SplitError::Roster(RosterError::UnknownPlayer("Ghost".to_string()))
        );
        assert_eq!(
            split_teams(&roster, &["P01", "P02", "P01"], &config).unwrap_err(),
            SplitError::Roster(RosterError::DuplicatePlayer("P01".to_string()))
        );
    }

    #[test]
    fn test_initial_assignment_goalie_targets() {
        let roster = roster(30, 8);
        let plan = plan_teams(30, 24).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let teams = initial_assignment(roster.players().to_vec(), &plan, &mut rng);

        assert_eq!(teams.sizes(), vec![8, 8, 7, 7]);
        let goalies: Vec<usize> = teams.teams().iter().map(|t| t.role_count(Role::Goalie)).collect();
        assert_eq!(goalies, vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_check_sizes() {
        let mut uneven = TeamSet::from_teams(vec![Team::new("Red"), Team::new("Blue")]);
        uneven.assign(0, Player::new("A", Role::Defender, 1));
        uneven.assign(0, Player::new("B", Role::Defender, 1));
        assert_eq!(check_sizes(&uneven), Err(ConfigurationError::SizeImbalance { min: 0, max: 2 }));

        uneven.assign(1, Player::new("C", Role::Defender, 1));
        assert_eq!(check_sizes(&uneven), Ok(()));
    }
}
