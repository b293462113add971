//! Goalie distribution
//!
//! Goalies are handed out after the field draft, strongest first, each to
//! the currently weakest team (by total skill) that is still below its
//! goalie target. Greedy and deterministic for a seed, O(goalies x teams).

use rand::Rng;
use teamsplit_core::{Player, TeamSet};

use crate::draft::order_by_skill;

/// Assign `goalies` to `teams` respecting per-team `targets`.
///
/// Ties on total skill go to the lower team index. With fewer goalies than
/// teams, only teams with a non-zero target receive one.
///
/// # Panics
/// Panics if the targets do not add up to the number of goalies.
pub fn distribute_goalies<R: Rng + ?Sized>(
    teams: &mut TeamSet,
    goalies: Vec<Player>,
    targets: &[usize],
    rng: &mut R,
) {
    assert_eq!(targets.len(), teams.len(), "One goalie target per team");
    assert_eq!(
        targets.iter().sum::<usize>(),
        goalies.len(),
        "Goalie targets must cover every goalie"
    );

    let mut placed = vec![0usize; teams.len()];

    for goalie in order_by_skill(goalies, rng) {
        let Some(team) = weakest_open_team(teams, &placed, targets) else {
            break;
        };
        tracing::debug!(
            "{} gets goalie {} (skill={}, team skill={})",
            teams.team(team).name(),
            goalie.name,
            goalie.skill,
            teams.team(team).total_skill()
        );
        teams.assign(team, goalie);
        placed[team] += 1;
    }
}

/// Lowest-total team that has not reached its goalie target
fn weakest_open_team(teams: &TeamSet, placed: &[usize], targets: &[usize]) -> Option<usize> {
    (0..teams.len())
        .filter(|&i| placed[i] < targets[i])
        .min_by_key(|&i| (teams.team(i).total_skill(), i))
}
