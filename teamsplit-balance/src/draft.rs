//! Snake draft assignment of field players
//!
//! Players are taken strongest first. Teams pick in passes that alternate
//! direction (0..k-1, then k-1..0, ...), which evens out the cumulative
//! skill each team receives. A team that reached its target is skipped.

use rand::seq::SliceRandom;
use rand::Rng;
use teamsplit_core::{Player, TeamSet};

/// Sort players by skill, strongest first, breaking ties with `rng`.
///
/// Shuffles first and then sorts stably, so equal-skill players end up in a
/// seed-dependent but reproducible order.
pub fn order_by_skill<R: Rng + ?Sized>(mut players: Vec<Player>, rng: &mut R) -> Vec<Player> {
    players.shuffle(rng);
    players.sort_by(|a, b| b.skill.cmp(&a.skill));
    players
}

/// Team indices in pick order for the given pass
pub fn pass_order(team_count: usize, pass: usize) -> Vec<usize> {
    if pass % 2 == 0 {
        (0..team_count).collect()
    } else {
        (0..team_count).rev().collect()
    }
}

/// Distribute `players` over `teams` by snake draft.
///
/// `targets[i]` is the number of players team `i` receives from this draft.
///
/// # Panics
/// Panics if the targets do not add up to the number of players.
pub fn snake_draft<R: Rng + ?Sized>(
    teams: &mut TeamSet,
    players: Vec<Player>,
    targets: &[usize],
    rng: &mut R,
) {
    assert_eq!(targets.len(), teams.len(), "One target per team");
    assert_eq!(
        targets.iter().sum::<usize>(),
        players.len(),
        "Targets must cover every player"
    );

    let mut remaining = order_by_skill(players, rng).into_iter();
    let mut placed = vec![0usize; teams.len()];
    let mut pass = 0;

    'draft: loop {
        for team in pass_order(teams.len(), pass) {
            if placed[team] >= targets[team] {
                continue;
            }
            let Some(player) = remaining.next() else {
                break 'draft;
            };
            tracing::debug!(
                "Pass {}: {} picks {} (skill={}, role={:?})",
                pass + 1,
                teams.team(team).name(),
                player.name,
                player.skill,
                player.role
            );
            teams.assign(team, player);
            placed[team] += 1;
        }

        if placed.iter().sum::<usize>() == targets.iter().sum::<usize>() {
            break;
        }
        pass += 1;
    }
}
