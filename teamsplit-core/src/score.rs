//! Balance scoring
//!
//! Scores how unbalanced a partition is. Lower is better and only the
//! relative order of scores matters. The score has two parts:
//!
//! - `skill_variance`: population standard deviation of team skill totals,
//!   divided by the skill spread of the players (strongest minus weakest).
//!   Zero when every player has the same skill.
//! - `role_imbalance`: for each role, the highest minus the lowest per-team
//!   count, summed over roles and divided by the number of players.
//!
//! The variance is computed from integer sums, so two partitions with the
//! same multiset of team totals always get bit-identical scores.

use crate::player::{Role, ROLE_COUNT};
use crate::team::TeamSet;
use serde::{Deserialize, Serialize};

/// Score of a partition (lower = better balanced)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceScore {
    /// Normalized standard deviation of team skill totals
    pub skill_variance: f64,
    /// Normalized sum of per-role count spreads
    pub role_imbalance: f64,
}

impl BalanceScore {
    /// Combined score
    pub fn total(&self) -> f64 {
        self.skill_variance + self.role_imbalance
    }
}

/// Score a team set
pub fn balance_score(teams: &TeamSet) -> BalanceScore {
    score_parts(
        &teams.totals(),
        &teams.role_counts(),
        teams.player_skill_spread(),
        teams.player_count(),
    )
}

/// Score from precomputed aggregates.
///
/// Lets callers evaluate a hypothetical partition (e.g. a swap that has not
/// been applied) without touching any team.
pub fn score_parts(
    totals: &[i64],
    role_counts: &[[usize; ROLE_COUNT]],
    skill_spread: i64,
    player_count: usize,
) -> BalanceScore {
    BalanceScore {
        skill_variance: normalized_skill_variance(totals, skill_spread),
        role_imbalance: normalized_role_imbalance(role_counts, player_count),
    }
}

/// Standard deviation of `totals` divided by `skill_spread` (0 if the spread is 0).
///
/// `skill_spread` is the spread of individual player skills, not of the team
/// totals. This is deliberate: dividing by the spread of the totals makes the
/// term scale-invariant, so any four teams whose totals are not all equal
/// would score at least 1/sqrt(8) and "nearly equal" could not be expressed.
pub fn normalized_skill_variance(totals: &[i64], skill_spread: i64) -> f64 {
    if skill_spread <= 0 || totals.is_empty() {
        return 0.0;
    }

    let k = totals.len() as i128;
    let sum: i128 = totals.iter().map(|&t| t as i128).sum();
    let sum_sq: i128 = totals.iter().map(|&t| (t as i128) * (t as i128)).sum();

    // k^2 * variance, exact
    let scaled_variance = k * sum_sq - sum * sum;
    let std_dev = (scaled_variance.max(0) as f64).sqrt() / k as f64;

    std_dev / skill_spread as f64
}

/// Sum over roles of (max count - min count), divided by `player_count`
pub fn normalized_role_imbalance(role_counts: &[[usize; ROLE_COUNT]], player_count: usize) -> f64 {
    if player_count == 0 {
        return 0.0;
    }

    let spread: usize = (0..ROLE_COUNT).map(|r| role_spread(role_counts, r)).sum();
    spread as f64 / player_count as f64
}

/// Highest minus lowest per-team count for one role index
pub fn role_spread(role_counts: &[[usize; ROLE_COUNT]], role: usize) -> usize {
    let max = role_counts.iter().map(|c| c[role]).max().unwrap_or(0);
    let min = role_counts.iter().map(|c| c[role]).min().unwrap_or(0);
    max - min
}

// ============================================================================
// Report
// ============================================================================

/// Human-oriented summary of a partition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub score: BalanceScore,
    /// Total skill per team
    pub team_totals: Vec<i64>,
    /// Largest total skill difference between any two teams
    pub max_skill_diff: i64,
    /// Teams (by index) with the largest total skill difference
    pub teams_for_max_skill_diff: (usize, usize),
    /// Largest count difference per role between any two teams, by `Role::index`
    pub max_role_diff: [usize; ROLE_COUNT],
}

impl BalanceReport {
    /// Largest count difference for a role between any two teams
    pub fn role_diff(&self, role: Role) -> usize {
        self.max_role_diff[role.index()]
    }
}

/// Build a [`BalanceReport`] for a team set
pub fn balance_report(teams: &TeamSet) -> BalanceReport {
    let totals = teams.totals();
    let role_counts = teams.role_counts();

    let mut max_skill_diff = 0;
    let mut teams_for_max_skill_diff = (0, 0);
    for i in 0..totals.len() {
        for j in i + 1..totals.len() {
            let diff = (totals[i] - totals[j]).abs();
            if diff > max_skill_diff {
                max_skill_diff = diff;
                teams_for_max_skill_diff = (i, j);
            }
        }
    }

    let mut max_role_diff = [0; ROLE_COUNT];
    for (r, diff) in max_role_diff.iter_mut().enumerate() {
        *diff = role_spread(&role_counts, r);
    }

    BalanceReport {
        score: balance_score(teams),
        team_totals: totals,
        max_skill_diff,
        teams_for_max_skill_diff,
        max_role_diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::team::Team;

    fn make_set(teams: &[&[(Role, u32)]]) -> TeamSet {
        let mut n = 0;
        let teams = teams
            .iter()
            .enumerate()
            .map(|(i, players)| {
                let mut team = Team::new(format!("T{}", i));
                for &(role, skill) in players.iter() {
                    team.add_player(Player::new(format!("P{}", n), role, skill));
                    n += 1;
                }
                team
            })
            .collect();
        TeamSet::from_teams(teams)
    }

    #[test]
    fn test_identical_skills_score_zero_variance() {
        let set = make_set(&[
            &[(Role::Defender, 70), (Role::Striker, 70), (Role::Striker, 70)],
            &[(Role::Defender, 70), (Role::Midfielder, 70)],
        ]);

        let score = balance_score(&set);
        assert_eq!(score.skill_variance, 0.0);
        assert!(!score.total().is_nan());
    }

    #[test]
    fn test_perfectly_balanced_scores_zero() {
        let set = make_set(&[
            &[(Role::Goalie, 60), (Role::Defender, 80)],
            &[(Role::Goalie, 80), (Role::Defender, 60)],
        ]);

        let score = balance_score(&set);
        assert_eq!(score.skill_variance, 0.0);
        assert_eq!(score.role_imbalance, 0.0);
        assert_eq!(score.total(), 0.0);
    }

    #[test]
    fn test_skill_variance_two_teams() {
        // Totals 150 and 110: std 20, player spread 90 - 50 = 40
        let set = make_set(&[
            &[(Role::Defender, 90), (Role::Striker, 60)],
            &[(Role::Defender, 50), (Role::Striker, 60)],
        ]);

        let score = balance_score(&set);
        assert!((score.skill_variance - 0.5).abs() < 1e-12);
        assert_eq!(score.role_imbalance, 0.0);
    }

    #[test]
    fn test_skill_variance_uses_player_spread() {
        // Totals 160/150/150/150: std 4.33, player spread 30. Dividing by the
        // totals' spread (10) would give 0.433 instead.
        let set = make_set(&[
            &[(Role::Defender, 90), (Role::Striker, 70)],
            &[(Role::Defender, 80), (Role::Striker, 70)],
            &[(Role::Defender, 60), (Role::Striker, 90)],
            &[(Role::Defender, 75), (Role::Striker, 75)],
        ]);

        let score = balance_score(&set);
        let expected = (75.0f64).sqrt() / 2.0 / 30.0;
        assert!((score.skill_variance - expected).abs() < 1e-12);
    }

    #[test]
    fn test_role_imbalance() {
        // Defenders 3 vs 1 (spread 2), strikers 1 vs 3 (spread 2) over 8 players
        let set = make_set(&[
            &[
                (Role::Defender, 80),
                (Role::Defender, 80),
                (Role::Defender, 80),
                (Role::Striker, 80),
            ],
            &[
                (Role::Defender, 80),
                (Role::Striker, 80),
                (Role::Striker, 80),
                (Role::Striker, 80),
            ],
        ]);

        let score = balance_score(&set);
        assert!((score.role_imbalance - 0.5).abs() < 1e-12);
        assert_eq!(score.skill_variance, 0.0);
    }

    #[test]
    fn test_score_ignores_team_order() {
        let a = make_set(&[
            &[(Role::Defender, 91), (Role::Striker, 63)],
            &[(Role::Defender, 57), (Role::Striker, 77)],
            &[(Role::Defender, 88), (Role::Striker, 52)],
        ]);
        let b = make_set(&[
            &[(Role::Defender, 88), (Role::Striker, 52)],
            &[(Role::Defender, 91), (Role::Striker, 63)],
            &[(Role::Defender, 57), (Role::Striker, 77)],
        ]);

        assert_eq!(balance_score(&a), balance_score(&b));
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let score = balance_score(&TeamSet::with_colors(2));
        assert_eq!(score.total(), 0.0);
    }

    #[test]
    fn test_balance_report() {
        let set = make_set(&[
            &[(Role::Goalie, 50), (Role::Defender, 90), (Role::Defender, 70)],
            &[(Role::Goalie, 60), (Role::Striker, 80)],
            &[(Role::Defender, 65), (Role::Striker, 75)],
        ]);

        let report = balance_report(&set);
        assert_eq!(report.team_totals, vec![210, 140, 140]);
        assert_eq!(report.max_skill_diff, 70);
        assert_eq!(report.teams_for_max_skill_diff, (0, 1));
        assert_eq!(report.role_diff(Role::Goalie), 1);
        assert_eq!(report.role_diff(Role::Defender), 2);
        assert_eq!(report.role_diff(Role::Midfielder), 0);
        assert_eq!(report.role_diff(Role::Striker), 1);
    }
}
