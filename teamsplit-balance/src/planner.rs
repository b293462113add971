//! Team formation planning
//!
//! Decides how many teams to form and how many players each one gets.

use teamsplit_core::ConfigurationError;

/// Team count and per-team target sizes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamPlan {
    pub team_count: usize,
    /// Target size per team; sizes differ by at most 1, larger ones first
    pub sizes: Vec<usize>,
}

impl TeamPlan {
    /// Goalie target per team, split the same way as overall sizes.
    ///
    /// Extra goalies go to the lowest-index teams, which are also the ones
    /// with the larger overall size, so `goalies <= total players` always
    /// leaves a non-negative field target.
    pub fn goalie_targets(&self, goalies: usize) -> Vec<usize> {
        split_sizes(goalies, self.team_count)
    }

    /// Field (non-goalie) target per team given the goalie targets
    pub fn field_targets(&self, goalie_targets: &[usize]) -> Vec<usize> {
        self.sizes
            .iter()
            .zip(goalie_targets)
            .map(|(&size, &goalies)| size.saturating_sub(goalies))
            .collect()
    }
}

/// Number of teams for a player count: 2 below `four_team_threshold`, else 4
pub fn team_count_for(players: usize, four_team_threshold: usize) -> usize {
    if players < four_team_threshold {
        2
    } else {
        4
    }
}

/// Plan the teams for `players` players
pub fn plan_teams(players: usize, four_team_threshold: usize) -> Result<TeamPlan, ConfigurationError> {
    if players == 0 {
        return Err(ConfigurationError::EmptyRoster);
    }

    let team_count = team_count_for(players, four_team_threshold);
    if players < team_count {
        return Err(ConfigurationError::TooFewPlayers {
            players,
            teams: team_count,
        });
    }

    Ok(TeamPlan {
        team_count,
        sizes: split_sizes(players, team_count),
    })
}

/// Split `total` into `parts` sizes differing by at most 1, larger first
pub fn split_sizes(total: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let extra = total % parts;
    (0..parts).map(|i| base + usize::from(i < extra)).collect()
}
