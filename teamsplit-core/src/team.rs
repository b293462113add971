//! Teams and the team set of a run

use crate::player::{Player, Role, ROLE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team names, in team index order
pub const TEAM_COLORS: [&str; 4] = ["Red", "Blue", "White", "Green"];

// ============================================================================
// Team
// ============================================================================

/// A single team: a name and the players it currently owns
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    players: Vec<Player>,
}

impl Team {
    /// Create an empty team
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sum of all player skills
    pub fn total_skill(&self) -> i64 {
        self.players.iter().map(|p| p.skill as i64).sum()
    }

    /// Sum of skills of players with the given role
    pub fn skill_by_role(&self, role: Role) -> i64 {
        self.players
            .iter()
            .filter(|p| p.role == role)
            .map(|p| p.skill as i64)
            .sum()
    }

    /// Number of players with the given role
    pub fn role_count(&self, role: Role) -> usize {
        self.players.iter().filter(|p| p.role == role).count()
    }

    /// Player counts indexed by `Role::index`
    pub fn role_counts(&self) -> [usize; ROLE_COUNT] {
        let mut counts = [0; ROLE_COUNT];
        for p in &self.players {
            counts[p.role.index()] += 1;
        }
        counts
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Goalies first, then everyone else, both in current order
    pub fn goalies_first(&self) -> Vec<&Player> {
        let (mut goalies, others): (Vec<&Player>, Vec<&Player>) =
            self.players.iter().partition(|p| p.role.is_goalie());
        goalies.extend(others);
        goalies
    }

    /// Add a player; a player may only appear once per team
    pub fn add_player(&mut self, player: Player) {
        debug_assert!(!self.contains(&player.name), "{} already in team", player.name);
        self.players.push(player);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team {}, total skill: {}", self.name, self.total_skill())?;
        for player in &self.players {
            writeln!(f, "{}", player)?;
        }
        Ok(())
    }
}

// ============================================================================
// TeamSet
// ============================================================================

/// The ordered, fixed-size set of teams of one run.
///
/// Every player is owned by exactly one team. The only way to move players
/// between teams once they are placed is [`TeamSet::swap_players`], which
/// exchanges two players and so never changes team sizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamSet {
    teams: Vec<Team>,
}

impl TeamSet {
    /// Create `count` empty teams named after [`TEAM_COLORS`]
    pub fn with_colors(count: usize) -> Self {
        let teams = (0..count)
            .map(|i| match TEAM_COLORS.get(i) {
                Some(color) => Team::new(*color),
                None => Team::new(format!("{}", i + 1)),
            })
            .collect();
        Self { teams }
    }

    /// Wrap already populated teams
    pub fn from_teams(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> &Team {
        &self.teams[index]
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }

    /// Place a player into a team
    pub fn assign(&mut self, team: usize, player: Player) {
        self.teams[team].add_player(player);
    }

    /// Exchange player `a` of team `team_a` with player `b` of team `team_b`.
    ///
    /// Both moves happen in one step; there is no intermediate state where a
    /// player is in neither or both teams.
    ///
    /// # Panics
    /// Panics if the teams are the same or an index is out of range.
    pub fn swap_players(&mut self, team_a: usize, a: usize, team_b: usize, b: usize) {
        assert_ne!(team_a, team_b, "Swap requires two different teams");

        let (first, second, a, b) = if team_a < team_b {
            (team_a, team_b, a, b)
        } else {
            (team_b, team_a, b, a)
        };
        let (left, right) = self.teams.split_at_mut(second);
        std::mem::swap(&mut left[first].players[a], &mut right[0].players[b]);
    }

    /// Player counts per team
    pub fn sizes(&self) -> Vec<usize> {
        self.teams.iter().map(Team::len).collect()
    }

    /// Total skill per team
    pub fn totals(&self) -> Vec<i64> {
        self.teams.iter().map(Team::total_skill).collect()
    }

    /// Role counts per team, indexed by `Role::index`
    pub fn role_counts(&self) -> Vec<[usize; ROLE_COUNT]> {
        self.teams.iter().map(Team::role_counts).collect()
    }

    /// Number of players over all teams
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Difference between the strongest and weakest player over all teams
    pub fn player_skill_spread(&self) -> i64 {
        let skills = self.players().map(|p| p.skill as i64);
        let (min, max) = skills.fold((i64::MAX, i64::MIN), |(lo, hi), s| (lo.min(s), hi.max(s)));
        if min > max {
            0
        } else {
            max - min
        }
    }

    /// All players, team by team
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.players.iter())
    }

    /// Index of the team holding the named player
    pub fn team_of(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.contains(name))
    }
}
