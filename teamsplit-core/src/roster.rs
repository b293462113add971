//! Roster - the list of all known players with their skill and role

use crate::error::RosterError;
use crate::player::{Player, Skill};
use anyhow::Context;
use rustc_hash::FxHashSet;
use std::path::Path;

/// All known players, names unique
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting repeated names
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = FxHashSet::default();
        for p in &players {
            if !seen.insert(p.name.as_str()) {
                return Err(RosterError::DuplicateRosterEntry(p.name.clone()));
            }
        }
        Ok(Self { players })
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

    /// Look up a player by exact name
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Change the skill of the player at `index`
    pub fn set_skill(&mut self, index: usize, skill: Skill) {
        self.players[index].skill = skill;
    }

    /// Resolve a list of names into players.
    ///
    /// Returns the selected players in roster order, so the order of `names`
    /// never affects a split. Fails on the first name that is not in the
    /// roster or that appears twice in `names`.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Player>, RosterError> {
        let known: FxHashSet<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        let mut selected = FxHashSet::default();

        for name in names {
            let name = name.as_ref();
            if !known.contains(name) {
                return Err(RosterError::UnknownPlayer(name.to_string()));
            }
            if !selected.insert(name) {
                return Err(RosterError::DuplicatePlayer(name.to_string()));
            }
        }

        Ok(self
            .players
            .iter()
            .filter(|p| selected.contains(p.name.as_str()))
            .cloned()
            .collect())
    }

    /// Load from a JSON file (array of `{name, role, skill}`)
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        let players: Vec<Player> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse roster {}", path.display()))?;
        Ok(Self::new(players)?)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.players)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write roster {}", path.display()))?;
        Ok(())
    }
}

/// Parse a player list: one name per line.
///
/// Leading list numbering ("12.", "3 ") and surrounding whitespace are
/// stripped and blank lines skipped. Repeated names are kept.
pub fn parse_player_list(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_numbering)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a player list file
pub fn read_player_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read player list {}", path.display()))?;
    Ok(parse_player_list(&content))
}

fn strip_numbering(line: &str) -> &str {
    let line = line.trim();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    rest.strip_prefix('.').unwrap_or(rest).trim()
}
