//! Player and role definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct roles
pub const ROLE_COUNT: usize = 4;

/// Skill rating of a single player (higher = stronger)
pub type Skill = u32;

/// Player's role on the team
///
/// Serialized with its one-letter code, which is also how roster files
/// store it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "G")]
    Goalie,
    #[serde(rename = "D")]
    Defender,
    #[serde(rename = "M")]
    Midfielder,
    #[serde(rename = "S")]
    Striker,
}

impl Role {
    /// All roles in index order
    pub const ALL: [Role; ROLE_COUNT] = [
        Role::Goalie,
        Role::Defender,
        Role::Midfielder,
        Role::Striker,
    ];

    /// Stable index (0-3), used for per-role count arrays
    pub fn index(self) -> usize {
        match self {
            Role::Goalie => 0,
            Role::Defender => 1,
            Role::Midfielder => 2,
            Role::Striker => 3,
        }
    }

    /// One-letter code ("G", "D", "M", "S")
    pub fn code(self) -> char {
        match self {
            Role::Goalie => 'G',
            Role::Defender => 'D',
            Role::Midfielder => 'M',
            Role::Striker => 'S',
        }
    }

    /// Parse a one-letter code (case-insensitive)
    pub fn from_code(code: char) -> Option<Role> {
        match code.to_ascii_uppercase() {
            'G' => Some(Role::Goalie),
            'D' => Some(Role::Defender),
            'M' => Some(Role::Midfielder),
            'S' => Some(Role::Striker),
            _ => None,
        }
    }

    pub fn is_goalie(self) -> bool {
        self == Role::Goalie
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A player taking part in a split.
///
/// Players are created once from the roster and never modified during a
/// run; teams only move them around.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub skill: Skill,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role, skill: Skill) -> Self {
        Self {
            name: name.into(),
            role,
            skill,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.role, self.skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code('s'), Some(Role::Striker));
        assert_eq!(Role::from_code('X'), None);
    }

    #[test]
    fn test_role_indices_match_all_order() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_player_json_uses_role_code() {
        let p = Player::new("David Beckham", Role::Midfielder, 82);
        let json = serde_json::to_string(&p).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "David Beckham");
        assert_eq!(value["role"], "M");
        assert_eq!(value["skill"], 82);

        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_player_display() {
        let p = Player::new("Diego Maradona", Role::Striker, 100);
        assert_eq!(p.to_string(), "Diego Maradona S 100");
    }
}
