//! Error types for splitting
//!
//! Both kinds are detected eagerly, before any balancing work starts, and
//! are handed to the caller unchanged. The optimizer itself has no error
//! channel.

/// Team formation cannot be set up for the given player count
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("No players to split")]
    EmptyRoster,

    #[error("Not enough players: {players} players cannot form {teams} teams")]
    TooFewPlayers { players: usize, teams: usize },

    #[error("Team size imbalance: sizes range from {min} to {max}, difference must not exceed 1 player")]
    SizeImbalance { min: usize, max: usize },
}

/// The player filter does not match the roster
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Player '{0}' not found in roster")]
    UnknownPlayer(String),

    #[error("Player '{0}' listed more than once")]
    DuplicatePlayer(String),

    #[error("Roster contains '{0}' more than once")]
    DuplicateRosterEntry(String),
}

/// Any failure of a split run
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}
