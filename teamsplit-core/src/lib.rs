//! Team Splitter Core - Players, teams and balance scoring
//!
//! This crate provides the data model shared by the balancer and the CLI:
//! - Players and their roles
//! - Teams and the fixed-size team set of a run
//! - Balance scoring (skill spread + role composition)
//! - Roster and player-list files
//! - Interactive roster tuning helpers

pub mod error;
pub mod player;
pub mod roster;
pub mod score;
pub mod team;
pub mod tuning;

// Re-exports for convenient access
pub use error::{ConfigurationError, RosterError, SplitError};
pub use player::{Player, Role, Skill, ROLE_COUNT};
pub use roster::{parse_player_list, read_player_list, Roster};
pub use score::{balance_report, balance_score, BalanceReport, BalanceScore};
pub use team::{Team, TeamSet, TEAM_COLORS};
pub use tuning::{apply_judgement, pick_same_role_pair, Judgement};
