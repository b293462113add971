//! Team Splitter Balance - Team formation and swap optimization
//!
//! This crate turns a list of players into balanced teams:
//! - Team count and size planning
//! - Skill-ordered snake draft of field players
//! - Greedy goalie distribution
//! - Swap optimization (skill-delta targeting or exhaustive search)
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: split_teams (orchestration)
//! - Level 2: initial_assignment, optimize (phases)
//! - Level 3: snake_draft, distribute_goalies, SwapOptimizer::step (steps)
//! - Level 4: planning, candidate generation, configuration

mod config;
mod draft;
mod goalies;
mod optimizer;
mod planner;
mod split;
mod strategy;

pub use config::{OptimizerConfig, SearchStrategy, SplitConfig, FOUR_TEAM_THRESHOLD};
pub use draft::{order_by_skill, pass_order, snake_draft};
pub use goalies::distribute_goalies;
pub use optimizer::{
    optimize, select_improving, simulate_swap, Aggregates, OptimizationReport, OptimizerState, StopReason,
    SwapOptimizer,
};
pub use planner::{plan_teams, split_sizes, team_count_for, TeamPlan};
pub use split::{initial_assignment, split_teams, SplitResult};
pub use strategy::{CandidateStrategy, ExhaustiveSearch, SkillDeltaTargeting, SwapCandidate};
