//! Configuration types for splitting and optimization

use serde::{Deserialize, Serialize};

/// Player count from which four teams are formed instead of two
pub const FOUR_TEAM_THRESHOLD: usize = 24;

/// How swap candidates are generated each optimizer round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Per team pair and role, only the swaps that best close the skill gap
    SkillDelta,
    /// Every cross-team player pair (slow, used as a reference)
    Exhaustive,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::SkillDelta
    }
}

/// Swap optimizer configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Consecutive rounds without improvement before stopping
    pub stall_rounds: usize,
    /// Hard cap on rounds
    pub max_rounds: usize,
    /// Optional wall-clock budget in milliseconds
    pub time_limit_ms: Option<u64>,
    /// Candidate generation strategy
    pub strategy: SearchStrategy,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            stall_rounds: 10,
            max_rounds: 500,
            time_limit_ms: None,
            strategy: SearchStrategy::SkillDelta,
        }
    }
}

impl OptimizerConfig {
    /// Set candidate generation strategy
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set round cap
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set stall threshold
    pub fn with_stall_rounds(mut self, stall_rounds: usize) -> Self {
        self.stall_rounds = stall_rounds;
        self
    }

    /// Set wall-clock budget
    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = Some(time_limit_ms);
        self
    }
}

/// Configuration of a whole split run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Random seed for reproducibility (None = drawn from entropy)
    pub seed: Option<u64>,
    /// Player count from which four teams are formed
    pub four_team_threshold: usize,
    /// Optimizer settings
    pub optimizer: OptimizerConfig,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            seed: None,
            four_team_threshold: FOUR_TEAM_THRESHOLD,
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl SplitConfig {
    /// Config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set optimizer configuration
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }
}
