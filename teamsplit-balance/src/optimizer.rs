//! Swap optimizer
//!
//! Iteratively improves a team set by applying the single best swap per
//! round. The optimizer is a small state machine:
//!
//! - `Searching { round, stall }` while rounds are being run
//! - `Converged(reason)` once it stops; terminal
//!
//! Each round scores the current set, asks the candidate strategy for
//! proposals, simulates every proposal without touching the teams and
//! applies the best one if it strictly lowers the score. A round without
//! an improving swap increments the stall counter, an applied swap resets
//! it. Every stop reason is a success: the team set is always left in the
//! best state found.
//!
//! Only strictly improving single swaps are taken, so the result is a local
//! optimum. When two teams tie for the highest count of a role, moving one
//! of those players lowers one maximum but leaves the other, and the role
//! spread can stay above 1. Larger four-team rosters can stop there.
//!
//! ## Architecture
//! - Level 2: run loop
//! - Level 3: single round (evaluate, select, apply)
//! - Level 4: swap simulation

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use teamsplit_core::score::score_parts;
use teamsplit_core::{balance_score, BalanceScore, TeamSet, ROLE_COUNT};

use crate::config::{OptimizerConfig, SearchStrategy};
use crate::strategy::{CandidateStrategy, ExhaustiveSearch, SkillDeltaTargeting, SwapCandidate};

// ============================================================================
// STATE AND REPORT
// ============================================================================

/// Why the optimizer stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// No improving swap for `stall_rounds` consecutive rounds
    Stalled,
    /// `max_rounds` reached
    RoundCap,
    /// Wall-clock budget used up
    TimeBudget,
}

/// Optimizer state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizerState {
    Searching { round: usize, stall: usize },
    Converged(StopReason),
}

impl OptimizerState {
    pub fn is_converged(&self) -> bool {
        matches!(self, OptimizerState::Converged(_))
    }
}

/// Summary of an optimizer run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Rounds run
    pub rounds: usize,
    /// Swaps applied
    pub swaps_applied: usize,
    /// Score before the first round
    pub initial_score: BalanceScore,
    /// Score of the final team set
    pub final_score: BalanceScore,
    pub stop_reason: StopReason,
}

// ============================================================================
// OPTIMIZER
// ============================================================================

/// Round-based swap optimizer over a [`TeamSet`]
#[derive(Clone, Debug)]
pub struct SwapOptimizer<S = SkillDeltaTargeting> {
    config: OptimizerConfig,
    strategy: S,
    state: OptimizerState,
    rounds_done: usize,
    swaps_applied: usize,
    started: Option<Instant>,
}

impl<S: CandidateStrategy> SwapOptimizer<S> {
    pub fn new(config: OptimizerConfig, strategy: S) -> Self {
        Self {
            config,
            strategy,
            state: OptimizerState::Searching { round: 0, stall: 0 },
            rounds_done: 0,
            swaps_applied: 0,
            started: None,
        }
    }

    pub fn state(&self) -> OptimizerState {
        self.state
    }

    pub fn swaps_applied(&self) -> usize {
        self.swaps_applied
    }

    /// Run until converged (Level 2)
    pub fn run<R: Rng + ?Sized>(self, teams: &mut TeamSet, rng: &mut R) -> OptimizationReport {
        self.run_with_callback(teams, rng, |_, _| {})
    }

    /// Run until converged, calling `callback(round, score)` after every round
    /// that ran, the converging one included
    pub fn run_with_callback<R, F>(mut self, teams: &mut TeamSet, rng: &mut R, mut callback: F) -> OptimizationReport
    where
        R: Rng + ?Sized,
        F: FnMut(usize, &BalanceScore),
    {
        let initial_score = balance_score(teams);

        let stop_reason = loop {
            let before = self.rounds_done;
            let state = self.step(teams, rng);
            if self.rounds_done > before {
                callback(self.rounds_done, &balance_score(teams));
            }
            if let OptimizerState::Converged(reason) = state {
                break reason;
            }
        };

        let final_score = balance_score(teams);
        let rounds = self.rounds();
        tracing::info!(
            "Optimizer converged after {} rounds ({} swaps, {:?}): score {:.4} -> {:.4}",
            rounds,
            self.swaps_applied,
            stop_reason,
            initial_score.total(),
            final_score.total()
        );

        OptimizationReport {
            rounds,
            swaps_applied: self.swaps_applied,
            initial_score,
            final_score,
            stop_reason,
        }
    }

    /// Run one round and return the new state (Level 3).
    ///
    /// Calling `step` on a converged optimizer does nothing.
    pub fn step<R: Rng + ?Sized>(&mut self, teams: &mut TeamSet, rng: &mut R) -> OptimizerState {
        let OptimizerState::Searching { round, stall } = self.state else {
            return self.state;
        };

        if self.budget_exhausted() {
            self.finish(round, StopReason::TimeBudget);
            return self.state;
        }
        if round >= self.config.max_rounds {
            self.finish(round, StopReason::RoundCap);
            return self.state;
        }

        let round = round + 1;
        let current = balance_score(teams);
        let candidates = self.strategy.candidates(teams, rng);

        let stall = match select_improving(teams, &candidates, &current) {
            Some((candidate, score)) => {
                tracing::debug!(
                    "Round {}: swap {} <-> {} ({:.4} -> {:.4})",
                    round,
                    teams.team(candidate.team_a).players()[candidate.player_a].name,
                    teams.team(candidate.team_b).players()[candidate.player_b].name,
                    current.total(),
                    score.total()
                );
                teams.swap_players(candidate.team_a, candidate.player_a, candidate.team_b, candidate.player_b);
                self.swaps_applied += 1;
                0
            }
            None => stall + 1,
        };

        self.state = if stall >= self.config.stall_rounds.max(1) {
            OptimizerState::Converged(StopReason::Stalled)
        } else if round >= self.config.max_rounds {
            OptimizerState::Converged(StopReason::RoundCap)
        } else {
            OptimizerState::Searching { round, stall }
        };
        self.rounds_done = round;
        self.state
    }

    fn budget_exhausted(&mut self) -> bool {
        let Some(limit) = self.config.time_limit_ms else {
            return false;
        };
        let started = *self.started.get_or_insert_with(Instant::now);
        started.elapsed() >= Duration::from_millis(limit)
    }

    fn finish(&mut self, round: usize, reason: StopReason) {
        self.rounds_done = round;
        self.state = OptimizerState::Converged(reason);
    }

    fn rounds(&self) -> usize {
        self.rounds_done
    }
}

/// Run the optimizer selected by `config.strategy`
pub fn optimize<R: Rng + ?Sized>(teams: &mut TeamSet, config: &OptimizerConfig, rng: &mut R) -> OptimizationReport {
    match config.strategy {
        SearchStrategy::SkillDelta => SwapOptimizer::new(config.clone(), SkillDeltaTargeting).run(teams, rng),
        SearchStrategy::Exhaustive => SwapOptimizer::new(config.clone(), ExhaustiveSearch).run(teams, rng),
    }
}

// ============================================================================
// CANDIDATE EVALUATION (Level 3)
// ============================================================================

/// Best candidate if it strictly beats `current`.
///
/// Evaluation is read-only; with the `parallel` feature it runs on the rayon
/// pool. Selection is always a sequential scan in enumeration order, first
/// candidate wins on equal scores.
pub fn select_improving(
    teams: &TeamSet,
    candidates: &[SwapCandidate],
    current: &BalanceScore,
) -> Option<(SwapCandidate, BalanceScore)> {
    let aggregates = Aggregates::of(teams);
    let scores = evaluate_all(teams, &aggregates, candidates);

    let mut best: Option<(SwapCandidate, BalanceScore)> = None;
    for (candidate, score) in candidates.iter().zip(scores) {
        let better = match &best {
            Some((_, best_score)) => score.total() < best_score.total(),
            None => true,
        };
        if better {
            best = Some((*candidate, score));
        }
    }

    best.filter(|(_, score)| score.total() < current.total())
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(teams: &TeamSet, aggregates: &Aggregates, candidates: &[SwapCandidate]) -> Vec<BalanceScore> {
    candidates
        .iter()
        .map(|c| simulate_swap(teams, aggregates, c))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_all(teams: &TeamSet, aggregates: &Aggregates, candidates: &[SwapCandidate]) -> Vec<BalanceScore> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|c| simulate_swap(teams, aggregates, c))
        .collect()
}

// ============================================================================
// SIMULATION (Level 4)
// ============================================================================

/// Per-team aggregates the score is computed from
#[derive(Clone, Debug)]
pub struct Aggregates {
    totals: Vec<i64>,
    role_counts: Vec<[usize; ROLE_COUNT]>,
    skill_spread: i64,
    player_count: usize,
}

impl Aggregates {
    pub fn of(teams: &TeamSet) -> Self {
        Self {
            totals: teams.totals(),
            role_counts: teams.role_counts(),
            // Swaps never change the player pool, so the spread is fixed
            skill_spread: teams.player_skill_spread(),
            player_count: teams.player_count(),
        }
    }
}

/// Score the team set would have after `candidate`, without applying it
pub fn simulate_swap(teams: &TeamSet, aggregates: &Aggregates, candidate: &SwapCandidate) -> BalanceScore {
    let pa = &teams.team(candidate.team_a).players()[candidate.player_a];
    let pb = &teams.team(candidate.team_b).players()[candidate.player_b];

    let mut totals = aggregates.totals.clone();
    let delta = pa.skill as i64 - pb.skill as i64;
    totals[candidate.team_a] -= delta;
    totals[candidate.team_b] += delta;

    let mut counts = aggregates.role_counts.clone();
    counts[candidate.team_a][pa.role.index()] -= 1;
    counts[candidate.team_a][pb.role.index()] += 1;
    counts[candidate.team_b][pb.role.index()] -= 1;
    counts[candidate.team_b][pa.role.index()] += 1;

    score_parts(&totals, &counts, aggregates.skill_spread, aggregates.player_count)
}
