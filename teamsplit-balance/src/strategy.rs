//! Swap candidate generation
//!
//! A strategy looks at the current team set and proposes swaps; it never
//! changes anything. The optimizer scores the proposals and applies at most
//! one of them per round.

use rand::Rng;
use teamsplit_core::{Role, TeamSet};

/// Proposal to exchange `player_a` of `team_a` with `player_b` of `team_b`.
///
/// Indices refer to positions in the teams' player lists at the time the
/// candidate was generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwapCandidate {
    pub team_a: usize,
    pub player_a: usize,
    pub team_b: usize,
    pub player_b: usize,
}

/// Source of swap candidates for one optimizer round
pub trait CandidateStrategy {
    /// Propose swaps for the current state, in a fixed enumeration order
    fn candidates<R: Rng + ?Sized>(&self, teams: &TeamSet, rng: &mut R) -> Vec<SwapCandidate>;
}

// ============================================================================
// Skill-delta targeting
// ============================================================================

/// Targeted candidates, O(teams^2 x roles) per round.
///
/// For every ordered team pair (A, B) and every role r:
/// - balance: the same-role pair whose swap leaves the smallest skill gap
///   between A and B, if that gap is smaller than the current one;
/// - repair: if A holds at least two more r-players than B, an r-player of A
///   paired with a B player of a role B holds more of than A, again chosen
///   by smallest resulting gap (lower role index on equal gaps).
///
/// Pairs with identical keys produce the same totals and role counts, so the
/// generator only uses `rng` to pick among outcomes that score the same.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkillDeltaTargeting;

impl CandidateStrategy for SkillDeltaTargeting {
    fn candidates<R: Rng + ?Sized>(&self, teams: &TeamSet, rng: &mut R) -> Vec<SwapCandidate> {
        let totals = teams.totals();
        let counts = teams.role_counts();
        let mut candidates = Vec::new();

        for a in 0..teams.len() {
            for b in 0..teams.len() {
                if a == b {
                    continue;
                }
                let gap = totals[a] - totals[b];

                for role in Role::ALL {
                    if let Some(c) = balance_candidate(teams, a, b, role, gap, rng) {
                        candidates.push(c);
                    }

                    let r = role.index();
                    if counts[a][r] >= counts[b][r] + 2 {
                        let surplus_in_b = |other: Role| counts[b][other.index()] > counts[a][other.index()];
                        if let Some(c) = repair_candidate(teams, a, b, role, gap, surplus_in_b, rng) {
                            candidates.push(c);
                        }
                    }
                }
            }
        }

        candidates
    }
}

/// Same-role swap between `a` and `b` that best closes the gap
fn balance_candidate<R: Rng + ?Sized>(
    teams: &TeamSet,
    a: usize,
    b: usize,
    role: Role,
    gap: i64,
    rng: &mut R,
) -> Option<SwapCandidate> {
    let mut best = BestPair::new();

    for (i, pa) in teams.team(a).players().iter().enumerate() {
        if pa.role != role {
            continue;
        }
        for (j, pb) in teams.team(b).players().iter().enumerate() {
            if pb.role != role {
                continue;
            }
            let new_gap = gap_after_swap(gap, pa.skill, pb.skill);
            if new_gap >= gap.abs() {
                continue;
            }
            best.offer((new_gap, 0), (i, j), rng);
        }
    }

    best.into_candidate(a, b)
}

/// Cross-role swap moving a `role` player from `a` to `b`
fn repair_candidate<R: Rng + ?Sized>(
    teams: &TeamSet,
    a: usize,
    b: usize,
    role: Role,
    gap: i64,
    surplus_in_b: impl Fn(Role) -> bool,
    rng: &mut R,
) -> Option<SwapCandidate> {
    let mut best = BestPair::new();

    for (i, pa) in teams.team(a).players().iter().enumerate() {
        if pa.role != role {
            continue;
        }
        for (j, pb) in teams.team(b).players().iter().enumerate() {
            if pb.role == role || !surplus_in_b(pb.role) {
                continue;
            }
            let new_gap = gap_after_swap(gap, pa.skill, pb.skill);
            best.offer((new_gap, pb.role.index()), (i, j), rng);
        }
    }

    best.into_candidate(a, b)
}

/// |gap| after moving skill `from_a` to B and `from_b` to A
fn gap_after_swap(gap: i64, from_a: u32, from_b: u32) -> i64 {
    (gap - 2 * (from_a as i64 - from_b as i64)).abs()
}

/// Smallest-key pair, uniform among ties (reservoir sampling)
struct BestPair {
    best: Option<((i64, usize), (usize, usize))>,
    ties: u32,
}

impl BestPair {
    fn new() -> Self {
        Self { best: None, ties: 0 }
    }

    fn offer<R: Rng + ?Sized>(&mut self, key: (i64, usize), pair: (usize, usize), rng: &mut R) {
        match self.best {
            Some((best_key, _)) if key > best_key => {}
            Some((best_key, _)) if key == best_key => {
                self.ties += 1;
                if rng.gen_range(0..self.ties) == 0 {
                    self.best = Some((key, pair));
                }
            }
            _ => {
                self.best = Some((key, pair));
                self.ties = 1;
            }
        }
    }

    fn into_candidate(self, team_a: usize, team_b: usize) -> Option<SwapCandidate> {
        self.best.map(|(_, (player_a, player_b))| SwapCandidate {
            team_a,
            player_a,
            team_b,
            player_b,
        })
    }
}

// ============================================================================
// Exhaustive search
// ============================================================================

/// Every cross-team player pair, each unordered team pair once.
///
/// Quadratic in players per round; intended as a reference for small
/// rosters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSearch;

impl CandidateStrategy for ExhaustiveSearch {
    fn candidates<R: Rng + ?Sized>(&self, teams: &TeamSet, _rng: &mut R) -> Vec<SwapCandidate> {
        let mut candidates = Vec::new();
        for team_a in 0..teams.len() {
            for team_b in team_a + 1..teams.len() {
                for player_a in 0..teams.team(team_a).len() {
                    for player_b in 0..teams.team(team_b).len() {
                        candidates.push(SwapCandidate {
                            team_a,
                            player_a,
                            team_b,
                            player_b,
                        });
                    }
                }
            }
        }
        candidates
    }
}
