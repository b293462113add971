//! Roster tuning - refine skills by comparing two players of the same role

use crate::player::Role;
use crate::roster::Roster;
use rand::seq::SliceRandom;
use rand::Rng;
use std::str::FromStr;

/// Answer to "which of these two players is stronger?"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    /// The first player is stronger
    First,
    /// The second player is stronger
    Second,
    /// Both are equally strong
    Equal,
    /// Leave both as they are
    NoChange,
}

impl FromStr for Judgement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Judgement::First),
            "b" => Ok(Judgement::Second),
            "eq" => Ok(Judgement::Equal),
            "no" => Ok(Judgement::NoChange),
            other => Err(format!("Unknown judgement: {}", other)),
        }
    }
}

/// Pick two distinct players sharing a role, uniformly among roles with at
/// least two players.
///
/// Returns roster indices, or `None` when no role has two players.
pub fn pick_same_role_pair<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Option<(usize, usize)> {
    let by_role: Vec<Vec<usize>> = Role::ALL
        .iter()
        .map(|&role| {
            roster
                .players()
                .iter()
                .enumerate()
                .filter(|(_, p)| p.role == role)
                .map(|(i, _)| i)
                .collect::<Vec<usize>>()
        })
        .filter(|indices| indices.len() >= 2)
        .collect();

    let indices = by_role.choose(rng)?;
    let mut pair = indices.choose_multiple(rng, 2);
    let first = *pair.next()?;
    let second = *pair.next()?;
    Some((first, second))
}

/// Apply a judgement to players `first` and `second`.
///
/// - `First`/`Second`: if the stored skills contradict the answer, the two
///   skills are exchanged.
/// - `Equal`: both get the rounded mean of their skills.
/// - `NoChange`: nothing happens.
///
/// Returns whether the roster changed.
pub fn apply_judgement(roster: &mut Roster, first: usize, second: usize, judgement: Judgement) -> bool {
    let a = roster.players()[first].skill;
    let b = roster.players()[second].skill;

    match judgement {
        Judgement::First if a < b => {
            roster.set_skill(first, b);
            roster.set_skill(second, a);
            true
        }
        Judgement::Second if b < a => {
            roster.set_skill(first, b);
            roster.set_skill(second, a);
            true
        }
        Judgement::Equal => {
            let avg = ((a as f64 + b as f64) * 0.5).round() as u32;
            if avg == a && avg == b {
                return false;
            }
            roster.set_skill(first, avg);
            roster.set_skill(second, avg);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster() -> Roster {
        Roster::new(vec![
            Player::new("G1", Role::Goalie, 70),
            Player::new("D1", Role::Defender, 60),
            Player::new("D2", Role::Defender, 80),
            Player::new("S1", Role::Striker, 75),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_judgement() {
        assert_eq!("a".parse::<Judgement>(), Ok(Judgement::First));
        assert_eq!(" B ".parse::<Judgement>(), Ok(Judgement::Second));
        assert_eq!("eq".parse::<Judgement>(), Ok(Judgement::Equal));
        assert_eq!("no".parse::<Judgement>(), Ok(Judgement::NoChange));
        assert!("maybe".parse::<Judgement>().is_err());
    }

    #[test]
    fn test_pick_pair_only_from_roles_with_two_players() {
        let roster = roster();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..20 {
            let (i, j) = pick_same_role_pair(&roster, &mut rng).unwrap();
            assert_ne!(i, j);
            assert_eq!(roster.players()[i].role, Role::Defender);
            assert_eq!(roster.players()[j].role, Role::Defender);
        }
    }

    #[test]
    fn test_pick_pair_none_without_shared_role() {
        let roster = Roster::new(vec![
            Player::new("G1", Role::Goalie, 70),
            Player::new("D1", Role::Defender, 60),
        ])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pick_same_role_pair(&roster, &mut rng), None);
    }

    #[test]
    fn test_first_stronger_swaps_when_contradicted() {
        let mut roster = roster();
        assert!(apply_judgement(&mut roster, 1, 2, Judgement::First));
        assert_eq!(roster.players()[1].skill, 80);
        assert_eq!(roster.players()[2].skill, 60);

        // Already consistent now
        assert!(!apply_judgement(&mut roster, 1, 2, Judgement::First));
    }

    #[test]
    fn test_second_stronger_keeps_consistent_order() {
        let mut roster = roster();
        assert!(!apply_judgement(&mut roster, 1, 2, Judgement::Second));
        assert_eq!(roster.players()[1].skill, 60);
    }

    #[test]
    fn test_equal_sets_mean() {
        let mut roster = roster();
        assert!(apply_judgement(&mut roster, 1, 2, Judgement::Equal));
        assert_eq!(roster.players()[1].skill, 70);
        assert_eq!(roster.players()[2].skill, 70);
        assert!(!apply_judgement(&mut roster, 1, 2, Judgement::Equal));
    }

    #[test]
    fn test_no_change() {
        let mut roster = roster();
        assert!(!apply_judgement(&mut roster, 1, 2, Judgement::NoChange));
        assert_eq!(roster.players()[2].skill, 80);
    }
}
