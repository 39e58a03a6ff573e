//! Niu Niu scoring engine.
//!
//! Classifies a five-dice roll and ranks two classifications:
//!
//! - **Baozi**: five identical faces, checked before anything else
//! - **Niu / NiuNiu**: some three dice sum to a multiple of ten; the other
//!   two give the points (a multiple of ten counts as 10, i.e. NiuNiu)
//! - **NoNiu**: no three dice sum to a multiple of ten
//!
//! The engine is stateless; one instance can be shared across threads.

pub mod combinations;
pub mod result;

pub use combinations::{SPLITS, Split};
pub use result::{GameResult, NiuHand, NiuPoints, ResultKind, TOP_VALUE};

use crate::core::DiceSequence;
use crate::error::Result;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Outcome of [`NiuNiuEngine::winner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// The first roll wins.
    First,
    /// The second roll wins.
    Second,
    /// Neither roll outranks the other.
    Tie,
}

impl From<Ordering> for Winner {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::First,
            Ordering::Less => Self::Second,
            Ordering::Equal => Self::Tie,
        }
    }
}

/// Stateless Niu Niu rule engine.
///
/// # Examples
///
/// ```
/// use niuniu_rs::{GameResult, NiuNiuEngine, Winner};
///
/// let engine = NiuNiuEngine::new();
///
/// let result = engine.calculate_result(&[3, 2, 5, 6, 4]).unwrap();
/// assert!(matches!(result, GameResult::NiuNiu { .. }));
///
/// let winner = engine.winner(&[6, 6, 6, 6, 6], &[3, 2, 5, 6, 4]).unwrap();
/// assert_eq!(winner, Winner::First);
///
/// assert!(engine.calculate_result(&[1, 2, 3, 4]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NiuNiuEngine;

impl NiuNiuEngine {
    /// Creates a new engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scores raw dice after validating them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSequence`] unless `dice` holds exactly
    /// five values in 1..=6. Nothing is clamped, truncated or padded.
    pub fn calculate_result<T>(&self, dice: &[T]) -> Result<GameResult>
    where
        T: Copy + Into<i64>,
    {
        let sequence = DiceSequence::from_raw(dice)?;
        Ok(self.evaluate(&sequence))
    }

    /// Scores a sequence that is valid by construction.
    #[must_use]
    pub fn evaluate(&self, dice: &DiceSequence) -> GameResult {
        if dice.is_baozi() {
            debug!(dice = %dice, "baozi");
            return GameResult::Baozi;
        }

        let v = dice.values();
        let mut best: Option<GameResult> = None;

        for split in &SPLITS {
            let triple: u32 = split.triple.iter().map(|&i| u32::from(v[i].get())).sum();
            if triple % 10 != 0 {
                continue;
            }
            let candidate = GameResult::from_qualifying(NiuHand::from_split(dice, split));
            trace!(?split, triple, points = candidate.value(), "qualifying split");

            // Strictly greater keeps the first split on ties.
            if best.is_none_or(|top| candidate.value() > top.value()) {
                best = Some(candidate);
            }
        }

        let result = best.unwrap_or(GameResult::NoNiu);
        debug!(dice = %dice, result = %result, "scored roll");
        result
    }

    /// Ranks two results. See [`compare`].
    #[must_use]
    pub fn compare(&self, a: &GameResult, b: &GameResult) -> Ordering {
        compare(a, b)
    }

    /// Scores both rolls and reports which one wins.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSequence`] if either roll is invalid.
    pub fn winner<T>(&self, first: &[T], second: &[T]) -> Result<Winner>
    where
        T: Copy + Into<i64>,
    {
        let a = self.calculate_result(first)?;
        let b = self.calculate_result(second)?;
        Ok(compare(&a, &b).into())
    }

    /// Like [`Self::winner`] for pre-validated sequences.
    #[must_use]
    pub fn winner_of(&self, first: &DiceSequence, second: &DiceSequence) -> Winner {
        compare(&self.evaluate(first), &self.evaluate(second)).into()
    }
}

/// Ranks two results.
///
/// A single `Baozi` beats anything, `NiuNiu` included; two `Baozi` tie
/// regardless of face. Everything else compares by [`GameResult::value`].
///
/// # Examples
///
/// ```
/// use niuniu_rs::{GameResult, compare};
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&GameResult::Baozi, &GameResult::NoNiu), Ordering::Greater);
/// assert_eq!(compare(&GameResult::Baozi, &GameResult::Baozi), Ordering::Equal);
/// ```
#[must_use]
pub fn compare(a: &GameResult, b: &GameResult) -> Ordering {
    match (a.is_baozi(), b.is_baozi()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.value().cmp(&b.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use test_case::test_case;

    fn score(dice: [u8; 5]) -> GameResult {
        NiuNiuEngine::new().calculate_result(&dice).unwrap()
    }

    #[test_case([1, 1, 1, 1, 1] ; "ones")]
    #[test_case([2, 2, 2, 2, 2] ; "twos")]
    #[test_case([5, 5, 5, 5, 5] ; "fives sum to a multiple of ten too")]
    #[test_case([6, 6, 6, 6, 6] ; "sixes")]
    fn test_baozi(dice: [u8; 5]) {
        let result = score(dice);
        assert_eq!(result, GameResult::Baozi);
        assert_eq!(result.value(), 10);
    }

    #[test_case([3, 2, 5, 6, 4] ; "three two five")]
    #[test_case([1, 3, 6, 5, 5] ; "one three six")]
    fn test_niu_niu(dice: [u8; 5]) {
        let result = score(dice);
        assert_eq!(result.kind(), ResultKind::NiuNiu);
        assert_eq!(result.value(), 10);
    }

    #[test_case([1, 4, 5, 2, 3], 5)]
    #[test_case([1, 6, 3, 2, 4], 6)]
    #[test_case([2, 2, 6, 1, 6], 7)]
    #[test_case([1, 3, 6, 2, 6], 8)]
    #[test_case([2, 2, 6, 3, 6], 9)]
    #[test_case([1, 3, 6, 5, 6], 1 ; "pair over ten")]
    #[test_case([1, 4, 5, 6, 6], 2 ; "pair of sixes")]
    fn test_niu_points(dice: [u8; 5], expected: u8) {
        let result = score(dice);
        assert_eq!(result.kind(), ResultKind::Niu);
        assert_eq!(result.value(), expected);
    }

    #[test_case([1, 1, 2, 2, 3])]
    #[test_case([6, 6, 6, 1, 2])]
    fn test_no_niu(dice: [u8; 5]) {
        let result = score(dice);
        assert_eq!(result, GameResult::NoNiu);
        assert_eq!(result.value(), 0);
        assert!(result.hand().is_none());
    }

    #[test]
    fn test_hand_keeps_roll_order() {
        let result = score([3, 2, 5, 6, 4]);
        let hand = result.hand().unwrap();
        assert_eq!(hand.combination.map(|d| d.get()), [3, 2, 5]);
        assert_eq!(hand.remaining.map(|d| d.get()), [6, 4]);
    }

    #[test]
    fn test_qualifying_splits_share_points() {
        // {2,4,4} leaves {3,6}; every qualifying triple sums to exactly 10.
        let result = score([2, 4, 4, 3, 6]);
        assert_eq!(result.value(), 9);
        assert_eq!(result.hand().unwrap().combination_sum(), 10);
    }

    #[test]
    fn test_duplicates_are_distinct_positions() {
        // {4,3,3} qualifies and leaves the two fives.
        let result = score([5, 5, 4, 3, 3]);
        let hand = result.hand().unwrap();
        assert_eq!(hand.combination_sum() % 10, 0);
        assert_eq!(hand.combination.len() + hand.remaining.len(), 5);
    }

    #[test]
    fn test_first_split_wins_ties() {
        // {2,2,6} appears twice (positions 0,1,2 and 0,1,4); the first is kept.
        let result = score([2, 2, 6, 1, 6]);
        let hand = result.hand().unwrap();
        assert_eq!(hand.combination.map(|d| d.get()), [2, 2, 6]);
        assert_eq!(hand.remaining.map(|d| d.get()), [1, 6]);
    }

    #[test_case(&[1, 2, 3, 4] ; "too short")]
    #[test_case(&[1, 2, 3, 4, 5, 6] ; "too long")]
    #[test_case(&[] ; "empty")]
    #[test_case(&[0, 1, 2, 3, 4] ; "zero face")]
    #[test_case(&[1, 2, 3, 4, 7] ; "seven face")]
    fn test_invalid_sequences(dice: &[u8]) {
        let err = NiuNiuEngine::new().calculate_result(dice).unwrap_err();
        assert!(matches!(err, Error::InvalidSequence { .. }));
    }

    #[test]
    fn test_scores_validated_i64_input() {
        let engine = NiuNiuEngine::new();
        let raw: Vec<i64> = vec![3, 2, 5, 6, 4];
        assert!(crate::core::is_valid_dice_sequence(&raw));
        assert_eq!(engine.calculate_result(&raw).unwrap(), score([3, 2, 5, 6, 4]));

        let raw: Vec<i64> = vec![3, 2, 5, 6, 260];
        assert!(!crate::core::is_valid_dice_sequence(&raw));
        assert!(engine.calculate_result(&raw).is_err());
        assert!(engine.winner(&[1i64, 1, 1, 1, 1], &raw).is_err());
    }

    #[test]
    fn test_idempotent() {
        let engine = NiuNiuEngine::new();
        let dice = [2, 2, 6, 3, 6];
        assert_eq!(
            engine.calculate_result(&dice).unwrap(),
            engine.calculate_result(&dice).unwrap()
        );
    }

    #[test]
    fn test_compare_ordering() {
        let ranked = [
            score([6, 6, 6, 6, 6]),
            score([3, 2, 5, 6, 4]),
            score([2, 2, 6, 3, 6]),
            score([1, 4, 5, 2, 3]),
            score([1, 3, 6, 5, 6]),
            score([6, 6, 6, 1, 2]),
        ];
        let labels: Vec<String> = ranked.iter().map(GameResult::label).collect();
        assert_eq!(labels, ["豹子", "牛牛", "牛9", "牛5", "牛1", "没牛"]);

        for pair in ranked.windows(2) {
            assert_eq!(compare(&pair[0], &pair[1]), Ordering::Greater);
            assert_eq!(compare(&pair[1], &pair[0]), Ordering::Less);
        }
    }

    #[test]
    fn test_baozi_beats_niu_niu_despite_equal_value() {
        let baozi = score([1, 1, 1, 1, 1]);
        let niu_niu = score([3, 2, 5, 6, 4]);
        assert_eq!(baozi.value(), niu_niu.value());
        assert_eq!(compare(&baozi, &niu_niu), Ordering::Greater);
        assert_eq!(compare(&score([1, 1, 1, 1, 1]), &score([6, 6, 6, 6, 6])), Ordering::Equal);
    }

    #[test]
    fn test_equal_values_tie() {
        assert_eq!(
            compare(&score([3, 2, 5, 6, 4]), &score([1, 3, 6, 5, 5])),
            Ordering::Equal
        );
        assert_eq!(
            compare(&score([1, 1, 2, 2, 3]), &score([6, 6, 6, 1, 2])),
            Ordering::Equal
        );
    }

    #[test]
    fn test_winner() {
        let engine = NiuNiuEngine::new();
        assert_eq!(engine.winner(&[1, 3, 6, 5, 6], &[2, 2, 6, 3, 6]).unwrap(), Winner::Second);
        assert_eq!(engine.winner(&[2, 2, 6, 3, 6], &[1, 3, 6, 5, 6]).unwrap(), Winner::First);
        assert_eq!(engine.winner(&[3, 2, 5, 6, 4], &[1, 3, 6, 5, 5]).unwrap(), Winner::Tie);
        assert!(engine.winner(&[1, 2, 3], &[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_winner_of_sequences() {
        let engine = NiuNiuEngine::new();
        let a = DiceSequence::from_faces([5, 5, 5, 5, 5]).unwrap();
        let b = DiceSequence::from_faces([3, 2, 5, 6, 4]).unwrap();
        assert_eq!(engine.winner_of(&a, &b), Winner::First);
        assert_eq!(engine.winner_of(&b, &a), Winner::Second);
    }

    #[test]
    fn test_exhaustive_against_brute_force() {
        let engine = NiuNiuEngine::new();
        for a in 1..=6u8 {
            for b in 1..=6u8 {
                for c in 1..=6u8 {
                    for d in 1..=6u8 {
                        for e in 1..=6u8 {
                            let dice = [a, b, c, d, e];
                            let result = engine.calculate_result(&dice).unwrap();
                            assert_eq!(result.value(), brute_force_value(dice), "{dice:?}");
                        }
                    }
                }
            }
        }
    }

    fn brute_force_value(dice: [u8; 5]) -> u8 {
        if dice.iter().all(|&d| d == dice[0]) {
            return 10;
        }
        let total: u8 = dice.iter().sum();
        let mut best = 0;
        for i in 0..5 {
            for j in (i + 1)..5 {
                for k in (j + 1)..5 {
                    if (dice[i] + dice[j] + dice[k]) % 10 == 0 {
                        let rest = (total - dice[i] - dice[j] - dice[k]) % 10;
                        best = best.max(if rest == 0 { 10 } else { rest });
                    }
                }
            }
        }
        best
    }
}
