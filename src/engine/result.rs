//! Classified Niu Niu outcomes.

use crate::core::{DiceSequence, DiceValue};
use crate::engine::combinations::Split;
use serde::Serialize;
use std::fmt;

/// Comparison value shared by `Baozi` and `NiuNiu`.
pub const TOP_VALUE: u8 = 10;

/// Remainder of a plain `Niu` hand, in 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct NiuPoints(u8);

impl NiuPoints {
    /// Creates points, returning `None` outside 1..=9.
    #[must_use]
    pub const fn new(points: u8) -> Option<Self> {
        if points >= 1 && points <= 9 {
            Some(Self(points))
        } else {
            None
        }
    }

    /// Returns the remainder value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<NiuPoints> for u8 {
    fn from(points: NiuPoints) -> Self {
        points.0
    }
}

/// The winning split of a qualifying roll.
///
/// Both groups keep the order the dice were rolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NiuHand {
    /// The three dice summing to a multiple of ten.
    pub combination: [DiceValue; 3],
    /// The two remaining dice.
    pub remaining: [DiceValue; 2],
}

impl NiuHand {
    /// Picks the dice of `split` out of `dice`.
    pub(crate) fn from_split(dice: &DiceSequence, split: &Split) -> Self {
        let v = dice.values();
        Self {
            combination: split.triple.map(|i| v[i]),
            remaining: split.pair.map(|i| v[i]),
        }
    }

    /// Sum of the three combination dice.
    #[must_use]
    pub fn combination_sum(&self) -> u32 {
        self.combination.iter().map(|d| u32::from(d.get())).sum()
    }

    /// Sum of the two remaining dice.
    #[must_use]
    pub fn remaining_sum(&self) -> u32 {
        self.remaining.iter().map(|d| u32::from(d.get())).sum()
    }
}

/// Discriminant of a [`GameResult`], without the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Five of a kind.
    Baozi,
    /// Remaining pair sums to a multiple of ten.
    NiuNiu,
    /// Remaining pair leaves 1..=9.
    Niu,
    /// No triple sums to a multiple of ten.
    NoNiu,
}

/// Outcome of scoring a five-dice roll.
///
/// # Examples
///
/// ```
/// use niuniu_rs::NiuNiuEngine;
///
/// let engine = NiuNiuEngine::new();
/// let result = engine.calculate_result(&[1, 3, 6, 5, 6]).unwrap();
/// assert_eq!(result.value(), 1);
/// assert_eq!(result.label(), "牛1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameResult {
    /// Five identical faces. Outranks everything, including `NiuNiu`.
    Baozi,
    /// A qualifying triple whose remaining pair is also a multiple of ten.
    NiuNiu {
        /// The split that produced the result.
        hand: NiuHand,
    },
    /// A qualifying triple whose remaining pair leaves `points`.
    Niu {
        /// Remainder of the pair sum modulo ten.
        points: NiuPoints,
        /// The split that produced the result.
        hand: NiuHand,
    },
    /// No qualifying triple.
    NoNiu,
}

impl GameResult {
    /// Classifies a hand whose combination already sums to a multiple of ten.
    ///
    /// The remainder of the pair sum decides between `NiuNiu` (0) and
    /// `Niu` (1..=9).
    pub(crate) fn from_qualifying(hand: NiuHand) -> Self {
        match hand.remaining_sum() % 10 {
            0 => Self::NiuNiu { hand },
            // remainder is 1..=9 here
            #[allow(clippy::cast_possible_truncation)]
            r => Self::Niu {
                points: NiuPoints(r as u8),
                hand,
            },
        }
    }

    /// Comparison value: 10 for `Baozi`/`NiuNiu`, the points for `Niu`, 0 for `NoNiu`.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Baozi | Self::NiuNiu { .. } => TOP_VALUE,
            Self::Niu { points, .. } => points.get(),
            Self::NoNiu => 0,
        }
    }

    /// Returns the discriminant.
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Baozi => ResultKind::Baozi,
            Self::NiuNiu { .. } => ResultKind::NiuNiu,
            Self::Niu { .. } => ResultKind::Niu,
            Self::NoNiu => ResultKind::NoNiu,
        }
    }

    /// Returns the winning split, if the roll qualified.
    #[must_use]
    pub const fn hand(&self) -> Option<&NiuHand> {
        match self {
            Self::NiuNiu { hand } | Self::Niu { hand, .. } => Some(hand),
            Self::Baozi | Self::NoNiu => None,
        }
    }

    /// Returns `true` for five of a kind.
    #[must_use]
    pub const fn is_baozi(&self) -> bool {
        matches!(self, Self::Baozi)
    }

    /// Display label used in chat-log reports (`豹子`, `牛牛`, `牛N`, `没牛`).
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Baozi => "豹子".to_string(),
            Self::NiuNiu { .. } => "牛牛".to_string(),
            Self::Niu { points, .. } => format!("牛{}", points.get()),
            Self::NoNiu => "没牛".to_string(),
        }
    }

    /// Report points for a single game.
    ///
    /// Baozi 5, NiuNiu 3, Niu 7..=9 2, Niu 1..=6 1, NoNiu 0.
    #[must_use]
    pub const fn score_points(&self) -> u8 {
        match self {
            Self::Baozi => 5,
            Self::NiuNiu { .. } => 3,
            Self::Niu { points, .. } if points.get() >= 7 => 2,
            Self::Niu { .. } => 1,
            Self::NoNiu => 0,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())?;
        if let Some(hand) = self.hand() {
            let [a, b, c] = hand.combination;
            let [d, e] = hand.remaining;
            write!(f, " ({a}+{b}+{c} | {d}+{e})")?;
        }
        Ok(())
    }
}
