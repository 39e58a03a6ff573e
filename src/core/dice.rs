//! Dice faces and five-dice sequences.
//!
//! [`DiceValue`] and [`DiceSequence`] can only hold valid data: every
//! constructor checks the 1..=6 range and the exact length of five, so the
//! engine can score a [`DiceSequence`] without re-validating it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of dice in a Niu Niu roll.
pub const DICE_COUNT: usize = 5;

/// First code point of the Unicode die-face block (`⚀`, U+2680).
pub const FIRST_DIE_GLYPH: char = '\u{2680}';

/// Last code point of the Unicode die-face block (`⚅`, U+2685).
pub const LAST_DIE_GLYPH: char = '\u{2685}';

/// A single die face in 1..=6.
///
/// # Examples
///
/// ```
/// use niuniu_rs::DiceValue;
///
/// let four = DiceValue::try_from(4u8).unwrap();
/// assert_eq!(four.get(), 4);
/// assert_eq!(four.glyph(), '⚃');
/// assert!(DiceValue::try_from(7u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    /// Smallest face value.
    pub const MIN: u8 = 1;

    /// Largest face value.
    pub const MAX: u8 = 6;

    /// Creates a die face, returning `None` outside 1..=6.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the face value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the Unicode die-face glyph for this value.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self.0 {
            1 => FIRST_DIE_GLYPH,
            2 => '\u{2681}',
            3 => '\u{2682}',
            4 => '\u{2683}',
            5 => '\u{2684}',
            _ => LAST_DIE_GLYPH,
        }
    }

    /// Maps a die-face glyph (`⚀`..`⚅`) to its value.
    #[must_use]
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            FIRST_DIE_GLYPH => Some(Self(1)),
            '\u{2681}' => Some(Self(2)),
            '\u{2682}' => Some(Self(3)),
            '\u{2683}' => Some(Self(4)),
            '\u{2684}' => Some(Self(5)),
            LAST_DIE_GLYPH => Some(Self(6)),
            _ => None,
        }
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or_else(|| Error::invalid_value(value))
    }
}

impl TryFrom<i64> for DiceValue {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::invalid_value(value))
    }
}

impl FromStr for DiceValue {
    type Err = Error;

    /// Parses a decimal face value, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| Error::invalid_value(s))
            .and_then(Self::try_from)
    }
}

impl From<DiceValue> for u8 {
    fn from(value: DiceValue) -> Self {
        value.0
    }
}

impl fmt::Display for DiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exactly five die faces in roll order.
///
/// Order reflects how the dice were rolled; scoring ignores it.
///
/// # Examples
///
/// ```
/// use niuniu_rs::DiceSequence;
///
/// let seq = DiceSequence::from_faces([3, 2, 5, 6, 4]).unwrap();
/// assert_eq!(seq.faces(), [3, 2, 5, 6, 4]);
/// assert_eq!(seq.to_string(), "3,2,5,6,4");
///
/// assert!(DiceSequence::try_from(&[1u8, 2, 3, 4][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct DiceSequence([DiceValue; DICE_COUNT]);

impl DiceSequence {
    /// Creates a sequence from five already-validated faces.
    #[must_use]
    pub const fn new(values: [DiceValue; DICE_COUNT]) -> Self {
        Self(values)
    }

    /// Creates a sequence from five raw faces.
    pub fn from_faces(faces: [u8; DICE_COUNT]) -> Result<Self> {
        Self::try_from(&faces[..])
    }

    /// Creates a sequence from raw integers of any width.
    ///
    /// Accepts exactly the slices [`is_valid_dice_sequence`] accepts.
    pub fn from_raw<T>(values: &[T]) -> Result<Self>
    where
        T: Copy + Into<i64>,
    {
        sequence_from_raw(values.len(), values.iter().map(|&v| v.into()))
    }

    /// Creates a sequence from a slice of faces, which must hold exactly five.
    pub fn from_values(values: &[DiceValue]) -> Result<Self> {
        <[DiceValue; DICE_COUNT]>::try_from(values)
            .map(Self)
            .map_err(|_| Error::invalid_sequence(values.len(), "expected exactly 5 dice"))
    }

    /// Returns the faces in roll order.
    #[must_use]
    pub const fn values(&self) -> &[DiceValue; DICE_COUNT] {
        &self.0
    }

    /// Returns the raw face values in roll order.
    #[must_use]
    pub fn faces(&self) -> [u8; DICE_COUNT] {
        self.0.map(DiceValue::get)
    }

    /// Returns the face at `index` (0-based roll position).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<DiceValue> {
        self.0.get(index).copied()
    }

    /// Iterates over the faces in roll order.
    pub fn iter(&self) -> impl Iterator<Item = DiceValue> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all five faces.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|v| u32::from(v.get())).sum()
    }

    /// Returns `true` when all five faces are identical.
    #[must_use]
    pub fn is_baozi(&self) -> bool {
        let first = self.0[0];
        self.0.iter().all(|&v| v == first)
    }

    /// Renders the sequence as die-face glyphs, e.g. `⚂⚁⚄⚅⚃`.
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|v| v.glyph()).collect()
    }
}

/// Converts an iterator of raw integers into a sequence, checking length first.
fn sequence_from_raw<I>(len: usize, values: I) -> Result<DiceSequence>
where
    I: IntoIterator<Item = i64>,
{
    if len != DICE_COUNT {
        return Err(Error::invalid_sequence(len, "expected exactly 5 dice"));
    }
    let faces = values
        .into_iter()
        .map(DiceValue::try_from)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| Error::invalid_sequence(len, e.to_string()))?;
    DiceSequence::from_values(&faces)
}

impl TryFrom<&[u8]> for DiceSequence {
    type Error = Error;

    fn try_from(values: &[u8]) -> Result<Self> {
        sequence_from_raw(values.len(), values.iter().map(|&v| i64::from(v)))
    }
}

impl TryFrom<&[i64]> for DiceSequence {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self> {
        sequence_from_raw(values.len(), values.iter().copied())
    }
}

impl TryFrom<Vec<i64>> for DiceSequence {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl TryFrom<[u8; DICE_COUNT]> for DiceSequence {
    type Error = Error;

    fn try_from(faces: [u8; DICE_COUNT]) -> Result<Self> {
        Self::from_faces(faces)
    }
}

impl From<DiceSequence> for Vec<u8> {
    fn from(seq: DiceSequence) -> Self {
        seq.faces().to_vec()
    }
}

impl fmt::Display for DiceSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Checks whether `sequence` is a scorable dice roll.
///
/// A sequence is valid iff it has exactly five elements and each is in
/// 1..=6. This is the gate the engine trusts; it never panics.
///
/// # Examples
///
/// ```
/// use niuniu_rs::is_valid_dice_sequence;
///
/// assert!(is_valid_dice_sequence(&[3, 1, 4, 1, 5]));
/// assert!(!is_valid_dice_sequence(&[1, 2, 3, 4, 7]));
/// assert!(!is_valid_dice_sequence(&[1, 2, 3, 4]));
/// ```
#[must_use]
pub fn is_valid_dice_sequence(sequence: &[i64]) -> bool {
    sequence.len() == DICE_COUNT
        && sequence
            .iter()
            .all(|&v| (i64::from(DiceValue::MIN)..=i64::from(DiceValue::MAX)).contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_value_range() {
        assert!(DiceValue::new(0).is_none());
        assert!(DiceValue::new(7).is_none());
        for v in 1..=6u8 {
            assert_eq!(DiceValue::new(v).map(DiceValue::get), Some(v));
        }
    }

    #[test]
    fn test_dice_value_try_from_i64() {
        assert!(DiceValue::try_from(3i64).is_ok());
        assert!(DiceValue::try_from(-1i64).is_err());
        assert!(DiceValue::try_from(256i64 + 3).is_err());
    }

    #[test]
    fn test_dice_value_from_str() {
        assert_eq!(" 5 ".parse::<DiceValue>().unwrap().get(), 5);
        assert!("five".parse::<DiceValue>().is_err());
        assert!("9".parse::<DiceValue>().is_err());
        assert!("2.0".parse::<DiceValue>().is_err());
    }

    #[test]
    fn test_glyph_mapping_is_bijective() {
        for v in 1..=6u8 {
            let value = DiceValue::new(v).unwrap();
            assert_eq!(DiceValue::from_glyph(value.glyph()), Some(value));
        }
        assert_eq!(DiceValue::from_glyph('6'), None);
        assert_eq!(DiceValue::from_glyph('\u{2686}'), None);
    }

    #[test]
    fn test_sequence_length_checked() {
        assert!(DiceSequence::try_from(&[1u8, 2, 3, 4][..]).is_err());
        assert!(DiceSequence::try_from(&[1u8, 2, 3, 4, 5, 6][..]).is_err());
        assert!(DiceSequence::try_from(&[1u8, 2, 3, 4, 5][..]).is_ok());
    }

    #[test]
    fn test_sequence_rejects_out_of_range() {
        let err = DiceSequence::try_from(&[0i64, 1, 2, 3, 4][..]).unwrap_err();
        assert!(matches!(err, Error::InvalidSequence { len: 5, .. }));
    }

    #[test]
    fn test_sequence_helpers() {
        let seq = DiceSequence::from_faces([6, 6, 6, 6, 6]).unwrap();
        assert!(seq.is_baozi());
        assert_eq!(seq.sum(), 30);
        assert_eq!(seq.to_glyphs(), "⚅⚅⚅⚅⚅");

        let seq = DiceSequence::from_faces([1, 2, 3, 4, 5]).unwrap();
        assert!(!seq.is_baozi());
        assert_eq!(seq.get(4).map(DiceValue::get), Some(5));
        assert_eq!(seq.get(5), None);
    }

    #[test]
    fn test_sequence_serde() {
        let seq: DiceSequence = serde_json::from_str("[1,3,6,5,6]").unwrap();
        assert_eq!(seq.faces(), [1, 3, 6, 5, 6]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,3,6,5,6]");

        assert!(serde_json::from_str::<DiceSequence>("[1,3,6,5]").is_err());
        assert!(serde_json::from_str::<DiceSequence>("[1,3,6,5,7]").is_err());
    }

    #[test]
    fn test_is_valid_dice_sequence() {
        assert!(is_valid_dice_sequence(&[1, 2, 3, 4, 5]));
        assert!(is_valid_dice_sequence(&[6, 6, 6, 6, 6]));
        assert!(!is_valid_dice_sequence(&[0, 1, 2, 3, 4]));
        assert!(!is_valid_dice_sequence(&[1, 2, 3, 4, 5, 6]));
        assert!(!is_valid_dice_sequence(&[]));
    }

    #[test]
    fn test_from_raw_agrees_with_validator() {
        let cases: [&[i64]; 5] = [
            &[3, 2, 5, 6, 4],
            &[1, 2, 3, 4, 7],
            &[1, 2, 3, 4, -1],
            &[1, 2, 3, 4],
            &[i64::MAX, 1, 1, 1, 1],
        ];
        for raw in cases {
            assert_eq!(DiceSequence::from_raw(raw).is_ok(), is_valid_dice_sequence(raw));
        }
        let seq = DiceSequence::from_raw(&[3u8, 2, 5, 6, 4]).unwrap();
        assert_eq!(seq, DiceSequence::from_raw(&[3i64, 2, 5, 6, 4]).unwrap());
    }

    #[test]
    fn test_glyph_block_bounds() {
        assert_eq!(DiceValue::new(1).map(DiceValue::glyph), Some(FIRST_DIE_GLYPH));
        assert_eq!(DiceValue::new(6).map(DiceValue::glyph), Some(LAST_DIE_GLYPH));
        assert_eq!(DiceValue::from_glyph(FIRST_DIE_GLYPH).map(DiceValue::get), Some(1));
        assert_eq!(DiceValue::from_glyph(LAST_DIE_GLYPH).map(DiceValue::get), Some(6));
    }
}
