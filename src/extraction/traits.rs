//! Extraction strategy trait and its output.
//!
//! Each message encoding has its own strategy; the pipeline runs them in
//! order and keeps the first one that finds anything.

use crate::core::{DICE_COUNT, DiceSequence, DiceValue, Message};
use serde::Serialize;

/// Which strategy produced an [`Extraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// Unicode die-face glyphs in the content.
    Glyph,
    /// `<gameext type="2" content="..">` tags in the content.
    GameExt,
    /// The structured `contents.content` field.
    ContentsField,
}

/// Candidate dice found in one message.
///
/// The glyph strategy always yields five values; the others may yield fewer
/// (a single-die message is common), so callers must check the length or
/// use [`Extraction::into_sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Faces in order of appearance.
    pub values: Vec<DiceValue>,
    /// Strategy that produced the values.
    pub source: ExtractionSource,
}

impl Extraction {
    /// Creates an extraction.
    #[must_use]
    pub const fn new(values: Vec<DiceValue>, source: ExtractionSource) -> Self {
        Self { values, source }
    }

    /// Number of candidate faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no face was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the candidate is a complete five-dice roll.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.len() == DICE_COUNT
    }

    /// Raw face values.
    #[must_use]
    pub fn faces(&self) -> Vec<u8> {
        self.values.iter().map(|v| v.get()).collect()
    }

    /// Converts a complete candidate into a [`DiceSequence`].
    ///
    /// Returns `None` unless exactly five faces were found.
    #[must_use]
    pub fn into_sequence(self) -> Option<DiceSequence> {
        DiceSequence::from_values(&self.values).ok()
    }
}

/// Trait for turning one message into candidate dice.
///
/// Implementations must be `Send + Sync` so a pipeline can be shared across
/// rayon workers, and must never panic on malformed input: anything they
/// cannot read is reported as `None`.
///
/// # Examples
///
/// ```
/// use niuniu_rs::core::Message;
/// use niuniu_rs::extraction::{ExtractionStrategy, GlyphStrategy};
///
/// let strategy = GlyphStrategy::new();
/// let found = strategy.extract(&Message::text("roll: ⚀⚁⚂⚃⚄")).unwrap();
/// assert_eq!(found.faces(), vec![1, 2, 3, 4, 5]);
/// ```
pub trait ExtractionStrategy: Send + Sync {
    /// Extracts candidate dice from `message`.
    ///
    /// Returns `None` when the strategy finds nothing usable.
    fn extract(&self, message: &Message) -> Option<Extraction>;

    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }
}
