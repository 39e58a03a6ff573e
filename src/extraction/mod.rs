//! Dice extraction from chat messages.
//!
//! This module provides a trait-based pipeline for finding dice in message
//! records. Strategies run in order and the first one that finds anything
//! wins:
//!
//! - **Glyph**: five Unicode die faces (`⚀`..`⚅`) in the text
//! - **`GameExt`**: `<gameext type="2" content="..">` tags, remapped to faces
//! - **Contents**: a single face in the structured `contents.content` field
//!
//! Extraction never fails. A message without usable dice yields `None`;
//! partial candidates (fewer than five faces) are returned as-is for the
//! caller to accumulate or discard.

pub mod contents;
pub mod gameext;
pub mod glyph;
pub mod parallel;
pub mod traits;

pub use contents::ContentsFieldStrategy;
pub use gameext::{GameExtDecoding, GameExtStrategy, REMAP_TABLE};
pub use glyph::GlyphStrategy;
pub use parallel::ParallelExtractor;
pub use traits::{Extraction, ExtractionSource, ExtractionStrategy};

use crate::core::{DiceSequence, Message};
use crate::error::{ExtractionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Strategy names in default pipeline order.
pub const DEFAULT_STRATEGIES: [&str; 3] = ["glyph", "gameext", "contents"];

/// Creates a strategy by name.
///
/// # Arguments
///
/// * `name` - Strategy name: "glyph", "gameext", or "contents".
/// * `decoding` - Value decoding used by the "gameext" strategy.
///
/// # Errors
///
/// Returns [`ExtractionError::UnknownStrategy`] if the name is not recognized.
pub fn create_strategy(
    name: &str,
    decoding: GameExtDecoding,
) -> Result<Box<dyn ExtractionStrategy>> {
    match name.to_lowercase().as_str() {
        "glyph" => Ok(Box::new(GlyphStrategy::new())),
        "gameext" => Ok(Box::new(GameExtStrategy::with_decoding(decoding))),
        "contents" => Ok(Box::new(ContentsFieldStrategy::new())),
        _ => Err(ExtractionError::UnknownStrategy {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available extraction strategy names.
#[must_use]
pub fn available_strategies() -> Vec<&'static str> {
    DEFAULT_STRATEGIES.to_vec()
}

/// Configuration for a [`DiceExtractor`].
///
/// # Examples
///
/// ```
/// use niuniu_rs::extraction::{DiceExtractor, ExtractorConfig, GameExtDecoding};
///
/// let config = ExtractorConfig::new()
///     .strategies(&["gameext", "glyph"])
///     .decoding(GameExtDecoding::RemapOnly)
///     .message_type(47);
/// let extractor = DiceExtractor::from_config(&config).unwrap();
/// assert_eq!(extractor.strategy_names(), vec!["gameext", "glyph"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Strategy names, in the order they are tried.
    pub strategies: Vec<String>,

    /// Value decoding for game-extension tags.
    pub decoding: GameExtDecoding,

    /// Only messages of this type are examined (`None` = all types).
    pub message_type: Option<i64>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strategies: DEFAULT_STRATEGIES.iter().map(ToString::to_string).collect(),
            decoding: GameExtDecoding::default(),
            message_type: None,
        }
    }
}

impl ExtractorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy order.
    #[must_use]
    pub fn strategies(mut self, names: &[&str]) -> Self {
        self.strategies = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Sets the game-extension decoding.
    #[must_use]
    pub const fn decoding(mut self, decoding: GameExtDecoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Restricts extraction to one message type.
    #[must_use]
    pub const fn message_type(mut self, msg_type: i64) -> Self {
        self.message_type = Some(msg_type);
        self
    }

    /// Examines messages of every type.
    #[must_use]
    pub const fn any_message_type(mut self) -> Self {
        self.message_type = None;
        self
    }
}

/// Ordered extraction pipeline.
///
/// # Examples
///
/// ```
/// use niuniu_rs::core::{ContentValue, Message};
/// use niuniu_rs::extraction::{DiceExtractor, ExtractionSource};
///
/// let extractor = DiceExtractor::new();
///
/// let found = extractor.extract(&Message::text("⚂⚁⚄⚅⚃")).unwrap();
/// assert_eq!(found.source, ExtractionSource::Glyph);
///
/// let single = Message::new(47, "").with_contents(ContentValue::from(4));
/// assert_eq!(extractor.extract(&single).unwrap().faces(), vec![4]);
///
/// assert!(extractor.extract(&Message::text("no dice here")).is_none());
/// ```
pub struct DiceExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    message_type: Option<i64>,
}

impl Default for DiceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DiceExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiceExtractor")
            .field("strategies", &self.strategy_names())
            .field("message_type", &self.message_type)
            .finish()
    }
}

impl DiceExtractor {
    /// Creates the default pipeline: glyph, gameext, contents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(GlyphStrategy::new()),
                Box::new(GameExtStrategy::new()),
                Box::new(ContentsFieldStrategy::new()),
            ],
            message_type: None,
        }
    }

    /// Builds a pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown strategy names or an empty strategy list.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        let strategies = config
            .strategies
            .iter()
            .map(|name| create_strategy(name, config.decoding))
            .collect::<Result<Vec<_>>>()?;
        let mut extractor = Self::with_strategies(strategies)?;
        extractor.message_type = config.message_type;
        Ok(extractor)
    }

    /// Builds a pipeline from explicit strategies, tried in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::EmptyPipeline`] if `strategies` is empty.
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Result<Self> {
        if strategies.is_empty() {
            return Err(ExtractionError::EmptyPipeline.into());
        }
        Ok(Self {
            strategies,
            message_type: None,
        })
    }

    /// Names of the configured strategies, in order.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Extracts candidate dice from `message`.
    ///
    /// Returns the first non-empty candidate, or `None`.
    #[must_use]
    pub fn extract(&self, message: &Message) -> Option<Extraction> {
        if let Some(expected) = self.message_type
            && message.msg_type != expected
        {
            trace!(msg_type = message.msg_type, expected, "skipping message type");
            return None;
        }
        self.run(message)
    }

    /// Extracts candidate dice from bare text, ignoring the type filter.
    #[must_use]
    pub fn extract_text(&self, content: &str) -> Option<Extraction> {
        self.run(&Message::text(content))
    }

    /// Extracts a complete five-dice roll, or `None`.
    #[must_use]
    pub fn extract_sequence(&self, message: &Message) -> Option<DiceSequence> {
        self.extract(message).and_then(Extraction::into_sequence)
    }

    fn run(&self, message: &Message) -> Option<Extraction> {
        let found = self
            .strategies
            .iter()
            .find_map(|s| s.extract(message).filter(|e| !e.is_empty()));
        if let Some(extraction) = &found {
            debug!(
                seq = message.seq,
                source = ?extraction.source,
                count = extraction.len(),
                "extracted dice"
            );
        }
        found
    }
}

/// Extracts a complete five-dice roll from text using the default pipeline.
///
/// # Examples
///
/// ```
/// use niuniu_rs::extract_dice;
///
/// let seq = extract_dice("我的骰子 ⚀⚁⚂⚃⚄⚅").unwrap();
/// assert_eq!(seq.faces(), [1, 2, 3, 4, 5]);
/// assert!(extract_dice("⚀⚁").is_none());
/// ```
#[must_use]
pub fn extract_dice(content: &str) -> Option<DiceSequence> {
    DiceExtractor::new()
        .extract_text(content)
        .and_then(Extraction::into_sequence)
}
