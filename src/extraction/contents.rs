//! Structured `contents.content` fallback strategy.
//!
//! Some producers put a single face into the message's structured side
//! payload instead of the text. This yields a one-value candidate that the
//! caller can combine with neighbouring messages.

use crate::core::{ContentValue, DiceValue, Message};
use crate::extraction::traits::{Extraction, ExtractionSource, ExtractionStrategy};

/// Strategy reading a plain face from `contents.content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentsFieldStrategy;

impl ContentsFieldStrategy {
    /// Creates a new contents-field strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for ContentsFieldStrategy {
    fn extract(&self, message: &Message) -> Option<Extraction> {
        let face = message
            .contents_value()
            .and_then(ContentValue::as_integer)
            .and_then(|n| DiceValue::try_from(n).ok())?;
        Some(Extraction::new(vec![face], ExtractionSource::ContentsField))
    }

    fn name(&self) -> &'static str {
        "contents"
    }

    fn description(&self) -> &'static str {
        "Single face from the structured contents.content field"
    }
}
