//! Unicode die-face glyph strategy.
//!
//! Reads `⚀`..`⚅` (U+2680..=U+2685) from the message content, left to
//! right. Five glyphs make a roll; extra glyphs after the fifth are ignored
//! and fewer than five yield nothing.

use crate::core::{DICE_COUNT, DiceValue, FIRST_DIE_GLYPH, LAST_DIE_GLYPH, Message};
use crate::extraction::traits::{Extraction, ExtractionSource, ExtractionStrategy};
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

#[allow(clippy::expect_used)]
fn glyph_regex() -> &'static Regex {
    static GLYPH: OnceLock<Regex> = OnceLock::new();
    GLYPH.get_or_init(|| {
        Regex::new(&format!("[{FIRST_DIE_GLYPH}-{LAST_DIE_GLYPH}]")).expect("valid regex")
    })
}

/// Strategy reading Unicode die-face glyphs.
///
/// # Examples
///
/// ```
/// use niuniu_rs::core::Message;
/// use niuniu_rs::extraction::{ExtractionStrategy, GlyphStrategy};
///
/// let strategy = GlyphStrategy::new();
/// let found = strategy.extract(&Message::text("来玩牛牛 ⚅⚄⚃⚂⚁⚀")).unwrap();
/// assert_eq!(found.faces(), vec![6, 5, 4, 3, 2]);
///
/// assert!(strategy.extract(&Message::text("⚀⚁⚂⚃")).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphStrategy;

impl GlyphStrategy {
    /// Creates a new glyph strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extracts the first five die faces from `content`.
    ///
    /// Any matched character that is not a recognized face rejects the whole
    /// content instead of shortening the roll.
    #[must_use]
    pub fn extract_from(&self, content: &str) -> Option<Vec<DiceValue>> {
        let matches: Vec<&str> = glyph_regex()
            .find_iter(content)
            .take(DICE_COUNT)
            .map(|m| m.as_str())
            .collect();

        if matches.len() < DICE_COUNT {
            trace!(found = matches.len(), "too few die glyphs");
            return None;
        }

        matches
            .into_iter()
            .map(|glyph| glyph.chars().next().and_then(DiceValue::from_glyph))
            .collect()
    }
}

impl ExtractionStrategy for GlyphStrategy {
    fn extract(&self, message: &Message) -> Option<Extraction> {
        self.extract_from(&message.content)
            .map(|values| Extraction::new(values, ExtractionSource::Glyph))
    }

    fn name(&self) -> &'static str {
        "glyph"
    }

    fn description(&self) -> &'static str {
        "Unicode die-face glyphs (U+2680..U+2685), first five in order"
    }
}
