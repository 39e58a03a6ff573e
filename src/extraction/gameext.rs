//! Game-extension tag strategy.
//!
//! Chat clients embed a dice throw as
//! `<gameext type="2" content="V"></gameext>`, where `V` is the client's raw
//! value. The raw value space is offset from the face value by three
//! (`"4"` is face 1, ..., `"9"` is face 6), so values go through a fixed
//! remap table.

use crate::core::{DiceValue, Message};
use crate::extraction::traits::{Extraction, ExtractionSource, ExtractionStrategy};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// `type` attribute value marking a dice throw.
pub const DICE_TAG_TYPE: &str = "2";

/// Raw tag value to face value.
pub const REMAP_TABLE: [(&str, u8); 6] = [
    ("4", 1),
    ("5", 2),
    ("6", 3),
    ("7", 4),
    ("8", 5),
    ("9", 6),
];

#[allow(clippy::expect_used)]
fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<gameext\b([^>]*?)/?>").expect("valid regex"))
}

#[allow(clippy::expect_used)]
fn attr_regex() -> &'static Regex {
    static ATTR: OnceLock<Regex> = OnceLock::new();
    ATTR.get_or_init(|| Regex::new(r#"([A-Za-z_][\w.-]*)\s*=\s*"([^"]*)""#).expect("valid regex"))
}

/// How a tag's raw `content` value becomes a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameExtDecoding {
    /// Integers already in 1..=6 are used as-is; other values go through
    /// [`REMAP_TABLE`].
    #[default]
    PassThroughFirst,
    /// Only [`REMAP_TABLE`] applies, so `"4"` is face 1 and `"1"` is dropped.
    RemapOnly,
}

impl GameExtDecoding {
    /// Decodes one raw tag value, or `None` if it names no face.
    ///
    /// # Examples
    ///
    /// ```
    /// use niuniu_rs::extraction::GameExtDecoding;
    ///
    /// let pass = GameExtDecoding::PassThroughFirst;
    /// assert_eq!(pass.decode("3").map(|v| v.get()), Some(3));
    /// assert_eq!(pass.decode("9").map(|v| v.get()), Some(6));
    /// assert_eq!(pass.decode("x"), None);
    ///
    /// let remap = GameExtDecoding::RemapOnly;
    /// assert_eq!(remap.decode("4").map(|v| v.get()), Some(1));
    /// assert_eq!(remap.decode("3"), None);
    /// ```
    #[must_use]
    pub fn decode(self, raw: &str) -> Option<DiceValue> {
        let parsed = raw.trim().parse::<i64>().ok();

        if self == Self::PassThroughFirst
            && let Some(face) = parsed.and_then(|n| DiceValue::try_from(n).ok())
        {
            return Some(face);
        }

        remap(raw).or_else(|| parsed.and_then(|n| remap(&n.to_string())))
    }
}

/// Looks `key` up in [`REMAP_TABLE`].
fn remap(key: &str) -> Option<DiceValue> {
    REMAP_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|&(_, face)| DiceValue::new(face))
}

/// Strategy reading `<gameext type="2">` dice tags.
///
/// Every dice tag contributes at most one face, in order of appearance.
/// Tags whose value names no face are skipped without discarding the rest.
///
/// # Examples
///
/// ```
/// use niuniu_rs::core::Message;
/// use niuniu_rs::extraction::{ExtractionStrategy, GameExtStrategy};
///
/// let msg = Message::new(47, r#"<msg><gameext type="2" content="9"></gameext></msg>"#);
/// let found = GameExtStrategy::new().extract(&msg).unwrap();
/// assert_eq!(found.faces(), vec![6]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GameExtStrategy {
    decoding: GameExtDecoding,
}

impl GameExtStrategy {
    /// Creates a strategy with the default decoding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decoding: GameExtDecoding::PassThroughFirst,
        }
    }

    /// Creates a strategy with the given decoding.
    #[must_use]
    pub const fn with_decoding(decoding: GameExtDecoding) -> Self {
        Self { decoding }
    }

    /// Returns the configured decoding.
    #[must_use]
    pub const fn decoding(&self) -> GameExtDecoding {
        self.decoding
    }

    /// Returns the raw `content` values of all dice tags in `content`.
    #[must_use]
    pub fn raw_values<'a>(&self, content: &'a str) -> Vec<&'a str> {
        tag_regex()
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .filter_map(|attrs| dice_tag_value(attrs.as_str()))
            .collect()
    }

    /// Decodes every dice tag in `content`.
    #[must_use]
    pub fn extract_from(&self, content: &str) -> Vec<DiceValue> {
        self.raw_values(content)
            .into_iter()
            .filter_map(|raw| {
                let face = self.decoding.decode(raw);
                if face.is_none() {
                    trace!(raw, "dropping undecodable gameext value");
                }
                face
            })
            .collect()
    }
}

/// Returns the `content` attribute of a tag whose `type` is the dice type.
fn dice_tag_value(attrs: &str) -> Option<&str> {
    let mut is_dice = false;
    let mut value = None;
    for caps in attr_regex().captures_iter(attrs) {
        let (Some(name), Some(val)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        match name.as_str() {
            "type" => is_dice = val.as_str() == DICE_TAG_TYPE,
            "content" => value = Some(val.as_str()),
            _ => {}
        }
    }
    if is_dice { value } else { None }
}

impl ExtractionStrategy for GameExtStrategy {
    fn extract(&self, message: &Message) -> Option<Extraction> {
        if !message.content.contains("gameext") {
            return None;
        }
        let values = self.extract_from(&message.content);
        if values.is_empty() {
            return None;
        }
        debug!(count = values.len(), decoding = ?self.decoding, "decoded gameext dice");
        Some(Extraction::new(values, ExtractionSource::GameExt))
    }

    fn name(&self) -> &'static str {
        "gameext"
    }

    fn description(&self) -> &'static str {
        "Game-extension tags <gameext type=\"2\" content=\"..\">, remapped to faces"
    }
}
