//! Chat-log message records.
//!
//! Messages come from an external chat-log service as JSON records with
//! camelCase keys. The core only reads them. Missing or `null` fields decode
//! as empty, and a `contents` payload of an unexpected shape decodes as
//! absent, so one odd record never fails a whole batch.

use serde::{Deserialize, Deserializer, Serialize};

/// Message type used by the chat log for emoji/dice messages.
pub const DICE_MESSAGE_TYPE: i64 = 47;

/// A raw chat record.
///
/// # Examples
///
/// ```
/// use niuniu_rs::Message;
///
/// let json = r#"{"seq": 7, "type": 47, "senderName": "alice", "content": "⚀⚁⚂⚃⚄"}"#;
/// let msg: Message = serde_json::from_str(json).unwrap();
/// assert_eq!(msg.msg_type, 47);
/// assert_eq!(msg.sender_name, "alice");
/// assert!(msg.contents.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Sequence number assigned by the chat log.
    #[serde(default, deserialize_with = "null_as_default")]
    pub seq: i64,

    /// Timestamp as reported by the chat log (ISO-8601 text).
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,

    /// Sender identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: String,

    /// Sender display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender_name: String,

    /// Message kind discriminator.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub msg_type: i64,

    /// Message sub-kind.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_type: i64,

    /// Raw textual content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Structured side payload.
    #[serde(default, deserialize_with = "lenient")]
    pub contents: Option<MessageContents>,
}

impl Message {
    /// Creates a message with the given type and content.
    #[must_use]
    pub fn new(msg_type: i64, content: impl Into<String>) -> Self {
        Self {
            msg_type,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Creates a message carrying only text content (type 0).
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(0, content)
    }

    /// Sets the structured `contents.content` value.
    #[must_use]
    pub fn with_contents(mut self, value: ContentValue) -> Self {
        self.contents = Some(MessageContents {
            content: Some(value),
        });
        self
    }

    /// Sets the sequence number.
    #[must_use]
    pub const fn with_seq(mut self, seq: i64) -> Self {
        self.seq = seq;
        self
    }

    /// Sets the sender identifier and display name.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>, name: impl Into<String>) -> Self {
        self.sender = sender.into();
        self.sender_name = name.into();
        self
    }

    /// Returns the structured `contents.content` value, if any.
    #[must_use]
    pub fn contents_value(&self) -> Option<&ContentValue> {
        self.contents.as_ref().and_then(|c| c.content.as_ref())
    }

    /// Returns `true` for the chat log's emoji/dice message type.
    #[must_use]
    pub const fn is_dice_type(&self) -> bool {
        self.msg_type == DICE_MESSAGE_TYPE
    }
}

/// Decodes `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a value of the wrong shape as `None` instead of failing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Structured payload attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContents {
    /// Content value; a string or a number depending on the producer.
    #[serde(default)]
    pub content: Option<ContentValue>,
}

/// A `contents.content` value, which producers emit as text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    /// Integral JSON number.
    Integer(i64),
    /// Non-integral JSON number.
    Float(f64),
    /// JSON string.
    Text(String),
    /// Any other JSON value (bool, array, object).
    Other(serde_json::Value),
}

impl ContentValue {
    /// Interprets the value as a plain integer.
    ///
    /// Strings are trimmed and parsed as decimal integers; non-integral
    /// numbers, non-numeric text and other JSON values yield `None`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(_) | Self::Other(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for ContentValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for ContentValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
