//! Core domain models for niuniu-rs.
//!
//! This module contains the value types shared by the extractor and the
//! engine: die faces, five-dice sequences and chat-log message records.
//! These are pure domain models with no I/O dependencies.

pub mod dice;
pub mod message;

pub use dice::{
    DICE_COUNT, DiceSequence, DiceValue, FIRST_DIE_GLYPH, LAST_DIE_GLYPH, is_valid_dice_sequence,
};
pub use message::{ContentValue, DICE_MESSAGE_TYPE, Message, MessageContents};
