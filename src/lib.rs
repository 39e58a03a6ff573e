//! # niuniu-rs
//!
//! Niu Niu (牛牛) dice scoring and dice-roll extraction for chat-log records.
//!
//! The crate turns raw chat messages into five-dice rolls and scores them
//! under the Niu Niu rules. It holds no state and performs no I/O; loading
//! messages and writing reports are left to the caller.
//!
//! ## Features
//!
//! - **Extraction**: ordered strategies for Unicode die glyphs, `<gameext>`
//!   tags and the structured `contents` field
//! - **Scoring**: Baozi / NiuNiu / Niu 1-9 / NoNiu classification with a
//!   total ranking and winner decision
//! - **Assembly**: single-die rolls grouped into games per player within a
//!   time window
//! - **Batch**: parallel extraction over large message batches with rayon
//!
//! ## Example
//!
//! ```
//! use niuniu_rs::{DiceExtractor, Message, NiuNiuEngine};
//!
//! let extractor = DiceExtractor::new();
//! let engine = NiuNiuEngine::new();
//!
//! let dice = extractor.extract_sequence(&Message::text("⚂⚁⚄⚅⚃")).unwrap();
//! let result = engine.evaluate(&dice);
//! assert_eq!(result.label(), "牛牛");
//! assert_eq!(result.value(), 10);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod assembly;
pub mod core;
pub mod engine;
pub mod error;
pub mod extraction;

// Re-export commonly used types at crate root
pub use error::{Error, ExtractionError, Result};

// Re-export core domain types
pub use core::{
    ContentValue, DICE_COUNT, DICE_MESSAGE_TYPE, DiceSequence, DiceValue, Message,
    is_valid_dice_sequence,
};

// Re-export engine types
pub use engine::{GameResult, NiuHand, NiuNiuEngine, NiuPoints, ResultKind, Winner, compare};

// Re-export extraction types
pub use extraction::{
    DiceExtractor, Extraction, ExtractionSource, ExtractionStrategy, ExtractorConfig,
    GameExtDecoding, ParallelExtractor, available_strategies, create_strategy, extract_dice,
};

// Re-export assembly types
pub use assembly::{AssembledGame, AssemblyConfig, DiceRoll, RollAssembler, collect_rolls};
