//! Game assembly from single-die rolls.
//!
//! Many chat clients throw one die per message. A game is five consecutive
//! rolls by the same player (in `seq` order) whose first and fifth throws are
//! at most [`AssemblyConfig::window_secs`] seconds apart. Rolls that never
//! fit in such a window are discarded.

use crate::core::{DICE_COUNT, DiceSequence, DiceValue, Message};
use crate::engine::{GameResult, NiuNiuEngine};
use crate::error::{Error, Result};
use crate::extraction::DiceExtractor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Default maximum span of one game, in seconds.
pub const DEFAULT_WINDOW_SECS: u32 = 30;

/// One die thrown by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Chat-log sequence number.
    pub seq: i64,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Player name.
    pub player: String,
    /// Face thrown.
    pub value: DiceValue,
}

impl DiceRoll {
    /// Creates a roll.
    #[must_use]
    pub fn new(seq: i64, timestamp: i64, player: impl Into<String>, value: DiceValue) -> Self {
        Self {
            seq,
            timestamp,
            player: player.into(),
            value,
        }
    }
}

/// Assembly configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Maximum seconds between the first and fifth roll of a game.
    pub window_secs: u32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

impl AssemblyConfig {
    /// Creates a config with the given window.
    #[must_use]
    pub const fn new(window_secs: u32) -> Self {
        Self { window_secs }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the window is zero.
    pub fn validate(&self) -> Result<()> {
        if self.window_secs == 0 {
            return Err(Error::Config {
                message: "assembly window must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}

/// Five rolls scored as one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledGame {
    /// Player who threw the dice.
    pub player: String,
    /// `seq` of the first roll.
    pub first_seq: i64,
    /// `seq` of the fifth roll.
    pub last_seq: i64,
    /// Timestamp of the first roll.
    pub start_timestamp: i64,
    /// Timestamp of the fifth roll.
    pub end_timestamp: i64,
    /// The five faces, in throw order.
    pub dice: DiceSequence,
    /// Scored result.
    pub result: GameResult,
}

impl AssembledGame {
    /// Report points of the result.
    #[must_use]
    pub const fn score_points(&self) -> u8 {
        self.result.score_points()
    }
}

/// Groups single-die rolls into scored games.
///
/// # Examples
///
/// ```
/// use niuniu_rs::assembly::{DiceRoll, RollAssembler};
/// use niuniu_rs::DiceValue;
///
/// let rolls: Vec<DiceRoll> = [3, 2, 5, 6, 4]
///     .iter()
///     .enumerate()
///     .map(|(i, &face)| {
///         DiceRoll::new(i as i64, 1_000 + i as i64, "alice", DiceValue::new(face).unwrap())
///     })
///     .collect();
///
/// let games = RollAssembler::new().assemble(&rolls);
/// assert_eq!(games.len(), 1);
/// assert_eq!(games[0].result.value(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RollAssembler {
    config: AssemblyConfig,
    engine: NiuNiuEngine,
}

impl RollAssembler {
    /// Creates an assembler with the default 30-second window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn with_config(config: AssemblyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            engine: NiuNiuEngine::new(),
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Assembles and scores games from `rolls`.
    ///
    /// Rolls are grouped by player and ordered by `seq`. Games are returned
    /// ordered by start timestamp, then player.
    #[must_use]
    pub fn assemble(&self, rolls: &[DiceRoll]) -> Vec<AssembledGame> {
        let mut by_player: BTreeMap<&str, Vec<&DiceRoll>> = BTreeMap::new();
        for roll in rolls {
            by_player.entry(roll.player.as_str()).or_default().push(roll);
        }

        let mut games = Vec::new();
        for (player, mut player_rolls) in by_player {
            player_rolls.sort_by_key(|r| r.seq);
            self.assemble_player(player, &player_rolls, &mut games);
        }

        games.sort_by(|a, b| {
            a.start_timestamp
                .cmp(&b.start_timestamp)
                .then_with(|| a.player.cmp(&b.player))
        });
        debug!(rolls = rolls.len(), games = games.len(), "assembled games");
        games
    }

    fn assemble_player(&self, player: &str, rolls: &[&DiceRoll], games: &mut Vec<AssembledGame>) {
        let window = i64::from(self.config.window_secs);
        let mut i = 0;
        while i + DICE_COUNT <= rolls.len() {
            let group = &rolls[i..i + DICE_COUNT];
            let (first, last) = (group[0], group[DICE_COUNT - 1]);

            if last.timestamp.saturating_sub(first.timestamp) > window {
                trace!(player, seq = first.seq, "roll outside window, sliding");
                i += 1;
                continue;
            }

            let values: Vec<DiceValue> = group.iter().map(|r| r.value).collect();
            if let Ok(dice) = DiceSequence::from_values(&values) {
                games.push(AssembledGame {
                    player: player.to_string(),
                    first_seq: first.seq,
                    last_seq: last.seq,
                    start_timestamp: first.timestamp,
                    end_timestamp: last.timestamp,
                    result: self.engine.evaluate(&dice),
                    dice,
                });
            }
            i += DICE_COUNT;
        }
    }
}

/// Collects single-die rolls from `messages`.
///
/// A message contributes a roll when the extractor finds exactly one face
/// in it and `timestamp` yields its time. The player is the sender's display
/// name, falling back to the sender id.
pub fn collect_rolls<F>(extractor: &DiceExtractor, messages: &[Message], timestamp: F) -> Vec<DiceRoll>
where
    F: Fn(&Message) -> Option<i64>,
{
    messages
        .iter()
        .filter_map(|message| {
            let found = extractor.extract(message)?;
            let [value] = found.values.as_slice() else {
                return None;
            };
            let player = if message.sender_name.is_empty() {
                &message.sender
            } else {
                &message.sender_name
            };
            Some(DiceRoll::new(message.seq, timestamp(message)?, player.as_str(), *value))
        })
        .collect()
}
