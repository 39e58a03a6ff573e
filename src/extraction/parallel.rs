//! Batch extraction over many messages.
//!
//! Wraps a [`DiceExtractor`] and fans large batches out over rayon's
//! thread pool. Results always line up with the input slice.

use crate::core::{DiceSequence, Message};
use crate::extraction::{DiceExtractor, Extraction};
use rayon::prelude::*;
use tracing::debug;

/// Batch size below which messages are processed sequentially.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 1_024;

/// Parallel batch extractor.
///
/// # Examples
///
/// ```
/// use niuniu_rs::core::Message;
/// use niuniu_rs::extraction::ParallelExtractor;
///
/// let messages = vec![
///     Message::text("⚀⚁⚂⚃⚄"),
///     Message::text("hello"),
///     Message::text("⚅⚅⚅⚅⚅"),
/// ];
/// let found = ParallelExtractor::default().min_parallel_len(0).extract_all(&messages);
/// assert_eq!(found.len(), 3);
/// assert!(found[1].is_none());
/// assert_eq!(found[2].as_ref().unwrap().faces(), vec![6, 6, 6, 6, 6]);
/// ```
#[derive(Debug)]
pub struct ParallelExtractor {
    inner: DiceExtractor,
    min_parallel_len: usize,
}

impl Default for ParallelExtractor {
    fn default() -> Self {
        Self::new(DiceExtractor::new())
    }
}

impl ParallelExtractor {
    /// Creates a batch extractor around `inner`.
    #[must_use]
    pub const fn new(inner: DiceExtractor) -> Self {
        Self {
            inner,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }

    /// Sets the batch size at which work goes to the thread pool.
    #[must_use]
    pub const fn min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    /// Returns the wrapped pipeline.
    #[must_use]
    pub const fn inner(&self) -> &DiceExtractor {
        &self.inner
    }

    /// Extracts candidates from every message, in input order.
    #[must_use]
    pub fn extract_all(&self, messages: &[Message]) -> Vec<Option<Extraction>> {
        if messages.len() < self.min_parallel_len {
            return messages.iter().map(|m| self.inner.extract(m)).collect();
        }

        debug!(count = messages.len(), "extracting batch in parallel");
        messages.par_iter().map(|m| self.inner.extract(m)).collect()
    }

    /// Extracts complete rolls from every message, in input order.
    #[must_use]
    pub fn extract_sequences(&self, messages: &[Message]) -> Vec<Option<DiceSequence>> {
        self.extract_all(messages)
            .into_iter()
            .map(|found| found.and_then(Extraction::into_sequence))
            .collect()
    }
}
