//! Round summaries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use artikel_foundation::EntryList;

/// Immutable summary of a finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuizResult {
    correct: usize,
    incorrect: usize,
    failed: EntryList,
    original: EntryList,
}

impl QuizResult {
    /// Creates a result.
    #[must_use]
    pub fn new(correct: usize, incorrect: usize, failed: EntryList, original: EntryList) -> Self {
        Self {
            correct,
            incorrect,
            failed,
            original,
        }
    }

    /// Correct answers.
    #[must_use]
    pub const fn correct(&self) -> usize {
        self.correct
    }

    /// Incorrect answers.
    #[must_use]
    pub const fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Distinct entries answered incorrectly, in order of first failure.
    #[must_use]
    pub fn failed(&self) -> &EntryList {
        &self.failed
    }

    /// The first round's word list, carried through every retry round.
    #[must_use]
    pub fn original(&self) -> &EntryList {
        &self.original
    }

    /// Total answers given.
    #[must_use]
    pub const fn total_answered(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Percentage of correct answers, truncated toward zero.
    ///
    /// `1` of `3` is `33`, and an empty round is `0`.
    #[must_use]
    pub const fn success_rate(&self) -> usize {
        match self.total_answered() {
            0 => 0,
            total => self.correct * 100 / total,
        }
    }

    /// Whether any word was missed.
    #[must_use]
    pub fn has_failed_words(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Whether the round was perfect, which ends the retry chain.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
