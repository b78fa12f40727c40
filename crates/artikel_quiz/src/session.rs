//! One quiz round in progress.
//!
//! A [`Session`] walks a fixed sequence of entries. Each word goes through two
//! phases: awaiting an answer (the hint may be toggled), then showing
//! feedback until the caller advances. Advancing past the last word turns the
//! session into a [`QuizResult`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use artikel_foundation::{Article, EntryList, VocabularyEntry};

use crate::result::QuizResult;

/// Feedback for the word just answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnswerFeedback {
    /// Whether the chosen article was right.
    pub is_correct: bool,
    /// The article the user chose.
    pub chosen: Article,
    /// The word's actual article.
    pub correct_article: Article,
}

/// What advancing a session produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The session moved to its next word.
    Next(Session),
    /// The last word was done; the round is over.
    Done(QuizResult),
}

/// State of a quiz round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    words: EntryList,
    cursor: usize,
    correct: usize,
    incorrect: usize,
    failed: EntryList,
    original: EntryList,
    hint_visible: bool,
    feedback: Option<AnswerFeedback>,
}

impl Session {
    /// Creates a session over `words`, recapping `original` once complete.
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: EntryList, original: EntryList) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            cursor: 0,
            correct: 0,
            incorrect: 0,
            failed: EntryList::new(),
            original,
            hint_visible: false,
            feedback: None,
        })
    }

    /// Creates a first-round session, which is its own original list.
    #[must_use]
    pub fn first_round(words: EntryList) -> Option<Self> {
        Self::new(words.clone(), words)
    }

    /// The words of this round, in order.
    #[must_use]
    pub fn words(&self) -> &EntryList {
        &self.words
    }

    /// Zero-based index of the current word.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// One-based position of the current word.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor + 1
    }

    /// Number of words in this round.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// The word being asked.
    #[must_use]
    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.words.get(self.cursor)
    }

    /// Progress label, e.g. `Word 3 of 20`.
    #[must_use]
    pub fn progress(&self) -> String {
        format!("Word {} of {}", self.position(), self.total_words())
    }

    /// Whether the current word is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.words.len()
    }

    /// Correct answers so far.
    #[must_use]
    pub const fn correct(&self) -> usize {
        self.correct
    }

    /// Incorrect answers so far.
    #[must_use]
    pub const fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Distinct entries answered incorrectly, in order of first failure.
    #[must_use]
    pub fn failed(&self) -> &EntryList {
        &self.failed
    }

    /// The list recapped when the whole chain of rounds is complete.
    #[must_use]
    pub fn original(&self) -> &EntryList {
        &self.original
    }

    /// Whether the hint for the current word is shown.
    #[must_use]
    pub const fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Feedback for the current word, once answered.
    #[must_use]
    pub const fn feedback(&self) -> Option<AnswerFeedback> {
        self.feedback
    }

    /// Whether the current word has been answered.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    /// Flips hint visibility. Ignored once the word is answered.
    #[must_use]
    pub fn toggle_hint(mut self) -> Self {
        if self.feedback.is_none() {
            self.hint_visible = !self.hint_visible;
        }
        self
    }

    /// Records an answer for the current word.
    ///
    /// Ignored if the word already has feedback, so a duplicated tap counts
    /// once.
    #[must_use]
    pub fn submit(mut self, chosen: Article) -> Self {
        if self.feedback.is_some() {
            return self;
        }
        // Unreachable: sessions are never empty and `advance` stops at the last word.
        let Some(entry) = self.words.get(self.cursor).cloned() else {
            return self;
        };

        let is_correct = chosen == entry.article();
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
            self.failed = self.failed.push_unique(entry.clone());
        }

        self.feedback = Some(AnswerFeedback {
            is_correct,
            chosen,
            correct_article: entry.article(),
        });
        self
    }

    /// Moves past an answered word.
    ///
    /// Returns [`Step::Next`] with the hint and feedback cleared, or
    /// [`Step::Done`] after the last word. An unanswered word is not skipped:
    /// the session comes back unchanged as [`Step::Next`].
    #[must_use]
    pub fn advance(mut self) -> Step {
        if self.feedback.is_none() {
            return Step::Next(self);
        }
        if self.is_last() {
            return Step::Done(self.finish());
        }
        self.cursor += 1;
        self.hint_visible = false;
        self.feedback = None;
        Step::Next(self)
    }

    fn finish(self) -> QuizResult {
        QuizResult::new(self.correct, self.incorrect, self.failed, self.original)
    }
}
