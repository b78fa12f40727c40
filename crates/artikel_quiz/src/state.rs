//! The quiz state as seen by a front-end.
//!
//! [`QuizState`] is a closed set of variants, each carrying what its screen
//! needs. The transitions that depend only on the state itself live here and
//! consume the old state to produce the new one; transitions that need the
//! dictionary or the word pool live on [`Quiz`](crate::Quiz).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use artikel_foundation::{Article, Level};

use crate::result::QuizResult;
use crate::session::{Session, Step};

/// Current state of the quiz.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "snake_case"))]
pub enum QuizState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// A dictionary load is outstanding.
    Loading {
        /// Level being loaded.
        level: Level,
    },
    /// The last load failed.
    Failed {
        /// Level that failed to load.
        level: Level,
        /// Human-readable reason.
        message: String,
    },
    /// A pool is loaded and a session can start.
    Ready {
        /// Loaded level.
        level: Level,
        /// Number of entries in the pool, the largest possible session.
        pool_size: usize,
    },
    /// A round is in progress.
    InSession(Session),
    /// A round just ended.
    Finished(QuizResult),
}

impl QuizState {
    /// Short name of the variant, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Failed { .. } => "failed",
            Self::Ready { .. } => "ready",
            Self::InSession(_) => "in_session",
            Self::Finished(_) => "finished",
        }
    }

    /// Returns the session, if one is running.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::InSession(session) => Some(session),
            _ => None,
        }
    }

    /// Returns the result, if a round just ended.
    #[must_use]
    pub const fn result(&self) -> Option<&QuizResult> {
        match self {
            Self::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Whether a load is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Flips hint visibility for the current word.
    #[must_use]
    pub fn toggle_hint(self) -> Self {
        match self {
            Self::InSession(session) => Self::InSession(session.toggle_hint()),
            other => other,
        }
    }

    /// Answers the current word.
    #[must_use]
    pub fn submit_answer(self, article: Article) -> Self {
        match self {
            Self::InSession(session) => Self::InSession(session.submit(article)),
            other => other,
        }
    }

    /// Moves to the next word, or ends the round after the last one.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::InSession(session) => match session.advance() {
                Step::Next(session) => Self::InSession(session),
                Step::Done(result) => Self::Finished(result),
            },
            other => other,
        }
    }

    /// Starts a round over the words missed in the finished round.
    ///
    /// The new round keeps the finished round's original list. Nothing
    /// happens after a perfect round.
    #[must_use]
    pub fn practice_failed_words(self) -> Self {
        match self {
            Self::Finished(result) => {
                match Session::new(result.failed().clone(), result.original().clone()) {
                    Some(session) => Self::InSession(session),
                    None => Self::Finished(result),
                }
            }
            other => other,
        }
    }
}
