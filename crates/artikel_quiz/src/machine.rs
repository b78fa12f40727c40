//! The quiz state machine.
//!
//! [`Quiz`] owns the dictionary, the loaded word pool, and the current
//! [`QuizState`]. Every operation is a transition on that state; operations
//! that do not apply to the current state are absorbed without effect.

use tracing::{debug, trace};

use artikel_dictionary::Dictionary;
use artikel_foundation::{Article, EntryList, Error, Level, Result};

use crate::sampler::{Sampler, SeededSampler};
use crate::session::Session;
use crate::state::QuizState;

/// Clamps a requested word count to `[1, pool_size]`.
///
/// Out-of-range requests saturate rather than fail.
#[must_use]
pub fn clamp_count(count: usize, pool_size: usize) -> usize {
    count.clamp(1, pool_size.max(1))
}

/// The loaded dictionary for one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    level: Level,
    entries: EntryList,
}

impl Pool {
    /// The level this pool was loaded for.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Every entry of the level.
    #[must_use]
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a pool held by a [`Quiz`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drives quiz rounds over dictionaries loaded from `D`.
///
/// Transitions are expected to run one at a time from a single owner. While a
/// load begun with [`begin_load`](Self::begin_load) is outstanding, only
/// [`finish_load`](Self::finish_load) has any effect.
#[derive(Debug)]
pub struct Quiz<D, S = SeededSampler> {
    dictionary: D,
    sampler: S,
    pool: Option<Pool>,
    state: QuizState,
}

impl<D: Dictionary> Quiz<D> {
    /// Creates a quiz that samples sessions from OS entropy.
    #[must_use]
    pub fn new(dictionary: D) -> Self {
        Self::with_sampler(dictionary, SeededSampler::from_entropy())
    }
}

impl<D: Dictionary, S: Sampler> Quiz<D, S> {
    /// Creates a quiz with an explicit sampler.
    #[must_use]
    pub fn with_sampler(dictionary: D, sampler: S) -> Self {
        Self {
            dictionary,
            sampler,
            pool: None,
            state: QuizState::Idle,
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// The loaded pool, if the last load succeeded.
    #[must_use]
    pub fn pool(&self) -> Option<&Pool> {
        self.pool.as_ref()
    }

    /// The level of the loaded pool.
    #[must_use]
    pub fn level(&self) -> Option<&Level> {
        self.pool.as_ref().map(Pool::level)
    }

    /// The dictionary this quiz loads from.
    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Enters [`QuizState::Loading`] for `level`.
    ///
    /// The caller performs the load and hands the outcome to
    /// [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self, level: Level) {
        if self.state.is_loading() {
            trace!(%level, "load already outstanding, ignoring");
            return;
        }
        debug!(%level, from = self.state.name(), "loading dictionary");
        self.state = QuizState::Loading { level };
    }

    /// Completes an outstanding load.
    ///
    /// A successful, non-empty load replaces the pool and enters
    /// [`QuizState::Ready`]. Anything else clears the pool and enters
    /// [`QuizState::Failed`].
    pub fn finish_load(&mut self, outcome: Result<EntryList>) {
        let QuizState::Loading { level } = &self.state else {
            trace!(state = self.state.name(), "no load outstanding, ignoring");
            return;
        };
        let level = level.clone();

        match outcome {
            Ok(entries) if !entries.is_empty() => {
                let pool_size = entries.len();
                debug!(%level, pool_size, "dictionary ready");
                self.pool = Some(Pool {
                    level: level.clone(),
                    entries,
                });
                self.state = QuizState::Ready { level, pool_size };
            }
            Ok(_) => {
                let error = Error::empty_dictionary(level.resource_name());
                self.fail(level, &error);
            }
            Err(error) => self.fail(level, &error),
        }
    }

    fn fail(&mut self, level: Level, error: &Error) {
        debug!(%level, %error, "dictionary unavailable");
        self.pool = None;
        self.state = QuizState::Failed {
            level,
            message: error.to_string(),
        };
    }

    /// Loads `level` and enters [`QuizState::Ready`] or [`QuizState::Failed`].
    pub fn select_level(&mut self, level: Level) {
        if self.state.is_loading() {
            trace!(%level, "load already outstanding, ignoring");
            return;
        }
        self.begin_load(level.clone());
        let outcome = self.dictionary.load(&level);
        self.finish_load(outcome);
    }

    /// Like [`select_level`](Self::select_level), but keeps a ready pool of
    /// the same level instead of reloading it.
    pub fn change_level(&mut self, level: Level) {
        if matches!(self.state, QuizState::Ready { .. }) && self.level() == Some(&level) {
            trace!(%level, "level already loaded");
            return;
        }
        self.select_level(level);
    }

    // =========================================================================
    // Rounds
    // =========================================================================

    /// Starts a round of `count` words drawn from `level`.
    ///
    /// Valid from [`QuizState::Ready`], [`QuizState::Finished`] and
    /// [`QuizState::Failed`]. Reloads first when `level` is not the loaded
    /// level; a failed reload leaves the machine in [`QuizState::Failed`].
    /// `count` is clamped to the pool size with [`clamp_count`].
    pub fn start_session(&mut self, count: usize, level: &Level) {
        if !matches!(
            self.state,
            QuizState::Ready { .. } | QuizState::Finished(_) | QuizState::Failed { .. }
        ) {
            trace!(state = self.state.name(), "cannot start a session now");
            return;
        }

        if self.level() != Some(level) {
            self.select_level(level.clone());
        }
        let Some(pool) = &self.pool else {
            return;
        };

        let amount = clamp_count(count, pool.len());
        let indices = self.sampler.sample(pool.len(), amount);
        let words = pool.entries.pick(&indices);

        if let Some(session) = Session::first_round(words) {
            debug!(
                level = %pool.level,
                requested = count,
                words = session.total_words(),
                "session started"
            );
            self.state = QuizState::InSession(session);
        }
    }

    /// Flips hint visibility for the current word.
    pub fn toggle_hint(&mut self) {
        self.transition("toggle_hint", QuizState::toggle_hint);
    }

    /// Answers the current word.
    pub fn submit_answer(&mut self, article: Article) {
        self.transition("submit_answer", |state| state.submit_answer(article));
    }

    /// Moves past the answered word, finishing the round after the last one.
    pub fn advance(&mut self) {
        self.transition("advance", QuizState::advance);
    }

    /// Retries the words missed in the finished round.
    pub fn practice_failed_words(&mut self) {
        self.transition("practice_failed_words", QuizState::practice_failed_words);
    }

    /// Goes from [`QuizState::Finished`] back to [`QuizState::Ready`] with
    /// the loaded pool.
    pub fn return_to_start(&mut self) {
        if !matches!(self.state, QuizState::Finished(_)) {
            trace!(state = self.state.name(), "nothing to return from");
            return;
        }
        let Some(pool) = &self.pool else {
            return;
        };
        let ready = QuizState::Ready {
            level: pool.level.clone(),
            pool_size: pool.len(),
        };
        debug!(from = self.state.name(), "returning to start");
        self.state = ready;
    }

    fn transition(&mut self, operation: &'static str, apply: impl FnOnce(QuizState) -> QuizState) {
        let from = self.state.name();
        self.state = apply(std::mem::take(&mut self.state));
        trace!(operation, from, to = self.state.name(), "transition");
    }
}
