//! Text rendering of quiz states.
//!
//! Every function returns the full text of one screen; the trainer decides
//! where it goes.

use std::fmt::Write;

use artikel_foundation::{EntryList, Level, VocabularyEntry};
use artikel_quiz::{AnswerFeedback, QuizResult, QuizState, Session, clamp_count};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders whatever `state` shows. `word_count` is the requested round size.
#[must_use]
pub fn state(state: &QuizState, word_count: usize) -> String {
    match state {
        QuizState::Idle => "No dictionary loaded. Choose one with `level <id>`.\n".to_string(),
        QuizState::Loading { level } => format!("Loading level {level}...\n"),
        QuizState::Failed { level, message } => failed(level, message),
        QuizState::Ready { level, pool_size } => ready(level, *pool_size, word_count),
        QuizState::InSession(session) => question(session),
        QuizState::Finished(result) => result_screen(result),
    }
}

/// The start screen.
#[must_use]
pub fn ready(level: &Level, pool_size: usize, word_count: usize) -> String {
    format!(
        "{BOLD}Level {level}{RESET}: {pool_size} words available.\n\
         Type `start` for {} words, or `start <n>` for 1 to {pool_size}.\n",
        clamp_count(word_count, pool_size)
    )
}

/// The error screen after a failed load.
#[must_use]
pub fn failed(level: &Level, message: &str) -> String {
    format!(
        "{RED}Could not load level {level}: {message}{RESET}\n\
         Try another level with `level <id>`.\n"
    )
}

/// The current word, with its hint when shown.
#[must_use]
pub fn question(session: &Session) -> String {
    let mut out = format!("\n{}\n", session.progress());
    if let Some(entry) = session.current_entry() {
        let _ = writeln!(out, "  {BOLD}___ {}{RESET}", entry.noun());
        if session.hint_visible() {
            out.push_str(&hint(entry));
        }
    }
    out
}

fn hint(entry: &VocabularyEntry) -> String {
    let mut out = String::new();
    for line in [entry.source_example(), entry.translation(), entry.target_example()] {
        if !line.is_empty() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}

/// Feedback for the word just answered.
#[must_use]
pub fn feedback(feedback: AnswerFeedback, entry: &VocabularyEntry) -> String {
    if feedback.is_correct {
        format!("{GREEN}Richtig!{RESET} {}\n", entry.full_form())
    } else {
        format!(
            "{RED}Falsch.{RESET} Not {}, it is {} {}\n",
            feedback.chosen,
            feedback.correct_article,
            entry.noun()
        )
    }
}

/// The results screen.
///
/// A perfect round closes the retry chain with a recap of the first round's
/// words.
#[must_use]
pub fn result_screen(result: &QuizResult) -> String {
    let mut out = format!(
        "\n{BOLD}Results{RESET}\n  Correct:   {}\n  Incorrect: {}\n  Success:   {}%\n",
        result.correct(),
        result.incorrect(),
        result.success_rate()
    );

    if result.is_complete() {
        out.push_str("\nGlückwunsch! You know every word of this round:\n");
        out.push_str(&word_list(result.original()));
        out.push_str("\nType `start` for a new round or `back` for the start screen.\n");
    } else {
        out.push_str("\nWords to practice:\n");
        out.push_str(&word_list(result.failed()));
        out.push_str(
            "\nType `practice` to retry them, `start` for a new round, or `back`.\n",
        );
    }
    out
}

fn word_list(entries: &EntryList) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "  {}  ({})", entry.full_form(), entry.translation());
    }
    out
}

/// Command overview.
#[must_use]
pub fn help() -> String {
    "Commands:
  level <id>     load another level, e.g. `level a2`
  start [n]      start a round of n words
  der, die, das  answer (or 1, 2, 3)
  hint           show or hide examples and translation
  practice       retry the words you missed
  back           return to the start screen
  help           show this overview
  quit           leave
"
    .to_string()
}
