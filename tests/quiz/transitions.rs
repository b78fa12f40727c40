//! State transitions of the quiz machine.

use artikel_foundation::{Article, Level};
use artikel_quiz::{AnswerFeedback, QuizState, SeededSampler};

use crate::{InOrder, a1, quiz_with, session};

const POOL: [(Article, &str); 3] = [
    (Article::Der, "Tisch"),
    (Article::Die, "Lampe"),
    (Article::Das, "Buch"),
];

// =============================================================================
// Loading
// =============================================================================

#[test]
fn select_level_reports_pool_size() {
    let mut quiz = quiz_with(&POOL, InOrder);
    assert_eq!(quiz.state(), &QuizState::Idle);

    quiz.select_level(a1());
    assert_eq!(
        quiz.state(),
        &QuizState::Ready {
            level: a1(),
            pool_size: 3
        }
    );
}

#[test]
fn failed_load_carries_message_and_recovers() {
    let mut quiz = quiz_with(&POOL, InOrder);
    quiz.select_level(Level::new("B2").unwrap());

    match quiz.state() {
        QuizState::Failed { level, message } => {
            assert_eq!(level.as_str(), "B2");
            assert!(message.contains("german_nouns_b2.csv"));
        }
        other => panic!("expected failure, found {}", other.name()),
    }

    quiz.select_level(a1());
    assert!(matches!(quiz.state(), QuizState::Ready { pool_size: 3, .. }));
}

#[test]
fn start_session_with_other_level_reloads() {
    let mut quiz = quiz_with(&POOL, InOrder);
    quiz.select_level(a1());
    quiz.start_session(2, &Level::new("B1").unwrap());

    assert!(matches!(quiz.state(), QuizState::Failed { .. }));
    assert!(quiz.pool().is_none());
}

// =============================================================================
// Answering
// =============================================================================

#[test]
fn wrong_then_right_answers() {
    let mut quiz = quiz_with(&POOL, InOrder);
    quiz.select_level(a1());
    quiz.start_session(3, &a1());

    // "die" for Tisch
    quiz.submit_answer(Article::Die);
    let current = session(&quiz);
    assert_eq!((current.correct(), current.incorrect()), (0, 1));
    assert_eq!(current.failed().first().unwrap().noun(), "Tisch");
    assert_eq!(
        current.feedback(),
        Some(AnswerFeedback {
            is_correct: false,
            chosen: Article::Die,
            correct_article: Article::Der
        })
    );

    // A duplicated tap is absorbed.
    quiz.submit_answer(Article::Der);
    assert_eq!(session(&quiz).correct(), 0);

    quiz.advance();
    quiz.submit_answer(Article::Die);
    assert_eq!(session(&quiz).correct(), 1);
}

#[test]
fn hint_is_reset_for_each_word() {
    let mut quiz = quiz_with(&POOL, InOrder);
    quiz.select_level(a1());
    quiz.start_session(3, &a1());

    quiz.toggle_hint();
    assert!(session(&quiz).hint_visible());

    quiz.submit_answer(Article::Der);
    quiz.toggle_hint();
    assert!(session(&quiz).hint_visible());

    quiz.advance();
    assert!(!session(&quiz).hint_visible());
    assert_eq!(session(&quiz).progress(), "Word 2 of 3");
}

#[test]
fn advance_before_answer_is_absorbed() {
    let mut quiz = quiz_with(&POOL, InOrder);
    quiz.select_level(a1());
    quiz.start_session(1, &a1());

    quiz.advance();
    assert_eq!(session(&quiz).cursor(), 0);

    quiz.submit_answer(Article::Der);
    quiz.advance();
    assert!(quiz.state().result().is_some());
}

// =============================================================================
// Results and Retries
// =============================================================================

#[test]
fn single_answer_success_rates() {
    for (answer, rate) in [(Article::Der, 100), (Article::Das, 0)] {
        let mut quiz = quiz_with(&POOL, InOrder);
        quiz.select_level(a1());
        quiz.start_session(1, &a1());
        quiz.submit_answer(answer);
        quiz.advance();
        assert_eq!(quiz.state().result().unwrap().success_rate(), rate);
    }
}

#[test]
fn retry_chain_recaps_first_round() {
    let mut quiz = quiz_with(&POOL, SeededSampler::new(11));
    quiz.select_level(a1());
    quiz.start_session(3, &a1());
    let first_round = session(&quiz).words().clone();

    // Miss everything, then miss one word of the retry, then get it right.
    for _ in 0..3 {
        quiz.submit_answer(wrong(&quiz));
        quiz.advance();
    }
    quiz.practice_failed_words();
    assert_eq!(session(&quiz).words(), &first_round);

    quiz.submit_answer(wrong(&quiz));
    quiz.advance();
    for _ in 0..2 {
        quiz.submit_answer(right(&quiz));
        quiz.advance();
    }
    quiz.practice_failed_words();
    assert_eq!(session(&quiz).total_words(), 1);

    quiz.submit_answer(right(&quiz));
    quiz.advance();

    let result = quiz.state().result().unwrap();
    assert!(result.is_complete());
    assert!(!result.has_failed_words());
    assert_eq!(result.original(), &first_round);

    let finished = quiz.state().clone();
    quiz.practice_failed_words();
    assert_eq!(quiz.state(), &finished);
}

#[test]
fn return_to_start_keeps_pool() {
    let mut quiz = quiz_with(&POOL, InOrder);
    quiz.select_level(a1());
    quiz.start_session(1, &a1());
    quiz.submit_answer(Article::Der);
    quiz.advance();

    quiz.return_to_start();
    assert_eq!(
        quiz.state(),
        &QuizState::Ready {
            level: a1(),
            pool_size: 3
        }
    );

    quiz.start_session(2, &a1());
    assert_eq!(session(&quiz).total_words(), 2);
}

fn right<D, S>(quiz: &artikel_quiz::Quiz<D, S>) -> Article
where
    D: artikel_dictionary::Dictionary,
    S: artikel_quiz::Sampler,
{
    session(quiz).current_entry().unwrap().article()
}

fn wrong<D, S>(quiz: &artikel_quiz::Quiz<D, S>) -> Article
where
    D: artikel_dictionary::Dictionary,
    S: artikel_quiz::Sampler,
{
    match right(quiz) {
        Article::Der => Article::Die,
        Article::Die | Article::Das => Article::Der,
    }
}
