//! Property tests for round invariants.

use artikel_foundation::Article;
use artikel_quiz::{QuizState, SeededSampler, clamp_count};
use proptest::prelude::*;

use crate::{a1, quiz_with, session};

fn nouns(size: usize) -> Vec<(Article, String)> {
    (0..size)
        .map(|i| (Article::ALL[i % 3], format!("Wort{i}")))
        .collect()
}

fn wrong_for(article: Article) -> Article {
    match article {
        Article::Der => Article::Das,
        Article::Die | Article::Das => Article::Der,
    }
}

proptest! {
    #[test]
    fn session_length_is_clamped(pool in 1usize..25, count in 0usize..40, seed in any::<u64>()) {
        let words = nouns(pool);
        let pairs: Vec<(Article, &str)> = words.iter().map(|(a, n)| (*a, n.as_str())).collect();
        let mut quiz = quiz_with(&pairs, SeededSampler::new(seed));
        quiz.select_level(a1());
        quiz.start_session(count, &a1());

        let current = session(&quiz);
        prop_assert_eq!(current.total_words(), clamp_count(count, pool));
        prop_assert!((1..=pool).contains(&current.total_words()));

        let mut distinct: Vec<&str> = current.words().iter().map(|e| e.noun()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), current.total_words());
    }

    #[test]
    fn counters_add_up(
        pool in 1usize..20,
        seed in any::<u64>(),
        answers in prop::collection::vec(any::<bool>(), 20),
    ) {
        let words = nouns(pool);
        let pairs: Vec<(Article, &str)> = words.iter().map(|(a, n)| (*a, n.as_str())).collect();
        let mut quiz = quiz_with(&pairs, SeededSampler::new(seed));
        quiz.select_level(a1());
        quiz.start_session(pool, &a1());
        let length = session(&quiz).total_words();

        for knows in answers.iter().take(length) {
            let article = session(&quiz).current_entry().unwrap().article();
            quiz.submit_answer(if *knows { article } else { wrong_for(article) });
            quiz.advance();
        }

        let result = quiz.state().result().unwrap();
        prop_assert_eq!(result.correct() + result.incorrect(), length);
        prop_assert_eq!(result.failed().len(), result.incorrect());
        prop_assert_eq!(result.is_complete(), result.incorrect() == 0);
        prop_assert!(result.success_rate() <= 100);
    }

    #[test]
    fn retries_keep_the_original_list(
        pool in 2usize..15,
        seed in any::<u64>(),
        misses in prop::collection::vec(any::<bool>(), 15),
    ) {
        let words = nouns(pool);
        let pairs: Vec<(Article, &str)> = words.iter().map(|(a, n)| (*a, n.as_str())).collect();
        let mut quiz = quiz_with(&pairs, SeededSampler::new(seed));
        quiz.select_level(a1());
        quiz.start_session(pool, &a1());
        let original = session(&quiz).words().clone();

        // First round: miss according to `misses`. Retry rounds: miss only the
        // first word, so every chain ends.
        let mut round = 0;
        loop {
            let mut index = 0;
            while let QuizState::InSession(current) = quiz.state() {
                let article = current.current_entry().unwrap().article();
                let miss = if round == 0 { misses[index] } else { index == 0 && round < 3 };
                quiz.submit_answer(if miss { wrong_for(article) } else { article });
                quiz.advance();
                index += 1;
            }

            let result = quiz.state().result().unwrap();
            prop_assert_eq!(result.original(), &original);
            if !result.has_failed_words() {
                break;
            }

            let failed = result.failed().clone();
            quiz.practice_failed_words();
            prop_assert_eq!(session(&quiz).words(), &failed);
            round += 1;
        }
    }
}
