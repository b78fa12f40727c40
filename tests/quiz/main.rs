//! Integration tests for Layer 2: Quiz
//!
//! Tests the state machine over dictionaries loaded through the real loader.

mod invariants;
mod transitions;

use artikel_dictionary::{DictionaryLoader, InMemorySource};
use artikel_foundation::{Article, Level};
use artikel_quiz::{Quiz, QuizState, Sampler, Session};

pub const HEADER: &str = "german,german example,english,english example\n";

/// Builds a dictionary resource from `(article, noun)` pairs.
pub fn resource(words: &[(Article, &str)]) -> String {
    let mut text = HEADER.to_string();
    for (article, noun) in words {
        text.push_str(&format!("\"{article} {noun}, -e\",Beispiel.,{noun},Example.\n"));
    }
    text
}

/// A quiz over one `A1` resource.
pub fn quiz_with<S: Sampler>(
    words: &[(Article, &str)],
    sampler: S,
) -> Quiz<DictionaryLoader<InMemorySource>, S> {
    let source = InMemorySource::new().with_resource("german_nouns_a1.csv", resource(words));
    Quiz::with_sampler(DictionaryLoader::new(source), sampler)
}

pub fn a1() -> Level {
    Level::new("A1").unwrap()
}

pub fn session<D, S>(quiz: &Quiz<D, S>) -> &Session
where
    D: artikel_dictionary::Dictionary,
    S: Sampler,
{
    match quiz.state() {
        QuizState::InSession(session) => session,
        other => panic!("expected a session, found {}", other.name()),
    }
}

/// Picks the first `amount` indices, so rounds follow file order.
pub struct InOrder;

impl Sampler for InOrder {
    fn sample(&mut self, _length: usize, amount: usize) -> Vec<usize> {
        (0..amount).collect()
    }
}
