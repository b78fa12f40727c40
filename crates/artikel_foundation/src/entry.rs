//! Vocabulary entries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::article::Article;

/// A German noun together with its article, translation, and example sentences.
///
/// Entries are immutable once built. Equality and hashing are by value, so two
/// entries loaded from identical rows are interchangeable in failed-word sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VocabularyEntry {
    article: Article,
    noun: String,
    source_example: String,
    translation: String,
    target_example: String,
}

impl VocabularyEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(
        article: Article,
        noun: impl Into<String>,
        source_example: impl Into<String>,
        translation: impl Into<String>,
        target_example: impl Into<String>,
    ) -> Self {
        Self {
            article,
            noun: noun.into(),
            source_example: source_example.into(),
            translation: translation.into(),
            target_example: target_example.into(),
        }
    }

    /// The noun's article.
    #[must_use]
    pub const fn article(&self) -> Article {
        self.article
    }

    /// The bare noun, without article or plural marker.
    #[must_use]
    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// Example sentence in German.
    #[must_use]
    pub fn source_example(&self) -> &str {
        &self.source_example
    }

    /// Translation of the noun.
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Translation of the example sentence.
    #[must_use]
    pub fn target_example(&self) -> &str {
        &self.target_example
    }

    /// The article followed by the noun, e.g. `die Lampe`.
    #[must_use]
    pub fn full_form(&self) -> String {
        format!("{} {}", self.article, self.noun)
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.article, self.noun)
    }
}
