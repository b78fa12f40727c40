//! German definite articles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A German definite article in the nominative singular.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Article {
    /// Masculine.
    Der,
    /// Feminine.
    Die,
    /// Neuter.
    Das,
}

impl Article {
    /// All articles, in the order they are offered as answers.
    pub const ALL: [Article; 3] = [Article::Der, Article::Die, Article::Das];

    /// Parses an article token, ignoring case.
    ///
    /// Returns `None` for anything outside `der`, `die`, `das`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "der" => Some(Self::Der),
            "die" => Some(Self::Die),
            "das" => Some(Self::Das),
            _ => None,
        }
    }

    /// Returns the lower-case spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Der => "der",
            Self::Die => "die",
            Self::Das => "das",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
