//! Row parsing.
//!
//! Turns one split dictionary line into a [`VocabularyEntry`]. The first field
//! holds the article and noun together, optionally followed by a plural
//! marker after a comma:
//!
//! ```text
//! "die Ansage, -n"  → (die, Ansage)
//! der Anschluss     → (der, Anschluss)
//! ```
//!
//! Rows that do not fit are rejected with a [`Rejection`] that only serves
//! diagnostics; the loader skips them.

use artikel_foundation::{Article, VocabularyEntry};
use thiserror::Error;

use crate::split::RowSplitter;

/// Number of fields a row must have.
pub const FIELD_COUNT: usize = 4;

/// Why a row was skipped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The row split into fewer than four fields.
    #[error("expected 4 fields, found {0}")]
    TooFewFields(usize),

    /// The leading token is not `der`, `die`, or `das`.
    #[error("unknown article {0:?}")]
    UnknownArticle(String),

    /// Nothing follows the article.
    #[error("missing noun")]
    MissingNoun,
}

/// Parses a dictionary line into an entry.
///
/// # Errors
///
/// Returns the [`Rejection`] describing why the line is not a valid row.
pub fn parse_row(line: &str) -> Result<VocabularyEntry, Rejection> {
    let fields = RowSplitter::split(line);
    if fields.len() < FIELD_COUNT {
        return Err(Rejection::TooFewFields(fields.len()));
    }

    let (article, noun) = split_article(&fields[0])?;

    Ok(VocabularyEntry::new(
        article,
        noun,
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
    ))
}

/// Splits the combined article-and-noun field.
///
/// # Errors
///
/// Returns [`Rejection::UnknownArticle`] or [`Rejection::MissingNoun`].
pub fn split_article(field: &str) -> Result<(Article, String), Rejection> {
    let cleaned = strip_quotes(field.trim()).trim();

    let (token, remainder) = match cleaned.split_once(char::is_whitespace) {
        Some((token, remainder)) => (token, Some(remainder)),
        None => (cleaned, None),
    };

    let article =
        Article::parse(token).ok_or_else(|| Rejection::UnknownArticle(token.to_string()))?;

    // Plural markers follow the first comma: "Ansage, -n"
    let noun = remainder
        .and_then(|rest| rest.split(RowSplitter::DELIMITER).next())
        .map(str::trim)
        .unwrap_or_default();

    if noun.is_empty() {
        return Err(Rejection::MissingNoun);
    }

    Ok((article, noun.to_string()))
}

/// Removes one layer of wrapping quote characters.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(RowSplitter::QUOTE).unwrap_or(text);
    text.strip_suffix(RowSplitter::QUOTE).unwrap_or(text)
}
