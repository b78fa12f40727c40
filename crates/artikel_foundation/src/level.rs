//! Level identifiers.
//!
//! A level names one dictionary resource. The mapping from level to resource
//! name is fixed (`german_nouns_<level>.csv`) because asset packaging depends
//! on it.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A vocabulary level such as `A1` or `B2`.
///
/// Identifiers are case-insensitive and stored upper-cased, so `a1` and `A1`
/// name the same level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Level(String);

impl Level {
    /// The level loaded when nothing else is configured.
    pub const DEFAULT: &'static str = "A1";

    /// Creates a level from an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidLevel`](crate::ErrorKind::InvalidLevel) if
    /// the identifier is empty or contains anything other than ASCII
    /// alphanumerics, `-` or `_`.
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref().trim();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::invalid_level(id));
        }
        Ok(Self(id.to_ascii_uppercase()))
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name of the resource holding this level's dictionary.
    #[must_use]
    pub fn resource_name(&self) -> String {
        format!("german_nouns_{}.csv", self.0.to_ascii_lowercase())
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
