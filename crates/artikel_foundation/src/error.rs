//! Error types for the Artikel system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only dictionary loading and configuration can fail. Malformed dictionary
//! rows are filtered, not reported, and invalid quiz transitions are absorbed
//! by the state machine, so neither has an error kind.

use std::fmt;

use thiserror::Error;

/// The main error type for Artikel operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing resource error.
    #[must_use]
    pub fn resource_not_found(resource: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotFound {
            resource: resource.into(),
        })
    }

    /// Creates an unreadable resource error.
    #[must_use]
    pub fn unreadable(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unreadable {
            resource: resource.into(),
            message: message.into(),
        })
    }

    /// Creates an empty dictionary error.
    #[must_use]
    pub fn empty_dictionary(resource: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyDictionary {
            resource: resource.into(),
        })
    }

    /// Creates an invalid level error.
    #[must_use]
    pub fn invalid_level(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLevel(id.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates a terminal error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Terminal(message.into()))
    }

    /// Returns true if this error came from loading a dictionary.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ResourceNotFound { .. }
                | ErrorKind::Unreadable { .. }
                | ErrorKind::EmptyDictionary { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The dictionary resource does not exist.
    #[error("dictionary not found: {resource}")]
    ResourceNotFound {
        /// The resource that was requested.
        resource: String,
    },

    /// The dictionary resource exists but could not be read.
    #[error("cannot read dictionary {resource}: {message}")]
    Unreadable {
        /// The resource that was requested.
        resource: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// No row of the dictionary survived filtering.
    #[error("empty dictionary: {resource} has no valid entries")]
    EmptyDictionary {
        /// The resource that was loaded.
        resource: String,
    },

    /// A level identifier failed validation.
    #[error("invalid level: {0:?}")]
    InvalidLevel(String),

    /// Configuration could not be extracted.
    #[error("configuration error: {0}")]
    Config(String),

    /// The line editor failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// An I/O operation failed outside dictionary loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Level being loaded.
    pub level: Option<String>,
    /// Line number in the resource (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.level, self.line) {
            (Some(level), Some(line)) => write!(f, "level {level}, line {line}"),
            (Some(level), None) => write!(f, "level {level}"),
            (None, Some(line)) => write!(f, "line {line}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type for Artikel operations.
pub type Result<T> = std::result::Result<T, Error>;
