//! Core vocabulary types, levels, and errors for Artikel.
//!
//! This crate provides:
//! - [`Article`] - The closed set of German definite articles
//! - [`Level`] - Validated level identifiers and their resource naming
//! - [`VocabularyEntry`] - One noun with its article, translation, and examples
//! - [`EntryList`] - Persistent, structurally shared list of entries
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod article;
pub mod collections;
pub mod entry;
pub mod error;
pub mod level;

pub use article::Article;
pub use collections::EntryList;
pub use entry::VocabularyEntry;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use level::Level;
