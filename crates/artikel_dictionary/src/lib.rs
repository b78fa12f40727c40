//! Dictionary resource parsing and loading for Artikel.
//!
//! This crate turns a level's dictionary resource into the word pool the quiz
//! draws from.
//!
//! # Architecture
//!
//! ```text
//! Level "A1"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SOURCE          │  → german_nouns_a1.csv (asset directory, in memory)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SPLITTER        │  → ["die Ansage, -n", "Hören Sie …", "announcement", "…"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ROW PARSER      │  → VocabularyEntry { die, "Ansage", … } (or skipped)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LOADER          │  → EntryList (never empty) or load error
//! └─────────────────┘
//! ```
//!
//! # Resource format
//!
//! A header line, then one record per line with four comma-separated fields:
//! article and noun (optionally with a plural marker after a comma), German
//! example, translation, translated example. Fields containing commas are
//! wrapped in double quotes. Quotes inside a quoted field cannot be escaped.
//!
//! # Modules
//!
//! - [`split`] - Quote-aware field splitting
//! - [`row`] - Row validation and entry construction
//! - [`source`] - Resource lookup by name
//! - [`loader`] - Whole-resource loading and the [`Dictionary`] seam

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod loader;
pub mod row;
pub mod source;
pub mod split;

// Re-export main types for convenience
pub use loader::{Dictionary, DictionaryLoader, ReadReport, read_entries};
pub use row::{Rejection, parse_row};
pub use source::{AssetDirectory, DictionarySource, InMemorySource};
pub use split::RowSplitter;
