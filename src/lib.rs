//! Artikel - Flashcard trainer for German noun articles
//!
//! This crate re-exports all layers of the Artikel system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: artikel_runtime    - Terminal trainer, config, logging, CLI
//! Layer 2: artikel_quiz       - Quiz state machine, sessions, results
//! Layer 1: artikel_dictionary - Dictionary resources, row parsing, loading
//! Layer 0: artikel_foundation - Core types (Article, Level, VocabularyEntry, Error)
//! ```

pub use artikel_dictionary as dictionary;
pub use artikel_foundation as foundation;
pub use artikel_quiz as quiz;
pub use artikel_runtime as runtime;
