//! Cross-layer integration tests for Artikel
//!
//! Tests that drive the trainer over dictionaries on disk.

mod trainer_flow;
