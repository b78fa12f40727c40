//! Integration tests for Layer 1: Dictionary
//!
//! Tests resource loading from disk and row parsing against realistic data.

mod loader;
