//! Terminal trainer, configuration, and CLI for Artikel.
//!
//! This crate provides:
//! - [`Trainer`] - Line-oriented front-end driving a quiz
//! - [`Config`] - Layered settings (defaults, files, environment, flags)
//! - [`Command`] - Parsing of trainer input
//! - [`LineEditor`] - Input abstraction with rustyline and scripted editors
//! - [`logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod logging;
pub mod render;
pub mod trainer;

pub use command::{Command, CommandError};
pub use config::{Config, Overrides};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use trainer::Trainer;
