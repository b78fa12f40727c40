//! Trainer commands.

use thiserror::Error;

use artikel_foundation::{Article, Level};

/// Words the line editor completes.
pub const COMMAND_WORDS: [&str; 10] = [
    "der", "die", "das", "hint", "start", "practice", "back", "level", "help", "quit",
];

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `level <id>`: switch dictionary.
    Level(Level),
    /// `start [n]`: begin a round, optionally changing the word count.
    Start(Option<usize>),
    /// `der`, `die`, `das` or `1`, `2`, `3`.
    Answer(Article),
    /// `hint`: show or hide the examples and translation.
    Hint,
    /// `practice`: retry the missed words.
    Practice,
    /// `back`: return to the start screen.
    Back,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Why a line is not a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[error("empty input")]
    Empty,
    /// The first word is not a command.
    #[error("unknown command: {0}")]
    Unknown(String),
    /// `level` without an identifier.
    #[error("usage: level <id>")]
    MissingLevel,
    /// `level` with a malformed identifier.
    #[error("invalid level: {0}")]
    InvalidLevel(String),
    /// `start` with something other than a count.
    #[error("invalid word count: {0}")]
    InvalidCount(String),
    /// Trailing words after a command that takes none.
    #[error("{0} takes no arguments")]
    UnexpectedArgument(String),
}

impl Command {
    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let head = head.to_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(CommandError::UnexpectedArgument(head));
        }

        let command = match head.as_str() {
            "level" => {
                let id = argument.ok_or(CommandError::MissingLevel)?;
                let level =
                    Level::new(id).map_err(|_| CommandError::InvalidLevel(id.to_string()))?;
                return Ok(Self::Level(level));
            }
            "start" => {
                let count = argument
                    .map(|n| n.parse().map_err(|_| CommandError::InvalidCount(n.to_string())))
                    .transpose()?;
                return Ok(Self::Start(count));
            }
            "1" => Self::Answer(Article::Der),
            "2" => Self::Answer(Article::Die),
            "3" => Self::Answer(Article::Das),
            "hint" | "h" => Self::Hint,
            "practice" | "p" => Self::Practice,
            "back" | "b" => Self::Back,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => match Article::parse(other) {
                Some(article) => Self::Answer(article),
                None => return Err(CommandError::Unknown(other.to_string())),
            },
        };

        match argument {
            Some(_) => Err(CommandError::UnexpectedArgument(head)),
            None => Ok(command),
        }
    }
}
