//! The interactive trainer loop.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use artikel_dictionary::Dictionary;
use artikel_foundation::{Article, Level, Result};
use artikel_quiz::{Quiz, QuizResult, QuizState, Sampler, SeededSampler};

use crate::command::Command;
use crate::config::Config;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render;

/// Drives a [`Quiz`] from line input.
///
/// After each answer the trainer shows feedback, waits for the auto-advance
/// pause, then advances the quiz itself.
pub struct Trainer<D, E = RustylineEditor, W = Stdout, S = SeededSampler> {
    quiz: Quiz<D, S>,
    editor: E,
    output: W,
    level: Level,
    word_count: usize,
    auto_advance: Duration,
    prompt: String,
}

impl<D: Dictionary, S: Sampler> Trainer<D, RustylineEditor, Stdout, S> {
    /// Creates a trainer on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(quiz: Quiz<D, S>, config: &Config) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_io(quiz, editor, io::stdout(), config))
    }
}

impl<D: Dictionary, E: LineEditor, W: Write, S: Sampler> Trainer<D, E, W, S> {
    /// Creates a trainer reading from `editor` and writing to `output`.
    pub fn with_io(quiz: Quiz<D, S>, editor: E, output: W, config: &Config) -> Self {
        Self {
            quiz,
            editor,
            output,
            level: config.level.clone(),
            word_count: config.word_count,
            auto_advance: config.auto_advance(),
            prompt: "artikel> ".to_string(),
        }
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The quiz being driven.
    #[must_use]
    pub fn quiz(&self) -> &Quiz<D, S> {
        &self.quiz
    }

    /// The output written so far.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// The editor.
    #[must_use]
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// The level the next round draws from.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Runs until `quit` or end of input.
    ///
    /// Loads the configured level first if nothing is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if matches!(self.quiz.state(), QuizState::Idle) {
            self.quiz.select_level(self.level.clone());
        }
        writeln!(self.output, "Artikel: der, die oder das? Type `help` for commands.")?;
        self.show_state()?;

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    writeln!(self.output, "^C")?;
                    continue;
                }
                ReadResult::Eof => break,
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            self.editor.add_history(input);

            match Command::parse(input) {
                Ok(command) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{e}. Type `help` for commands.")?,
            }
        }

        writeln!(self.output, "Tschüss!")?;
        Ok(())
    }

    /// Executes one command.
    ///
    /// Returns `Ok(false)` when the trainer should stop.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        debug!(?command, state = self.quiz.state().name(), "command");
        match command {
            Command::Level(level) => {
                self.level = level.clone();
                self.quiz.change_level(level);
                self.show_state()?;
            }
            Command::Start(count) => self.start(count)?,
            Command::Answer(article) => self.answer(article)?,
            Command::Hint => {
                if self.quiz.state().session().is_some() {
                    self.quiz.toggle_hint();
                    self.show_state()?;
                } else {
                    writeln!(self.output, "No word to hint at.")?;
                }
            }
            Command::Practice => {
                let has_failed_words = self.quiz.state().result().map(QuizResult::has_failed_words);
                match has_failed_words {
                    Some(true) => {
                        self.quiz.practice_failed_words();
                        self.show_state()?;
                    }
                    Some(false) => writeln!(self.output, "Nothing to practice, every word was right.")?,
                    None => writeln!(self.output, "Finish a round first.")?,
                }
            }
            Command::Back => {
                self.quiz.return_to_start();
                self.show_state()?;
            }
            Command::Help => write!(self.output, "{}", render::help())?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn start(&mut self, count: Option<usize>) -> Result<()> {
        if self.quiz.state().session().is_some() {
            writeln!(self.output, "Finish the current round first.")?;
            return Ok(());
        }
        if let Some(count) = count {
            self.word_count = count;
        }
        let level = self.level.clone();
        self.quiz.start_session(self.word_count, &level);
        if let Some(session) = self.quiz.state().session() {
            info!(level = %level, words = session.total_words(), "round started");
        }
        self.show_state()
    }

    fn answer(&mut self, article: Article) -> Result<()> {
        if !self.quiz.state().session().is_some_and(|s| !s.is_answered()) {
            writeln!(self.output, "No word to answer.")?;
            return Ok(());
        }

        self.quiz.submit_answer(article);
        if let Some(session) = self.quiz.state().session() {
            if let (Some(feedback), Some(entry)) = (session.feedback(), session.current_entry()) {
                write!(self.output, "{}", render::feedback(feedback, entry))?;
            }
        }
        self.output.flush()?;

        if !self.auto_advance.is_zero() {
            thread::sleep(self.auto_advance);
        }
        self.quiz.advance();

        if let Some(result) = self.quiz.state().result() {
            info!(
                correct = result.correct(),
                incorrect = result.incorrect(),
                success_rate = result.success_rate(),
                "round finished"
            );
        }
        self.show_state()
    }

    fn show_state(&mut self) -> Result<()> {
        let text = render::state(self.quiz.state(), self.word_count);
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}
