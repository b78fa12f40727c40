//! Artikel CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use artikel_dictionary::{AssetDirectory, DictionaryLoader};
use artikel_foundation::{Level, Result};
use artikel_quiz::{Quiz, SeededSampler};
use artikel_runtime::{Config, Overrides, Trainer, logging};

/// Drill the articles of German nouns: der, die oder das?
#[derive(Debug, Parser)]
#[command(name = "artikel", version, about)]
struct Cli {
    /// Directory holding the `german_nouns_<level>.csv` dictionaries.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Level to load at startup, e.g. A1.
    #[arg(short, long)]
    level: Option<Level>,

    /// Words per round.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for word selection, for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each answer, in milliseconds.
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Config file to use instead of ./artikel.toml.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless ARTIKEL_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            asset_dir: self.assets.clone(),
            level: self.level.clone(),
            word_count: self.count,
            auto_advance_ms: self.delay_ms,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref(), &cli.overrides())?;
    logging::init(&config.log_level, cli.verbose)?;
    info!(?config, "configuration loaded");

    let sampler = config
        .seed
        .map_or_else(SeededSampler::from_entropy, SeededSampler::new);
    let loader = DictionaryLoader::new(AssetDirectory::new(&config.asset_dir));
    let quiz = Quiz::with_sampler(loader, sampler);

    Trainer::new(quiz, &config)?.run()
}
