//! Layered configuration for the trainer.
//!
//! Sources, highest priority first:
//! 1. Command-line flags ([`Overrides`])
//! 2. Environment variables with the `ARTIKEL_` prefix (`ARTIKEL_LEVEL=B1`)
//! 3. An explicit `--config` file, or `./artikel.toml`
//! 4. The user-level `<config dir>/artikel/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use artikel_foundation::{Error, Level, Result};

/// Prefix of the environment variables read into [`Config`].
pub const ENV_PREFIX: &str = "ARTIKEL_";

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "artikel.toml";

/// Trainer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `german_nouns_<level>.csv` resources.
    pub asset_dir: PathBuf,
    /// Level loaded at startup.
    pub level: Level,
    /// Words per round before clamping to the pool size.
    pub word_count: usize,
    /// Pause between answer feedback and the next word.
    pub auto_advance_ms: u64,
    /// Fixed seed for word selection; OS entropy when absent.
    pub seed: Option<u64>,
    /// Log filter used when `ARTIKEL_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            level: Level::default(),
            word_count: 20,
            auto_advance_ms: 3000,
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Overrides {
    /// `--assets`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,
    /// `--level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// `--count`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// `--delay-ms`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
    /// `--seed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    /// Loads the configuration from every layer.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Config`](artikel_foundation::ErrorKind::Config) if
    /// `config_file` does not exist or any layer holds an invalid value.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(Error::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        Self::figment(config_file)
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Builds the provider chain below the command-line layer.
    ///
    /// `config_file` replaces `./artikel.toml` when given.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        match config_file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Path to the user-level config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("artikel").join("config.toml"))
    }

    /// The auto-advance pause as a [`Duration`].
    #[must_use]
    pub const fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}
