//! Settings file and the resolved runtime settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictac_core::{DEFAULT_COMPUTER_DELAY, GameMode};
use tracing::{debug, info, instrument};

/// Contents of `tictac.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Opponent at launch.
    mode: GameMode,

    /// Delay before the computer moves, in milliseconds.
    computer_delay_ms: u64,

    /// Seed for the computer's random choices.
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// File that receives tracing output.
    log_file: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY.as_millis() as u64,
            seed: None,
            log_filter: default_log_filter(),
            log_file: PathBuf::from("tictac.log"),
        }
    }
}

fn default_log_filter() -> String {
    "info,tictac_core=debug,tictac_tui=debug".to_string()
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Opponent at launch.
    pub mode: Option<GameMode>,
    /// Computer delay in milliseconds.
    pub delay_ms: Option<u64>,
    /// RNG seed.
    pub seed: Option<u64>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

/// Settings the app runs with.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Settings {
    mode: GameMode,
    computer_delay: Duration,
    seed: Option<u64>,
    log_filter: String,
    log_file: PathBuf,
}

impl Settings {
    /// Applies command-line overrides on top of file values.
    #[instrument(skip(file))]
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        Self {
            mode: overrides.mode.unwrap_or(file.mode),
            computer_delay: Duration::from_millis(
                overrides.delay_ms.unwrap_or(file.computer_delay_ms),
            ),
            seed: overrides.seed.or(file.seed),
            log_filter: file.log_filter,
            log_file: overrides.log_file.unwrap_or(file.log_file),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), Overrides::default())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
