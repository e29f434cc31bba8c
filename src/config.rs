//! Configuration loading for the gridtoe binary.

use derive_more::{Display, Error};
use gridtoe_core::GameConfig;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Loads a [`GameConfig`] from a TOML file, or the defaults when no path
/// is given. Missing keys fall back to their defaults.
///
/// ```toml
/// initial_size = 4
/// max_size = 9
/// history_limit = 100
/// ```
#[instrument(skip(path), fields(path = ?path.map(|p| p.display().to_string())))]
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let Some(path) = path else {
        debug!("No config file, using defaults");
        return Ok(GameConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

    let config: GameConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

    info!(
        initial_size = config.initial_size(),
        max_size = config.max_size(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Command-line overrides applied on top of a loaded config.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// Board size of the first game.
    pub size: Option<usize>,
    /// Largest size accepted on resize.
    pub max_size: Option<usize>,
    /// Maximum history entries kept.
    pub history_limit: Option<usize>,
}

/// Applies `overrides` to `config` and validates the result.
#[instrument(skip(config))]
pub fn resolve(config: GameConfig, overrides: Overrides) -> Result<GameConfig, ConfigError> {
    let mut config = config;
    if let Some(size) = overrides.size {
        config = config.with_initial_size(size);
    }
    if let Some(max_size) = overrides.max_size {
        config = config.with_max_size(max_size);
    }
    if let Some(limit) = overrides.history_limit {
        config = config.with_history_limit(Some(limit));
    }

    config
        .limits()
        .map_err(|e| ConfigError::new(format!("Invalid board sizes: {}", e)))?;
    if *config.history_limit() == Some(0) {
        return Err(ConfigError::new(
            "history_limit must be at least 1".to_string(),
        ));
    }
    Ok(config)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
