//! Game configuration.

use super::error::SizeError;
use super::types::{BoardLimits, DEFAULT_MAX_SIZE, MIN_SIZE};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settings a [`GameController`](crate::GameController) is built from.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board size of the first game.
    #[serde(default = "default_initial_size")]
    initial_size: usize,

    /// Largest board size accepted on resize.
    #[serde(default = "default_max_size")]
    max_size: usize,

    /// Maximum number of history entries kept; unbounded when absent.
    #[serde(default)]
    history_limit: Option<usize>,
}

fn default_initial_size() -> usize {
    MIN_SIZE
}

fn default_max_size() -> usize {
    DEFAULT_MAX_SIZE
}

impl GameConfig {
    /// Size limits implied by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] when `max_size` is below the minimum or
    /// `initial_size` falls outside the limits.
    #[instrument(skip(self), fields(initial_size = self.initial_size, max_size = self.max_size))]
    pub fn limits(&self) -> Result<BoardLimits, SizeError> {
        let limits = BoardLimits::new(self.max_size)?;
        limits.check(self.initial_size)?;
        Ok(limits)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_size: default_initial_size(),
            max_size: default_max_size(),
            history_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = GameConfig::default().limits().unwrap();
        assert_eq!(limits.min_size(), 3);
        assert_eq!(limits.max_size(), 9);
    }

    #[test]
    fn test_initial_size_above_max() {
        let config = GameConfig::default().with_initial_size(7).with_max_size(5);
        assert_eq!(
            config.limits(),
            Err(SizeError::OutOfRange { size: 7, min: 3, max: 5 })
        );
    }

    #[test]
    fn test_max_below_minimum() {
        let config = GameConfig::default().with_max_size(2);
        assert_eq!(config.limits(), Err(SizeError::InvalidLimit { max: 2 }));
    }
}
