use std::ops::RangeInclusive;
use std::path::Path;

use tracing::warn;

use crate::ai::WindowWeights;
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Board sizes accepted on either axis.
pub const GRID_DIMENSION_RANGE: RangeInclusive<usize> = 4..=16;

/// Largest number of terms a score can sum on the biggest accepted board:
/// every 4-cell window plus every center-column cell.
const fn max_score_terms() -> usize {
    let side = *GRID_DIMENSION_RANGE.end();
    let runs = side - 3;
    2 * side * runs + 2 * runs * runs + 2 * side
}

/// Upper bound on `heuristic.four` and `heuristic.center`. Keeps every score
/// and differential within `i32` on any accepted board.
pub const MAX_WEIGHT: i32 = i32::MAX / max_score_terms() as i32;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub heuristic: WindowWeights,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !GRID_DIMENSION_RANGE.contains(&self.grid.rows) {
            return Err(ConfigError::Validation(format!(
                "grid.rows must be in {}..={}",
                GRID_DIMENSION_RANGE.start(),
                GRID_DIMENSION_RANGE.end()
            )));
        }
        if !GRID_DIMENSION_RANGE.contains(&self.grid.cols) {
            return Err(ConfigError::Validation(format!(
                "grid.cols must be in {}..={}",
                GRID_DIMENSION_RANGE.start(),
                GRID_DIMENSION_RANGE.end()
            )));
        }

        let w = &self.heuristic;
        if w.one < 0 {
            return Err(ConfigError::Validation("heuristic.one must be >= 0".into()));
        }
        if w.two <= w.one {
            return Err(ConfigError::Validation(
                "heuristic.two must be > heuristic.one".into(),
            ));
        }
        if w.three <= w.two {
            return Err(ConfigError::Validation(
                "heuristic.three must be > heuristic.two".into(),
            ));
        }
        if w.four <= w.three {
            return Err(ConfigError::Validation(
                "heuristic.four must be > heuristic.three".into(),
            ));
        }
        if w.four > MAX_WEIGHT {
            return Err(ConfigError::Validation(format!(
                "heuristic.four must be <= {MAX_WEIGHT}"
            )));
        }
        if w.center < 0 {
            return Err(ConfigError::Validation(
                "heuristic.center must be >= 0".into(),
            ));
        }
        if w.center > MAX_WEIGHT {
            return Err(ConfigError::Validation(format!(
                "heuristic.center must be <= {MAX_WEIGHT}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
