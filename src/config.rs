use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::scoring::{PredictionWeights, TimingWindow};
use crate::tables::ReferenceTables;

// weekday indices travel as u8
const MAX_WEEKDAYS: usize = u8::MAX as usize + 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write config {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub prediction: PredictionWeights,
    pub timing: TimingWindow,
    pub tables: ReferenceTables,
}

impl PredictorConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                let config: PredictorConfig =
                    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                config.validate().map_err(|reason| ConfigError::Invalid {
                    path: path.clone(),
                    reason,
                })?;
                tracing::debug!(path = %path.display(), "loaded predictor config");
                config
            }
            _ => PredictorConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        let weekdays = self.tables.weekdays.len();
        if weekdays > MAX_WEEKDAYS {
            return Err(format!(
                "tables.weekdays has {} entries, at most {} are addressable",
                weekdays, MAX_WEEKDAYS
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_parse::<f64>("PREDICTOR_JITTER_MAX") {
            self.prediction.jitter_max = value;
        }
        if let Some(value) = env_parse::<u8>("PREDICTOR_PEAK_START") {
            self.timing.peak_start = value;
        }
        if let Some(value) = env_parse::<u8>("PREDICTOR_PEAK_END") {
            self.timing.peak_end = value;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok().filter(|value| !value.trim().is_empty())?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable config override");
            None
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("PREDICTOR_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/predictor.toml")))
}
