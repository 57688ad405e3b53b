use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::smoothing::params::{SmoothingError, SmoothingParams};
use crate::trace_io::batching::DEFAULT_BATCH_SIZE;
use crate::trace_io::trace_loader::DEFAULT_MAX_SAMPLES;

#[derive(Debug, Clone, Deserialize)]
pub struct SmootherConfig {
    /// Whitespace separated raw samples.
    pub input: PathBuf,
    /// Smoothed samples, one per line. Truncated at the start of a run.
    pub output: PathBuf,
    /// Optional PNG comparing raw and smoothed traces.
    #[serde(default)]
    pub plot: Option<PathBuf>,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
    /// Reject non-numeric tokens instead of stopping at them.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub filter: SmoothingParams,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_max_samples() -> usize {
    DEFAULT_MAX_SAMPLES
}

impl SmootherConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: SmootherConfig =
            serde_json::from_str(data).map_err(|e| ConfigError::Parse { reason: e.to_string() })?;
        config.filter.check_validity()?;

        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<SmootherConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    SmootherConfig::from_json(&data)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("failed to read config {file}: {reason}")]
    Read { file: String, reason: String },
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
    #[error("invalid filter parameters: {0}")]
    InvalidFilter(#[from] SmoothingError),
}
