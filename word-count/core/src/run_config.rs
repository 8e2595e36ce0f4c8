use crate::ChunkPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding a comma separated worker list
pub const WORKER_ADDRESSES_ENV: &str = "WORKER_ADDRESSES";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings shared by every word count variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Corpus to count
    pub input_path: PathBuf,
    /// Worker addresses for the networked variants
    pub workers: Vec<String>,
    /// Worker count for the in-process and child-process variants
    pub num_workers: usize,
    /// How many of the most frequent words to print
    pub top_n: usize,
    pub chunk_policy: ChunkPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("shakespeare.txt"),
            workers: Vec::new(),
            num_workers: 4,
            top_n: 20,
            chunk_policy: ChunkPolicy::default(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, falling back to the defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Self::default()
            }
        }
    }

    /// Replace the worker list with the comma separated `value`, if any
    pub fn apply_worker_override(&mut self, value: Option<&str>) {
        if let Some(value) = value {
            let workers = parse_worker_list(value);
            if !workers.is_empty() {
                self.workers = workers;
            }
        }
    }

    /// Apply `WORKER_ADDRESSES` from the process environment
    pub fn apply_env(&mut self) {
        let value = std::env::var(WORKER_ADDRESSES_ENV).ok();
        self.apply_worker_override(value.as_deref());
    }

    /// Use `defaults` when no worker was configured anywhere
    pub fn workers_or(&self, defaults: &[&str]) -> Vec<String> {
        if self.workers.is_empty() {
            defaults.iter().map(|w| w.to_string()).collect()
        } else {
            self.workers.clone()
        }
    }

    pub fn read_corpus(&self) -> Result<String, ConfigError> {
        fs::read_to_string(&self.input_path).map_err(|source| ConfigError::Io {
            path: self.input_path.clone(),
            source,
        })
    }
}

pub fn parse_worker_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}
