///
/// # Pool Configuration
///
/// A `[pool]` table in a TOML file configures [`WorkerPool`](crate::WorkerPool):
///
/// ```toml
/// [pool]
/// workers = 8                  # omit to use every hardware thread
/// thread_name = "nox-worker"   # name of background coordinator threads
/// ```
///
/// Every field is optional. A missing `[pool]` table yields the defaults.
/// An explicit `workers = 0` is rejected rather than clamped, since it can
/// only be a mistake in a file.
///

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::PoolError;
use crate::pool::available_workers;

pub const DEFAULT_THREAD_NAME: &str = "nox-worker";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub workers: Option<usize>,
    pub thread_name: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pool: PoolConfig,
}

impl PoolConfig {
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: Some(workers),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PoolError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.pool.validate()?;
        Ok(file.pool)
    }

    pub fn from_path(path: &Path) -> Result<Self, PoolError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PoolError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => PoolError::Io(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), PoolError> {
        if self.workers == Some(0) {
            return Err(PoolError::ZeroWorkers);
        }
        if self.thread_name.trim().is_empty() {
            return Err(PoolError::InvalidConfig(
                "thread_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured worker count, or the hardware concurrency when unset.
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(available_workers)
    }
}
