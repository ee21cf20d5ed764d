///
/// Worker pool error types.
///
/// Covers loading and validating pool configuration and starting
/// background threads. Running a batch never produces one of these: a
/// failing task panics through the pool to the caller.
///

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Pool config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid pool config: {0}")]
    InvalidConfig(String),

    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
