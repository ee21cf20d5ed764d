//!
//! nox-workers - Bounded Worker Pool
//!
//! Parallelizes a pure per-item function over an ordered batch while keeping
//! each result at the position of its input.
//!
//! ## Blocking
//! - `concurrent_now(&tasks, f) -> Vec<S>` - one worker per hardware thread
//! - `concurrent_now_n(&tasks, f, n) -> Vec<S>` - at most `n` workers
//! - `WorkerPool::run(&tasks, f) -> Vec<S>` - worker count from a `PoolConfig`
//!
//! ## Background
//! - `spawn_concurrent_n(tasks, f, n) -> Pending<S>` - returns immediately
//! - `Pending::wait() -> Vec<S>` - blocks for the results
//!
//! ## Configuration
//! - `PoolConfig::from_toml_str` / `PoolConfig::from_path` - `[pool]` table
//!
//! Usage:
//! ```
//! use nox_workers::concurrent_now_n;
//!
//! let squares = concurrent_now_n(&[2, 3, 4, 5], |x| x * x, 2);
//! assert_eq!(squares, vec![4, 9, 16, 25]);
//! ```
//!

pub mod config;
pub mod errors;
pub mod pending;
pub mod pool;

pub use config::PoolConfig;
pub use errors::PoolError;
pub use pending::{spawn_concurrent_n, Pending};
pub use pool::{available_workers, concurrent_now, concurrent_now_n, WorkerPool};
