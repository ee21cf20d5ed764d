//!
//! nox - Sequences and Parallel Batches
//!
//! Re-exports the nox library crates under one name:
//!
//! - `nox::enumerate` - the `Sequence` contract, producers, combinators, terminals
//! - `nox::channel` - channel-backed sequences and producer threads
//! - `nox::workers` - the bounded worker pool
//!
//! The most used items are also available at the crate root.
//!
//! Usage:
//! ```
//! use nox::{concurrent_now_n, from_vec, Sequence};
//!
//! let lengths = concurrent_now_n(&["a", "bb", "ccc"], |s| s.len(), 2);
//! let total = from_vec(lengths).filter(|n| *n > 1).sum();
//! assert_eq!(total, 5);
//! ```
//!

pub use nox_channel as channel;
pub use nox_enumerate as enumerate;
pub use nox_workers as workers;

pub use nox_channel::{bounded, produce, received, try_get, try_put, unbounded, Producer, Received};
pub use nox_enumerate::{counter, from_iter, from_slice, from_vec, repeat, Sequence, Synchronized};
pub use nox_workers::{
    concurrent_now, concurrent_now_n, spawn_concurrent_n, Pending, PoolConfig, PoolError, WorkerPool,
};
