//!
//! Background Batches
//!
//! `spawn_concurrent_n` hands a whole batch to a coordinator thread that runs
//! the same blocking pool algorithm, and returns a [`Pending`] handle at once.
//! `Pending::wait` blocks until every result is in. Nothing can be cancelled
//! once spawned.
//!

use std::panic;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::config::DEFAULT_THREAD_NAME;
use crate::errors::PoolError;
use crate::pool::run_batch;

/// Results of a batch that is still being computed.
#[derive(Debug)]
pub struct Pending<S> {
    handle: JoinHandle<Vec<S>>,
}

impl<S> Pending<S> {
    /// Blocks until the batch is done. A task panic is resumed here.
    pub fn wait(self) -> Vec<S> {
        match self.handle.join() {
            Ok(results) => results,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Starts processing `tasks` with at most `workers` threads and returns
/// without waiting.
pub fn spawn_concurrent_n<T, S, F>(tasks: Vec<T>, f: F, workers: usize) -> Result<Pending<S>, PoolError>
where
    T: Send + Sync + 'static,
    S: Send + 'static,
    F: Fn(&T) -> S + Send + Sync + 'static,
{
    spawn_batch(DEFAULT_THREAD_NAME, tasks, f, workers)
}

pub(crate) fn spawn_batch<T, S, F>(
    thread_name: &str,
    tasks: Vec<T>,
    f: F,
    workers: usize,
) -> Result<Pending<S>, PoolError>
where
    T: Send + Sync + 'static,
    S: Send + 'static,
    F: Fn(&T) -> S + Send + Sync + 'static,
{
    let handle = thread::Builder::new()
        .name(thread_name.to_string())
        .spawn(move || {
            debug!(tasks = tasks.len(), workers, "background batch started");
            run_batch(&tasks, &f, workers)
        })?;

    Ok(Pending { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::pool::WorkerPool;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_spawn_then_wait() {
        let pending = spawn_concurrent_n((1..=10).collect::<Vec<u32>>(), |x| x * x, 3).unwrap();
        assert_eq!(pending.wait(), vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100]);
    }

    #[test]
    fn test_spawn_returns_before_completion() {
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = std::sync::Mutex::new(release_rx);

        let pending = spawn_concurrent_n(
            vec![1, 2],
            move |x: &i32| {
                let _ = release_rx.lock().unwrap().recv_timeout(Duration::from_secs(5));
                x + 100
            },
            2,
        )
        .unwrap();

        assert!(!pending.is_finished());
        drop(release_tx);
        assert_eq!(pending.wait(), vec![101, 102]);
    }

    #[test]
    fn test_spawn_empty_batch() {
        let pending = spawn_concurrent_n(Vec::<u8>::new(), |x| *x, 4).unwrap();
        assert!(pending.wait().is_empty());
    }

    #[test]
    fn test_coordinator_uses_pool_thread_name() {
        let config = PoolConfig {
            workers: Some(2),
            thread_name: "batch-coordinator".to_string(),
        };
        let pool = WorkerPool::from_config(&config).unwrap();

        let pending = pool
            .spawn(vec![()], |_| thread::current().name().map(str::to_string))
            .unwrap();
        assert_eq!(pending.wait(), vec![Some("batch-coordinator".to_string())]);
    }

    #[test]
    #[should_panic(expected = "bad task")]
    fn test_wait_resumes_task_panic() {
        let pending = spawn_concurrent_n(
            vec![1, 2, 3],
            |x: &i32| {
                if *x == 2 {
                    panic!("bad task");
                }
                *x
            },
            2,
        )
        .unwrap();
        pending.wait();
    }
}
