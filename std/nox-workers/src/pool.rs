//!
//! Bounded Worker Pool
//!
//! Applies a pure function to every task of an ordered batch with at most N
//! worker threads and blocks until all results are in:
//!
//! - Empty batch: returns immediately, no threads, the function never runs
//! - One task: runs inline on the calling thread
//! - Otherwise: `min(N, len)` scoped workers share a closed queue of task
//!   indices and each returns the `(i, f(&tasks[i]))` pairs it computed
//!
//! Every index is handed out by the queue exactly once. After the join the
//! pairs are placed into output position `i`, so results come back in input
//! order whatever order they were computed in.
//!
//! There is no error containment. If `f` panics, the remaining workers
//! finish, the scope joins them, and the panic continues on the caller.
//!

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use tracing::{debug, trace};

use crate::config::{PoolConfig, DEFAULT_THREAD_NAME};
use crate::errors::PoolError;
use crate::pending::{spawn_batch, Pending};

/// Number of hardware threads, or 1 when that cannot be queried.
pub fn available_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
    thread_name: String,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(available_workers())
    }
}

impl WorkerPool {
    /// A pool of `workers` threads. Zero is treated as one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }

    pub fn from_config(config: &PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self {
            workers: config.resolved_workers(),
            thread_name: config.thread_name.clone(),
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Computes `f` for every task and returns the results in task order.
    pub fn run<T, S, F>(&self, tasks: &[T], f: F) -> Vec<S>
    where
        T: Sync,
        S: Send,
        F: Fn(&T) -> S + Sync,
    {
        run_batch(tasks, &f, self.workers)
    }

    /// Runs the batch on a background thread named after this pool.
    pub fn spawn<T, S, F>(&self, tasks: Vec<T>, f: F) -> Result<Pending<S>, PoolError>
    where
        T: Send + Sync + 'static,
        S: Send + 'static,
        F: Fn(&T) -> S + Send + Sync + 'static,
    {
        spawn_batch(&self.thread_name, tasks, f, self.workers)
    }
}

/// Processes `tasks` with one worker per hardware thread.
pub fn concurrent_now<T, S, F>(tasks: &[T], f: F) -> Vec<S>
where
    T: Sync,
    S: Send,
    F: Fn(&T) -> S + Sync,
{
    run_batch(tasks, &f, available_workers())
}

/// Processes `tasks` with at most `workers` threads.
pub fn concurrent_now_n<T, S, F>(tasks: &[T], f: F, workers: usize) -> Vec<S>
where
    T: Sync,
    S: Send,
    F: Fn(&T) -> S + Sync,
{
    run_batch(tasks, &f, workers)
}

pub(crate) fn run_batch<T, S, F>(tasks: &[T], f: &F, workers: usize) -> Vec<S>
where
    T: Sync,
    S: Send,
    F: Fn(&T) -> S + Sync,
{
    let task = match tasks {
        [] => {
            trace!("empty batch, nothing to dispatch");
            return Vec::new();
        }
        [task] => task,
        _ => return dispatch(tasks, f, workers),
    };

    trace!("single task, running inline");
    vec![f(task)]
}

fn dispatch<T, S, F>(tasks: &[T], f: &F, workers: usize) -> Vec<S>
where
    T: Sync,
    S: Send,
    F: Fn(&T) -> S + Sync,
{
    let workers = workers.clamp(1, tasks.len());
    debug!(tasks = tasks.len(), workers, "dispatching batch");

    let (tx, rx) = crossbeam_channel::bounded(tasks.len());
    for index in 0..tasks.len() {
        tx.send(index).expect("index queue holds the whole batch");
    }
    drop(tx);

    let queue = &rx;
    let computed: Vec<Vec<(usize, S)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(move || {
                    queue
                        .iter()
                        .map(|index| (index, f(&tasks[index])))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        // Joined by hand so the caller sees the task's own panic payload.
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });

    debug!(tasks = tasks.len(), "batch joined");

    let mut results: Vec<Option<S>> = tasks.iter().map(|_| None).collect();
    for (index, value) in computed.into_iter().flatten() {
        debug_assert!(results[index].is_none(), "index {index} claimed twice");
        results[index] = Some(value);
    }

    results
        .into_iter()
        .map(|slot| slot.expect("every index is claimed by exactly one worker"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn square(x: &i64) -> i64 {
        x * x
    }

    #[test]
    fn test_squares_in_order() {
        assert_eq!(concurrent_now_n(&[2, 3, 4, 5], square, 2), vec![4, 9, 16, 25]);
    }

    #[test]
    fn test_empty_batch_never_calls() {
        let calls = AtomicUsize::new(0);
        let out: Vec<i64> = concurrent_now_n(
            &[] as &[i64],
            |x| {
                calls.fetch_add(1, Ordering::SeqCst);
                square(x)
            },
            4,
        );

        assert!(out.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_single_task_runs_inline() {
        let caller = thread::current().id();
        let calls = AtomicUsize::new(0);

        let out = concurrent_now_n(
            &[7],
            |x: &i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                (thread::current().id(), x + 1)
            },
            8,
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(out, vec![(caller, 8)]);
    }

    #[test]
    fn test_order_independent_of_worker_count() {
        let tasks: Vec<u64> = (0..100).collect();
        let calls = AtomicUsize::new(0);
        let f = |x: &u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            x * 3 + 1
        };

        let four = concurrent_now_n(&tasks, f, 4);
        assert_eq!(calls.swap(0, Ordering::SeqCst), 100);

        let thirty_two = concurrent_now_n(&tasks, f, 32);
        assert_eq!(calls.load(Ordering::SeqCst), 100);

        let expected: Vec<u64> = tasks.iter().map(|x| x * 3 + 1).collect();
        assert_eq!(four, expected);
        assert_eq!(thirty_two, expected);
    }

    #[test]
    fn test_each_index_computed_once() {
        let tasks: Vec<usize> = (0..500).collect();
        let seen = Mutex::new(Vec::new());

        let out = concurrent_now_n(
            &tasks,
            |i| {
                seen.lock().unwrap().push(*i);
                *i
            },
            16,
        );

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 500);
        assert_eq!(seen.iter().collect::<HashSet<_>>().len(), 500);
        assert_eq!(out, tasks);
    }

    #[test]
    fn test_never_more_workers_than_tasks() {
        let threads = Mutex::new(HashSet::new());
        concurrent_now_n(
            &[1, 2, 3],
            |x| {
                threads.lock().unwrap().insert(thread::current().id());
                thread::sleep(Duration::from_millis(5));
                *x
            },
            64,
        );
        assert!(threads.into_inner().unwrap().len() <= 3);
    }

    #[test]
    fn test_results_land_by_index_despite_completion_order() {
        let tasks: Vec<u64> = (0..8).collect();
        let out = concurrent_now_n(
            &tasks,
            |x| {
                thread::sleep(Duration::from_millis(2 * (8 - x)));
                x * 10
            },
            8,
        );
        assert_eq!(out, vec![0, 10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        assert_eq!(concurrent_now_n(&[1, 2, 3], |x| x + 1, 0), vec![2, 3, 4]);
        assert_eq!(WorkerPool::new(0).workers(), 1);
    }

    #[test]
    fn test_default_worker_count() {
        let tasks: Vec<i32> = (1..=20).collect();
        let out = concurrent_now(&tasks, |x| x * 2);
        assert_eq!(out, (1..=20).map(|x| x * 2).collect::<Vec<_>>());
        assert_eq!(WorkerPool::default().workers(), available_workers());
    }

    #[test]
    fn test_pool_from_config() {
        let pool = WorkerPool::from_config(&PoolConfig::with_workers(3)).unwrap();
        assert_eq!(pool.workers(), 3);
        assert_eq!(pool.thread_name(), DEFAULT_THREAD_NAME);
        assert_eq!(pool.run(&["a", "bb", "ccc"], |s| s.len()), vec![1, 2, 3]);

        let err = WorkerPool::from_config(&PoolConfig::with_workers(0)).unwrap_err();
        assert!(matches!(err, PoolError::ZeroWorkers));
    }

    #[test]
    fn test_non_sync_output() {
        use std::cell::Cell;
        let out = concurrent_now_n(&[1, 2, 3], |x| Cell::new(*x), 2);
        assert_eq!(out.iter().map(Cell::get).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "task 13 failed")]
    fn test_task_panic_propagates() {
        let tasks: Vec<u32> = (0..20).collect();
        concurrent_now_n(
            &tasks,
            |x| {
                if *x == 13 {
                    panic!("task 13 failed");
                }
                *x
            },
            4,
        );
    }
}
