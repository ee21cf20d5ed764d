//!
//! Producer Threads
//!
//! `produce(capacity, f)` starts a named thread that runs `f` with the
//! sending half of a bounded channel and returns a [`Producer`], which is a
//! sequence over everything `f` sends. The channel closes when `f` returns.
//!
//! Reaching the end of the sequence joins the producer thread. If `f`
//! panicked, the panic is resumed on the consuming thread at that point, so a
//! crashed producer never looks like one that finished.
//!
//! Usage:
//! ```
//! use nox_channel::{produce, Sequence};
//!
//! let squares = produce(4, |tx| {
//!     for i in 1..=3 {
//!         if tx.send(i * i).is_err() {
//!             return;
//!         }
//!     }
//! })
//! .unwrap();
//! assert_eq!(squares.collect_vec(), vec![1, 4, 9]);
//! ```
//!

use std::io;
use std::panic;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use nox_enumerate::Sequence;
use tracing::debug;

use crate::received::Received;

const PRODUCER_THREAD_NAME: &str = "nox-producer";

#[derive(Debug)]
pub struct Producer<T> {
    received: Received<T>,
    handle: Option<JoinHandle<()>>,
}

impl<T> Producer<T> {
    /// Stops reading and waits for the producer thread to end.
    ///
    /// The receiving half is dropped first, so a producer blocked on a full
    /// channel sees its `send` fail instead of waiting forever. A panic on
    /// the producer thread is resumed on the caller.
    pub fn join(mut self) {
        let handle = self.handle.take();
        drop(self);
        if let Some(handle) = handle {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl<T: Clone> Sequence for Producer<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.received.advance() {
            return true;
        }

        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
        false
    }

    fn value(&self) -> Option<T> {
        self.received.value()
    }
}

/// Runs `f` on a new thread feeding a bounded channel of `capacity`.
pub fn produce<T, F>(capacity: usize, f: F) -> io::Result<Producer<T>>
where
    T: Send + 'static,
    F: FnOnce(Sender<T>) + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(capacity);

    let handle = thread::Builder::new()
        .name(PRODUCER_THREAD_NAME.to_string())
        .spawn(move || {
            debug!(capacity, "producer started");
            f(tx);
            debug!("producer finished");
        })?;

    Ok(Producer {
        received: Received::new(rx),
        handle: Some(handle),
    })
}
