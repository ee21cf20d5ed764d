//!
//! Synchronized Sequences
//!
//! Shares one sequence between threads behind a reader-writer lock:
//!
//! - `advance()` holds the write lock, so no two advances interleave
//! - `value()` holds the read lock, so reads run alongside other reads but
//!   never alongside an advance
//! - `next()` advances and reads under a single write lock
//!
//! Pairing `advance()` with `value()` is the caller's business. If another
//! thread advances in between, `value()` returns that thread's element.
//! Use `next()` when each element must be observed by exactly one consumer.
//!
//! Usage:
//! ```
//! use nox_enumerate::{from_vec, Sequence};
//!
//! let shared = from_vec(vec![1, 2, 3]).synchronize();
//! std::thread::scope(|s| {
//!     s.spawn(|| while shared.next().is_some() {});
//! });
//! assert!(!shared.advance());
//! ```
//!

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::sequence::Sequence;

#[derive(Debug, Default)]
pub struct Synchronized<S> {
    inner: RwLock<S>,
}

impl<S: Sequence> Synchronized<S> {
    pub fn new(source: S) -> Self {
        Self {
            inner: RwLock::new(source),
        }
    }

    /// Already synchronized; returns `self` without another lock layer.
    pub fn synchronize(self) -> Self {
        self
    }

    pub fn advance(&self) -> bool {
        self.write().advance()
    }

    pub fn value(&self) -> Option<S::Item> {
        self.read().value()
    }

    /// Advances and reads the new element atomically.
    pub fn next(&self) -> Option<S::Item> {
        let mut source = self.write();
        if source.advance() {
            source.value()
        } else {
            None
        }
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic inside another consumer's advance cannot leave the cursor half
    // moved, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, S> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, S> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Sequence> Sequence for Synchronized<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        self.inner
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .advance()
    }

    fn value(&self) -> Option<S::Item> {
        Synchronized::value(self)
    }
}

impl<S: Sequence> Sequence for &Synchronized<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        Synchronized::advance(self)
    }

    fn value(&self) -> Option<S::Item> {
        Synchronized::value(self)
    }
}
