//!
//! Iterator Bridge
//!
//! `SequenceIter` turns any [`Sequence`] into a std [`Iterator`] so the usual
//! adapters and `collect` work on it. Each `next()` is one `advance()`
//! followed by one `value()`.
//!

use crate::sequence::Sequence;

#[derive(Debug, Clone)]
pub struct SequenceIter<S> {
    seq: S,
}

impl<S: Sequence> SequenceIter<S> {
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for SequenceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.seq.advance() {
            self.seq.value()
        } else {
            None
        }
    }
}
