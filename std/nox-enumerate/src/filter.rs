//!
//! Filter Combinator
//!
//! `Filter` yields the subsequence of its source for which a predicate
//! holds, keeping relative order. Once the source reports exhaustion it is
//! never advanced again.
//!

use std::fmt;

use crate::sequence::Sequence;

pub struct Filter<S, P> {
    source: S,
    predicate: P,
    exhausted: bool,
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    pub fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            exhausted: false,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        while self.source.advance() {
            if self.source.value().is_some_and(|v| (self.predicate)(&v)) {
                return true;
            }
        }

        self.exhausted = true;
        false
    }

    fn value(&self) -> Option<S::Item> {
        if self.exhausted {
            return None;
        }
        self.source.value()
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
