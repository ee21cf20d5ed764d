//!
//! Transform Combinator
//!
//! `Map` applies a function to each element of its source. Advancing only
//! moves the source; the function runs the first time `value()` is read at a
//! position and the result is cached until the next `advance()`. Positions
//! that are never read never invoke the function.
//!

use std::fmt;
use std::sync::OnceLock;

use crate::sequence::Sequence;

pub struct Map<S, F, U> {
    source: S,
    f: F,
    current: OnceLock<Option<U>>,
}

impl<S, F, U> Map<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    pub fn new(source: S, f: F) -> Self {
        Self {
            source,
            f,
            current: OnceLock::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S, F, U> Sequence for Map<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
    U: Clone,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.current = OnceLock::new();
        self.source.advance()
    }

    fn value(&self) -> Option<U> {
        self.current
            .get_or_init(|| self.source.value().map(&self.f))
            .clone()
    }
}

impl<S: fmt::Debug, F, U> fmt::Debug for Map<S, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("source", &self.source).finish_non_exhaustive()
    }
}
