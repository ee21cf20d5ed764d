//!
//! Zip Combinator
//!
//! `Zip` pairs two sequences by position. Both sides are advanced on every
//! call, even when the first one is already exhausted, so their cursors stay
//! aligned for anyone inspecting them separately. The pair sequence ends at
//! the shorter side without error.
//!

use crate::sequence::Sequence;

#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A: Sequence, B: Sequence> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> bool {
        let a = self.a.advance();
        let b = self.b.advance();
        a && b
    }

    fn value(&self) -> Option<(A::Item, B::Item)> {
        Some((self.a.value()?, self.b.value()?))
    }
}
