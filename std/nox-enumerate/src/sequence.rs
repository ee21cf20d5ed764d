//!
//! The Sequence Contract
//!
//! Every producer and combinator in this crate implements [`Sequence`].
//! In-memory sources and channel-backed sequences feed the same combinators
//! and terminals through this one trait.
//!
//! Calling `value()` before the first successful `advance()`, or after
//! `advance()` returned `false`, yields `None`. No implementation here
//! panics on that misuse.
//!

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::AddAssign;

use crate::filter::Filter;
use crate::iter::SequenceIter;
use crate::map::Map;
use crate::sync::Synchronized;
use crate::terminal;
use crate::zip::Zip;

/// A pull-based cursor over an ordered stream of values.
pub trait Sequence {
    type Item;

    /// Moves the cursor to the next element.
    ///
    /// Returns `true` when an element is now current. Every call consumes
    /// one step; it is not idempotent.
    fn advance(&mut self) -> bool;

    /// Returns the element under the cursor, if there is one.
    fn value(&self) -> Option<Self::Item>;

    /// Lazily applies `f` to every element.
    fn map<U, F>(self, f: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keeps only the elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Pairs elements by position with `other`.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Sequence,
    {
        Zip::new(self, other)
    }

    /// Wraps the sequence so several threads can share it.
    ///
    /// [`Synchronized`] has an inherent `synchronize` returning itself, so
    /// calling this again on a concrete `Synchronized<S>` does not add a
    /// second lock layer. Generic code bounded only by `Sequence`, and
    /// `Box<dyn Sequence>`, reach this trait method instead and get a
    /// `Synchronized<Synchronized<S>>`. That nesting drains the same values
    /// and cannot deadlock, since the outer lock is always taken first.
    fn synchronize(self) -> Synchronized<Self>
    where
        Self: Sized,
    {
        Synchronized::new(self)
    }

    /// Bridges into a std [`Iterator`] that drains the sequence.
    fn iter(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }

    fn sum(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Default + AddAssign,
    {
        terminal::sum(self)
    }

    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        terminal::min(self)
    }

    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        terminal::max(self)
    }

    fn min_max(self) -> Option<(Self::Item, Self::Item)>
    where
        Self: Sized,
        Self::Item: PartialOrd + Clone,
    {
        terminal::min_max(self)
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        terminal::count(self)
    }

    fn drain(self)
    where
        Self: Sized,
    {
        terminal::drain(self)
    }

    /// Advances at most `n` times and returns how many steps succeeded.
    ///
    /// Pass `&mut seq` to keep using the rest of the sequence afterwards.
    fn consume(self, n: usize) -> usize
    where
        Self: Sized,
    {
        terminal::consume(self, n)
    }

    fn histogram(self) -> HashMap<Self::Item, usize>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        terminal::histogram(self)
    }

    fn unique(self) -> HashSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        terminal::unique(self)
    }

    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        terminal::collect_vec(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn value(&self) -> Option<S::Item> {
        (**self).value()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn value(&self) -> Option<S::Item> {
        (**self).value()
    }
}
