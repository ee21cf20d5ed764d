//!
//! Terminal Consumers
//!
//! Functions that pull values out of a sequence until it is exhausted:
//!
//! ## Aggregation
//! - `sum(seq) -> T` - Sum all elements, `T::default()` when empty
//! - `min(seq) -> Option<T>` - Smallest element, `None` when empty
//! - `max(seq) -> Option<T>` - Largest element, `None` when empty
//! - `min_max(seq) -> Option<(T, T)>` - Both extremes in one pass
//! - `count(seq) -> usize` - Number of elements
//!
//! ## Draining
//! - `drain(seq)` - Discard every element
//! - `consume(seq, n) -> usize` - Discard up to `n` elements
//!
//! ## Collection
//! - `histogram(seq) -> HashMap<T, usize>` - Occurrences per value
//! - `unique(seq) -> HashSet<T>` - Distinct values
//! - `collect_vec(seq) -> Vec<T>` - Every value in order
//!
//! Extremes keep the first occurrence on ties: a later element only
//! replaces the current one when strictly smaller (min) or strictly greater
//! (max).
//!

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::AddAssign;

use crate::sequence::Sequence;

/// Calls `f` with every remaining value.
fn for_each<S: Sequence>(mut seq: S, mut f: impl FnMut(S::Item)) {
    while seq.advance() {
        if let Some(v) = seq.value() {
            f(v);
        }
    }
}

fn first<S: Sequence>(seq: &mut S) -> Option<S::Item> {
    if seq.advance() { seq.value() } else { None }
}

pub fn sum<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: Default + AddAssign,
{
    let mut total = S::Item::default();
    for_each(seq, |v| total += v);
    total
}

pub fn min<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let mut best = first(&mut seq)?;
    for_each(seq, |v| {
        if v < best {
            best = v;
        }
    });
    Some(best)
}

pub fn max<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let mut best = first(&mut seq)?;
    for_each(seq, |v| {
        if v > best {
            best = v;
        }
    });
    Some(best)
}

pub fn min_max<S>(mut seq: S) -> Option<(S::Item, S::Item)>
where
    S: Sequence,
    S::Item: PartialOrd + Clone,
{
    let start = first(&mut seq)?;
    let (mut lo, mut hi) = (start.clone(), start);
    for_each(seq, |v| {
        if v < lo {
            lo = v;
        } else if v > hi {
            hi = v;
        }
    });
    Some((lo, hi))
}

pub fn count<S: Sequence>(mut seq: S) -> usize {
    let mut n = 0;
    while seq.advance() {
        n += 1;
    }
    n
}

pub fn drain<S: Sequence>(mut seq: S) {
    while seq.advance() {}
}

pub fn consume<S: Sequence>(mut seq: S, n: usize) -> usize {
    let mut taken = 0;
    while taken < n && seq.advance() {
        taken += 1;
    }
    taken
}

pub fn histogram<S>(seq: S) -> HashMap<S::Item, usize>
where
    S: Sequence,
    S::Item: Eq + Hash,
{
    let mut counts = HashMap::new();
    for_each(seq, |v| *counts.entry(v).or_insert(0) += 1);
    counts
}

pub fn unique<S>(seq: S) -> HashSet<S::Item>
where
    S: Sequence,
    S::Item: Eq + Hash,
{
    let mut seen = HashSet::new();
    for_each(seq, |v| {
        seen.insert(v);
    });
    seen
}

pub fn collect_vec<S: Sequence>(seq: S) -> Vec<S::Item> {
    let mut out = Vec::new();
    for_each(seq, |v| out.push(v));
    out
}
