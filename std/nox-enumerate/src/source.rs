//!
//! Leaf Producers
//!
//! Adapt in-memory data and std iterators into the [`Sequence`] contract:
//!
//! - `Items<T>` - owns a `Vec<T>`
//! - `Slice<'a, T>` - borrows a `&'a [T]`
//! - `FromIter<I>` - pulls from any `Iterator`, caching the current item
//! - `Repeat<T>` - the same value forever
//! - `Counter` - `0, 1, 2, ...`
//!

use std::iter::Fuse;

use crate::sequence::Sequence;

/// Position tracking shared by the in-memory producers.
///
/// `position` is one past the current index; zero means nothing has been
/// read yet and `len + 1` means the end has been reported.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    position: usize,
}

impl Cursor {
    fn advance(&mut self, len: usize) -> bool {
        if self.position < len {
            self.position += 1;
            true
        } else {
            self.position = len + 1;
            false
        }
    }

    fn index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }
}

/// An owned in-memory sequence.
#[derive(Debug, Clone)]
pub struct Items<T> {
    items: Vec<T>,
    cursor: Cursor,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: Cursor::default(),
        }
    }

    /// Number of elements not yet advanced past.
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.cursor.position)
    }
}

impl<T: Clone> Sequence for Items<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.cursor.advance(self.items.len())
    }

    fn value(&self) -> Option<T> {
        self.cursor
            .index()
            .and_then(|i| self.items.get(i))
            .cloned()
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// A borrowed in-memory sequence.
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a, T> {
    items: &'a [T],
    cursor: Cursor,
}

impl<'a, T> Slice<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            cursor: Cursor::default(),
        }
    }
}

impl<T: Clone> Sequence for Slice<'_, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.cursor.advance(self.items.len())
    }

    fn value(&self) -> Option<T> {
        self.cursor
            .index()
            .and_then(|i| self.items.get(i))
            .cloned()
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

/// A sequence pulling from a std iterator.
///
/// The iterator is fused: once it returns `None` it is never polled again.
#[derive(Debug)]
pub struct FromIter<I: Iterator> {
    iter: Fuse<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> FromIter<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            current: None,
        }
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.current = self.iter.next();
        self.current.is_some()
    }

    fn value(&self) -> Option<I::Item> {
        self.current.clone()
    }
}

/// An infinite sequence of one value.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    started: bool,
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.started = true;
        true
    }

    fn value(&self) -> Option<T> {
        self.started.then(|| self.value.clone())
    }
}

/// Counts up from zero until `usize::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter {
    current: Option<usize>,
    overflowed: bool,
}

impl Sequence for Counter {
    type Item = usize;

    fn advance(&mut self) -> bool {
        if self.overflowed {
            return false;
        }
        self.current = match self.current {
            None => Some(0),
            Some(n) => n.checked_add(1),
        };
        self.overflowed = self.current.is_none();
        !self.overflowed
    }

    fn value(&self) -> Option<usize> {
        self.current
    }
}

pub fn from_vec<T>(items: Vec<T>) -> Items<T> {
    Items::new(items)
}

pub fn from_slice<T>(items: &[T]) -> Slice<'_, T> {
    Slice::new(items)
}

pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter::new(iter.into_iter())
}

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat {
        value,
        started: false,
    }
}

pub fn counter() -> Counter {
    Counter::default()
}
