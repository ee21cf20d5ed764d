//!
//! nox-enumerate - Lazy Pull Sequences
//!
//! A sequence is a cursor over an ordered, possibly infinite stream of values.
//! Consumers pull values with two calls:
//!
//! - `advance() -> bool` - move to the next element, `false` once exhausted
//! - `value() -> Option<T>` - read the element under the cursor
//!
//! ## Producers
//! - `from_vec(Vec<T>)` - owned in-memory sequence
//! - `from_slice(&[T])` - borrowed in-memory sequence
//! - `from_iter(impl IntoIterator)` - any std iterator
//! - `repeat(value)`, `counter()` - infinite sequences
//!
//! ## Combinators
//! - `seq.map(f)` - lazily transformed values, `f` runs at most once per position
//! - `seq.filter(p)` - order-preserving subsequence
//! - `seq.zip(other)` - positional pairs, stops at the shorter side
//! - `seq.synchronize()` - shareable between threads behind a reader/writer lock
//!
//! ## Terminals
//! - `sum`, `min`, `max`, `min_max`, `count`
//! - `drain`, `consume(n)`
//! - `histogram`, `unique`, `collect_vec`
//!
//! Sequences are single-pass. Terminals leave them exhausted, except
//! `consume`, which stops after `n` steps.
//!

pub mod filter;
pub mod iter;
pub mod map;
pub mod sequence;
pub mod source;
pub mod sync;
pub mod terminal;
pub mod zip;

pub use filter::Filter;
pub use iter::SequenceIter;
pub use map::Map;
pub use sequence::Sequence;
pub use source::{counter, from_iter, from_slice, from_vec, repeat, Counter, FromIter, Items, Repeat, Slice};
pub use sync::Synchronized;
pub use zip::Zip;
