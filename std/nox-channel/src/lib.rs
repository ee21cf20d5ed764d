//!
//! nox-channel - Channel-Backed Sequences
//!
//! Connects concurrent producers to the pull-based sequence contract.
//! A producer writes into a channel; the consumer drains it as a
//! [`Sequence`], with `advance()` blocking until a value arrives or every
//! sender has been dropped.
//!
//! ## Construction
//! - `bounded(capacity)` - sender plus sequence over a bounded channel
//!   (capacity zero is a rendezvous channel)
//! - `unbounded()` - sender plus sequence over an unbounded channel
//! - `received(rx)` - wrap an existing receiver
//! - `produce(capacity, f)` - run `f` on its own thread as the producer
//!
//! ## Non-blocking Access
//! - `try_get(&rx) -> Option<T>` - read if a value is ready
//! - `try_put(&tx, value) -> bool` - write if there is room
//!

pub mod producer;
pub mod received;

pub use crossbeam_channel::{Receiver, Sender};
pub use nox_enumerate::Sequence;
pub use producer::{produce, Producer};
pub use received::{received, Received};

/// Creates a bounded channel whose receiving half is a sequence.
pub fn bounded<T>(capacity: usize) -> (Sender<T>, Received<T>) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    (tx, Received::new(rx))
}

/// Creates an unbounded channel whose receiving half is a sequence.
pub fn unbounded<T>() -> (Sender<T>, Received<T>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (tx, Received::new(rx))
}

/// Reads a value without blocking. `None` if nothing is ready or the
/// channel is closed and empty.
pub fn try_get<T>(rx: &Receiver<T>) -> Option<T> {
    rx.try_recv().ok()
}

/// Writes a value without blocking. `false` if the channel is full or
/// every receiver is gone; the value is dropped in that case.
pub fn try_put<T>(tx: &Sender<T>, value: T) -> bool {
    tx.try_send(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_get_empty_and_ready() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        assert_eq!(try_get(&rx), None);
        tx.send(5).unwrap();
        assert_eq!(try_get(&rx), Some(5));
        assert_eq!(try_get(&rx), None);
    }

    #[test]
    fn test_try_put_respects_capacity() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        assert!(try_put(&tx, 1));
        assert!(!try_put(&tx, 2));
        assert_eq!(rx.recv().unwrap(), 1);
        assert!(try_put(&tx, 3));
    }

    #[test]
    fn test_try_put_after_receiver_dropped() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        assert!(!try_put(&tx, "lost"));
    }

    #[test]
    fn test_try_get_after_close() {
        let (tx, rx) = crossbeam_channel::bounded::<u8>(4);
        drop(tx);
        assert_eq!(try_get(&rx), None);
    }

    #[test]
    fn test_unbounded_pair() {
        let (tx, seq) = unbounded();
        for i in 0..5 {
            tx.send(i).unwrap();
        }
        drop(tx);
        assert_eq!(seq.collect_vec(), vec![0, 1, 2, 3, 4]);
    }
}
