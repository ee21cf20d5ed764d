//!
//! Receiving Sequences
//!
//! `Received<T>` drains the receiving half of a channel. `advance()` blocks
//! while the channel is empty and open. Once the channel is empty and every
//! sender is gone it reports `false` and stays closed for good, without
//! touching the channel again.
//!

use crossbeam_channel::Receiver;
use nox_enumerate::Sequence;
use tracing::trace;

#[derive(Debug)]
pub struct Received<T> {
    rx: Receiver<T>,
    current: Option<T>,
    closed: bool,
}

impl<T> Received<T> {
    pub fn new(rx: Receiver<T>) -> Self {
        Self {
            rx,
            current: None,
            closed: false,
        }
    }

    /// Whether the end of the channel has been observed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn receiver(&self) -> &Receiver<T> {
        &self.rx
    }
}

impl<T: Clone> Sequence for Received<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.closed {
            return false;
        }

        match self.rx.recv() {
            Ok(value) => {
                self.current = Some(value);
                true
            }
            Err(_) => {
                trace!("channel closed, sequence exhausted");
                self.current = None;
                self.closed = true;
                false
            }
        }
    }

    fn value(&self) -> Option<T> {
        self.current.clone()
    }
}

impl<T> From<Receiver<T>> for Received<T> {
    fn from(rx: Receiver<T>) -> Self {
        Self::new(rx)
    }
}

pub fn received<T>(rx: Receiver<T>) -> Received<T> {
    Received::new(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounded;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_received_blocks_until_value() {
        let (tx, mut seq) = bounded(1);

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            tx.send(42).unwrap();
        });

        assert!(seq.advance());
        assert_eq!(seq.value(), Some(42));
        handle.join().unwrap();
        assert!(!seq.advance());
    }

    #[test]
    fn test_received_closed_is_permanent() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut seq = received(rx);
        tx.send(1).unwrap();
        drop(tx);

        assert!(seq.advance());
        assert!(!seq.is_closed());
        assert!(!seq.advance());
        assert!(seq.is_closed());
        assert_eq!(seq.value(), None);
        assert!(!seq.advance());
    }

    #[test]
    fn test_received_from_many_producers() {
        let (tx, seq) = bounded(2);
        let handles: Vec<_> = (0..4)
            .map(|p| {
                let tx = tx.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        tx.send(p * 100 + i).unwrap();
                    }
                })
            })
            .collect();
        drop(tx);

        let total = seq.count();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(total, 100);
    }

    #[test]
    fn test_received_composes_with_filter() {
        let (tx, seq) = bounded(8);
        thread::spawn(move || {
            for i in 1..=10 {
                tx.send(i).unwrap();
            }
        });

        let odd_sum = seq.filter(|n| n % 2 == 1).sum();
        assert_eq!(odd_sum, 25);
    }
}
