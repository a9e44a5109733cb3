//! Trailing-edge debouncer
//!
//! Holds at most one pending invocation. Every call replaces the pending
//! value and pushes the deadline out by the configured delay; the event loop
//! polls the debouncer and receives the surviving value once the deadline
//! passes. Each call gets a [`Completion`] that resolves when the surviving
//! invocation has finished its work, whichever call it came from.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

/// Deferred completion handed out for each debounced call
#[derive(Debug)]
pub struct Completion {
    rx: Receiver<()>,
    resolved: bool,
}

impl Completion {
    fn new() -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                rx,
                resolved: false,
            },
            tx,
        )
    }

    /// Non-blocking check
    pub fn is_resolved(&mut self) -> bool {
        if !self.resolved {
            self.resolved = match self.rx.try_recv() {
                Ok(()) => true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
            };
        }
        self.resolved
    }

    /// Block until resolved or `timeout` elapses. Returns whether it resolved.
    pub fn wait_timeout(&mut self, timeout: Duration) -> bool {
        if !self.resolved {
            self.resolved = match self.rx.recv_timeout(timeout) {
                Ok(()) => true,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
            };
        }
        self.resolved
    }
}

/// Resolvers for every call collapsed into one invocation
#[derive(Debug, Default)]
pub struct Waiters(Vec<Sender<()>>);

impl Waiters {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve every completion; dropped completions are ignored
    pub fn resolve(self) {
        for tx in self.0 {
            let _ = tx.send(());
        }
    }
}

/// The invocation that survived a debounce window
#[derive(Debug)]
pub struct Fired<T> {
    pub value: T,
    pub waiters: Waiters,
}

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
    waiters: Vec<Sender<()>>,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Schedule `value`, superseding whatever was pending
    pub fn call_at(&mut self, value: T, now: Instant) -> Completion {
        let (completion, tx) = Completion::new();
        let deadline = now + self.delay;

        match &mut self.pending {
            Some(pending) => {
                pending.deadline = deadline;
                pending.value = value;
                pending.waiters.push(tx);
            }
            None => {
                self.pending = Some(Pending {
                    deadline,
                    value,
                    waiters: vec![tx],
                });
            }
        }
        completion
    }

    pub fn call(&mut self, value: T) -> Completion {
        self.call_at(value, Instant::now())
    }

    /// Take the pending invocation if its deadline has passed
    pub fn poll_at(&mut self, now: Instant) -> Option<Fired<T>> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.pending.take().map(|pending| Fired {
                value: pending.value,
                waiters: Waiters(pending.waiters),
            })
        } else {
            None
        }
    }

    pub fn poll(&mut self) -> Option<Fired<T>> {
        self.poll_at(Instant::now())
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
