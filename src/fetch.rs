//! Debounced suggestion fetching
//!
//! The UI thread owns a [`SuggestFetcher`]. Calls are collapsed by a
//! [`Debouncer`]; the surviving term is handed to a background worker that
//! performs the HTTP request, and finished requests come back over a channel
//! that the UI thread drains on every tick.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::debounce::{Completion, Debouncer, Fired, Waiters};
use crate::places::{PlacesClient, SuggestionItem};

mod worker;

pub use worker::spawn_worker;

/// Request messages sent to the fetch worker
#[derive(Debug)]
pub struct FetchRequest {
    pub term: String,
    /// Generation of this request, used to filter stale responses
    pub generation: u64,
    pub waiters: Waiters,
}

/// Response messages received from the fetch worker
#[derive(Debug)]
pub enum FetchResponse {
    Loaded {
        generation: u64,
        items: Vec<SuggestionItem>,
        waiters: Waiters,
    },
    /// The failure has already been logged by the worker
    Failed { generation: u64, waiters: Waiters },
}

pub struct SuggestFetcher {
    debouncer: Debouncer<String>,
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    /// Incremented for every fired fetch; only the newest generation may
    /// replace the list
    generation: u64,
    in_flight: usize,
}

impl SuggestFetcher {
    /// Create a fetcher backed by its own worker thread
    pub fn new(client: PlacesClient, delay: Duration) -> Self {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);

        Self {
            debouncer: Debouncer::new(delay),
            request_tx,
            response_rx,
            generation: 0,
            in_flight: 0,
        }
    }

    /// Request suggestions for `term` once typing settles
    pub fn fetch(&mut self, term: &str) -> Completion {
        self.fetch_at(term, Instant::now())
    }

    pub fn fetch_at(&mut self, term: &str, now: Instant) -> Completion {
        self.debouncer.call_at(term.to_string(), now)
    }

    /// Fire a due fetch and collect finished requests
    ///
    /// Returns the items that should replace the list, if any.
    pub fn poll(&mut self, now: Instant) -> Option<Vec<SuggestionItem>> {
        let mut latest = self.debouncer.poll_at(now).and_then(|fired| self.start(fired));

        loop {
            match self.response_rx.try_recv() {
                Ok(FetchResponse::Loaded {
                    generation,
                    items,
                    waiters,
                }) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    if generation == self.generation {
                        latest = Some(items);
                    } else {
                        log::debug!(
                            "Discarding stale suggestions from request {} (current: {})",
                            generation,
                            self.generation
                        );
                    }
                    waiters.resolve();
                }
                Ok(FetchResponse::Failed { generation, waiters }) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    log::debug!("Request {} failed, keeping current suggestions", generation);
                    waiters.resolve();
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.in_flight = 0;
                    break;
                }
            }
        }

        latest
    }

    fn start(&mut self, fired: Fired<String>) -> Option<Vec<SuggestionItem>> {
        let Fired { value: term, waiters } = fired;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("Debounce fired for {:?} (request {})", term, self.generation);

        if term.is_empty() {
            waiters.resolve();
            return Some(Vec::new());
        }

        let request = FetchRequest {
            term,
            generation: self.generation,
            waiters,
        };
        match self.request_tx.send(request) {
            Ok(()) => self.in_flight += 1,
            Err(err) => {
                log::error!("Fetch worker unavailable, dropping request for {:?}", err.0.term);
                err.0.waiters.resolve();
            }
        }
        None
    }

    /// No fetch is waiting for its debounce window or for a response
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && self.in_flight == 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }
}
