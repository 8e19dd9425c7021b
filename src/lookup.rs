//! Lookup service: cache and single-flight layer over the dictionary client
//!
//! The event loop owns one [`LookupService`] for the process lifetime.
//! Requests are keyed by the exact stabilized query string. A key already
//! resolved answers from the in-memory cache; a key already in flight is not
//! reissued. Completed lookups come back over an mpsc channel and are drained
//! on each tick. Requests are never cancelled; stale resolutions are dropped
//! by the consumer's active-key check (see `App::apply_lookup`).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{DictionaryClient, DictionaryError};
use crate::models::WordEntry;

/// A completed lookup, tagged with the key that produced it
#[derive(Debug)]
pub struct LookupOutcome {
    pub key: String,
    pub result: Result<WordEntry, DictionaryError>,
}

/// Cache + single-flight fetcher for dictionary lookups
pub struct LookupService {
    client: Arc<DictionaryClient>,
    /// Resolved entries, kept for the process lifetime. Errors are not cached.
    cache: HashMap<String, WordEntry>,
    in_flight: HashSet<String>,
    tx: mpsc::UnboundedSender<LookupOutcome>,
    rx: mpsc::UnboundedReceiver<LookupOutcome>,
}

impl LookupService {
    pub fn new(client: DictionaryClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            cache: HashMap::new(),
            in_flight: HashSet::new(),
            tx,
            rx,
        }
    }

    /// Cached entry for a key, if a lookup already succeeded
    pub fn cached(&self, key: &str) -> Option<&WordEntry> {
        self.cache.get(key)
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    /// Start a lookup for `key` unless one is unnecessary.
    ///
    /// Empty keys are ignored (the operation is disabled while the query is
    /// invalid). Cached and in-flight keys issue no new request. Returns
    /// whether a network request was actually spawned.
    pub fn request(&mut self, key: &str) -> bool {
        if key.is_empty() || self.cache.contains_key(key) || self.in_flight.contains(key) {
            return false;
        }

        self.in_flight.insert(key.to_string());

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let key = key.to_string();
        tokio::spawn(async move {
            let result = client.lookup(&key).await;
            // Receiver only closes on shutdown; a failed send is fine then.
            let _ = tx.send(LookupOutcome { key, result });
        });

        true
    }

    /// Drain one completed lookup, if any arrived since the last tick
    pub fn poll(&mut self) -> Option<LookupOutcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.in_flight.remove(&outcome.key);
        if let Ok(entry) = &outcome.result {
            self.cache.insert(outcome.key.clone(), entry.clone());
        }
        Some(outcome)
    }

    /// Await the next completed lookup (used by tests; the TUI polls)
    pub async fn recv(&mut self) -> Option<LookupOutcome> {
        let outcome = self.rx.recv().await?;
        self.in_flight.remove(&outcome.key);
        if let Ok(entry) = &outcome.result {
            self.cache.insert(outcome.key.clone(), entry.clone());
        }
        Some(outcome)
    }
}
