//! Trailing-edge debouncer for the search input
//!
//! The event loop feeds every keystroke through [`Debouncer::update`] and
//! polls on each tick; a value is emitted only once it has been stable for
//! the full quiet period. Each change resets the pending deadline, and an
//! unchanged value is never emitted twice in a row.

use std::time::{Duration, Instant};

/// Quiet period before a query is considered stable
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// Trailing-edge debouncer over a changing string value
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Value waiting out its quiet period, with the deadline it must survive
    pending: Option<(String, Instant)>,
    /// Last value handed to the consumer
    emitted: Option<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            emitted: None,
        }
    }

    /// Record the current source value, resetting the timer if it changed
    pub fn update(&mut self, value: &str) {
        self.update_at(value, Instant::now());
    }

    /// Record a value change against an explicit clock
    pub fn update_at(&mut self, value: &str, now: Instant) {
        let changed = match &self.pending {
            Some((pending, _)) => pending != value,
            None => self.emitted.as_deref() != Some(value),
        };
        if changed {
            self.pending = Some((value.to_string(), now + self.delay));
        }
    }

    /// Emit the pending value if its quiet period has elapsed
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    /// Deadline check against an explicit clock
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                let (value, _) = self.pending.take().expect("pending checked above");
                self.emitted = Some(value.clone());
                Some(value)
            }
            _ => None,
        }
    }

    /// Drop any pending emission
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Most recently emitted value, if any
    pub fn last_emitted(&self) -> Option<&str> {
        self.emitted.as_deref()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}
