//! Reveal Tracker for HotRoute.
//!
//! Clicking a link's name swaps it for the raw url; the url reverts to the name
//! after a period of inactivity. Each revealed item owns one deadline, and a
//! further click on the same item re-arms it. Nothing here is persisted.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Per-item reveal deadlines keyed by link id.
#[derive(Debug)]
pub struct RevealTracker {
    timeout: Duration,
    deadlines: HashMap<String, Instant>,
}

impl RevealTracker {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadlines: HashMap::new(),
        }
    }

    /// Shows the url for `id` and (re)arms its revert deadline.
    /// Returns the new deadline.
    pub fn reveal(&mut self, id: &str, now: Instant) -> Instant {
        let deadline = now + self.timeout;
        self.deadlines.insert(id.to_string(), deadline);
        deadline
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.deadlines.contains_key(id)
    }

    /// Earliest pending deadline, if any item is revealed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Removes and returns every id whose deadline is at or before `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<String> {
        let due: Vec<String> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &due {
            self.deadlines.remove(id);
        }
        due
    }

    /// Drops all pending reveals. Called whenever the list is re-rendered.
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
