//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for requests served, links
//! emitted, and failures by category.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe processing statistics tracker.
///
/// Uses atomic counters so that concurrent requests can update it through a
/// shared `Arc` without locking. All error types are initialized to zero on
/// creation.
pub struct ProcessingStats {
    requests: AtomicUsize,
    succeeded: AtomicUsize,
    links: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ProcessingStats {
            requests: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            links: AtomicUsize::new(0),
            errors,
        }
    }

    /// Counts an incoming `/parse` request.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a successful request and the number of link objects it returned.
    pub fn record_success(&self, links_emitted: usize) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
        self.links.fetch_add(links_emitted, Ordering::Relaxed);
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Get the count for an error type.
    ///
    /// Returns 0 if the error type is not in the map (should never happen if properly initialized).
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn total_succeeded(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }

    pub fn total_links(&self) -> usize {
        self.links.load(Ordering::SeqCst)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Sum of the counters for every error type matching `filter`.
    pub fn count_where(&self, filter: impl Fn(ErrorType) -> bool) -> usize {
        self.errors
            .iter()
            .filter(|(error_type, _)| filter(**error_type))
            .map(|(_, c)| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
