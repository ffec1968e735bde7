//! Cancellable debouncing of query changes.
//!
//! The [`Debouncer`] owns at most one pending query. Scheduling a new query
//! cancels whatever was pending. Zellij timers cannot be revoked, so every
//! scheduled query asks the shim for a timer and each timer firing calls
//! [`Debouncer::poll`]. A poll only releases the pending query once its own
//! deadline has passed, so timers armed for superseded queries release nothing.

use std::time::{Duration, Instant};

/// Default quiescent window before a query is applied.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    query: String,
    due: Instant,
}

/// Single-slot debouncer for the live query stream.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedules `query`, cancelling any pending one.
    ///
    /// Returns the delay after which the caller should poll again.
    pub fn schedule(&mut self, query: String, now: Instant) -> Duration {
        if let Some(superseded) = self.pending.take() {
            tracing::trace!(superseded = %superseded.query, "cancelled pending query");
        }
        self.pending = Some(Pending {
            query,
            due: now + self.window,
        });
        self.window
    }

    /// Releases the pending query if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Time left before the pending query is due, if one is waiting.
    ///
    /// A timer that fires early leaves the query pending; the caller re-arms
    /// with this delay so the query is still released once input pauses.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.due.saturating_duration_since(now))
    }

    /// Drops the pending query without applying it.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// Returns `true` while a query is waiting for its window to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(120);

    #[test]
    fn burst_releases_only_the_last_query() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WINDOW);

        d.schedule("e".into(), t0);
        d.schedule("ex".into(), t0 + Duration::from_millis(20));
        d.schedule("exc".into(), t0 + Duration::from_millis(45));

        // Timers armed for "e" and "ex" fire before the latest deadline.
        assert_eq!(d.poll(t0 + Duration::from_millis(120)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(140)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(165)), Some("exc".to_string()));
        assert!(!d.is_pending());
    }

    #[test]
    fn poll_before_deadline_keeps_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        d.schedule("a".into(), t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(119)), None);
        assert!(d.is_pending());
    }

    #[test]
    fn remaining_reports_time_until_due() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        assert_eq!(d.remaining(t0), None);

        d.schedule("a".into(), t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(119)), None);
        assert_eq!(d.remaining(t0 + Duration::from_millis(119)), Some(Duration::from_millis(1)));

        assert_eq!(d.poll(t0 + WINDOW), Some("a".to_string()));
        assert_eq!(d.remaining(t0 + WINDOW), None);
    }

    #[test]
    fn query_is_released_once() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        d.schedule("a".into(), t0);
        assert_eq!(d.poll(t0 + WINDOW), Some("a".to_string()));
        assert_eq!(d.poll(t0 + WINDOW * 2), None);
    }

    #[test]
    fn cancel_drops_pending_query() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        assert_eq!(d.schedule("a".into(), t0), DEFAULT_WINDOW);
        assert_eq!(d.cancel(), Some("a".to_string()));
        assert_eq!(d.poll(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn separated_queries_each_release() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        d.schedule("a".into(), t0);
        assert_eq!(d.poll(t0 + WINDOW), Some("a".to_string()));
        let t1 = t0 + Duration::from_millis(500);
        d.schedule("ab".into(), t1);
        assert_eq!(d.poll(t1 + WINDOW), Some("ab".to_string()));
    }
}
