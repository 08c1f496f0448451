//! History window resolution.

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::TurningPointEvent;

/// Days of history fetched before the top.
pub const LOOKBACK_DAYS: i64 = 30;

/// Days of history fetched after the bottom.
pub const LOOKFORWARD_DAYS: i64 = 90;

/// Inclusive timestamp bounds of the history fetched for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedWindow {
    /// Start (inclusive).
    pub start: NaiveDateTime,
    /// End (inclusive).
    pub end: NaiveDateTime,
}

impl ResolvedWindow {
    /// Resolves the window for an event: `top - 30d` through `bottom + 90d`.
    ///
    /// Days are fixed 24-hour spans. Overflow at the edges of the timestamp
    /// domain saturates to [`NaiveDateTime::MIN`] / [`NaiveDateTime::MAX`].
    #[must_use]
    pub fn resolve(event: &TurningPointEvent) -> Self {
        let start = event
            .top()
            .checked_sub_signed(TimeDelta::days(LOOKBACK_DAYS))
            .unwrap_or(NaiveDateTime::MIN);
        let end = event
            .bottom()
            .checked_add_signed(TimeDelta::days(LOOKFORWARD_DAYS))
            .unwrap_or(NaiveDateTime::MAX);
        Self { start, end }
    }

    /// Returns true if the window contains the given timestamp.
    #[must_use]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start && ts <= self.end
    }

    /// Returns the total number of whole days spanned.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl std::fmt::Display for ResolvedWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
