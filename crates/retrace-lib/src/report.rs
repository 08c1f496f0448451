//! Per-event outcomes and run totals.

use chrono::{DateTime, NaiveDateTime, Utc};
use retrace_indicators::{EnrichedSeries, EpisodeSummary};
use retrace_types::{ErrorKind, ResolvedWindow, RetraceError, TurningPointEvent};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// The series was enriched and rendered.
    Rendered,
    /// Rendered, but too short for any RSI value.
    Degraded,
    /// Nothing was rendered.
    Failed,
}

impl EventStatus {
    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rendered => "rendered",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Report entry for a single input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReport {
    /// Position of the record in the event source.
    pub index: usize,
    /// Symbol of the record.
    pub symbol: String,
    /// Top timestamp, when the record parsed.
    pub top: Option<NaiveDateTime>,
    /// Bottom timestamp, when the record parsed.
    pub bottom: Option<NaiveDateTime>,
    /// Fetched window, when the record parsed.
    pub window: Option<ResolvedWindow>,
    /// Outcome.
    pub status: EventStatus,
    /// Number of bars in the rendered series.
    pub bars: usize,
    /// Kind of the error, for failed or degraded events.
    pub error_kind: Option<ErrorKind>,
    /// Error message, for failed or degraded events.
    pub error_message: Option<String>,
    /// Episode summary, for rendered events.
    pub summary: Option<EpisodeSummary>,
}

impl EventReport {
    /// Creates the entry for a rendered series.
    ///
    /// The status is [`EventStatus::Degraded`] when the series carries a
    /// history warning.
    #[must_use]
    pub fn rendered(
        index: usize,
        event: &TurningPointEvent,
        window: ResolvedWindow,
        series: &EnrichedSeries,
        summary: EpisodeSummary,
    ) -> Self {
        let warning = series.history_warning();
        Self {
            index,
            symbol: event.symbol().to_string(),
            top: Some(event.top()),
            bottom: Some(event.bottom()),
            window: Some(window),
            status: if warning.is_some() {
                EventStatus::Degraded
            } else {
                EventStatus::Rendered
            },
            bars: series.len(),
            error_kind: warning.as_ref().map(RetraceError::kind),
            error_message: warning.map(|w| w.to_string()),
            summary: Some(summary),
        }
    }

    /// Creates the entry for a failed event.
    ///
    /// `event` is `None` when the record itself could not be parsed.
    #[must_use]
    pub fn failed(index: usize, event: Option<&TurningPointEvent>, error: &RetraceError) -> Self {
        let symbol = match (event, error) {
            (Some(event), _) => event.symbol().to_string(),
            (None, RetraceError::MalformedEvent { symbol, .. }) => symbol.clone(),
            (None, _) => String::new(),
        };
        Self {
            index,
            symbol,
            top: event.map(TurningPointEvent::top),
            bottom: event.map(TurningPointEvent::bottom),
            window: event.map(ResolvedWindow::resolve),
            status: EventStatus::Failed,
            bars: 0,
            error_kind: Some(error.kind()),
            error_message: Some(error.to_string()),
            summary: None,
        }
    }

    /// Returns true if nothing was rendered for this event.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == EventStatus::Failed
    }
}

/// Counts across all events of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    /// Events processed.
    pub events: usize,
    /// Events rendered with full indicators.
    pub rendered: usize,
    /// Events rendered without RSI.
    pub degraded: usize,
    /// Events with nothing rendered.
    pub failed: usize,
    /// Error occurrences by kind.
    pub by_kind: BTreeMap<ErrorKind, usize>,
}

impl RunTotals {
    fn record(&mut self, entry: &EventReport) {
        self.events += 1;
        match entry.status {
            EventStatus::Rendered => self.rendered += 1,
            EventStatus::Degraded => self.degraded += 1,
            EventStatus::Failed => self.failed += 1,
        }
        if let Some(kind) = entry.error_kind {
            *self.by_kind.entry(kind).or_default() += 1;
        }
    }
}

/// Report of a whole run, one entry per input record in source order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub completed_at: Option<DateTime<Utc>>,
    /// Aggregate counts.
    pub totals: RunTotals,
    /// Per-event entries.
    pub events: Vec<EventReport>,
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReport {
    /// Creates an empty report stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            completed_at: None,
            totals: RunTotals::default(),
            events: Vec::new(),
        }
    }

    /// Appends an entry and updates the totals.
    pub fn push(&mut self, entry: EventReport) {
        self.totals.record(&entry);
        self.events.push(entry);
    }

    /// Marks the run as finished.
    pub fn mark_completed(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Returns the number of events with the given status.
    #[must_use]
    pub fn count(&self, status: EventStatus) -> usize {
        match status {
            EventStatus::Rendered => self.totals.rendered,
            EventStatus::Degraded => self.totals.degraded,
            EventStatus::Failed => self.totals.failed,
        }
    }

    /// Returns the number of errors of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        self.totals.by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the entries of failed events.
    pub fn failures(&self) -> impl Iterator<Item = &EventReport> {
        self.events.iter().filter(|e| e.is_failed())
    }

    /// Returns the wall-clock duration of the run, once completed.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::TimeDelta> {
        self.completed_at.map(|end| end - self.started_at)
    }
}
