//! Error types for retrace.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for retrace operations.
pub type Result<T> = std::result::Result<T, RetraceError>;

/// Errors scoped to the processing of a single turning-point event.
///
/// None of these abort a run: the pipeline records the kind against the
/// event and moves on to the next one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RetraceError {
    /// The event record could not be parsed, or its top is not before its bottom.
    #[error("Malformed event for {symbol}: {reason}")]
    MalformedEvent {
        /// Symbol of the offending record.
        symbol: String,
        /// What was wrong with the record.
        reason: String,
    },

    /// The history series is missing or the range query failed.
    #[error("Series {series} unavailable: {reason}")]
    SeriesUnavailable {
        /// The series identifier that was queried.
        series: String,
        /// Underlying cause.
        reason: String,
    },

    /// No fetched bar sits exactly on the top timestamp.
    #[error("No bar at anchor timestamp {anchor}")]
    AnchorNotFound {
        /// The top timestamp that was searched for.
        anchor: NaiveDateTime,
    },

    /// Too few bars for a single RSI value.
    #[error("Insufficient history: {available} bars, RSI needs {required}")]
    InsufficientHistory {
        /// Number of bars fetched.
        available: usize,
        /// Number of bars needed for the first RSI value.
        required: usize,
    },

    /// Fetched bars are unparseable or not strictly increasing in time.
    #[error("Malformed series: {0}")]
    MalformedSeries(String),

    /// The presentation sink rejected the series.
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

impl RetraceError {
    /// Returns the reportable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedEvent { .. } => ErrorKind::MalformedEvent,
            Self::SeriesUnavailable { .. } => ErrorKind::SeriesUnavailable,
            Self::AnchorNotFound { .. } => ErrorKind::AnchorNotFound,
            Self::InsufficientHistory { .. } => ErrorKind::InsufficientHistory,
            Self::MalformedSeries(_) => ErrorKind::MalformedSeries,
            Self::RenderFailed(_) => ErrorKind::RenderFailed,
        }
    }

    /// Creates a [`RetraceError::MalformedEvent`].
    pub fn malformed_event(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedEvent {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`RetraceError::SeriesUnavailable`].
    pub fn series_unavailable(series: impl Into<String>, reason: impl ToString) -> Self {
        Self::SeriesUnavailable {
            series: series.into(),
            reason: reason.to_string(),
        }
    }
}

/// Copyable discriminant of [`RetraceError`], used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`RetraceError::MalformedEvent`].
    MalformedEvent,
    /// See [`RetraceError::SeriesUnavailable`].
    SeriesUnavailable,
    /// See [`RetraceError::AnchorNotFound`].
    AnchorNotFound,
    /// See [`RetraceError::InsufficientHistory`].
    InsufficientHistory,
    /// See [`RetraceError::MalformedSeries`].
    MalformedSeries,
    /// See [`RetraceError::RenderFailed`].
    RenderFailed,
}

impl ErrorKind {
    /// Returns the kind as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedEvent => "malformed_event",
            Self::SeriesUnavailable => "series_unavailable",
            Self::AnchorNotFound => "anchor_not_found",
            Self::InsufficientHistory => "insufficient_history",
            Self::MalformedSeries => "malformed_series",
            Self::RenderFailed => "render_failed",
        }
    }

    /// Returns true if an event with this error still produced output.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::InsufficientHistory)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
