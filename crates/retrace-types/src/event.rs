//! Turning-point events.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{RetraceError, parse_timestamp};

/// A detected top followed by a bottom in one symbol's price series.
///
/// Construction enforces `top < bottom`; a value of this type is never
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurningPointEvent {
    symbol: String,
    top: NaiveDateTime,
    bottom: NaiveDateTime,
}

impl TurningPointEvent {
    /// Creates a new event, validating that the top precedes the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`RetraceError::MalformedEvent`] if `top >= bottom`.
    pub fn new(
        symbol: impl Into<String>,
        top: NaiveDateTime,
        bottom: NaiveDateTime,
    ) -> Result<Self, RetraceError> {
        let symbol = symbol.into();
        if top >= bottom {
            return Err(RetraceError::malformed_event(
                symbol,
                format!("top {top} is not before bottom {bottom}"),
            ));
        }
        Ok(Self {
            symbol,
            top,
            bottom,
        })
    }

    /// Materializes an event from stored text fields.
    ///
    /// # Errors
    ///
    /// Returns [`RetraceError::MalformedEvent`] if either timestamp fails to
    /// parse or the ordering invariant is violated.
    pub fn parse(symbol: &str, top: &str, bottom: &str) -> Result<Self, RetraceError> {
        let top = parse_timestamp(top).ok_or_else(|| {
            RetraceError::malformed_event(symbol, format!("invalid top timestamp {top:?}"))
        })?;
        let bottom = parse_timestamp(bottom).ok_or_else(|| {
            RetraceError::malformed_event(symbol, format!("invalid bottom timestamp {bottom:?}"))
        })?;
        Self::new(symbol, top, bottom)
    }

    /// Returns the symbol, which also names the history series.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the top (anchor) timestamp.
    #[must_use]
    pub const fn top(&self) -> NaiveDateTime {
        self.top
    }

    /// Returns the bottom timestamp.
    #[must_use]
    pub const fn bottom(&self) -> NaiveDateTime {
        self.bottom
    }
}

impl std::fmt::Display for TurningPointEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.symbol, self.top, self.bottom)
    }
}
