//! Historical bars, raw and enriched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One historical OHLC sample.
///
/// `low <= min(open, close) <= max(open, close) <= high` is assumed of the
/// source and not re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    /// Bar timestamp (timezone-naive).
    pub timestamp: NaiveDateTime,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl OhlcBar {
    /// Creates a new OHLC bar.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }
}

/// An OHLC bar augmented with the derived overlays.
///
/// `None` means "absent" and is never conflated with `Some(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBar {
    /// The source bar.
    #[serde(flatten)]
    pub bar: OhlcBar,
    /// `close / anchor_close - 1`, absent after the bottom.
    pub cumulative_return: Option<f64>,
    /// 14-period RSI, absent while the window is incomplete.
    pub rsi: Option<f64>,
}

impl EnrichedBar {
    /// Creates a new enriched bar.
    #[must_use]
    pub const fn new(bar: OhlcBar, cumulative_return: Option<f64>, rsi: Option<f64>) -> Self {
        Self {
            bar,
            cumulative_return,
            rsi,
        }
    }

    /// Returns the bar timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.bar.timestamp
    }
}
