//! Enriched series construction.

use chrono::NaiveDateTime;
use retrace_types::{EnrichedBar, OhlcBar, RetraceError};

use crate::{RSI_PERIOD, check_order, cumulative_returns, find_anchor, rsi};

/// Ordered enriched bars for one turning-point episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSeries {
    top: NaiveDateTime,
    bottom: NaiveDateTime,
    anchor_index: usize,
    bars: Vec<EnrichedBar>,
}

impl EnrichedSeries {
    /// Returns the enriched bars in ascending time order.
    #[must_use]
    pub fn bars(&self) -> &[EnrichedBar] {
        &self.bars
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

    /// Returns the index of the anchor bar.
    #[must_use]
    pub const fn anchor_index(&self) -> usize {
        self.anchor_index
    }

    /// Returns the anchor bar.
    #[must_use]
    pub fn anchor(&self) -> &EnrichedBar {
        &self.bars[self.anchor_index]
    }

    /// Returns the bars from the top through the bottom, inclusive.
    #[must_use]
    pub fn episode(&self) -> &[EnrichedBar] {
        let end = self.bars.partition_point(|b| b.timestamp() <= self.bottom);
        &self.bars[self.anchor_index..end]
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series has no bars.
    ///
    /// A series built by [`enrich`] always contains at least its anchor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns true if at least one bar carries an RSI value.
    #[must_use]
    pub fn has_rsi(&self) -> bool {
        self.bars.iter().any(|b| b.rsi.is_some())
    }

    /// Returns [`RetraceError::InsufficientHistory`] when the series is too
    /// short for any RSI value.
    #[must_use]
    pub fn history_warning(&self) -> Option<RetraceError> {
        (self.bars.len() < RSI_PERIOD).then(|| RetraceError::InsufficientHistory {
            available: self.bars.len(),
            required: RSI_PERIOD,
        })
    }
}

/// Derives cumulative return and RSI for an ordered bar series.
///
/// The input is not modified; calling this twice on the same bars yields
/// identical output.
///
/// # Errors
///
/// - [`RetraceError::MalformedSeries`] if timestamps are not strictly increasing
/// - [`RetraceError::AnchorNotFound`] if no bar sits exactly on `top`
pub fn enrich(
    bars: &[OhlcBar],
    top: NaiveDateTime,
    bottom: NaiveDateTime,
) -> Result<EnrichedSeries, RetraceError> {
    check_order(bars)?;
    let anchor_index =
        find_anchor(bars, top).ok_or(RetraceError::AnchorNotFound { anchor: top })?;

    let returns = cumulative_returns(bars, bars[anchor_index].close, bottom);
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let rsi = rsi(&closes);

    let bars = bars
        .iter()
        .zip(returns)
        .zip(rsi)
        .map(|((bar, ret), rsi)| EnrichedBar::new(*bar, ret, rsi))
        .collect();

    Ok(EnrichedSeries {
        top,
        bottom,
        anchor_index,
        bars,
    })
}
