//! Per-episode summary figures.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::EnrichedSeries;

/// RSI level at or above which a bar counts as overbought.
pub const OVERBOUGHT: f64 = 70.0;

/// RSI level at or below which a bar counts as oversold.
pub const OVERSOLD: f64 = 30.0;

/// Headline numbers for one top-to-bottom episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpisodeSummary {
    /// Close of the anchor bar.
    pub anchor_close: f64,
    /// Timestamp of the last bar at or before the bottom.
    pub bottom_bar: NaiveDateTime,
    /// Close of that bar.
    pub bottom_close: f64,
    /// Cumulative return at that bar.
    pub drawdown: f64,
    /// Lowest cumulative return between top and bottom.
    pub max_drawdown: f64,
    /// Number of bars from top through bottom.
    pub episode_bars: usize,
    /// RSI at the anchor bar.
    pub rsi_at_top: Option<f64>,
    /// RSI at the bottom bar.
    pub rsi_at_bottom: Option<f64>,
    /// Bars in the whole window with RSI >= [`OVERBOUGHT`].
    pub overbought_bars: usize,
    /// Bars in the whole window with RSI <= [`OVERSOLD`].
    pub oversold_bars: usize,
}

impl EpisodeSummary {
    /// Summarizes an enriched series.
    #[must_use]
    pub fn from_series(series: &EnrichedSeries) -> Self {
        let anchor = series.anchor();
        let episode = series.episode();
        // The episode always starts at the anchor, so it is never empty.
        let last = episode.last().unwrap_or(anchor);

        let max_drawdown = episode
            .iter()
            .filter_map(|b| b.cumulative_return)
            .fold(0.0, f64::min);

        let rsi_values = series.bars().iter().filter_map(|b| b.rsi);
        let overbought_bars = rsi_values.clone().filter(|v| *v >= OVERBOUGHT).count();
        let oversold_bars = rsi_values.filter(|v| *v <= OVERSOLD).count();

        Self {
            anchor_close: anchor.bar.close,
            bottom_bar: last.timestamp(),
            bottom_close: last.bar.close,
            drawdown: last.cumulative_return.unwrap_or(0.0),
            max_drawdown,
            episode_bars: episode.len(),
            rsi_at_top: anchor.rsi,
            rsi_at_bottom: last.rsi,
            overbought_bars,
            oversold_bars,
        }
    }
}
