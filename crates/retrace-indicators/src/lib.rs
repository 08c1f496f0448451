//! Indicator derivation for retrace.
//!
//! This crate turns fetched OHLC bars into the series handed to the
//! presentation sink:
//!
//! - [`enrich`] - Anchor lookup, cumulative return and RSI in one pass
//! - [`EnrichedSeries`] - Ordered enriched bars with their anchors
//! - [`rsi`] - 14-period simple-average RSI
//! - [`EpisodeSummary`] - Drawdown and RSI figures for one episode

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/retrace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod anchor;
mod returns;
mod rsi;
mod series;
mod summary;

pub use anchor::{check_order, find_anchor};
pub use returns::cumulative_returns;
pub use rsi::{RSI_PERIOD, rsi, rsi_from_averages};
pub use series::{EnrichedSeries, enrich};
pub use summary::{EpisodeSummary, OVERBOUGHT, OVERSOLD};
