//! Core types for the retrace turning-point indicator pipeline.
//!
//! This crate provides the fundamental data structures used throughout retrace:
//!
//! - [`TurningPointEvent`] - A detected top followed by a bottom for one symbol
//! - [`OhlcBar`] - A single historical OHLC sample
//! - [`EnrichedBar`] - An OHLC bar carrying cumulative return and RSI
//! - [`ResolvedWindow`] - The history range fetched for one event
//! - [`RetraceError`] - Per-event failure kinds

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/retrace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod event;
mod timestamp;
mod window;

pub use bar::{EnrichedBar, OhlcBar};
pub use error::{ErrorKind, Result, RetraceError};
pub use event::TurningPointEvent;
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};
pub use window::{LOOKBACK_DAYS, LOOKFORWARD_DAYS, ResolvedWindow};
