//! Turning-point window and indicator pipeline.
//!
//! This is a facade crate that re-exports the retrace workspace crates and
//! adds the per-event [`Pipeline`], its [`RunReport`] and the presentation
//! sinks.
//!
//! # Quick Start
//!
//! ```ignore
//! use retrace_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = SqliteStore::open("turning_points.db", StoreConfig::default())?;
//!     let events = store.list_events()?;
//!
//!     let mut sink = FileSink::new("charts", OutputFormat::Csv);
//!     let report = Pipeline::new(&mut store, &mut sink).run(events, |entry| {
//!         println!("{} {} {}", entry.index, entry.symbol, entry.status);
//!     });
//!
//!     println!("{} failed", report.totals.failed);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/retrace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod pipeline;
mod report;
mod sink;

pub use pipeline::{Pipeline, ProcessedEvent};
pub use report::{EventReport, EventStatus, RunReport, RunTotals};
pub use sink::{FileSink, Renderer, WriterSink};

// Re-export core types
pub use retrace_types::*;

// Re-export indicators
pub use retrace_indicators::{
    EnrichedSeries, EpisodeSummary, OVERBOUGHT, OVERSOLD, RSI_PERIOD, cumulative_returns, enrich,
    find_anchor, rsi,
};

// Re-export data access
pub use retrace_store::{
    EventSource, HistorySource, SqliteStore, StoreConfig, StoreError, fetch_window,
};

// Re-export formatters
pub use retrace_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, write_series_as,
};

#[cfg(feature = "parquet")]
pub use retrace_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use retrace_lib::prelude::*;
/// ```
pub mod prelude {
    pub use retrace_types::{
        EnrichedBar, ErrorKind, OhlcBar, ResolvedWindow, Result, RetraceError, TurningPointEvent,
    };

    pub use retrace_indicators::{EnrichedSeries, EpisodeSummary, enrich};

    pub use retrace_store::{EventSource, HistorySource, SqliteStore, StoreConfig, StoreError};

    pub use retrace_format::{Formatter, OutputFormat};

    pub use crate::{
        EventReport, EventStatus, FileSink, Pipeline, Renderer, RunReport, WriterSink,
    };
}
