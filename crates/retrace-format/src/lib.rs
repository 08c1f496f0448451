//! Output formatters for retrace enriched series.
//!
//! This crate provides formatters for writing an [`EnrichedSeries`] to
//! various output formats:
//!
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`ParquetFormatter`] - Apache Parquet columnar format
//!
//! [`EnrichedSeries`]: retrace_indicators::EnrichedSeries

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/retrace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

#[cfg(feature = "parquet")]
mod parquet;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, write_series_as};
pub use json::JsonFormatter;

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetFormatter;
