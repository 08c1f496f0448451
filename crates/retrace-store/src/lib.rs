//! SQLite event and history sources for retrace.
//!
//! This crate provides the data access side of the pipeline:
//!
//! - [`SqliteStore`] - Run-scoped, read-only handle on the database
//! - [`EventSource`] - Lists turning-point events in stored order
//! - [`HistorySource`] - Inclusive, ascending range queries per series
//! - [`fetch_window`] - Resolves an event's window and fetches its bars

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/retrace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod events;
mod fetch;
mod history;
mod source;
mod store;

pub use fetch::fetch_window;
pub use history::quote_identifier;
pub use source::{EventSource, HistorySource};
pub use store::{SqliteStore, StoreConfig, StoreError};
