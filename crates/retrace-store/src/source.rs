//! Source traits consumed by the pipeline.

use chrono::NaiveDateTime;
use retrace_types::{OhlcBar, RetraceError, TurningPointEvent};

use crate::StoreError;

/// Something that can list turning-point events.
pub trait EventSource {
    /// Lists all events in stored order.
    ///
    /// A record that cannot be materialized is returned in place as
    /// [`RetraceError::MalformedEvent`]; it does not affect other records.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the event listing itself cannot be read.
    fn list_events(&mut self) -> Result<Vec<Result<TurningPointEvent, RetraceError>>, StoreError>;
}

/// Something that serves OHLC history by series identifier.
pub trait HistorySource {
    /// Returns bars with `start <= timestamp <= end`, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`RetraceError::SeriesUnavailable`] if the series does not
    /// exist or the query fails, and [`RetraceError::MalformedSeries`] if a
    /// stored timestamp cannot be parsed.
    fn query(
        &mut self,
        series_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<OhlcBar>, RetraceError>;
}
