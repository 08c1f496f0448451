//! Window resolution and fetch for a single event.

use retrace_types::{OhlcBar, ResolvedWindow, RetraceError, TurningPointEvent};

use crate::HistorySource;

/// Resolves the event's window and issues one range query for its symbol.
///
/// # Errors
///
/// Propagates the history source's error for this event.
pub fn fetch_window<H: HistorySource + ?Sized>(
    history: &mut H,
    event: &TurningPointEvent,
) -> Result<(ResolvedWindow, Vec<OhlcBar>), RetraceError> {
    let window = ResolvedWindow::resolve(event);
    let bars = history.query(event.symbol(), window.start, window.end)?;
    tracing::debug!(%window, bars = bars.len(), "fetched window");
    Ok((window, bars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use retrace_types::parse_timestamp;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, NaiveDateTime, NaiveDateTime)>,
    }

    impl HistorySource for Recorder {
        fn query(
            &mut self,
            series_id: &str,
            start: NaiveDateTime,
            end: NaiveDateTime,
        ) -> Result<Vec<OhlcBar>, RetraceError> {
            self.calls.push((series_id.to_string(), start, end));
            if series_id == "MISSING" {
                return Err(RetraceError::series_unavailable(series_id, "no such table"));
            }
            Ok(vec![OhlcBar::new(start, 1.0, 1.0, 1.0, 1.0)])
        }
    }

    #[test]
    fn test_single_query_with_resolved_bounds() {
        let mut history = Recorder::default();
        let event =
            TurningPointEvent::parse("BTC", "2021-04-01 00:00:00", "2021-05-01 00:00:00").unwrap();

        let (window, bars) = fetch_window(&mut history, &event).unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(history.calls.len(), 1);
        let (series, start, end) = &history.calls[0];
        assert_eq!(series, "BTC");
        assert_eq!(*start, parse_timestamp("2021-03-02").unwrap());
        assert_eq!(*end, parse_timestamp("2021-07-30").unwrap());
        assert_eq!(window.start, *start);
    }

    #[test]
    fn test_unavailable_series_propagates() {
        let mut history = Recorder::default();
        let event = TurningPointEvent::parse("MISSING", "2021-04-01", "2021-05-01").unwrap();
        assert!(fetch_window(&mut history, &event).is_err());
    }
}
