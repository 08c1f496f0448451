//! Sequential per-event processing.

use retrace_indicators::{EnrichedSeries, EpisodeSummary, enrich};
use retrace_store::{HistorySource, fetch_window};
use retrace_types::{ResolvedWindow, RetraceError, TurningPointEvent};
use tracing::{debug, info, info_span, warn};

use crate::report::{EventReport, RunReport};
use crate::sink::Renderer;

/// Everything derived for one successfully processed event.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedEvent {
    /// The fetched window.
    pub window: ResolvedWindow,
    /// The enriched series handed to the renderer.
    pub series: EnrichedSeries,
    /// Episode summary.
    pub summary: EpisodeSummary,
}

/// Drives events through resolve, fetch, enrich, summarize and render.
///
/// Borrows the history source and the renderer for the whole run. Events are
/// processed one at a time and share no state.
#[derive(Debug)]
pub struct Pipeline<'a, H: ?Sized, R: ?Sized> {
    history: &'a mut H,
    renderer: &'a mut R,
}

impl<'a, H, R> Pipeline<'a, H, R>
where
    H: HistorySource + ?Sized,
    R: Renderer + ?Sized,
{
    /// Creates a pipeline over the given source and sink.
    pub const fn new(history: &'a mut H, renderer: &'a mut R) -> Self {
        Self { history, renderer }
    }

    /// Processes a single event.
    ///
    /// Nothing is rendered unless every earlier step succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first error raised for this event.
    pub fn process(&mut self, event: &TurningPointEvent) -> Result<ProcessedEvent, RetraceError> {
        let (window, bars) = fetch_window(&mut *self.history, event)?;
        let series = enrich(&bars, event.top(), event.bottom())?;
        let summary = EpisodeSummary::from_series(&series);
        debug!(
            bars = series.len(),
            anchor = series.anchor_index(),
            drawdown = summary.drawdown,
            "enriched series"
        );

        if let Some(warning) = series.history_warning() {
            warn!(%warning, "rendering without RSI");
        }
        self.renderer.render(event.symbol(), &series)?;

        Ok(ProcessedEvent {
            window,
            series,
            summary,
        })
    }

    /// Processes every record in order and collects the outcomes.
    ///
    /// A failing record is logged and reported; the run always continues
    /// with the next one. `observer` sees each entry as soon as it is made.
    pub fn run<I, F>(&mut self, events: I, observer: F) -> RunReport
    where
        I: IntoIterator<Item = Result<TurningPointEvent, RetraceError>>,
        F: FnMut(&EventReport),
    {
        self.run_indexed(events.into_iter().enumerate(), observer)
    }

    /// Like [`run`](Self::run), for records that carry their own position in
    /// the event source, e.g. after filtering.
    pub fn run_indexed<I, F>(&mut self, events: I, mut observer: F) -> RunReport
    where
        I: IntoIterator<Item = (usize, Result<TurningPointEvent, RetraceError>)>,
        F: FnMut(&EventReport),
    {
        let mut report = RunReport::new();

        for (index, record) in events {
            let entry = match record {
                Ok(event) => {
                    let _span = info_span!("event", index, symbol = event.symbol()).entered();
                    match self.process(&event) {
                        Ok(done) => EventReport::rendered(
                            index,
                            &event,
                            done.window,
                            &done.series,
                            done.summary,
                        ),
                        Err(e) => {
                            warn!(error = %e, kind = %e.kind(), "event failed");
                            EventReport::failed(index, Some(&event), &e)
                        }
                    }
                }
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed event");
                    EventReport::failed(index, None, &e)
                }
            };
            observer(&entry);
            report.push(entry);
        }

        report.mark_completed();
        info!(
            events = report.totals.events,
            rendered = report.totals.rendered,
            degraded = report.totals.degraded,
            failed = report.totals.failed,
            "run complete"
        );
        report
    }
}
