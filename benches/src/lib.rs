//! Benchmark fixtures for retrace.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use retrace_lib::{OhlcBar, TurningPointEvent};

/// First bar of every synthetic series.
pub fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

/// Daily bars tracing a slow wave with a faster ripple on top, so both
/// gains and losses occur in every RSI window.
pub fn synthetic_bars(n: usize) -> Vec<OhlcBar> {
    let start = origin();
    (0..n)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + 20.0 * (t / 40.0).sin() + 2.0 * (t / 3.0).sin();
            let open = close - (t / 5.0).cos();
            OhlcBar::new(
                start + TimeDelta::days(i as i64),
                open,
                open.max(close) + 0.5,
                open.min(close) - 0.5,
                close,
            )
        })
        .collect()
}

/// An event whose top is bar `top` and whose bottom is `len` bars later.
pub fn event_at(top: usize, len: usize) -> TurningPointEvent {
    let top = origin() + TimeDelta::days(top as i64);
    let bottom = top + TimeDelta::days(len.max(1) as i64);
    TurningPointEvent::new("SYN", top, bottom).expect("top precedes bottom")
}
