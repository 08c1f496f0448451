//! Anchored cumulative return.

use chrono::NaiveDateTime;
use retrace_types::OhlcBar;

/// Computes `close / anchor_close - 1` for every bar.
///
/// Bars strictly after `bottom` are `None`. A non-finite ratio on or before
/// the bottom (zero or non-finite anchor close) reads as `0`.
#[must_use]
pub fn cumulative_returns(
    bars: &[OhlcBar],
    anchor_close: f64,
    bottom: NaiveDateTime,
) -> Vec<Option<f64>> {
    bars.iter()
        .map(|bar| {
            if bar.timestamp > bottom {
                return None;
            }
            let ratio = bar.close / anchor_close - 1.0;
            Some(if ratio.is_finite() { ratio } else { 0.0 })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeDelta;
    use retrace_types::parse_timestamp;

    fn bar(day: i64, close: f64) -> OhlcBar {
        let ts = parse_timestamp("2021-04-01").unwrap() + TimeDelta::days(day);
        OhlcBar::new(ts, close, close, close, close)
    }

    #[test]
    fn test_returns_relative_to_anchor() {
        let bars = vec![bar(-1, 50.0), bar(0, 100.0), bar(1, 80.0), bar(2, 90.0)];
        let bottom = bars[2].timestamp;
        let out = cumulative_returns(&bars, 100.0, bottom);

        assert_relative_eq!(out[0].unwrap(), -0.5);
        assert_eq!(out[1], Some(0.0));
        assert_relative_eq!(out[2].unwrap(), -0.2);
        assert_eq!(out[3], None);
    }

    #[test]
    fn test_zero_anchor_close_reads_as_zero() {
        let bars = vec![bar(0, 0.0), bar(1, 5.0), bar(2, 6.0)];
        let out = cumulative_returns(&bars, 0.0, bars[1].timestamp);

        assert_eq!(out, vec![Some(0.0), Some(0.0), None]);
    }

    #[test]
    fn test_missing_close_mid_episode_reads_as_zero() {
        let bars = vec![bar(0, 100.0), bar(1, f64::NAN), bar(2, 60.0), bar(3, 70.0)];
        let out = cumulative_returns(&bars, 100.0, bars[2].timestamp);

        assert_eq!(out[1], Some(0.0));
        assert_relative_eq!(out[2].unwrap(), -0.4);
        assert_eq!(out[3], None);
    }
}
