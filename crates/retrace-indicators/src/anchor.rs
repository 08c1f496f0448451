//! Ordering checks and anchor lookup.

use chrono::NaiveDateTime;
use retrace_types::{OhlcBar, RetraceError};

/// Checks that bar timestamps are strictly increasing.
///
/// # Errors
///
/// Returns [`RetraceError::MalformedSeries`] naming the first bar that does
/// not follow its predecessor.
pub fn check_order(bars: &[OhlcBar]) -> Result<(), RetraceError> {
    match bars
        .windows(2)
        .position(|pair| pair[0].timestamp >= pair[1].timestamp)
    {
        Some(i) => Err(RetraceError::MalformedSeries(format!(
            "bar {} at {} does not follow {}",
            i + 1,
            bars[i + 1].timestamp,
            bars[i].timestamp
        ))),
        None => Ok(()),
    }
}

/// Returns the index of the bar whose timestamp equals `top` exactly.
///
/// `bars` must already be strictly increasing (see [`check_order`]).
#[must_use]
pub fn find_anchor(bars: &[OhlcBar], top: NaiveDateTime) -> Option<usize> {
    bars.binary_search_by_key(&top, |bar| bar.timestamp).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use retrace_types::{ErrorKind, parse_timestamp};

    fn bars_at(offsets: &[i64]) -> Vec<OhlcBar> {
        let base = parse_timestamp("2021-04-01").unwrap();
        offsets
            .iter()
            .map(|d| OhlcBar::new(base + TimeDelta::days(*d), 1.0, 1.0, 1.0, 1.0))
            .collect()
    }

    #[test]
    fn test_order_ok() {
        assert!(check_order(&bars_at(&[0, 1, 2, 5])).is_ok());
        assert!(check_order(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = check_order(&bars_at(&[0, 1, 1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedSeries);
    }

    #[test]
    fn test_out_of_order_rejected() {
        assert!(check_order(&bars_at(&[0, 2, 1])).is_err());
    }

    #[test]
    fn test_find_anchor_exact_only() {
        let bars = bars_at(&[0, 1, 2]);
        let base = parse_timestamp("2021-04-01").unwrap();

        assert_eq!(find_anchor(&bars, base + TimeDelta::days(1)), Some(1));
        assert_eq!(find_anchor(&bars, base + TimeDelta::hours(12)), None);
        assert_eq!(find_anchor(&[], base), None);
    }
}
