//! Timestamp parsing and formatting.
//!
//! Stored timestamps are timezone-naive text in [`TIMESTAMP_FORMAT`].

use chrono::{NaiveDate, NaiveDateTime};

/// Canonical text format of stored timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a stored timestamp.
///
/// Accepts the canonical format, the same with a `T` separator, either with
/// fractional seconds, and a bare date (read as midnight).
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Formats a timestamp in [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_canonical() {
        let ts = parse_timestamp("2021-04-01 00:00:00").unwrap();
        assert_eq!(format_timestamp(ts), "2021-04-01 00:00:00");
    }

    #[test]
    fn test_parse_variants() {
        let canonical = parse_timestamp("2021-04-01 13:45:00").unwrap();
        assert_eq!(parse_timestamp("2021-04-01T13:45:00"), Some(canonical));
        assert_eq!(parse_timestamp(" 2021-04-01 13:45:00.000 "), Some(canonical));

        let midnight = parse_timestamp("2021-04-01").unwrap();
        assert_eq!(midnight.hour(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2021-13-01 00:00:00").is_none());
    }

    #[test]
    fn test_canonical_text_sorts_chronologically() {
        let a = format_timestamp(parse_timestamp("2021-03-02").unwrap());
        let b = format_timestamp(parse_timestamp("2021-11-20 08:00:00").unwrap());
        assert!(a < b);
    }
}
