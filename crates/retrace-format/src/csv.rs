//! CSV output format.

use retrace_indicators::EnrichedSeries;
use retrace_types::TIMESTAMP_FORMAT;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Absent values are written as empty fields.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { include_header: true }
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &EnrichedSeries,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.include_header {
            writeln!(writer, "timestamp,open,high,low,close,cumulative_return,rsi")?;
        }

        for row in series.bars() {
            let bar = &row.bar;
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                bar.timestamp.format(TIMESTAMP_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                optional(row.cumulative_return),
                optional(row.rsi)
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use retrace_indicators::enrich;
    use retrace_types::{OhlcBar, parse_timestamp};
    use std::io::Cursor;

    fn create_test_series() -> EnrichedSeries {
        let base = parse_timestamp("2021-04-01").unwrap();
        let bars: Vec<_> = [60_000.0, 45_000.0, 30_000.0, 31_000.0]
            .iter()
            .enumerate()
            .map(|(i, c)| OhlcBar::new(base + TimeDelta::days(i as i64), *c, *c, *c, *c))
            .collect();
        enrich(&bars, base, base + TimeDelta::days(2)).unwrap()
    }

    #[test]
    fn test_csv_series() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0], "timestamp,open,high,low,close,cumulative_return,rsi");
        assert_eq!(lines[1], "2021-04-01 00:00:00,60000,60000,60000,60000,0,");
        assert_eq!(lines[3], "2021-04-03 00:00:00,30000,30000,30000,30000,-0.5,");
        // After the bottom: both overlays absent, not zero.
        assert!(lines[4].ends_with(",31000,,"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("timestamp,open"));
        assert_eq!(result.lines().count(), 4);
    }
}
