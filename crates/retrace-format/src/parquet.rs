//! Apache Parquet output format.

use arrow::array::{Float64Array, TimestampMicrosecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use retrace_indicators::EnrichedSeries;
use retrace_types::EnrichedBar;
use std::io::Write;
use std::sync::Arc;

use crate::{FormatError, Formatter};

/// Parquet formatter.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size. Zero is treated as one.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = if size == 0 { 1 } else { size };
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Creates the Arrow schema for enriched bars.
    ///
    /// Timestamps are timezone-naive; the overlays are nullable.
    fn series_schema() -> Schema {
        Schema::new(vec![
            Field::new(
                "timestamp",
                DataType::Timestamp(TimeUnit::Microsecond, None),
                false,
            ),
            Field::new("open", DataType::Float64, false),
            Field::new("high", DataType::Float64, false),
            Field::new("low", DataType::Float64, false),
            Field::new("close", DataType::Float64, false),
            Field::new("cumulative_return", DataType::Float64, true),
            Field::new("rsi", DataType::Float64, true),
        ])
    }

    /// Converts enriched bars to an Arrow RecordBatch.
    fn bars_to_batch(bars: &[EnrichedBar]) -> Result<RecordBatch, FormatError> {
        let timestamps: Vec<_> = bars
            .iter()
            .map(|b| b.timestamp().and_utc().timestamp_micros())
            .collect();
        let opens: Vec<_> = bars.iter().map(|b| b.bar.open).collect();
        let highs: Vec<_> = bars.iter().map(|b| b.bar.high).collect();
        let lows: Vec<_> = bars.iter().map(|b| b.bar.low).collect();
        let closes: Vec<_> = bars.iter().map(|b| b.bar.close).collect();
        let returns: Vec<_> = bars.iter().map(|b| b.cumulative_return).collect();
        let rsi: Vec<_> = bars.iter().map(|b| b.rsi).collect();

        RecordBatch::try_new(
            Arc::new(Self::series_schema()),
            vec![
                Arc::new(TimestampMicrosecondArray::from(timestamps)),
                Arc::new(Float64Array::from(opens)),
                Arc::new(Float64Array::from(highs)),
                Arc::new(Float64Array::from(lows)),
                Arc::new(Float64Array::from(closes)),
                Arc::new(Float64Array::from(returns)),
                Arc::new(Float64Array::from(rsi)),
            ],
        )
        .map_err(|e| FormatError::Parquet(e.to_string()))
    }
}

impl Formatter for ParquetFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &EnrichedSeries,
        writer: W,
    ) -> Result<(), FormatError> {
        let schema = Arc::new(Self::series_schema());
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, schema, Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        for chunk in series.bars().chunks(self.row_group_size) {
            let batch = Self::bars_to_batch(chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use chrono::TimeDelta;
    use retrace_indicators::enrich;
    use retrace_types::{OhlcBar, parse_timestamp};
    use std::io::Cursor;

    fn create_test_series() -> EnrichedSeries {
        let base = parse_timestamp("2021-04-01").unwrap();
        let bars: Vec<_> = (0..20)
            .map(|i| {
                let c = 100.0 - f64::from(i);
                OhlcBar::new(base + TimeDelta::days(i64::from(i)), c, c, c, c)
            })
            .collect();
        enrich(&bars, base, base + TimeDelta::days(9)).unwrap()
    }

    #[test]
    fn test_parquet_series() {
        let formatter = ParquetFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        // Parquet files start with "PAR1" magic bytes
        let data = output.into_inner();
        assert!(data.len() > 4);
        assert_eq!(&data[0..4], b"PAR1");
    }

    #[test]
    fn test_zero_row_group_size() {
        let formatter = ParquetFormatter::new().with_row_group_size(0);
        assert_eq!(formatter.row_group_size, 1);

        let mut output = Cursor::new(Vec::new());
        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();
        assert_eq!(&output.into_inner()[0..4], b"PAR1");
    }

    #[test]
    fn test_absent_values_are_null() {
        let series = create_test_series();
        let batch = ParquetFormatter::bars_to_batch(series.bars()).unwrap();

        assert_eq!(batch.num_rows(), 20);
        // Ten bars after the bottom have no cumulative return.
        assert_eq!(batch.column(5).null_count(), 10);
        // The first 13 bars have no RSI.
        assert_eq!(batch.column(6).null_count(), 13);
    }

    #[test]
    fn test_series_schema() {
        let schema = ParquetFormatter::series_schema();
        assert_eq!(schema.fields().len(), 7);
        assert!(schema.field_with_name("rsi").unwrap().is_nullable());
        assert!(!schema.field_with_name("close").unwrap().is_nullable());
    }
}
