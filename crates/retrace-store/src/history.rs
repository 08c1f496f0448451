//! Per-symbol OHLC history queries.

use chrono::{NaiveDateTime, TimeDelta};
use diesel::sql_types::{BigInt, Double, Nullable, Text};
use diesel::{QueryableByName, RunQueryDsl, SqliteConnection, sql_query};
use retrace_types::{OhlcBar, RetraceError, format_timestamp, parse_timestamp};

use crate::{HistorySource, SqliteStore, StoreError};

#[derive(QueryableByName, Debug)]
struct BarRow {
    #[diesel(sql_type = Text)]
    timestamp: String,
    #[diesel(sql_type = Nullable<Double>)]
    open: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    high: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    low: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    close: Option<f64>,
}

impl BarRow {
    /// A NULL price becomes NaN, which the indicators treat as undefined.
    fn into_bar(self) -> Result<OhlcBar, RetraceError> {
        let timestamp = parse_timestamp(&self.timestamp).ok_or_else(|| {
            RetraceError::MalformedSeries(format!("invalid bar timestamp {:?}", self.timestamp))
        })?;
        let price = |v: Option<f64>| v.unwrap_or(f64::NAN);
        Ok(OhlcBar::new(
            timestamp,
            price(self.open),
            price(self.high),
            price(self.low),
            price(self.close),
        ))
    }
}

#[derive(QueryableByName)]
struct TableCount {
    #[diesel(sql_type = BigInt)]
    cnt: i64,
}

/// Quotes a table name as a SQLite identifier.
///
/// # Errors
///
/// Returns [`StoreError::InvalidIdentifier`] for names that are empty or
/// contain `"` or NUL.
pub fn quote_identifier(name: &str) -> Result<String, StoreError> {
    if name.is_empty() || name.contains(['"', '\0']) {
        return Err(StoreError::InvalidIdentifier(name.to_string()));
    }
    Ok(format!("\"{name}\""))
}

pub(crate) fn table_exists(conn: &mut SqliteConnection, table: &str) -> Result<bool, StoreError> {
    let count: TableCount = sql_query(
        "SELECT COUNT(*) AS cnt FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?",
    )
    .bind::<Text, _>(table)
    .get_result(conn)?;
    Ok(count.cnt > 0)
}

fn load_bars(
    conn: &mut SqliteConnection,
    table: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<BarRow>, StoreError> {
    let quoted = quote_identifier(table)?;
    if !table_exists(conn, table)? {
        return Err(StoreError::MissingTable(table.to_string()));
    }

    // Stored text may be a bare date, use `T`, or carry fractional seconds:
    // pad the text range by a day, apply the exact bounds after parsing.
    let lower = start.checked_sub_signed(TimeDelta::days(1)).unwrap_or(start);
    let upper = end.checked_add_signed(TimeDelta::days(1)).unwrap_or(end);
    let rows = sql_query(format!(
        "SELECT timestamp, open, high, low, close FROM {quoted} \
         WHERE timestamp BETWEEN ? AND ? ORDER BY timestamp"
    ))
    .bind::<Text, _>(format_timestamp(lower))
    .bind::<Text, _>(format_timestamp(upper))
    .load(conn)?;
    Ok(rows)
}

impl HistorySource for SqliteStore {
    fn query(
        &mut self,
        series_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<OhlcBar>, RetraceError> {
        let table = self.config.series_table(series_id);
        let rows = load_bars(&mut self.conn, &table, start, end)
            .map_err(|e| RetraceError::series_unavailable(series_id, e))?;

        tracing::trace!(%table, rows = rows.len(), "loaded history");
        let mut bars = rows
            .into_iter()
            .map(BarRow::into_bar)
            .collect::<Result<Vec<_>, _>>()?;
        bars.retain(|b| b.timestamp >= start && b.timestamp <= end);
        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(
            quote_identifier("daily_indicators_BTC").unwrap(),
            "\"daily_indicators_BTC\""
        );
        assert_eq!(
            quote_identifier("daily_indicators_BTC-USD").unwrap(),
            "\"daily_indicators_BTC-USD\""
        );
        assert!(quote_identifier("").is_err());
        assert!(quote_identifier("x\"; DROP TABLE t; --").is_err());
    }

    #[test]
    fn test_bad_timestamp_is_malformed_series() {
        let row = BarRow {
            timestamp: "garbage".to_string(),
            open: Some(1.0),
            high: Some(1.0),
            low: Some(1.0),
            close: Some(1.0),
        };
        assert!(matches!(
            row.into_bar(),
            Err(RetraceError::MalformedSeries(_))
        ));
    }

    #[test]
    fn test_null_price_reads_as_nan() {
        let row = BarRow {
            timestamp: "2021-01-20 00:00:00".to_string(),
            open: Some(10.0),
            high: Some(11.0),
            low: Some(9.0),
            close: None,
        };
        let bar = row.into_bar().unwrap();
        assert!(bar.close.is_nan());
        assert_eq!(bar.open, 10.0);
    }
}
