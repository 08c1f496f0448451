//! Turning-point event listing.

use diesel::sql_types::{Nullable, Text};
use diesel::{QueryableByName, RunQueryDsl, sql_query};
use retrace_types::{RetraceError, TurningPointEvent};

use crate::history::{quote_identifier, table_exists};
use crate::{EventSource, SqliteStore, StoreError};

#[derive(QueryableByName, Debug)]
struct EventRow {
    #[diesel(sql_type = Nullable<Text>)]
    top_symbol: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    top_timestamp: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    bottom_timestamp: Option<String>,
}

impl EventRow {
    fn materialize(self) -> Result<TurningPointEvent, RetraceError> {
        let symbol = self.top_symbol.unwrap_or_default();
        if symbol.is_empty() {
            return Err(RetraceError::malformed_event(symbol, "missing symbol"));
        }
        let (Some(top), Some(bottom)) = (self.top_timestamp, self.bottom_timestamp) else {
            return Err(RetraceError::malformed_event(symbol, "missing timestamp"));
        };
        TurningPointEvent::parse(&symbol, &top, &bottom)
    }
}

impl EventSource for SqliteStore {
    fn list_events(&mut self) -> Result<Vec<Result<TurningPointEvent, RetraceError>>, StoreError> {
        let table = self.config.events_table.clone();
        let quoted = quote_identifier(&table)?;
        if !table_exists(&mut self.conn, &table)? {
            return Err(StoreError::MissingTable(table));
        }

        let rows: Vec<EventRow> = sql_query(format!(
            "SELECT top_symbol, top_timestamp, bottom_timestamp FROM {quoted} ORDER BY rowid"
        ))
        .load(&mut self.conn)?;

        let events: Vec<_> = rows.into_iter().map(EventRow::materialize).collect();
        let malformed = events.iter().filter(|e| e.is_err()).count();
        tracing::debug!(%table, total = events.len(), malformed, "listed events");
        Ok(events)
    }
}
