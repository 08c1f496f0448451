//! Run-scoped SQLite handle.

use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use std::path::Path;
use thiserror::Error;

/// Table layout of the turning-point database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Table holding `top_symbol`, `top_timestamp` and `bottom_timestamp`.
    pub events_table: String,
    /// Prefix prepended to a symbol to name its OHLC table.
    pub series_prefix: String,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            events_table: "top_bottom_indicators_data".to_string(),
            series_prefix: "daily_indicators_".to_string(),
            busy_timeout_ms: 5000,
        }
    }
}

impl StoreConfig {
    /// Returns the table name holding the given symbol's bars.
    #[must_use]
    pub fn series_table(&self, symbol: &str) -> String {
        format!("{}{}", self.series_prefix, symbol)
    }
}

/// Errors that end a run before any event is processed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file does not exist.
    #[error("Database not found: {0}")]
    NotFound(String),

    /// Opening the connection failed.
    #[error("Failed to open database '{path}': {source}")]
    Connect {
        /// The database path or URL.
        path: String,
        /// The underlying connection error.
        source: diesel::ConnectionError,
    },

    /// A query failed.
    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// A configured table name cannot be quoted as an identifier.
    #[error("Invalid table name: {0:?}")]
    InvalidIdentifier(String),

    /// A required table is missing.
    #[error("Table not found: {0}")]
    MissingTable(String),
}

/// Read-only handle on the turning-point database.
///
/// Acquired once per run and passed explicitly to the pipeline; the
/// connection closes when the handle is dropped.
pub struct SqliteStore {
    pub(crate) conn: SqliteConnection,
    pub(crate) config: StoreConfig,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens the database at `database` with the given layout.
    ///
    /// Plain paths must exist; `:memory:` and `file:` URLs are passed through.
    /// The connection is switched to `query_only` so nothing is ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or the connection cannot be
    /// configured.
    pub fn open(database: &str, config: StoreConfig) -> Result<Self, StoreError> {
        let is_url = database == ":memory:" || database.starts_with("file:");
        if !is_url && !Path::new(database).exists() {
            return Err(StoreError::NotFound(database.to_string()));
        }

        let mut conn =
            SqliteConnection::establish(database).map_err(|source| StoreError::Connect {
                path: database.to_string(),
                source,
            })?;
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout={}; PRAGMA query_only=ON;",
            config.busy_timeout_ms
        ))?;

        tracing::debug!(database, ?config, "opened store");
        Ok(Self { conn, config })
    }

    /// Opens the database with the default layout.
    ///
    /// # Errors
    ///
    /// See [`SqliteStore::open`].
    pub fn with_defaults(database: &str) -> Result<Self, StoreError> {
        Self::open(database, StoreConfig::default())
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }
}
