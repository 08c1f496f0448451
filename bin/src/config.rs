//! Run configuration.
//!
//! Values come from three layers: built-in defaults, an optional TOML file,
//! and command-line flags, each overriding the one before.

use anyhow::{Context, Result, bail};
use retrace_lib::{OutputFormat, SqliteStore, StoreConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RunConfig {
    /// SQLite database path.
    pub(crate) database: Option<PathBuf>,
    /// Table holding the turning-point events.
    pub(crate) events_table: String,
    /// Prefix of the per-symbol price tables.
    pub(crate) series_prefix: String,
    /// Directory receiving one file per rendered event.
    pub(crate) output_dir: PathBuf,
    /// Format of the rendered files.
    pub(crate) format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        let store = StoreConfig::default();
        Self {
            database: None,
            events_table: store.events_table,
            series_prefix: store.series_prefix,
            output_dir: PathBuf::from("retrace-out"),
            format: OutputFormat::Csv,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) database: Option<PathBuf>,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) format: Option<OutputFormat>,
}

impl RunConfig {
    /// Loads the file at `path`, or the defaults when there is none.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies command-line values on top of this configuration.
    pub(crate) fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(database) = overrides.database {
            self.database = Some(database);
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    /// Returns the table layout for the store.
    pub(crate) fn store_config(&self) -> StoreConfig {
        StoreConfig {
            events_table: self.events_table.clone(),
            series_prefix: self.series_prefix.clone(),
            ..StoreConfig::default()
        }
    }

    /// Opens the configured database.
    pub(crate) fn open_store(&self) -> Result<SqliteStore> {
        let Some(database) = &self.database else {
            bail!("No database given. Use --database, RETRACE_DATABASE or the config file");
        };
        let path = database
            .to_str()
            .with_context(|| format!("Database path is not UTF-8: {}", database.display()))?;
        SqliteStore::open(path, self.store_config())
            .with_context(|| format!("Failed to open {path}"))
    }
}
