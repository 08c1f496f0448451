//! List command implementation.
//!
//! This module handles listing turning-point events with their windows.

use crate::config::RunConfig;
use anyhow::{Context, Result};
use retrace_lib::prelude::*;

use super::select;

/// List events, optionally for one symbol.
pub(crate) fn list_events(config: &RunConfig, symbol: Option<&str>) -> Result<()> {
    let mut store = config.open_store()?;
    let records = select(
        store.list_events().context("Failed to list events")?,
        symbol,
    );

    if records.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<10} {:<20} {:<20} {:<42}",
        "INDEX", "SYMBOL", "TOP", "BOTTOM", "WINDOW"
    );
    println!("{}", "-".repeat(100));

    let mut malformed = 0;
    for (index, record) in &records {
        match record {
            Ok(event) => println!(
                "{:<6} {:<10} {:<20} {:<20} {:<42}",
                index,
                event.symbol(),
                event.top().to_string(),
                event.bottom().to_string(),
                ResolvedWindow::resolve(event).to_string()
            ),
            Err(e) => {
                malformed += 1;
                println!("{index:<6} {e}");
            }
        }
    }

    println!("\nTotal: {} events ({} malformed)", records.len(), malformed);
    Ok(())
}
