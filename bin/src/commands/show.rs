//! Show command implementation.
//!
//! Processes a single event and prints its enriched series and summary.

use crate::config::RunConfig;
use crate::display::{decimal, percent};
use anyhow::{Context, Result, bail};
use retrace_lib::prelude::*;
use std::io::{BufWriter, Write};

/// Print the enriched series of the event at `index`.
pub(crate) fn show(config: &RunConfig, index: usize, format: OutputFormat) -> Result<()> {
    let mut store = config.open_store()?;
    let mut records = store.list_events().context("Failed to list events")?;
    let total = records.len();
    if index >= total {
        bail!("No event at index {index} ({total} events)");
    }
    let event = records.swap_remove(index)?;

    let mut sink = WriterSink::new(BufWriter::new(std::io::stdout()), format);
    let done = Pipeline::new(&mut store, &mut sink)
        .process(&event)
        .with_context(|| format!("Failed to process {event}"))?;

    let mut out = sink.into_inner();
    let summary = &done.summary;
    writeln!(out)?;
    writeln!(out, "Event:         {event}")?;
    writeln!(out, "Window:        {}", done.window)?;
    writeln!(out, "Bars:          {}", done.series.len())?;
    writeln!(out, "Anchor close:  {}", summary.anchor_close)?;
    writeln!(
        out,
        "Bottom:        {} at {}",
        summary.bottom_close, summary.bottom_bar
    )?;
    writeln!(out, "Drawdown:      {}", percent(Some(summary.drawdown)))?;
    writeln!(out, "Max drawdown:  {}", percent(Some(summary.max_drawdown)))?;
    writeln!(out, "Episode bars:  {}", summary.episode_bars)?;
    writeln!(
        out,
        "RSI top/bottom: {} / {}",
        decimal(summary.rsi_at_top),
        decimal(summary.rsi_at_bottom)
    )?;
    writeln!(
        out,
        "Overbought/oversold bars: {} / {}",
        summary.overbought_bars, summary.oversold_bars
    )?;
    if let Some(warning) = done.series.history_warning() {
        writeln!(out, "Warning:       {warning}")?;
    }
    out.flush()?;
    Ok(())
}
