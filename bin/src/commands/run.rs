//! Run command implementation.
//!
//! Processes every selected event, writing one file per rendered series.

use crate::config::RunConfig;
use crate::display::print_run_table;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use retrace_lib::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::select;

/// Execute the run command.
pub(crate) fn run(
    config: &RunConfig,
    symbol: Option<&str>,
    report_path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let mut store = config.open_store()?;
    let records = store.list_events().context("Failed to list events")?;
    let records = select(records, symbol);

    if records.is_empty() {
        if !quiet {
            println!("No events found.");
        }
        return Ok(());
    }

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(records.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} events {msg}")?
            .progress_chars("=>-"),
    );

    let mut sink = FileSink::new(&config.output_dir, config.format);
    let report = Pipeline::new(&mut store, &mut sink).run_indexed(records, |entry| {
        pb.set_message(format!("{} {}", entry.symbol, entry.status));
        pb.inc(1);
    });
    pb.finish_and_clear();

    if let Some(path) = report_path {
        write_report(&report, path)?;
    }

    if !quiet {
        print_run_table(&report);
        if !sink.written().is_empty() {
            println!(
                "\nWrote {} files to {}",
                sink.written().len(),
                sink.output_dir().display()
            );
        }
    }

    Ok(())
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote run report");
    Ok(())
}
