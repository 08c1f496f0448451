//! Display utilities and output formatting for the retrace CLI.

use clap::ValueEnum;
use retrace_lib::{EventReport, OutputFormat, RetraceError, RunReport, TurningPointEvent};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for rendered series.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
            Format::Parquet => Self::Parquet,
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over `-v`; `--quiet` wins over both.
pub(crate) fn init_tracing(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Returns the symbol of a record, parsed or not.
pub(crate) fn record_symbol(record: &Result<TurningPointEvent, RetraceError>) -> &str {
    match record {
        Ok(event) => event.symbol(),
        Err(RetraceError::MalformedEvent { symbol, .. }) => symbol,
        Err(_) => "",
    }
}

/// Formats a fraction as a signed percentage, or `-` when absent.
pub(crate) fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:+.2}%", v * 100.0))
}

/// Formats an optional value with one decimal, or `-` when absent.
pub(crate) fn decimal(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

/// Prints one row per event, then the totals.
pub(crate) fn print_run_table(report: &RunReport) {
    println!(
        "{:<6} {:<10} {:<20} {:<9} {:>5} {:>9}  DETAIL",
        "INDEX", "SYMBOL", "TOP", "STATUS", "BARS", "DRAWDOWN"
    );
    println!("{}", "-".repeat(80));

    for entry in &report.events {
        print_run_row(entry);
    }

    let totals = &report.totals;
    println!(
        "\nTotal: {} events, {} rendered, {} degraded, {} failed",
        totals.events, totals.rendered, totals.degraded, totals.failed
    );
    for (kind, count) in &totals.by_kind {
        println!("  {kind}: {count}");
    }
}

fn print_run_row(entry: &EventReport) {
    let top = entry
        .top
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    let drawdown = percent(entry.summary.map(|s| s.drawdown));
    println!(
        "{:<6} {:<10} {:<20} {:<9} {:>5} {:>9}  {}",
        entry.index,
        entry.symbol,
        top,
        entry.status,
        entry.bars,
        drawdown,
        entry.error_message.as_deref().unwrap_or("")
    );
}
