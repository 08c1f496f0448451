//! retrace CLI - turning-point windows with cumulative return and RSI overlays.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod display;

use config::{Overrides, RunConfig};
use display::Format;

#[derive(Parser)]
#[command(name = "retrace")]
#[command(about = "Turning-point windows with cumulative return and RSI overlays", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// SQLite database holding the events and price tables
    #[arg(short, long, env = "RETRACE_DATABASE", global = true)]
    database: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every turning-point event
    Run {
        /// Only process events for this symbol
        #[arg(short, long)]
        symbol: Option<String>,

        /// Output directory. Files named <symbol>_<top>.<format>
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Write the run report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List turning-point events and their windows
    List {
        /// Only list events for this symbol
        #[arg(short, long)]
        symbol: Option<String>,
    },

    /// Process one event and print its enriched series
    Show {
        /// Position of the event in the events table (see `list`)
        index: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let (output_dir, format) = match &command {
        Commands::Run {
            output_dir, format, ..
        } => (output_dir.clone(), *format),
        _ => (None, None),
    };
    let config = RunConfig::load(cli.config.as_deref())?.with_overrides(Overrides {
        database: cli.database,
        output_dir,
        format: format.map(Into::into),
    });

    match command {
        Commands::Run { symbol, report, .. } => {
            commands::run::run(&config, symbol.as_deref(), report.as_deref(), cli.quiet)
        }
        Commands::List { symbol } => commands::list::list_events(&config, symbol.as_deref()),
        Commands::Show { index, format } => commands::show::show(&config, index, format.into()),
    }
}
