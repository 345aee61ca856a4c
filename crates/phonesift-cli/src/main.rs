//! # phonesift CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use phonesift_cli::copy::{run_copy, CopyArgs};
use phonesift_cli::export::{run_export, ExportArgs};
use phonesift_cli::normalize::{run_normalize, NormalizeArgs};

/// phonesift: bulk phone number normalization.
///
/// Extracts phone numbers from pasted text or CSV/TXT files, validates them
/// against libphonenumber metadata, removes duplicates, and groups the
/// result by country.
#[derive(Parser, Debug)]
#[command(name = "phonesift", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize numbers and print them as a table, JSON, CSV or E.164 list.
    Normalize(NormalizeArgs),

    /// Write the CSV export to a file or stdout.
    Export(ExportArgs),

    /// Print newline-joined E.164 numbers, optionally for one country.
    Copy(CopyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "phonesift starting");

    let config_path = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Normalize(args) => run_normalize(args, config_path),
        Commands::Export(args) => run_export(args, config_path),
        Commands::Copy(args) => run_copy(args, config_path),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
