//! # Normalize Subcommand
//!
//! Runs the pipeline and renders the result in one of four formats.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use phonesift_core::ParsedRecord;
use phonesift_pipeline::{e164_list, to_csv, PipelineOutput};

use crate::settings::PipelineArgs;

/// Placeholder shown in the table for a missing canonical form.
const MISSING: &str = "—";

/// Output format for `normalize`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Grouped human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON with `records`, `groups` and `total`.
    Json,
    /// CSV export with header row.
    Csv,
    /// One E.164 number per line.
    E164,
}

/// Arguments for the `phonesift normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input files (`.csv` or text). Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Execute the normalize subcommand.
///
/// Returns exit code 0. Read and configuration failures propagate.
pub fn run_normalize(args: &NormalizeArgs, config_path: Option<&Path>) -> Result<u8> {
    let output = crate::run_pipeline(&args.inputs, &args.pipeline, config_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&output, args.format, &mut out)?;
    Ok(0)
}

/// Render `output` in `format` to `out`.
pub fn render<W: Write>(output: &PipelineOutput, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(output, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, output).context("failed to serialize JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => writeln!(out, "{}", to_csv(output.records())?)?,
        OutputFormat::E164 => {
            let list = e164_list(output.records());
            if !list.is_empty() {
                writeln!(out, "{list}")?;
            }
        }
    }
    Ok(())
}

fn render_table<W: Write>(output: &PipelineOutput, out: &mut W) -> std::io::Result<()> {
    if output.total() == 0 {
        return writeln!(out, "No numbers found.");
    }

    for group in output.groups() {
        writeln!(out, "{} ({})", group.country(), group.records().len())?;
        for record in group.records() {
            writeln!(out, "  {}", table_row(record))?;
        }
    }
    writeln!(
        out,
        "{} numbers, {} valid",
        output.total(),
        output.valid_count()
    )
}

fn table_row(record: &ParsedRecord) -> String {
    format!(
        "{:<16} {:<20} {:<18} {}",
        record.e164().unwrap_or(MISSING),
        record.international().unwrap_or(MISSING),
        record.national().unwrap_or(MISSING),
        record.raw()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonesift_core::{PipelineConfig, RegionCode};

    fn run(text: &str, format: OutputFormat) -> String {
        let config = PipelineConfig::for_country(RegionCode::new("US").unwrap());
        let output = crate::run_text(text, &config);
        let mut buf = Vec::new();
        render(&output, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_groups_and_summarizes() {
        let text = run("+44 20 7183 8750\n650 253 0000\n12345", OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"GB (1)"));
        assert!(lines.contains(&"US (1)"));
        assert!(lines.contains(&"Unknown (1)"));
        assert_eq!(lines.last(), Some(&"3 numbers, 2 valid"));
        assert!(text.contains(MISSING));
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(run("", OutputFormat::Table), "No numbers found.\n");
    }

    #[test]
    fn json_has_records_groups_total() {
        let text = run("+44 20 7183 8750", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["records"][0]["e164"], "+442071838750");
        assert!(value["groups"]["GB"].is_array());
    }

    #[test]
    fn e164_lists_only_canonical_numbers() {
        let text = run("+44 20 7183 8750, 12345", OutputFormat::E164);
        assert_eq!(text, "+442071838750\n");
        assert_eq!(run("12345", OutputFormat::E164), "");
    }

    #[test]
    fn csv_ends_with_newline() {
        let text = run("+44 20 7183 8750", OutputFormat::Csv);
        assert!(text.starts_with("\"E164\""));
        assert!(text.ends_with("\"GB\"\n"));
    }
}
