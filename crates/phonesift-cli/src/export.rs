//! # Export Subcommand
//!
//! Writes the CSV export (`E164,International,National,Country`) of a run
//! to a file, or to stdout when no `--out` is given. Pass `--group` to
//! export a single country.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use phonesift_core::ParsedRecord;
use phonesift_pipeline::{to_csv, PipelineOutput};

use crate::settings::PipelineArgs;

/// Arguments for the `phonesift export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input files (`.csv` or text). Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Destination file. Writes to stdout when omitted.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Export only this country group (e.g. GB, Unknown).
    #[arg(long, value_name = "CC")]
    pub group: Option<String>,
}

/// Execute the export subcommand.
///
/// Returns exit code 0, or 1 if `--group` names a group absent from the run.
pub fn run_export(args: &ExportArgs, config_path: Option<&Path>) -> Result<u8> {
    let output = crate::run_pipeline(&args.inputs, &args.pipeline, config_path)?;

    let Some(csv) = render_selection(&output, args.group.as_deref())? else {
        tracing::warn!(group = ?args.group, "no such group in output");
        return Ok(1);
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{csv}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote csv export");
        }
        None => {
            let stdout = std::io::stdout();
            writeln!(stdout.lock(), "{csv}")?;
        }
    }
    Ok(0)
}

/// CSV for the whole run, or for one group. `None` when the group is absent.
pub fn render_selection(output: &PipelineOutput, group: Option<&str>) -> Result<Option<String>> {
    let records: &[ParsedRecord] = match group {
        None => output.records(),
        Some(label) => match lookup_group(output, label) {
            Some(records) => records,
            None => return Ok(None),
        },
    };
    Ok(Some(to_csv(records)?))
}

/// Find a group by label. Country codes match case-insensitively.
pub(crate) fn lookup_group<'a>(output: &'a PipelineOutput, label: &str) -> Option<&'a [ParsedRecord]> {
    let label = label.trim();
    output
        .groups()
        .iter()
        .find(|g| g.country().eq_ignore_ascii_case(label))
        .map(|g| g.records())
}
