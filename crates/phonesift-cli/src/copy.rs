//! # Copy Subcommand
//!
//! Prints newline-joined E.164 numbers ready to paste elsewhere, e.g.
//! `phonesift copy --group GB contacts.csv | pbcopy`. Records without an
//! E.164 form are skipped.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use phonesift_pipeline::{e164_list, PipelineOutput};

use crate::settings::PipelineArgs;

/// Arguments for the `phonesift copy` subcommand.
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Input files (`.csv` or text). Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Copy only this country group.
    #[arg(long, value_name = "CC")]
    pub group: Option<String>,
}

/// Execute the copy subcommand.
///
/// Returns exit code 0, or 1 if `--group` names a group absent from the run.
pub fn run_copy(args: &CopyArgs, config_path: Option<&Path>) -> Result<u8> {
    let output = crate::run_pipeline(&args.inputs, &args.pipeline, config_path)?;

    let Some(list) = copy_list(&output, args.group.as_deref()) else {
        tracing::warn!(group = ?args.group, "no such group in output");
        return Ok(1);
    };

    if !list.is_empty() {
        let stdout = std::io::stdout();
        writeln!(stdout.lock(), "{list}")?;
    }
    Ok(0)
}

/// E.164 list for the whole run or one group. `None` when the group is absent.
pub fn copy_list(output: &PipelineOutput, group: Option<&str>) -> Option<String> {
    match group {
        None => Some(e164_list(output.records())),
        Some(label) => crate::export::lookup_group(output, label).map(e164_list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonesift_core::{PipelineConfig, RegionCode};

    fn output() -> PipelineOutput {
        let config = PipelineConfig::for_country(RegionCode::new("US").unwrap());
        crate::run_text("+44 20 7183 8750\n650 253 0000\nn/a 42", &config)
    }

    #[test]
    fn whole_run_skips_invalid() {
        assert_eq!(
            copy_list(&output(), None).as_deref(),
            Some("+16502530000\n+442071838750")
        );
    }

    #[test]
    fn group_selection_is_case_insensitive() {
        assert_eq!(copy_list(&output(), Some("us")).as_deref(), Some("+16502530000"));
        assert_eq!(copy_list(&output(), Some("unknown")).as_deref(), Some(""));
        assert_eq!(copy_list(&output(), Some("DE")), None);
    }
}
