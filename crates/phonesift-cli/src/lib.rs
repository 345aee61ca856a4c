//! # phonesift-cli — Command-Line Interface
//!
//! Thin clap front end over `phonesift-pipeline`. Handlers read input,
//! resolve configuration, run the pipeline once, and render the result.
//!
//! ## Subcommands
//!
//! - `normalize` — print the result as a table, JSON, CSV or E.164 list
//! - `export` — write the CSV export to a file or stdout
//! - `copy` — print newline-joined E.164 numbers, optionally for one country
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from rendering.
//! - Handlers write to a caller-supplied `Write` and return an exit code.
//! - Logs go to stderr; stdout carries only command output.

pub mod copy;
pub mod export;
pub mod input;
pub mod normalize;
pub mod settings;

use std::path::{Path, PathBuf};

use anyhow::Result;

use phonesift_pipeline::{Pipeline, PipelineOutput};
use phonesift_plan::LibPhonenumberPlan;

use settings::PipelineArgs;

/// Read `inputs`, resolve configuration, and run the pipeline once.
pub fn run_pipeline(
    inputs: &[PathBuf],
    pipeline_args: &PipelineArgs,
    config_path: Option<&Path>,
) -> Result<PipelineOutput> {
    let config = settings::resolve_config(pipeline_args, config_path)?;
    let text = input::read_inputs(inputs)?;
    Ok(run_text(&text, &config))
}

/// Run the libphonenumber-backed pipeline over already loaded text.
pub fn run_text(text: &str, config: &phonesift_core::PipelineConfig) -> PipelineOutput {
    tracing::debug!(
        default_country = %config.default_country,
        only_valid = config.only_valid,
        sort = %config.sort,
        "running pipeline"
    );
    Pipeline::new(LibPhonenumberPlan::new()).run(text, config)
}
