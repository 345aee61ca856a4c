//! # Pipeline Settings
//!
//! Resolves the [`PipelineConfig`] for a command: built-in defaults, then
//! the `--config` YAML file, then `PHONESIFT_*` environment variables, then
//! command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use phonesift_core::{ConfigFile, PipelineConfig, RegionCode, SortOrder};

/// Flags shared by every subcommand that runs the pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Default region for numbers written without a country code (e.g. US, np).
    #[arg(short = 'c', long = "country", value_name = "CC")]
    pub country: Option<String>,

    /// Drop numbers that are not valid.
    #[arg(long)]
    pub only_valid: bool,

    /// Sort descending instead of ascending.
    #[arg(long, conflicts_with = "ascending")]
    pub descending: bool,

    /// Sort ascending, overriding config file and environment.
    #[arg(long)]
    pub ascending: bool,
}

/// Resolve configuration from all layers using the process environment.
pub fn resolve_config(args: &PipelineArgs, config_path: Option<&Path>) -> Result<PipelineConfig> {
    resolve_config_with(args, config_path, |var| std::env::var(var).ok())
}

/// Resolve configuration with an explicit environment lookup.
pub fn resolve_config_with<F>(
    args: &PipelineArgs,
    config_path: Option<&Path>,
    env: F,
) -> Result<PipelineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = PipelineConfig::default();

    if let Some(path) = config_path {
        let file = ConfigFile::load(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        config = config.merge_file(file);
    }

    config = config
        .merge_env_with(env)
        .context("invalid PHONESIFT_* environment")?;

    apply_flags(config, args)
}

fn apply_flags(mut config: PipelineConfig, args: &PipelineArgs) -> Result<PipelineConfig> {
    if let Some(country) = &args.country {
        config.default_country =
            RegionCode::new(country).with_context(|| format!("invalid --country \"{country}\""))?;
    }
    if args.only_valid {
        config.only_valid = true;
    }
    if args.descending {
        config.sort = SortOrder::Descending;
    } else if args.ascending {
        config.sort = SortOrder::Ascending;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_any_layer() {
        let cfg = resolve_config_with(&PipelineArgs::default(), None, no_env).unwrap();
        assert_eq!(cfg, PipelineConfig::default());
    }

    #[test]
    fn flags_override_file_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonesift.yaml");
        std::fs::write(&path, "default_country: gb\nsort: descending\n").unwrap();

        let args = PipelineArgs {
            country: Some("np".to_string()),
            ascending: true,
            ..PipelineArgs::default()
        };
        let env = |var: &str| (var == "PHONESIFT_ONLY_VALID").then(|| "true".to_string());

        let cfg = resolve_config_with(&args, Some(&path), env).unwrap();
        assert_eq!(cfg.default_country.as_str(), "NP");
        assert!(cfg.only_valid);
        assert_eq!(cfg.sort, SortOrder::Ascending);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonesift.yaml");
        std::fs::write(&path, "default_country: gb\n").unwrap();

        let env = |var: &str| (var == "PHONESIFT_DEFAULT_COUNTRY").then(|| "de".to_string());
        let cfg = resolve_config_with(&PipelineArgs::default(), Some(&path), env).unwrap();
        assert_eq!(cfg.default_country.as_str(), "DE");
    }

    #[test]
    fn bad_country_flag_is_an_error() {
        let args = PipelineArgs {
            country: Some("Nepal".to_string()),
            ..PipelineArgs::default()
        };
        let err = resolve_config_with(&args, None, no_env).unwrap_err();
        assert!(format!("{err:#}").contains("--country"));
    }
}
