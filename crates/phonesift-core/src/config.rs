//! # Pipeline Configuration
//!
//! The only externally observable knobs of a pipeline run: the default
//! region used to interpret national-format numbers, the "only valid"
//! filter, and the sort direction. A [`PipelineConfig`] is immutable for the
//! duration of a run; changing any field means running the pipeline again.
//!
//! ## Layering
//!
//! Defaults, then an optional YAML file ([`ConfigFile`]), then environment
//! variables, then whatever the caller sets explicitly. Each layer only
//! overrides the fields it names.
//!
//! Variables:
//! - `PHONESIFT_DEFAULT_COUNTRY` (default: `US`)
//! - `PHONESIFT_ONLY_VALID` (`true`/`false`/`1`/`0`/`yes`/`no`, default: `false`)
//! - `PHONESIFT_SORT` (`ascending`/`descending`, default: `ascending`)

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};
use crate::region::RegionCode;

/// Environment variable overriding the default country.
pub const ENV_DEFAULT_COUNTRY: &str = "PHONESIFT_DEFAULT_COUNTRY";
/// Environment variable overriding the only-valid filter.
pub const ENV_ONLY_VALID: &str = "PHONESIFT_ONLY_VALID";
/// Environment variable overriding the sort direction.
pub const ENV_SORT: &str = "PHONESIFT_SORT";

/// Direction of the lexicographic-on-digits sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest digit string first.
    #[default]
    Ascending,
    /// Largest digit string first.
    Descending,
}

impl SortOrder {
    /// Build from the boolean "sort ascending" toggle.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Whether this is [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ValidationError::InvalidSortOrder(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Configuration of a single pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Region used to interpret numbers written without a country code.
    pub default_country: RegionCode,
    /// Drop records that are invalid or lack an E.164 form.
    pub only_valid: bool,
    /// Sort direction.
    pub sort: SortOrder,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_country: RegionCode(String::from("US")),
            only_valid: false,
            sort: SortOrder::Ascending,
        }
    }
}

impl PipelineConfig {
    /// Configuration with the given default country and default toggles.
    pub fn for_country(default_country: RegionCode) -> Self {
        Self {
            default_country,
            ..Self::default()
        }
    }

    /// Set the only-valid filter.
    pub fn with_only_valid(mut self, only_valid: bool) -> Self {
        self.only_valid = only_valid;
        self
    }

    /// Set the sort direction.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Overlay the fields present in a configuration file.
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(country) = file.default_country {
            self.default_country = country;
        }
        if let Some(only_valid) = file.only_valid {
            self.only_valid = only_valid;
        }
        if let Some(sort) = file.sort {
            self.sort = sort;
        }
        self
    }

    /// Overlay values from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_env_with(|var| std::env::var(var).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// Unset and blank variables leave the current value untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn merge_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_DEFAULT_COUNTRY) {
            self.default_country = RegionCode::new(&value)?;
            tracing::debug!(default_country = %self.default_country, "default country from environment");
        }
        if let Some(value) = get(ENV_ONLY_VALID) {
            self.only_valid = parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_ONLY_VALID.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = get(ENV_SORT) {
            self.sort = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_SORT.to_string(),
                value: value.clone(),
            })?;
        }
        Ok(self)
    }
}

/// Partial configuration as stored in a YAML file.
///
/// ```yaml
/// default_country: np
/// only_valid: true
/// sort: descending
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default region, validated and uppercased on load.
    pub default_country: Option<RegionCode>,
    /// Only-valid filter.
    pub only_valid: Option<bool>,
    /// Sort direction.
    pub sort: Option<SortOrder>,
}

impl ConfigFile {
    /// Load a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Yaml`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse configuration from YAML text. An empty document is an empty overlay.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.default_country.as_str(), "US");
        assert!(!cfg.only_valid);
        assert_eq!(cfg.sort, SortOrder::Ascending);
    }

    #[test]
    fn sort_order_parses_aliases() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!(" ascending ".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Descending);
    }

    #[test]
    fn env_overrides_apply() {
        let cfg = PipelineConfig::default()
            .merge_env_with(env(&[
                (ENV_DEFAULT_COUNTRY, "np"),
                (ENV_ONLY_VALID, "yes"),
                (ENV_SORT, "descending"),
            ]))
            .unwrap();
        assert_eq!(cfg.default_country.as_str(), "NP");
        assert!(cfg.only_valid);
        assert_eq!(cfg.sort, SortOrder::Descending);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let cfg = PipelineConfig::default()
            .merge_env_with(env(&[(ENV_DEFAULT_COUNTRY, "  ")]))
            .unwrap();
        assert_eq!(cfg.default_country.as_str(), "US");
    }

    #[test]
    fn bad_env_values_are_rejected() {
        let err = PipelineConfig::default()
            .merge_env_with(env(&[(ENV_ONLY_VALID, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));

        let err = PipelineConfig::default()
            .merge_env_with(env(&[(ENV_DEFAULT_COUNTRY, "Nepal")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn file_overlay_only_touches_named_fields() {
        let file = ConfigFile::from_yaml_str("default_country: gb\n").unwrap();
        let cfg = PipelineConfig::default()
            .with_only_valid(true)
            .merge_file(file);
        assert_eq!(cfg.default_country.as_str(), "GB");
        assert!(cfg.only_valid);
        assert_eq!(cfg.sort, SortOrder::Ascending);
    }

    #[test]
    fn file_rejects_unknown_keys_and_bad_regions() {
        assert!(ConfigFile::from_yaml_str("colour: blue\n").is_err());
        assert!(ConfigFile::from_yaml_str("default_country: england\n").is_err());
    }

    #[test]
    fn empty_file_is_empty_overlay() {
        assert_eq!(ConfigFile::from_yaml_str("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_country: np\nonly_valid: true\nsort: descending").unwrap();

        let loaded = ConfigFile::load(file.path()).unwrap();
        let cfg = PipelineConfig::default().merge_file(loaded);
        assert_eq!(cfg.default_country.as_str(), "NP");
        assert!(cfg.only_valid);
        assert_eq!(cfg.sort, SortOrder::Descending);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ConfigFile::load(Path::new("/nonexistent/phonesift.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
