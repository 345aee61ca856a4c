//! # Error Hierarchy
//!
//! Structured error types for phonesift, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The normalization pipeline itself has no fatal error class: every token
//! ends up as a valid or an invalid record. The errors here belong to the
//! edges of the system, where user-supplied configuration enters.

use thiserror::Error;

/// Top-level error type for phonesift.
#[derive(Error, Debug)]
pub enum PhonesiftError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors for domain primitive newtypes.
///
/// These carry the rejected input so that a misconfigured default country
/// can be diagnosed from the message alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Region code is not two ASCII letters.
    #[error("invalid region code: \"{0}\" (expected two letters, e.g. US or NP)")]
    InvalidRegionCode(String),

    /// Sort direction is neither ascending nor descending.
    #[error("invalid sort order: \"{0}\" (expected ascending or descending)")]
    InvalidSortOrder(String),
}

/// Errors while loading a [`PipelineConfig`](crate::PipelineConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected shape.
    #[error("failed to parse config file {path}: {source}")]
    Yaml {
        /// Path of the file that failed to parse.
        path: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A configured value failed domain validation.
    #[error("invalid configuration value: {0}")]
    Validation(#[from] ValidationError),

    /// An environment variable holds a value that cannot be interpreted.
    #[error("invalid value for {var}: \"{value}\"")]
    InvalidEnv {
        /// Name of the environment variable.
        var: String,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_error_message_names_input() {
        let err = ValidationError::InvalidRegionCode("USA".to_string());
        assert!(err.to_string().contains("\"USA\""));
    }

    #[test]
    fn validation_error_converts_into_top_level() {
        let err: PhonesiftError = ValidationError::InvalidSortOrder("up".to_string()).into();
        assert!(matches!(err, PhonesiftError::Validation(_)));
        assert!(err.to_string().starts_with("validation error"));
    }

    #[test]
    fn env_error_message_names_variable() {
        let err = ConfigError::InvalidEnv {
            var: "PHONESIFT_ONLY_VALID".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for PHONESIFT_ONLY_VALID: \"maybe\""
        );
    }
}
