//! # Region Codes
//!
//! Two-letter region identifiers (ISO 3166-1 alpha-2 style, as used by
//! numbering-plan metadata). A [`RegionCode`] is always two uppercase ASCII
//! letters; user input is trimmed and uppercased at construction.
//!
//! Whether a well-formed code is actually known to a numbering plan is
//! decided by the plan, not here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Group label used for records without a resolved country.
pub const UNKNOWN_REGION: &str = "Unknown";

/// A validated two-letter region code such as `US`, `GB` or `NP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(pub(crate) String);

impl RegionCode {
    /// Create a region code, trimming and uppercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegionCode`] unless the trimmed
    /// input is exactly two ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidRegionCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the region code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
