//! # Numbering Plan Trait
//!
//! Defines the abstract interface of a numbering-plan authority: the thing
//! that knows per-country dialing rules, length constraints, and formatting
//! templates. The pipeline treats it as an oracle and never inspects a
//! parsed number except through this trait.
//!
//! ## Contract
//!
//! - `parse` either yields a parsed number or [`PlanError::Unparseable`].
//!   Unparseable input is an ordinary outcome for noisy text, not a fault.
//! - Every other method is total over parsed numbers.
//! - Implementations are stateless per call and `Send + Sync`, so one plan
//!   can be shared by concurrent callers.

use phonesift_core::RegionCode;
use thiserror::Error;

/// Outcome of a failed parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The authority could not interpret the string under any region rules.
    #[error("unparseable number \"{input}\": {reason}")]
    Unparseable {
        /// The cleaned token handed to the plan.
        input: String,
        /// Why the plan rejected it.
        reason: String,
    },
}

impl PlanError {
    /// Shorthand for [`PlanError::Unparseable`].
    pub fn unparseable(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unparseable {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Canonical output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// `+14155550123`
    E164,
    /// `+1 415-555-0123`
    International,
    /// `(415) 555-0123`
    National,
}

/// Abstract interface for a numbering-plan authority.
///
/// The libphonenumber-backed and table-driven plans are interchangeable
/// wherever a `NumberingPlan` is expected.
pub trait NumberingPlan: Send + Sync {
    /// Parsed-number representation of this plan.
    type Number;

    /// Parse `number` (digits with an optional leading `+`), interpreting
    /// national-format input under `default_region`.
    fn parse(&self, number: &str, default_region: &RegionCode) -> Result<Self::Number, PlanError>;

    /// General validity, independent of any configured region.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Validity specifically within `region`.
    fn is_valid_for_region(&self, number: &Self::Number, region: &RegionCode) -> bool;

    /// Render the number in one of the canonical formats.
    fn format(&self, number: &Self::Number, format: NumberFormat) -> String;

    /// Region the number itself belongs to, when the plan can tell.
    fn region_of(&self, number: &Self::Number) -> Option<RegionCode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_message_includes_input_and_reason() {
        let err = PlanError::unparseable("12", "too short");
        assert_eq!(err.to_string(), "unparseable number \"12\": too short");
    }
}
