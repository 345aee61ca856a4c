//! # Validator
//!
//! Turns a cleaned token into a [`ParsedRecord`] by consulting a
//! [`NumberingPlan`].
//!
//! ## Outcomes
//!
//! - Empty cleaned token: invalid, the plan is not consulted.
//! - Plan reports unparseable: invalid. This is the normal fate of noisy
//!   input and never aborts a run.
//! - Parsed: valid when the plan accepts the number for the default region
//!   OR accepts it in general. A number with its own country code can be
//!   valid while not belonging to the default region; the record then
//!   carries the region the plan resolved.

use phonesift_core::{CanonicalForms, ParsedRecord, RegionCode};
use phonesift_plan::{NumberFormat, NumberingPlan};

/// Validate one cleaned token under `default_region`.
pub fn validate<P>(plan: &P, raw: &str, cleaned: &str, default_region: &RegionCode) -> ParsedRecord
where
    P: NumberingPlan + ?Sized,
{
    if cleaned.is_empty() {
        tracing::trace!(raw, "empty token after cleaning");
        return ParsedRecord::invalid(raw, cleaned);
    }

    let number = match plan.parse(cleaned, default_region) {
        Ok(number) => number,
        Err(err) => {
            tracing::trace!(raw, error = %err, "token rejected by numbering plan");
            return ParsedRecord::invalid(raw, cleaned);
        }
    };

    let valid =
        plan.is_valid_for_region(&number, default_region) || plan.is_valid(&number);
    if !valid {
        tracing::trace!(raw, cleaned, "parsed but not a valid number");
        return ParsedRecord::invalid(raw, cleaned);
    }

    let forms = CanonicalForms {
        e164: Some(plan.format(&number, NumberFormat::E164)),
        international: Some(plan.format(&number, NumberFormat::International)),
        national: Some(plan.format(&number, NumberFormat::National)),
        country: plan.region_of(&number),
    };
    ParsedRecord::valid(raw, cleaned, forms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonesift_plan::{PlanError, TablePlan};

    fn region(code: &str) -> RegionCode {
        RegionCode::new(code).unwrap()
    }

    /// Plan with scripted answers, for exercising the dual validity check.
    struct ScriptedPlan {
        general: bool,
        for_region: bool,
        e164: &'static str,
    }

    impl NumberingPlan for ScriptedPlan {
        type Number = String;

        fn parse(&self, number: &str, _default_region: &RegionCode) -> Result<String, PlanError> {
            if number == "bad" {
                return Err(PlanError::unparseable(number, "scripted"));
            }
            Ok(number.to_string())
        }

        fn is_valid(&self, _number: &String) -> bool {
            self.general
        }

        fn is_valid_for_region(&self, _number: &String, _region: &RegionCode) -> bool {
            self.for_region
        }

        fn format(&self, number: &String, format: NumberFormat) -> String {
            match format {
                NumberFormat::E164 => self.e164.to_string(),
                _ => number.clone(),
            }
        }

        fn region_of(&self, _number: &String) -> Option<RegionCode> {
            RegionCode::new("GB").ok()
        }
    }

    #[test]
    fn empty_token_is_invalid_without_consulting_plan() {
        let plan = ScriptedPlan { general: true, for_region: true, e164: "+1" };
        let rec = validate(&plan, "+", "", &region("US"));
        assert!(!rec.is_valid());
        assert_eq!(rec.cleaned(), "");
    }

    #[test]
    fn unparseable_token_is_invalid() {
        let plan = ScriptedPlan { general: true, for_region: true, e164: "+1" };
        let rec = validate(&plan, "bad", "bad", &region("US"));
        assert!(!rec.is_valid());
        assert!(rec.e164().is_none());
    }

    #[test]
    fn either_validity_check_suffices() {
        for (general, for_region) in [(true, false), (false, true), (true, true)] {
            let plan = ScriptedPlan { general, for_region, e164: "+442071838750" };
            let rec = validate(&plan, "x", "442071838750", &region("US"));
            assert!(rec.is_valid(), "general={general} for_region={for_region}");
        }

        let plan = ScriptedPlan { general: false, for_region: false, e164: "+1" };
        assert!(!validate(&plan, "x", "1", &region("US")).is_valid());
    }

    #[test]
    fn resolved_country_overrides_default() {
        let plan = ScriptedPlan { general: true, for_region: false, e164: "+442071838750" };
        let rec = validate(&plan, "x", "+442071838750", &region("US"));
        assert_eq!(rec.country().map(RegionCode::as_str), Some("GB"));
    }

    #[test]
    fn empty_e164_from_plan_leaves_record_incomplete() {
        let plan = ScriptedPlan { general: true, for_region: true, e164: "" };
        let rec = validate(&plan, "x", "123", &region("US"));
        assert!(rec.is_valid());
        assert!(rec.e164().is_none());
        assert!(!rec.is_complete());
    }

    #[test]
    fn table_plan_end_to_end() {
        let plan = TablePlan::standard();
        let rec = validate(&plan, "(415) 555-0123", "4155550123", &region("US"));
        assert!(rec.is_valid());
        assert_eq!(rec.e164(), Some("+14155550123"));
        assert_eq!(rec.international(), Some("+1 4155550123"));
        assert_eq!(rec.country().map(RegionCode::as_str), Some("US"));
        assert_eq!(rec.raw(), "(415) 555-0123");

        let rec = validate(&plan, "123", "123", &region("US"));
        assert!(!rec.is_valid());
    }

    #[test]
    fn validation_is_deterministic() {
        let plan = TablePlan::standard();
        let a = validate(&plan, "02071838750", "02071838750", &region("GB"));
        let b = validate(&plan, "02071838750", "02071838750", &region("GB"));
        assert_eq!(a, b);
    }
}
