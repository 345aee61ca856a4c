//! # libphonenumber-backed Plan
//!
//! [`LibPhonenumberPlan`] delegates to the `phonenumber` crate, a Rust port
//! of Google's libphonenumber with its per-country metadata compiled in.
//!
//! ## Region handling
//!
//! A default region the metadata does not know is not an error: numbers
//! carrying their own `+<country code>` still parse, while national-format
//! input fails as unparseable. Region-specific validity requires the number
//! to be generally valid and to resolve to exactly that region.

use phonenumber::{country, Mode, PhoneNumber};

use phonesift_core::RegionCode;

use crate::traits::{NumberFormat, NumberingPlan, PlanError};

/// Numbering plan backed by libphonenumber metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhonenumberPlan;

impl LibPhonenumberPlan {
    /// Create the plan. Metadata is loaded lazily by the underlying crate.
    pub fn new() -> Self {
        Self
    }

    fn country_id(region: &RegionCode) -> Option<country::Id> {
        region.as_str().parse::<country::Id>().ok()
    }
}

impl NumberingPlan for LibPhonenumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, number: &str, default_region: &RegionCode) -> Result<PhoneNumber, PlanError> {
        let id = Self::country_id(default_region);
        if id.is_none() {
            tracing::trace!(region = %default_region, "default region unknown to metadata");
        }
        phonenumber::parse(id, number).map_err(|e| PlanError::unparseable(number, e.to_string()))
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn is_valid_for_region(&self, number: &PhoneNumber, region: &RegionCode) -> bool {
        phonenumber::is_valid(number) && self.region_of(number).as_ref() == Some(region)
    }

    fn format(&self, number: &PhoneNumber, format: NumberFormat) -> String {
        let mode = match format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
        };
        number.format().mode(mode).to_string()
    }

    fn region_of(&self, number: &PhoneNumber) -> Option<RegionCode> {
        // `country::Id` variants are the two-letter codes themselves.
        number
            .country()
            .id()
            .and_then(|id| RegionCode::new(format!("{id:?}")).ok())
    }
}
