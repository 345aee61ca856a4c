//! # Table-driven Plan
//!
//! A small, deterministic numbering plan described by a table of region
//! rules: calling code, national significant number length, and optional
//! trunk prefix. It knows nothing about number ranges, so it is only as
//! accurate as its table, but its answers never move with upstream
//! metadata releases. Tests of pipeline invariants run against it.

use phonesift_core::RegionCode;

use crate::traits::{NumberFormat, NumberingPlan, PlanError};

/// Dialing rule for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRule {
    /// Region the rule applies to.
    pub region: RegionCode,
    /// Country calling code without `+`, e.g. `"44"`.
    pub calling_code: String,
    /// Length of the national significant number.
    pub national_len: usize,
    /// Domestic trunk prefix stripped from national input, e.g. `"0"`.
    pub trunk_prefix: Option<String>,
}

impl RegionRule {
    /// Build a rule for an already validated region.
    pub fn new(
        region: RegionCode,
        calling_code: impl Into<String>,
        national_len: usize,
        trunk_prefix: Option<&str>,
    ) -> Self {
        Self {
            region,
            calling_code: calling_code.into(),
            national_len,
            trunk_prefix: trunk_prefix.map(str::to_string),
        }
    }
}

/// A number parsed by [`TablePlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNumber {
    /// Region whose rule matched.
    pub region: RegionCode,
    /// Calling code of that region.
    pub calling_code: String,
    /// National significant number.
    pub national: String,
}

/// Deterministic plan over a fixed rule table.
#[derive(Debug, Clone, Default)]
pub struct TablePlan {
    rules: Vec<RegionRule>,
}

impl TablePlan {
    /// Plan over the given rules. Earlier rules win on calling-code ties.
    pub fn new(rules: Vec<RegionRule>) -> Self {
        Self { rules }
    }

    /// A fixed table covering US, GB, NP and DE.
    pub fn standard() -> Self {
        let rule = |code: &str, cc: &str, len: usize, trunk: Option<&str>| {
            RegionCode::new(code).map(|region| RegionRule::new(region, cc, len, trunk))
        };
        Self::new(
            [
                rule("US", "1", 10, Some("1")),
                rule("GB", "44", 10, Some("0")),
                rule("NP", "977", 10, Some("0")),
                rule("DE", "49", 11, Some("0")),
            ]
            .into_iter()
            .flatten()
            .collect(),
        )
    }

    /// Rules in table order.
    pub fn rules(&self) -> &[RegionRule] {
        &self.rules
    }

    fn rule_for_region(&self, region: &RegionCode) -> Option<&RegionRule> {
        self.rules.iter().find(|r| &r.region == region)
    }

    /// Longest calling code that prefixes `digits`.
    fn rule_for_digits(&self, digits: &str) -> Option<&RegionRule> {
        self.rules
            .iter()
            .filter(|r| digits.starts_with(r.calling_code.as_str()))
            .fold(None, |best: Option<&RegionRule>, r| match best {
                Some(b) if b.calling_code.len() >= r.calling_code.len() => Some(b),
                _ => Some(r),
            })
    }

    fn trunk_prefix(&self, number: &TableNumber) -> &str {
        self.rule_for_region(&number.region)
            .and_then(|r| r.trunk_prefix.as_deref())
            .unwrap_or("")
    }
}

impl NumberingPlan for TablePlan {
    type Number = TableNumber;

    fn parse(&self, number: &str, default_region: &RegionCode) -> Result<TableNumber, PlanError> {
        let (international, digits) = match number.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlanError::unparseable(number, "not a digit string"));
        }
        if digits.len() < 3 {
            return Err(PlanError::unparseable(number, "too short"));
        }

        if international {
            let rule = self
                .rule_for_digits(digits)
                .ok_or_else(|| PlanError::unparseable(number, "unknown calling code"))?;
            return Ok(TableNumber {
                region: rule.region.clone(),
                calling_code: rule.calling_code.clone(),
                national: digits[rule.calling_code.len()..].to_string(),
            });
        }

        let rule = self
            .rule_for_region(default_region)
            .ok_or_else(|| PlanError::unparseable(number, "unknown default region"))?;
        let national = match rule.trunk_prefix.as_deref() {
            Some(trunk) if digits.len() > rule.national_len => {
                digits.strip_prefix(trunk).unwrap_or(digits)
            }
            _ => digits,
        };
        Ok(TableNumber {
            region: rule.region.clone(),
            calling_code: rule.calling_code.clone(),
            national: national.to_string(),
        })
    }

    fn is_valid(&self, number: &TableNumber) -> bool {
        self.rule_for_region(&number.region).is_some_and(|rule| {
            number.national.len() == rule.national_len && !number.national.starts_with('0')
        })
    }

    fn is_valid_for_region(&self, number: &TableNumber, region: &RegionCode) -> bool {
        &number.region == region && self.is_valid(number)
    }

    fn format(&self, number: &TableNumber, format: NumberFormat) -> String {
        match format {
            NumberFormat::E164 => format!("+{}{}", number.calling_code, number.national),
            NumberFormat::International => format!("+{} {}", number.calling_code, number.national),
            NumberFormat::National => format!("{}{}", self.trunk_prefix(number), number.national),
        }
    }

    fn region_of(&self, number: &TableNumber) -> Option<RegionCode> {
        Some(number.region.clone())
    }
}
