//! # Parsed Records
//!
//! The unit of pipeline output. A [`ParsedRecord`] keeps the candidate token
//! as it appeared in the input, its cleaned form, and, when the numbering
//! plan accepted it, the canonical representations.
//!
//! ## Invariant
//!
//! An invalid record never carries canonical fields. Absent fields are
//! `None`, never empty strings; display placeholders are a presentation
//! concern.

use serde::Serialize;

use crate::region::{RegionCode, UNKNOWN_REGION};

/// Canonical representations produced by the numbering plan for a valid number.
///
/// Empty strings are folded to `None` when a record is built from these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalForms {
    /// E.164 form, e.g. `+14155550123`.
    pub e164: Option<String>,
    /// International display form, e.g. `+1 415-555-0123`.
    pub international: Option<String>,
    /// National display form, e.g. `(415) 555-0123`.
    pub national: Option<String>,
    /// Region resolved from the number itself.
    pub country: Option<RegionCode>,
}

/// One candidate token after cleaning and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    raw: String,
    cleaned: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    e164: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    international: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    national: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<RegionCode>,
}

impl ParsedRecord {
    /// A record the numbering plan rejected (or never saw, for empty tokens).
    pub fn invalid(raw: impl Into<String>, cleaned: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            cleaned: cleaned.into(),
            valid: false,
            e164: None,
            international: None,
            national: None,
            country: None,
        }
    }

    /// A record the numbering plan accepted.
    pub fn valid(raw: impl Into<String>, cleaned: impl Into<String>, forms: CanonicalForms) -> Self {
        Self {
            raw: raw.into(),
            cleaned: cleaned.into(),
            valid: true,
            e164: non_empty(forms.e164),
            international: non_empty(forms.international),
            national: non_empty(forms.national),
            country: forms.country,
        }
    }

    /// The candidate token exactly as the tokenizer produced it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Digits with an optional leading `+`.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Whether the numbering plan accepted the number.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// E.164 form, if valid.
    pub fn e164(&self) -> Option<&str> {
        self.e164.as_deref()
    }

    /// International display form, if valid.
    pub fn international(&self) -> Option<&str> {
        self.international.as_deref()
    }

    /// National display form, if valid.
    pub fn national(&self) -> Option<&str> {
        self.national.as_deref()
    }

    /// Resolved region, if valid.
    pub fn country(&self) -> Option<&RegionCode> {
        self.country.as_ref()
    }

    /// True when the record is valid and carries a non-empty E.164 form.
    pub fn is_complete(&self) -> bool {
        self.valid && self.e164.is_some()
    }

    /// Identity used for deduplication: E.164 when present, else the cleaned token.
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey(self.e164.clone().unwrap_or_else(|| self.cleaned.clone()))
    }

    /// Digit-only form of the dedup identity, compared lexicographically when sorting.
    pub fn sort_digits(&self) -> String {
        self.e164
            .as_deref()
            .unwrap_or(&self.cleaned)
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Label of the country group this record belongs to.
    pub fn group_label(&self) -> &str {
        self.country
            .as_ref()
            .map(RegionCode::as_str)
            .unwrap_or(UNKNOWN_REGION)
    }
}

/// Deduplication identity of a [`ParsedRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DedupKey(String);

impl DedupKey {
    /// Access the key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DedupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
