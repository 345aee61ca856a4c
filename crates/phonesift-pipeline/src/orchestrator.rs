//! # Pipeline Orchestrator
//!
//! Composes tokenizer, cleaner and validator over a block of raw text, then
//! filters, deduplicates, sorts and groups the resulting records.
//!
//! ## Stages
//!
//! 1. Tokenize.
//! 2. Clean and validate each token in token order.
//! 3. With `only_valid`, drop records that are invalid or lack E.164.
//! 4. Deduplicate on [`DedupKey`]; the first occurrence wins.
//! 5. Stable sort on the digit-only dedup identity, compared as strings.
//!    `"144"` sorts before `"44"`, and `"4"` before `"40"`: this is
//!    lexicographic order, not numeric order.
//! 6. Group by resolved country.
//!
//! A run is a pure function of (text, configuration): no state survives
//! between runs and identical inputs give identical output.

use std::collections::HashSet;

use serde::Serialize;

use phonesift_core::{DedupKey, ParsedRecord, PipelineConfig, SortOrder};
use phonesift_plan::NumberingPlan;

use crate::cleaner::clean;
use crate::grouping::{group_by_country, CountryGroups};
use crate::tokenizer::tokenize;
use crate::validator::validate;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    records: Vec<ParsedRecord>,
    groups: CountryGroups,
    total: usize,
}

impl PipelineOutput {
    fn new(records: Vec<ParsedRecord>) -> Self {
        let groups = group_by_country(&records);
        let total = records.len();
        Self {
            records,
            groups,
            total,
        }
    }

    /// Flat, deduplicated, sorted records.
    pub fn records(&self) -> &[ParsedRecord] {
        &self.records
    }

    /// Records grouped by country.
    pub fn groups(&self) -> &CountryGroups {
        &self.groups
    }

    /// Number of records in the flat sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of valid records.
    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_valid()).count()
    }

    /// Consume the output, keeping the flat sequence.
    pub fn into_records(self) -> Vec<ParsedRecord> {
        self.records
    }
}

/// The normalization pipeline bound to one numbering plan.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<P> {
    plan: P,
}

impl<P: NumberingPlan> Pipeline<P> {
    /// Build a pipeline over `plan`.
    pub fn new(plan: P) -> Self {
        Self { plan }
    }

    /// The numbering plan in use.
    pub fn plan(&self) -> &P {
        &self.plan
    }

    /// Run every stage over `text`.
    pub fn run(&self, text: &str, config: &PipelineConfig) -> PipelineOutput {
        let tokens = tokenize(text);
        let parsed = self.parse_tokens(&tokens, config);
        let parsed_count = parsed.len();

        let kept = if config.only_valid {
            filter_valid(parsed)
        } else {
            parsed
        };
        let kept_count = kept.len();

        let unique = dedup(kept);
        let unique_count = unique.len();

        let output = PipelineOutput::new(sort_records(unique, config.sort));

        tracing::debug!(
            default_country = %config.default_country,
            only_valid = config.only_valid,
            sort = %config.sort,
            tokens = parsed_count,
            filtered_out = parsed_count - kept_count,
            duplicates = kept_count - unique_count,
            records = output.total(),
            groups = output.groups().len(),
            "pipeline run complete"
        );
        output
    }

    /// Clean and validate each token, in token order.
    pub fn parse_tokens(&self, tokens: &[String], config: &PipelineConfig) -> Vec<ParsedRecord> {
        tokens
            .iter()
            .map(|raw| validate(&self.plan, raw, &clean(raw), &config.default_country))
            .collect()
    }
}

/// Keep only valid records that carry an E.164 form.
pub fn filter_valid(records: Vec<ParsedRecord>) -> Vec<ParsedRecord> {
    records.into_iter().filter(ParsedRecord::is_complete).collect()
}

/// Drop records whose [`DedupKey`] was already seen, keeping first occurrences in order.
pub fn dedup(records: Vec<ParsedRecord>) -> Vec<ParsedRecord> {
    let mut seen: HashSet<DedupKey> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.dedup_key()))
        .collect()
}

/// Stable sort on [`ParsedRecord::sort_digits`], compared lexicographically.
///
/// Equal keys keep their incoming order in both directions.
pub fn sort_records(records: Vec<ParsedRecord>, order: SortOrder) -> Vec<ParsedRecord> {
    let mut keyed: Vec<(String, ParsedRecord)> = records
        .into_iter()
        .map(|record| (record.sort_digits(), record))
        .collect();
    match order {
        SortOrder::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }
    keyed.into_iter().map(|(_, record)| record).collect()
}
