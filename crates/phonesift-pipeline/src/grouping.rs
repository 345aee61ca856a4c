//! # Country Grouping
//!
//! Buckets an already sorted record sequence by resolved country. Records
//! without a country land in the [`UNKNOWN_REGION`] group. Group order is
//! the order in which each label is first seen; record order inside a group
//! is the input order.

use serde::ser::{Serialize, Serializer};

use phonesift_core::{ParsedRecord, UNKNOWN_REGION};

/// Records sharing one country label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryGroup {
    country: String,
    records: Vec<ParsedRecord>,
}

impl CountryGroup {
    /// Region code, or [`UNKNOWN_REGION`].
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Records in sorted order.
    pub fn records(&self) -> &[ParsedRecord] {
        &self.records
    }

    /// Whether this is the bucket for records without a resolved country.
    pub fn is_unknown(&self) -> bool {
        self.country == UNKNOWN_REGION
    }
}

/// Ordered mapping from country label to records.
///
/// Serializes as a JSON object whose keys appear in group order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryGroups {
    groups: Vec<CountryGroup>,
}

impl CountryGroups {
    /// Look up a group by label (`"GB"`, `"Unknown"`, ...).
    pub fn get(&self, country: &str) -> Option<&CountryGroup> {
        self.groups.iter().find(|g| g.country == country)
    }

    /// Groups in first-encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountryGroup> {
        self.groups.iter()
    }

    /// Group labels in first-encounter order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.country.as_str())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a CountryGroups {
    type Item = &'a CountryGroup;
    type IntoIter = std::slice::Iter<'a, CountryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for CountryGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter().map(|g| (&g.country, &g.records)))
    }
}

/// Group `records` by country label, preserving their order.
pub fn group_by_country(records: &[ParsedRecord]) -> CountryGroups {
    let mut groups: Vec<CountryGroup> = Vec::new();
    for record in records {
        let label = record.group_label();
        match groups.iter_mut().find(|g| g.country == label) {
            Some(group) => group.records.push(record.clone()),
            None => groups.push(CountryGroup {
                country: label.to_string(),
                records: vec![record.clone()],
            }),
        }
    }
    CountryGroups { groups }
}
