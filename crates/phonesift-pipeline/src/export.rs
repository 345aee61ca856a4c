//! # Export Adapters
//!
//! Text payloads built from pipeline output:
//!
//! - [`to_csv`]: header plus one row per record with the columns
//!   `E164, International, National, Country`, every cell double-quoted,
//!   rows joined with `\n`. Absent fields become empty cells.
//! - [`e164_list`]: newline-joined E.164 strings for any selection of
//!   records, skipping records without one. This is the clipboard payload.

use thiserror::Error;

use phonesift_core::ParsedRecord;

use crate::grouping::CountryGroups;

/// CSV column headers, in output order.
pub const CSV_HEADER: [&str; 4] = ["E164", "International", "National", "Country"];

/// Errors while rendering an export payload.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The CSV writer rejected a row.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not flush its buffer.
    #[error("csv flush failed: {0}")]
    Flush(String),

    /// Output was not valid UTF-8.
    #[error("csv output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render records as quoted CSV with a header row.
pub fn to_csv<'a, I>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a ParsedRecord>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    let mut rows = 0usize;
    for record in records {
        writer.write_record([
            record.e164().unwrap_or(""),
            record.international().unwrap_or(""),
            record.national().unwrap_or(""),
            record.country().map(|c| c.as_str()).unwrap_or(""),
        ])?;
        rows += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    tracing::debug!(rows, "rendered csv export");
    Ok(text)
}

/// Newline-joined E.164 strings of the given records.
pub fn e164_list<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ParsedRecord>,
{
    records
        .into_iter()
        .filter_map(ParsedRecord::e164)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Newline-joined E.164 strings of one country group, if the group exists.
pub fn group_e164_list(groups: &CountryGroups, country: &str) -> Option<String> {
    groups.get(country).map(|g| e164_list(g.records()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_by_country;
    use phonesift_core::{CanonicalForms, RegionCode};

    fn gb() -> ParsedRecord {
        ParsedRecord::valid(
            "020 7183 8750",
            "02071838750",
            CanonicalForms {
                e164: Some("+442071838750".to_string()),
                international: Some("+44 20 7183 8750".to_string()),
                national: Some("020 7183 8750".to_string()),
                country: Some(RegionCode::new("GB").unwrap()),
            },
        )
    }

    #[test]
    fn csv_quotes_every_cell() {
        let csv = to_csv(&[gb()]).unwrap();
        assert_eq!(
            csv,
            "\"E164\",\"International\",\"National\",\"Country\"\n\
             \"+442071838750\",\"+44 20 7183 8750\",\"020 7183 8750\",\"GB\""
        );
    }

    #[test]
    fn csv_leaves_absent_fields_empty() {
        let csv = to_csv(&[ParsedRecord::invalid("12", "12")]).unwrap();
        let last = csv.lines().last().unwrap();
        assert_eq!(last, "\"\",\"\",\"\",\"\"");
    }

    #[test]
    fn csv_of_nothing_is_header_only() {
        let csv = to_csv(std::iter::empty()).unwrap();
        assert_eq!(csv, "\"E164\",\"International\",\"National\",\"Country\"");
    }

    #[test]
    fn e164_list_skips_records_without_e164() {
        let records = vec![gb(), ParsedRecord::invalid("1", "1"), gb()];
        assert_eq!(e164_list(&records), "+442071838750\n+442071838750");
        assert_eq!(e164_list(&records[1..2]), "");
    }

    #[test]
    fn group_list_by_country() {
        let records = vec![gb(), ParsedRecord::invalid("1", "1")];
        let groups = group_by_country(&records);
        assert_eq!(group_e164_list(&groups, "GB").as_deref(), Some("+442071838750"));
        assert_eq!(group_e164_list(&groups, "Unknown").as_deref(), Some(""));
        assert_eq!(group_e164_list(&groups, "US"), None);
    }
}
