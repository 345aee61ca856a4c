//! # phonesift-pipeline — Phone Number Normalization
//!
//! Turns pasted text or flattened file contents into a deduplicated,
//! validated, sorted, country-grouped list of phone numbers.
//!
//! ```text
//! raw text ─► tokenize ─► clean ─► validate ─► filter ─► dedup ─► sort ─► group
//! ```
//!
//! Each stage returns a new collection. The numbering plan is the only
//! collaborator, reached through [`phonesift_plan::NumberingPlan`].
//!
//! ## Example
//!
//! ```
//! use phonesift_core::{PipelineConfig, RegionCode};
//! use phonesift_pipeline::Pipeline;
//! use phonesift_plan::TablePlan;
//!
//! let pipeline = Pipeline::new(TablePlan::standard());
//! let config = PipelineConfig::for_country(RegionCode::new("GB").unwrap());
//! let output = pipeline.run("020 7183 8750, +44 20 7183 8750", &config);
//! assert_eq!(output.total(), 1);
//! ```

pub mod cleaner;
pub mod export;
pub mod grouping;
pub mod orchestrator;
pub mod tokenizer;
pub mod validator;

pub use cleaner::clean;
pub use export::{e164_list, group_e164_list, to_csv, ExportError, CSV_HEADER};
pub use grouping::{group_by_country, CountryGroup, CountryGroups};
pub use orchestrator::{dedup, filter_valid, sort_records, Pipeline, PipelineOutput};
pub use tokenizer::tokenize;
pub use validator::validate;
