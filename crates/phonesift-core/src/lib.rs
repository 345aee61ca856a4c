//! # phonesift-core — Foundational Types
//!
//! Value types shared by every phonesift crate. Nothing here talks to a
//! numbering plan or touches the pipeline; this crate is the leaf of the
//! workspace DAG.
//!
//! ## Key Design Principles
//!
//! 1. **Validated region codes.** [`RegionCode`] is always two uppercase
//!    ASCII letters. User input is normalized at construction, so the
//!    pipeline never sees `"np"` or `" US"`.
//!
//! 2. **Records cannot be half-valid.** [`ParsedRecord`] is built through
//!    [`ParsedRecord::valid`] or [`ParsedRecord::invalid`]; an invalid record
//!    has no canonical fields, and empty canonical strings are stored as
//!    `None`.
//!
//! 3. **Explicit configuration.** [`PipelineConfig`] is passed into every
//!    run. There is no ambient state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `phonesift-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod record;
pub mod region;

// Re-export primary types for ergonomic imports.
pub use config::{ConfigFile, PipelineConfig, SortOrder};
pub use error::{ConfigError, PhonesiftError, ValidationError};
pub use record::{CanonicalForms, DedupKey, ParsedRecord};
pub use region::{RegionCode, UNKNOWN_REGION};
