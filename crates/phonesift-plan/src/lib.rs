//! # phonesift-plan — Numbering-Plan Authorities
//!
//! Trait-based abstraction over the "numbering-plan authority": the
//! component that knows per-country dialing rules, length constraints and
//! formatting templates. The pipeline depends only on [`NumberingPlan`].
//!
//! ## Implementations
//!
//! - [`LibPhonenumberPlan`]: libphonenumber metadata via the `phonenumber`
//!   crate. The production authority.
//! - [`TablePlan`] (feature `mock`, on by default): a deterministic
//!   table-driven plan for tests and for environments that need stable
//!   answers regardless of metadata releases.

pub mod libphonenumber;
#[cfg(feature = "mock")]
pub mod mock;
pub mod traits;

pub use libphonenumber::LibPhonenumberPlan;
#[cfg(feature = "mock")]
pub use mock::{RegionRule, TableNumber, TablePlan};
pub use traits::{NumberFormat, NumberingPlan, PlanError};
