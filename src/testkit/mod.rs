//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for vendors, assets and result sets.
//! - [`document`] - JSON result-set documents for CLI and adapter tests.

pub mod document;
pub mod domain;
