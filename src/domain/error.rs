//! Domain validation errors.
//!
//! These errors are returned when a result set or one of its entities would
//! violate a domain precondition. They are raised while building the input,
//! never during classification itself.
//!
//! # Examples
//!
//! ```
//! use hotspots::domain::error::DomainError;
//! use hotspots::domain::{RelationshipTier, Vendor};
//! use rust_decimal_macros::dec;
//!
//! let result = Vendor::try_new("acme", "Acme", RelationshipTier::Gold, dec!(1.5));
//! assert!(matches!(result, Err(DomainError::InvalidRoyaltyRate { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A builder was finished without a required field.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// Identifiers must not be blank.
    #[error("{entity} id cannot be empty")]
    EmptyId {
        /// Kind of entity carrying the blank id.
        entity: &'static str,
    },

    /// Royalty rates are fractions of the sale price.
    #[error("royalty rate must be between 0 and 1, got {rate}")]
    InvalidRoyaltyRate {
        /// The rate that was provided.
        rate: rust_decimal::Decimal,
    },

    /// An asset references a vendor that was never declared.
    #[error("asset '{asset}' references unknown vendor '{vendor}'")]
    UnknownVendor {
        /// The referencing asset.
        asset: String,
        /// The missing vendor id.
        vendor: String,
    },

    /// Several vendors share the id an asset refers to.
    #[error("vendor id '{vendor}' is declared {count} times; asset '{asset}' cannot refer to it")]
    AmbiguousVendor {
        /// The referencing asset.
        asset: String,
        /// The shared vendor id.
        vendor: String,
        /// How many declarations share the id.
        count: usize,
    },

    /// A pre-placement refers to an asset that is not in the result set.
    #[error("unknown asset '{asset}'")]
    UnknownAsset {
        /// The missing asset id.
        asset: String,
    },
}
