//! Hotspots - relationship-driven placement of search results.
//!
//! Given a result set of assets, each supplied by a vendor with a
//! relationship tier, the crate decides which page hotspots (Showcase,
//! Top Picks, Fold, High Value) each asset is placed into.
//!
//! # Architecture
//!
//! - [`domain`] - Assets, vendors, hotspots and result sets
//! - [`port`] - The `HotspotRule` and `ResultSetSource` seams
//! - [`application`] - Placement rules and the rule registry
//! - [`adapter`] - JSON result-set documents and the `hotspots` CLI
//! - [`infrastructure`] - TOML configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use hotspots::application::placement::{RelationshipConfig, RelationshipOptimizer};
//! use hotspots::domain::{Asset, HotspotKey, RelationshipTier, ResultSet, Vendor};
//! use rust_decimal::Decimal;
//!
//! let partner = Arc::new(Vendor::new("acme", "Acme", RelationshipTier::Partner, Decimal::ZERO));
//! let mut results = ResultSet::new();
//! for id in ["a1", "a2", "a3"] {
//!     results.add_found(Arc::new(Asset::new(id, "", Arc::clone(&partner))));
//! }
//!
//! RelationshipOptimizer::new(RelationshipConfig::default()).optimize(&mut results);
//! assert_eq!(results.hotspot(HotspotKey::Showcase).len(), 3);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
