//! Hotspot placement rules.
//!
//! Provides concrete rules implementing the
//! [`HotspotRule`](crate::port::inbound::rule::HotspotRule) trait:
//!
//! - [`relationship`]: Tier- and order-driven placement (Showcase, TopPicks,
//!   Fold, HighValue)
//! - [`pinned`]: Editorial showcase pinning, run ahead of relationship placement
//!
//! Use [`registry::HotspotOptimizer`] to run several rules in sequence.

pub mod accumulator;
pub mod pinned;
pub mod registry;
pub mod relationship;

pub use accumulator::{PartnerAccumulator, VendorBlock};
pub use pinned::PinnedShowcaseRule;
pub use registry::{HotspotOptimizer, HotspotOptimizerBuilder, RuleOutcome};
pub use relationship::{DuplicatePolicy, RelationshipConfig, RelationshipOptimizer};
