//! Placement rule port.
//!
//! A [`HotspotRule`] is one stage of hotspot placement. Stages run in
//! sequence over the same [`ResultSet`]; a later stage sees whatever the
//! earlier ones placed (for example, a showcase pinned by an editorial stage
//! is respected by the relationship stage).
//!
//! # Example
//!
//! ```
//! use hotspots::domain::{HotspotKey, PlacementSummary, ResultSet};
//! use hotspots::port::inbound::rule::HotspotRule;
//!
//! struct FirstIntoFold;
//!
//! impl HotspotRule for FirstIntoFold {
//!     fn name(&self) -> &'static str { "first_into_fold" }
//!
//!     fn apply(&self, results: &mut ResultSet) -> PlacementSummary {
//!         let mut summary = PlacementSummary::new();
//!         if let Some(first) = results.found().first().cloned() {
//!             results.hotspot_mut(HotspotKey::Fold).add_member(first);
//!             summary.record(HotspotKey::Fold, 1);
//!         }
//!         summary
//!     }
//! }
//! ```

use crate::domain::{PlacementSummary, ResultSet};

/// A placement stage that mutates a result set's hotspots in place.
///
/// Rules never reorder the found stream and never fail: input validation
/// happens before a result set is handed to any rule.
pub trait HotspotRule: Send + Sync {
    /// Unique identifier for this rule.
    ///
    /// Used in configuration and logging.
    fn name(&self) -> &'static str;

    /// Run one pass over `results`.
    fn apply(&self, results: &mut ResultSet) -> PlacementSummary;
}
