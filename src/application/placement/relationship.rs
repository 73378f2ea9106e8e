//! Relationship-tier hotspot placement.
//!
//! Walks the found stream once and places assets according to their
//! vendor's relationship tier:
//!
//! 1. A Partner vendor whose asset count reaches `showcase_threshold` claims
//!    the showcase candidate. A later vendor reaching the threshold takes the
//!    candidate over wholesale.
//! 2. Once the candidate holds `showcase_capacity` assets, Partner assets of
//!    other vendors go to TopPicks.
//! 3. After the pass the candidate is committed to Showcase, unless an
//!    earlier stage already filled it.
//! 4. Gold assets go to HighValue only when no Partner asset was seen.
//! 5. Every Partner, Gold and Silver asset lands in Fold: Partner blocks by
//!    first appearance of their vendor, then Gold, then Silver.
//!
//! Tier and order are the only inputs. The pass never fails and never
//! reorders the stream.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::accumulator::PartnerAccumulator;
use crate::domain::{
    Asset, Hotspot, HotspotKey, PlacementSummary, RelationshipTier, ResultSet, Vendor,
};
use crate::port::inbound::rule::HotspotRule;

/// How the showcase candidate is rebuilt when a vendor crosses the threshold.
///
/// The historical placement copied the crossing vendor's accumulated assets
/// into the candidate and then appended the crossing asset a second time.
/// The duplicate disappears on the vendor's next crossing and survives
/// otherwise; the copy was also never bounded by capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Reproduce the historical placement exactly, duplicate included.
    Compatible,
    /// The crossing copy is authoritative and capped at capacity; the
    /// crossing asset is not appended again.
    #[default]
    Corrected,
}

impl DuplicatePolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::Corrected => "corrected",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for relationship-tier placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipConfig {
    /// Partner assets a vendor needs to claim the showcase.
    #[serde(default = "default_showcase_threshold")]
    pub showcase_threshold: usize,

    /// Maximum showcase size before competing Partner assets spill into
    /// TopPicks.
    #[serde(default = "default_showcase_capacity")]
    pub showcase_capacity: usize,

    /// Handling of the threshold-crossing duplicate.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

const fn default_showcase_threshold() -> usize {
    3
}

const fn default_showcase_capacity() -> usize {
    5
}

impl Default for RelationshipConfig {
    fn default() -> Self {
        Self {
            showcase_threshold: default_showcase_threshold(),
            showcase_capacity: default_showcase_capacity(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

/// Relationship-tier placement rule.
#[derive(Debug, Clone, Default)]
pub struct RelationshipOptimizer {
    config: RelationshipConfig,
}

impl RelationshipOptimizer {
    /// Create a new optimizer with the given configuration.
    #[must_use]
    pub const fn new(config: RelationshipConfig) -> Self {
        Self { config }
    }

    /// Get the optimizer configuration.
    #[must_use]
    pub const fn config(&self) -> &RelationshipConfig {
        &self.config
    }

    /// Run one placement pass over `results`, mutating its hotspots.
    pub fn optimize(&self, results: &mut ResultSet) -> PlacementSummary {
        // Captured once; a claim made by an earlier stage is respected.
        let showcase_preclaimed = !results.hotspot(HotspotKey::Showcase).is_empty();

        let mut pass = Pass::new(&self.config);
        for asset in results.found() {
            pass.observe(asset);
        }

        let summary = pass.commit(results, showcase_preclaimed);
        info!(
            showcase = summary.appended(HotspotKey::Showcase),
            top_picks = summary.appended(HotspotKey::TopPicks),
            fold = summary.appended(HotspotKey::Fold),
            high_value = summary.appended(HotspotKey::HighValue),
            preclaimed = showcase_preclaimed,
            owner = summary.showcase_owner().map(|v| v.id().as_str()),
            "Relationship placement complete"
        );
        summary
    }
}

impl HotspotRule for RelationshipOptimizer {
    fn name(&self) -> &'static str {
        "relationship"
    }

    fn apply(&self, results: &mut ResultSet) -> PlacementSummary {
        self.optimize(results)
    }
}

/// State threaded through a single forward pass.
struct Pass<'a> {
    config: &'a RelationshipConfig,
    candidate: Hotspot,
    partners: PartnerAccumulator,
    gold: Vec<Arc<Asset>>,
    silver: Vec<Arc<Asset>>,
    top_picks: Vec<Arc<Asset>>,
}

impl<'a> Pass<'a> {
    fn new(config: &'a RelationshipConfig) -> Self {
        Self {
            config,
            candidate: Hotspot::new(),
            partners: PartnerAccumulator::new(),
            gold: Vec::new(),
            silver: Vec::new(),
            top_picks: Vec::new(),
        }
    }

    fn candidate_owned_by(&self, vendor: &Vendor) -> bool {
        self.candidate
            .first()
            .is_some_and(|first| first.vendor().key() == vendor.key())
    }

    fn observe(&mut self, asset: &Arc<Asset>) {
        match asset.tier() {
            RelationshipTier::Gold => self.gold.push(Arc::clone(asset)),
            RelationshipTier::Silver => self.silver.push(Arc::clone(asset)),
            RelationshipTier::Partner => self.observe_partner(asset),
            RelationshipTier::Basic => {}
        }
    }

    fn observe_partner(&mut self, asset: &Arc<Asset>) {
        let policy = self.config.duplicate_policy;
        let capacity = self.config.showcase_capacity;

        let block = self.partners.push(Arc::clone(asset));
        let crossed = block.len() >= self.config.showcase_threshold;
        if crossed {
            match policy {
                DuplicatePolicy::Compatible => {
                    self.candidate.replace_members(block.iter().cloned());
                }
                DuplicatePolicy::Corrected => {
                    self.candidate
                        .replace_members(block.iter().take(capacity).cloned());
                }
            }
            debug!(
                vendor = %asset.vendor().id(),
                asset = %asset.id(),
                accumulated = block.len(),
                "Partner reached showcase threshold"
            );
            if policy == DuplicatePolicy::Corrected {
                return;
            }
        }

        let vendor = asset.vendor();
        if self.candidate.len() >= capacity {
            if !self.candidate_owned_by(vendor) {
                debug!(
                    vendor = %vendor.id(),
                    asset = %asset.id(),
                    "Showcase full, routing to top picks"
                );
                self.top_picks.push(Arc::clone(asset));
            }
        } else if self.candidate.is_empty() || self.candidate_owned_by(vendor) {
            self.candidate.add_member(Arc::clone(asset));
        }
    }

    fn commit(self, results: &mut ResultSet, showcase_preclaimed: bool) -> PlacementSummary {
        let mut summary = PlacementSummary::new();
        summary.set_showcase_preclaimed(showcase_preclaimed);

        if !showcase_preclaimed && self.candidate.len() >= self.config.showcase_threshold {
            if let Some(first) = self.candidate.first() {
                summary.set_showcase_owner(Arc::clone(first.vendor()));
            }
            summary.record(HotspotKey::Showcase, self.candidate.len());
            results
                .hotspot_mut(HotspotKey::Showcase)
                .extend(self.candidate.members().iter().cloned());
        }

        summary.record(HotspotKey::TopPicks, self.top_picks.len());
        results
            .hotspot_mut(HotspotKey::TopPicks)
            .extend(self.top_picks);

        if self.partners.is_empty() {
            summary.record(HotspotKey::HighValue, self.gold.len());
            results
                .hotspot_mut(HotspotKey::HighValue)
                .extend(self.gold.iter().cloned());
        }

        let fold = results.hotspot_mut(HotspotKey::Fold);
        let before = fold.len();
        for block in self.partners.iter() {
            fold.extend(block.assets().iter().cloned());
        }
        fold.extend(self.gold);
        fold.extend(self.silver);
        summary.record(HotspotKey::Fold, fold.len() - before);

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn vendor(tier: RelationshipTier) -> Arc<Vendor> {
        Arc::new(Vendor::new("v", "Vendor", tier, dec!(0.1)))
    }

    fn push(results: &mut ResultSet, vendor: &Arc<Vendor>, n: usize) -> Vec<Arc<Asset>> {
        (0..n)
            .map(|i| {
                let asset = Arc::new(Asset::new(format!("a{i}"), "t", Arc::clone(vendor)));
                results.add_found(Arc::clone(&asset));
                asset
            })
            .collect()
    }

    fn compatible() -> RelationshipOptimizer {
        RelationshipOptimizer::new(RelationshipConfig {
            duplicate_policy: DuplicatePolicy::Compatible,
            ..Default::default()
        })
    }

    #[test]
    fn defaults_match_business_rules() {
        let config = RelationshipConfig::default();
        assert_eq!(config.showcase_threshold, 3);
        assert_eq!(config.showcase_capacity, 5);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Corrected);
    }

    #[test]
    fn compatible_keeps_crossing_duplicate_when_no_later_crossing() {
        let mut results = ResultSet::new();
        let v = vendor(RelationshipTier::Partner);
        let w = vendor(RelationshipTier::Partner);
        let a1 = push(&mut results, &v, 1);
        push(&mut results, &w, 1);
        let rest = push(&mut results, &v, 3);

        compatible().optimize(&mut results);

        // v crosses on rest[1] and again on rest[2]; the last crossing
        // leaves rest[2] appended twice.
        let showcase = results.hotspot(HotspotKey::Showcase);
        assert_eq!(showcase.len(), 5);
        assert_eq!(showcase.members()[0].key(), a1[0].key());
        assert_eq!(showcase.occurrences(&rest[2]), 2);
    }

    #[test]
    fn compatible_copy_is_not_capped() {
        let mut results = ResultSet::new();
        let v = vendor(RelationshipTier::Partner);
        let assets = push(&mut results, &v, 6);

        compatible().optimize(&mut results);

        let keys: Vec<_> = results
            .hotspot(HotspotKey::Showcase)
            .members()
            .iter()
            .map(|a| a.key())
            .collect();
        let expected: Vec<_> = assets.iter().map(|a| a.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn corrected_never_duplicates_in_showcase() {
        let mut results = ResultSet::new();
        let v = vendor(RelationshipTier::Partner);
        let w = vendor(RelationshipTier::Partner);
        push(&mut results, &v, 1);
        push(&mut results, &w, 1);
        let rest = push(&mut results, &v, 3);

        RelationshipOptimizer::default().optimize(&mut results);

        let showcase = results.hotspot(HotspotKey::Showcase);
        assert_eq!(showcase.len(), 4);
        assert!(rest.iter().all(|a| showcase.occurrences(a) == 1));
    }

    #[test]
    fn custom_threshold_and_capacity() {
        let mut results = ResultSet::new();
        let v = vendor(RelationshipTier::Partner);
        let w = vendor(RelationshipTier::Partner);
        push(&mut results, &v, 2);
        let spill = push(&mut results, &w, 1);

        let optimizer = RelationshipOptimizer::new(RelationshipConfig {
            showcase_threshold: 2,
            showcase_capacity: 2,
            duplicate_policy: DuplicatePolicy::Corrected,
        });
        optimizer.optimize(&mut results);

        assert_eq!(results.hotspot(HotspotKey::Showcase).len(), 2);
        assert!(results.hotspot(HotspotKey::TopPicks).contains(&spill[0]));
    }

    #[test]
    fn summary_reports_owner_and_counts() {
        let mut results = ResultSet::new();
        let v = vendor(RelationshipTier::Partner);
        let g = vendor(RelationshipTier::Gold);
        push(&mut results, &v, 3);
        push(&mut results, &g, 2);

        let summary = RelationshipOptimizer::default().optimize(&mut results);

        assert_eq!(summary.showcase_owner().map(|o| o.key()), Some(v.key()));
        assert_eq!(summary.appended(HotspotKey::Showcase), 3);
        assert_eq!(summary.appended(HotspotKey::Fold), 5);
        assert_eq!(summary.appended(HotspotKey::HighValue), 0);
        assert!(!summary.showcase_preclaimed());
    }

    #[test]
    fn rule_name() {
        assert_eq!(RelationshipOptimizer::default().name(), "relationship");
    }

    #[test]
    fn policy_parses_lowercase() {
        let policy: DuplicatePolicy = serde_json::from_str("\"compatible\"").unwrap();
        assert_eq!(policy, DuplicatePolicy::Compatible);
        assert_eq!(DuplicatePolicy::Corrected.to_string(), "corrected");
    }
}
