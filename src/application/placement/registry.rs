use tracing::debug;

use super::pinned::PinnedShowcaseRule;
use super::relationship::{RelationshipConfig, RelationshipOptimizer};
use crate::domain::{AssetId, PlacementSummary, ResultSet};
use crate::port::inbound::rule::HotspotRule;

/// Summary of one rule's pass, tagged with the rule name.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub summary: PlacementSummary,
}

/// Ordered pipeline of placement rules.
///
/// Rules run in registration order over the same result set.
///
/// Use [`HotspotOptimizerBuilder`] for convenient construction from config.
#[derive(Default)]
pub struct HotspotOptimizer {
    rules: Vec<Box<dyn HotspotRule>>,
}

impl HotspotOptimizer {
    /// Create a new empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a pipeline from config.
    #[must_use]
    pub fn builder() -> HotspotOptimizerBuilder {
        HotspotOptimizerBuilder::new()
    }

    /// Register a rule.
    ///
    /// Rules are run in registration order.
    pub fn register(&mut self, rule: Box<dyn HotspotRule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn HotspotRule>] {
        &self.rules
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the pipeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `results`, in order.
    pub fn optimize(&self, results: &mut ResultSet) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| {
                let summary = rule.apply(results);
                debug!(rule = rule.name(), appended = summary.total(), "Rule applied");
                RuleOutcome {
                    rule: rule.name(),
                    summary,
                }
            })
            .collect()
    }
}

/// Builder for constructing a [`HotspotOptimizer`].
///
/// The pinned showcase stage, when present, always runs before relationship
/// placement.
///
/// # Example
///
/// ```
/// use hotspots::application::placement::{HotspotOptimizer, RelationshipConfig};
///
/// let optimizer = HotspotOptimizer::builder()
///     .pinned(vec!["hero-1".into()])
///     .relationship(RelationshipConfig::default())
///     .build();
/// assert_eq!(optimizer.len(), 2);
/// ```
#[derive(Default)]
pub struct HotspotOptimizerBuilder {
    pinned: Vec<AssetId>,
    relationship: Option<RelationshipConfig>,
}

impl HotspotOptimizerBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin these assets into the showcase ahead of relationship placement.
    #[must_use]
    pub fn pinned(mut self, ids: Vec<AssetId>) -> Self {
        self.pinned = ids;
        self
    }

    /// Enable relationship placement with config.
    #[must_use]
    pub fn relationship(mut self, config: RelationshipConfig) -> Self {
        self.relationship = Some(config);
        self
    }

    /// Build the pipeline.
    #[must_use]
    pub fn build(self) -> HotspotOptimizer {
        let mut optimizer = HotspotOptimizer::new();
        if !self.pinned.is_empty() {
            optimizer.register(Box::new(PinnedShowcaseRule::new(self.pinned)));
        }
        if let Some(config) = self.relationship {
            optimizer.register(Box::new(RelationshipOptimizer::new(config)));
        }
        optimizer
    }
}
