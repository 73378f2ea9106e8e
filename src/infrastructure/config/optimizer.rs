//! Placement pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::application::placement::RelationshipConfig;

/// Configuration for all placement rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Relationship-tier placement config.
    #[serde(default)]
    pub relationship: RelationshipConfig,
}
