//! Handler for the `optimize` command.

use serde_json::{json, Map, Value};

use super::command::OptimizeArgs;
use super::output::{self, Mode};
use crate::adapter::outbound::fixture::JsonFileSource;
use crate::application::placement::{HotspotOptimizer, RuleOutcome};
use crate::domain::{AssetId, HotspotKey, ResultSet};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::source::ResultSetSource;

/// Execute `optimize`.
pub fn execute(args: &OptimizeArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(policy) = args.policy {
        config.optimizer.relationship.duplicate_policy = policy.into();
    }
    super::init_logging(&config);

    let mut results = JsonFileSource::new(&args.results).load()?;

    let optimizer = HotspotOptimizer::builder()
        .pinned(args.pins.iter().map(|id| AssetId::new(id.as_str())).collect())
        .relationship(config.optimizer.relationship.clone())
        .build();
    let outcomes = optimizer.optimize(&mut results);

    match output::mode() {
        Mode::Json => output::document(&json_report(&config, &results, &outcomes)),
        Mode::Quiet => {}
        Mode::Human => {
            output::banner();
            output::heading("Placement");
            output::pair("Assets", results.found().len());
            output::pair("Policy", config.optimizer.relationship.duplicate_policy);
            for outcome in &outcomes {
                output::summary(outcome);
            }
            for (key, hotspot) in results.hotspots() {
                output::hotspot(key, hotspot);
            }
        }
    }

    Ok(())
}

fn json_report(config: &Config, results: &ResultSet, outcomes: &[RuleOutcome]) -> Value {
    let mut hotspots = Map::new();
    for (key, hotspot) in results.hotspots() {
        let ids: Vec<&str> = hotspot.members().iter().map(|a| a.id().as_str()).collect();
        hotspots.insert(key.to_string(), json!(ids));
    }

    let rules: Vec<Value> = outcomes
        .iter()
        .map(|outcome| {
            let appended: Map<String, Value> = HotspotKey::ALL
                .iter()
                .map(|key| (key.to_string(), json!(outcome.summary.appended(*key))))
                .collect();
            json!({
                "rule": outcome.rule,
                "appended": appended,
                "showcase_owner": outcome.summary.showcase_owner().map(|v| v.id().as_str()),
                "showcase_preclaimed": outcome.summary.showcase_preclaimed(),
            })
        })
        .collect();

    json!({
        "command": "optimize",
        "policy": config.optimizer.relationship.duplicate_policy.as_str(),
        "found": results.found().len(),
        "hotspots": hotspots,
        "rules": rules,
    })
}
