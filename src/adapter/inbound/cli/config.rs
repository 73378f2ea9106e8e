//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output::{self, Mode};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::mode() == Mode::Json {
        output::document(&json!({
            "command": "config.show",
            "source": source_label(path),
            "config": config,
        }));
        return Ok(());
    }

    let relationship = &config.optimizer.relationship;

    output::banner();
    output::heading("Effective Configuration");
    output::pair("Source", source_label(path));

    output::heading("Logging");
    output::pair("Level", &config.logging.level);
    output::pair("Format", &config.logging.format);

    output::heading("Relationship placement");
    output::pair("Threshold", relationship.showcase_threshold);
    output::pair("Capacity", relationship.showcase_capacity);
    output::pair("Duplicates", relationship.duplicate_policy);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    Config::load_or_default(path)?;

    output::document(&json!({
        "command": "config.validate",
        "source": source_label(path),
        "valid": true,
    }));
    output::confirm(&format!("Configuration is valid: {}", source_label(path)));
    Ok(())
}
