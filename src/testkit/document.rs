//! JSON result-set documents.
//!
//! [`DocumentBuilder`] writes the document shape read by
//! [`JsonFileSource`](crate::adapter::outbound::fixture::JsonFileSource).

use serde_json::{json, Value};

/// Incrementally assembles a result-set document.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    vendors: Vec<Value>,
    assets: Vec<Value>,
    showcase: Vec<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vendor with the given tier name (`partner`, `gold`, ...).
    pub fn vendor(mut self, id: &str, tier: &str) -> Self {
        self.vendors.push(json!({
            "id": id,
            "display_name": id.to_uppercase(),
            "tier": tier,
            "royalty_rate": "0.1",
        }));
        self
    }

    /// Append assets to the found stream, all supplied by `vendor`.
    pub fn assets(mut self, vendor: &str, ids: &[&str]) -> Self {
        for id in ids {
            self.assets.push(json!({
                "id": id,
                "title": format!("Title {id}"),
                "vendor": vendor,
            }));
        }
        self
    }

    /// Pre-place an asset in the showcase.
    pub fn showcase(mut self, id: &str) -> Self {
        self.showcase.push(id.to_string());
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "vendors": self.vendors,
            "assets": self.assets,
            "showcase": self.showcase,
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}
