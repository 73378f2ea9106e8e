//! JSON result-set documents.
//!
//! Reads a [`ResultSetDocument`] and turns it into a validated
//! [`ResultSet`]. All precondition checks happen here, before any placement
//! rule sees the data:
//!
//! - every asset must reference a declared vendor id
//! - that vendor id must be declared exactly once
//! - royalty rates must lie in `[0, 1]`
//! - pre-placed showcase ids must name found assets

pub mod dto;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

pub use dto::{AssetDto, ResultSetDocument, VendorDto};

use crate::domain::error::DomainError;
use crate::domain::{Asset, AssetId, HotspotKey, ResultSet, Vendor};
use crate::error::Result;
use crate::port::outbound::source::ResultSetSource;

impl ResultSetDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate the document and build the result set it describes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` for the first violated precondition.
    pub fn into_result_set(self) -> std::result::Result<ResultSet, DomainError> {
        let mut vendors: HashMap<String, Vec<Arc<Vendor>>> = HashMap::new();
        for dto in self.vendors {
            let vendor = Vendor::try_new(
                dto.id.clone(),
                dto.display_name,
                dto.tier,
                dto.royalty_rate,
            )?;
            vendors.entry(dto.id).or_default().push(Arc::new(vendor));
        }

        let mut results = ResultSet::new();
        for dto in self.assets {
            let vendor = resolve_vendor(&vendors, &dto)?;
            let mut builder = Asset::builder()
                .id(dto.id)
                .title(dto.title)
                .topics(dto.topics)
                .purchase_info(dto.purchase_info)
                .vendor(vendor);
            if let Some(url) = dto.url {
                builder = builder.url(url);
            }
            if let Some(thumbnail_url) = dto.thumbnail_url {
                builder = builder.thumbnail_url(thumbnail_url);
            }
            results.add_found(Arc::new(builder.build()?));
        }

        for id in self.showcase {
            let asset = results
                .find(&AssetId::new(id.as_str()))
                .cloned()
                .ok_or(DomainError::UnknownAsset { asset: id })?;
            results.hotspot_mut(HotspotKey::Showcase).add_member(asset);
        }

        debug!(
            vendors = vendors.values().map(Vec::len).sum::<usize>(),
            assets = results.found().len(),
            preplaced = results.hotspot(HotspotKey::Showcase).len(),
            "Result set loaded"
        );
        Ok(results)
    }
}

fn resolve_vendor(
    vendors: &HashMap<String, Vec<Arc<Vendor>>>,
    asset: &AssetDto,
) -> std::result::Result<Arc<Vendor>, DomainError> {
    match vendors.get(&asset.vendor).map(Vec::as_slice) {
        Some([vendor]) => Ok(Arc::clone(vendor)),
        Some(many) if many.len() > 1 => Err(DomainError::AmbiguousVendor {
            asset: asset.id.clone(),
            vendor: asset.vendor.clone(),
            count: many.len(),
        }),
        _ => Err(DomainError::UnknownVendor {
            asset: asset.id.clone(),
            vendor: asset.vendor.clone(),
        }),
    }
}

/// Result-set source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultSetSource for JsonFileSource {
    fn load(&self) -> Result<ResultSet> {
        let content = std::fs::read_to_string(&self.path)?;
        let document = ResultSetDocument::from_json(&content)?;
        Ok(document.into_result_set()?)
    }
}
