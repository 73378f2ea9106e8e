//! Per-vendor running accumulation of Partner assets.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Asset, Vendor, VendorKey};

/// One vendor's assets, in stream order.
#[derive(Debug, Clone)]
pub struct VendorBlock {
    vendor: Arc<Vendor>,
    assets: Vec<Arc<Asset>>,
}

impl VendorBlock {
    #[must_use]
    pub fn vendor(&self) -> &Arc<Vendor> {
        &self.vendor
    }

    #[must_use]
    pub fn assets(&self) -> &[Arc<Asset>] {
        &self.assets
    }
}

/// Vendor → assets map that remembers first-appearance order of vendors.
///
/// Vendors are keyed by [`VendorKey`], so identically-described vendors stay
/// separate. Iteration yields blocks in the order each vendor was first seen.
#[derive(Debug, Clone, Default)]
pub struct PartnerAccumulator {
    index: HashMap<VendorKey, usize>,
    blocks: Vec<VendorBlock>,
}

impl PartnerAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `asset` to its vendor's block and return the updated block.
    pub fn push(&mut self, asset: Arc<Asset>) -> &[Arc<Asset>] {
        let key = asset.vendor().key();
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.blocks.push(VendorBlock {
                    vendor: Arc::clone(asset.vendor()),
                    assets: Vec::new(),
                });
                let slot = self.blocks.len() - 1;
                self.index.insert(key, slot);
                slot
            }
        };

        let block = &mut self.blocks[slot];
        block.assets.push(asset);
        &block.assets
    }

    /// Assets accumulated so far for `vendor`.
    #[must_use]
    pub fn get(&self, vendor: &Vendor) -> Option<&[Arc<Asset>]> {
        self.index
            .get(&vendor.key())
            .map(|&slot| self.blocks[slot].assets.as_slice())
    }

    /// Number of distinct vendors seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Vendor blocks in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &VendorBlock> {
        self.blocks.iter()
    }
}
