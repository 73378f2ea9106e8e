//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Vendor`], [`Asset`] and
//! [`ResultSet`] so tests focus on placement assertions rather than
//! construction boilerplate.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{Asset, Hotspot, RelationshipTier, ResultSet, Vendor};

/// Create a vendor with a fresh identity and a zero royalty rate.
pub fn vendor(id: &str, tier: RelationshipTier) -> Arc<Vendor> {
    Arc::new(Vendor::new(id, id, tier, Decimal::ZERO))
}

pub fn partner(id: &str) -> Arc<Vendor> {
    vendor(id, RelationshipTier::Partner)
}

pub fn gold(id: &str) -> Arc<Vendor> {
    vendor(id, RelationshipTier::Gold)
}

pub fn silver(id: &str) -> Arc<Vendor> {
    vendor(id, RelationshipTier::Silver)
}

pub fn basic(id: &str) -> Arc<Vendor> {
    vendor(id, RelationshipTier::Basic)
}

/// Create an asset supplied by `vendor`.
pub fn asset(id: &str, vendor: &Arc<Vendor>) -> Arc<Asset> {
    Arc::new(Asset::new(id, id, Arc::clone(vendor)))
}

/// Build a result set whose found stream is `assets`, in order.
pub fn result_set(assets: &[Arc<Asset>]) -> ResultSet {
    ResultSet::from_found(assets.iter().cloned())
}

/// Catalog ids of a hotspot's members, in order.
pub fn member_ids(hotspot: &Hotspot) -> Vec<String> {
    hotspot
        .members()
        .iter()
        .map(|a| a.id().to_string())
        .collect()
}

/// Whether two member lists hold the same asset identities in order.
pub fn same_members(hotspot: &Hotspot, expected: &[Arc<Asset>]) -> bool {
    hotspot.len() == expected.len()
        && hotspot
            .members()
            .iter()
            .zip(expected)
            .all(|(a, b)| a.key() == b.key())
}
