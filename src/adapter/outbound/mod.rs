//! Outbound adapters (driven side).

pub mod fixture;
