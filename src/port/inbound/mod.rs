//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`rule`]: Hotspot placement rule interface

pub mod rule;
