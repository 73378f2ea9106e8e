//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!     ┌─────────────┐      ┌─────────────────────────┐      ┌─────────────┐
//!     │     CLI     │ ───▶ │      Application        │ ───▶ │  Result-set │
//!     │   Adapter   │      │  (placement pipeline)   │      │   source    │
//!     └─────────────┘      └─────────────────────────┘      └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`inbound::rule::HotspotRule`] - A placement stage run over a result set
//! - [`outbound::source::ResultSetSource`] - Supplies the ordered result set

pub mod inbound;
pub mod outbound;
