//! Application services (use cases).
//!
//! These services apply domain rules to result sets handed in by adapters.

pub mod placement;
