//! Infrastructure configuration modules.

pub mod logging;
pub mod optimizer;
pub mod settings;
