//! Result-set source port.

use crate::domain::ResultSet;
use crate::error::Result;

/// Supplies an ordered result set for placement.
///
/// Implementations validate their input and return a fully-formed
/// [`ResultSet`]; a source never hands out a partially built one.
pub trait ResultSetSource {
    /// Produce the result set.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or violates a
    /// domain precondition.
    fn load(&self) -> Result<ResultSet>;
}
