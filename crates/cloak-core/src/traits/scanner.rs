//! Detection seam.

use crate::entity::EntityMatch;
use crate::errors::CloakResult;

/// A PII detector.
///
/// Scanners are constructed at startup and must be stateless across calls.
/// Spans are half-open `[start, end)` **character** offsets into `text`.
/// An `Err` from a scanner is absorbed by the registry: that scanner's
/// output is treated as empty for the call and the others still run.
pub trait Scanner: Send + Sync {
    /// Identifier used in logs and in `EntityMatch::source`.
    fn name(&self) -> &str;

    fn scan(&self, text: &str) -> CloakResult<Vec<EntityMatch>>;
}
