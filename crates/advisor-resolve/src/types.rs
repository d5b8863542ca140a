//! Resolver types.

use advisor_catalog::PhoneRecord;
use serde::Serialize;

/// A catalog record the resolver believes the question refers to.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedMatch {
    pub record: PhoneRecord,
    /// Combined similarity in [0, 1]; 1.0 for an exact mention.
    pub confidence: f64,
    /// Token offset of the best-scoring window in the question. Preserves
    /// the user's left-to-right ordering for comparison rendering.
    pub position: usize,
}
