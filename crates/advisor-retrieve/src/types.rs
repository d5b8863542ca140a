//! Retrieval result types — the sole contract between retrieval and
//! rendering.

use advisor_catalog::PhoneRecord;
use serde::Serialize;

/// A ranked recommendation entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPhone {
    pub record: PhoneRecord,
    pub score: f64,
    /// Why this phone made the list, for the rendered answer.
    pub rationale: String,
}

/// Typed outcome of retrieval. An empty `RankedList` is a valid,
/// renderable state ("nothing satisfied your constraints") distinct from
/// `NotFound` ("nothing resolvable in the question").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ResolvedResult {
    SingleSpec(PhoneRecord),
    Comparison(PhoneRecord, PhoneRecord),
    RankedList(Vec<RankedPhone>),
    NotFound,
}
