//! Intent classification — one ordered rule table, first hit wins.
//!
//! Order encodes precedence, not exclusivity of signals: a user naming two
//! phones with "vs" wants a comparison even if the question also mentions
//! a price.

use advisor_resolve::ResolvedMatch;
use tracing::debug;

use crate::types::{Criteria, QueryIntent, QueryKind};

/// Comparison keywords checked as whole tokens ("or" must not fire on
/// "for" or "storage").
const COMPARISON_TOKENS: &[&str] = &["vs", "or", "versus"];
const COMPARISON_PHRASES: &[&str] = &["compare", "versus", "difference"];
const SPEC_PHRASES: &[&str] = &["spec", "detail"];
const RECOMMENDATION_PHRASES: &[&str] = &["best", "recommend", "which phone", "suggest", "top"];

/// Signals the rules read. Collected once per question.
struct Signals<'a> {
    lower: String,
    tokens: Vec<String>,
    matches: &'a [ResolvedMatch],
    criteria: &'a Criteria,
}

impl Signals<'_> {
    fn has_comparison_keyword(&self) -> bool {
        COMPARISON_PHRASES.iter().any(|p| self.lower.contains(p))
            || self.tokens.iter().any(|t| COMPARISON_TOKENS.contains(&t.as_str()))
    }

    fn has_spec_keyword(&self) -> bool {
        SPEC_PHRASES.iter().any(|p| self.lower.contains(p))
    }

    fn has_recommendation_keyword(&self) -> bool {
        RECOMMENDATION_PHRASES.iter().any(|p| self.lower.contains(p))
    }
}

type Predicate = fn(&Signals) -> bool;

/// The precedence table. Evaluated top-down; `General` is the fall-through
/// when no rule fires.
const RULES: &[(QueryKind, Predicate)] = &[
    // Explicit comparison language with two resolvable phones dominates.
    (QueryKind::Comparison, |s| {
        s.has_comparison_keyword() && s.matches.len() >= 2
    }),
    // One phone, asked for specs or with no recommendation language.
    (QueryKind::SpecLookup, |s| {
        s.matches.len() == 1 && (s.has_spec_keyword() || !s.has_recommendation_keyword())
    }),
    // Superlative language or any extracted criterion.
    (QueryKind::Recommendation, |s| {
        s.has_recommendation_keyword() || s.criteria.any_set()
    }),
    // A bare model mention defaults to a spec lookup.
    (QueryKind::SpecLookup, |s| s.matches.len() == 1),
];

/// Classify a question given the resolver output and extracted criteria.
pub fn classify(
    question: &str,
    matches: Vec<ResolvedMatch>,
    criteria: Criteria,
) -> QueryIntent {
    let lower = question.to_lowercase();
    let tokens = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();

    let signals = Signals {
        lower,
        tokens,
        matches: &matches,
        criteria: &criteria,
    };

    let kind = RULES
        .iter()
        .find(|(_, pred)| pred(&signals))
        .map(|(kind, _)| *kind)
        .unwrap_or(QueryKind::General);

    debug!(
        "Classified question as {} ({} match(es), criteria set: {})",
        kind,
        matches.len(),
        criteria.any_set()
    );

    QueryIntent {
        kind,
        matches,
        criteria,
    }
}
