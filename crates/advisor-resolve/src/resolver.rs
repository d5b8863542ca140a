//! Entity resolver — fuzzy-matches question substrings to catalog names.
//!
//! Every catalog name is scored against contiguous token windows of the
//! question (name length ±1 tokens, to tolerate missing or extra tokens
//! like "Ultra" or "5G"). The window score blends token coverage of the
//! name with a normalized edit distance on the joined strings. Nothing
//! clearing the threshold is a normal outcome, not an error.

use advisor_catalog::CatalogIndex;
use advisor_core::ResolverConfig;
use strsim::normalized_levenshtein;
use tracing::debug;

use crate::types::ResolvedMatch;

/// Brand tokens carry no identity — the catalog stores Samsung phones and
/// users write "Samsung Galaxy S25", "Galaxy S25", or just "S25".
const BRAND_TOKENS: &[&str] = &["samsung", "galaxy"];

/// Variant suffixes that distinguish sibling models ("S24" vs "S24 Ultra").
/// A window containing or followed by one of these that the candidate name
/// lacks is almost certainly a mention of the sibling, so its score is
/// demoted. "5G" is deliberately absent: it never separates siblings and
/// the window tolerance must absorb it.
const SUFFIX_TOKENS: &[&str] = &["ultra", "plus", "fe"];

pub struct EntityResolver;

impl EntityResolver {
    /// Resolve phone-name mentions in a question. Returns matches sorted
    /// by confidence descending (catalog order for ties), deduplicated by
    /// model name. Never mutates the catalog.
    pub fn resolve(
        question: &str,
        catalog: &CatalogIndex,
        config: &ResolverConfig,
    ) -> Vec<ResolvedMatch> {
        let question_tokens = normalize(question);
        if question_tokens.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<ResolvedMatch> = Vec::new();

        for record in catalog.all() {
            let name_tokens = normalize(&record.model_name);
            if name_tokens.is_empty() {
                continue;
            }

            if let Some((score, position)) =
                best_window(&question_tokens, &name_tokens, config)
            {
                if score >= config.match_threshold {
                    matches.push(ResolvedMatch {
                        record: record.clone(),
                        confidence: score,
                        position,
                    });
                }
            }
        }

        // Stable sort keeps catalog insertion order for equal confidence.
        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "Resolved {} catalog match(es) for question ({} tokens)",
            matches.len(),
            question_tokens.len()
        );
        matches
    }
}

/// Lowercase, strip punctuation, collapse whitespace, drop brand tokens.
fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '+')
        .filter(|t| !t.is_empty())
        .filter(|t| !BRAND_TOKENS.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// Best (score, window start) for a name over all candidate windows, or
/// `None` when the question is too short for any window.
fn best_window(
    question: &[String],
    name: &[String],
    config: &ResolverConfig,
) -> Option<(f64, usize)> {
    let name_joined = name.join(" ");
    let mut best: Option<(f64, usize)> = None;

    let min_len = name.len().saturating_sub(1).max(1);
    let max_len = (name.len() + 1).min(question.len());

    for len in min_len..=max_len {
        if len > question.len() {
            break;
        }
        for start in 0..=(question.len() - len) {
            let window = &question[start..start + len];
            let mut score = window_score(window, name, &name_joined, config);

            // Suffix guard: "S24 Ultra" mentioned in the question is not a
            // mention of the plain S24, whether "ultra" lands inside the
            // window or just past its edge.
            let foreign_suffix = window
                .iter()
                .chain(question.get(start + len))
                .any(|t| {
                    SUFFIX_TOKENS.contains(&t.as_str()) && !name.iter().any(|n| n == t)
                });
            if foreign_suffix {
                score *= config.suffix_penalty;
            }

            if best.map(|(s, _)| score > s).unwrap_or(true) {
                best = Some((score, start));
            }
        }
    }

    best
}

/// Blend of name-token coverage and edit-distance ratio.
fn window_score(
    window: &[String],
    name: &[String],
    name_joined: &str,
    config: &ResolverConfig,
) -> f64 {
    let covered = name.iter().filter(|t| window.contains(*t)).count();
    let coverage = covered as f64 / name.len() as f64;
    let edit = normalized_levenshtein(&window.join(" "), name_joined);
    config.token_weight * coverage + config.edit_weight * edit
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_catalog::PhoneRecord;

    fn phone(name: &str) -> PhoneRecord {
        PhoneRecord {
            model_name: name.into(),
            ..Default::default()
        }
    }

    fn catalog(names: &[&str]) -> CatalogIndex {
        CatalogIndex::from_records(names.iter().map(|n| phone(n)).collect())
    }

    fn resolve(question: &str, names: &[&str]) -> Vec<ResolvedMatch> {
        EntityResolver::resolve(question, &catalog(names), &ResolverConfig::default())
    }

    #[test]
    fn test_exact_mention_is_full_confidence() {
        let matches = resolve(
            "What are the specs of the Galaxy S25 Ultra?",
            &["Galaxy S25 Ultra", "Galaxy A55"],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.model_name, "Galaxy S25 Ultra");
        assert!((matches[0].confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_brand_prefix_is_optional() {
        let matches = resolve("tell me about the s25 ultra", &["Galaxy S25 Ultra"]);
        assert_eq!(matches.len(), 1);
        assert!((matches[0].confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extra_token_in_mention_still_matches() {
        // "super" splits the name tokens; the ±1 window absorbs it.
        let matches = resolve("how good is the s25 super ultra", &["Galaxy S25 Ultra"]);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].confidence >= 0.72);
        assert!(matches[0].confidence < 1.0);
    }

    #[test]
    fn test_trailing_5g_is_tolerated() {
        let matches = resolve("price of the s25 ultra 5g", &["Galaxy S25 Ultra"]);
        assert_eq!(matches.len(), 1);
        assert!((matches[0].confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sibling_model_does_not_cross_match() {
        let matches = resolve("specs of the s24 ultra", &["Galaxy S25 Ultra"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_suffix_guard_blocks_base_model() {
        // "s24 ultra" must resolve to the Ultra, not the plain S24.
        let matches = resolve(
            "compare the s24 ultra camera",
            &["Galaxy S24", "Galaxy S24 Ultra"],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.model_name, "Galaxy S24 Ultra");
    }

    #[test]
    fn test_bare_base_model_still_resolves() {
        let matches = resolve("is the s24 worth it", &["Galaxy S24", "Galaxy S24 Ultra"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.model_name, "Galaxy S24");
    }

    #[test]
    fn test_two_mentions_keep_question_positions() {
        let matches = resolve(
            "Compare Galaxy S25 Ultra and S24 Ultra",
            &["Galaxy S24 Ultra", "Galaxy S25 Ultra"],
        );
        assert_eq!(matches.len(), 2);
        let s25 = matches
            .iter()
            .find(|m| m.record.model_name == "Galaxy S25 Ultra")
            .unwrap();
        let s24 = matches
            .iter()
            .find(|m| m.record.model_name == "Galaxy S24 Ultra")
            .unwrap();
        assert!(s25.position < s24.position);
    }

    #[test]
    fn test_no_mention_is_empty_not_error() {
        let matches = resolve("best phone for photography", &["Galaxy S25 Ultra"]);
        assert!(matches.is_empty());
        let matches = resolve("asdkjhaskjdh", &["Galaxy S25 Ultra"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_dedup_by_model_name() {
        // Two mentions of the same model yield one match.
        let matches = resolve("s25 ultra or s25 ultra?", &["Galaxy S25 Ultra"]);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_tie_keeps_catalog_order() {
        let matches = resolve(
            "galaxy a55 and galaxy a35",
            &["Galaxy A55", "Galaxy A35"],
        );
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].record.model_name, "Galaxy A55");
    }

    #[test]
    fn test_empty_question() {
        assert!(resolve("", &["Galaxy S25 Ultra"]).is_empty());
        assert!(resolve("?!.,", &["Galaxy S25 Ultra"]).is_empty());
    }
}
