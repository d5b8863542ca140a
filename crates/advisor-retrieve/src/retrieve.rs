//! Retrieval orchestrator — executes a classified query against the
//! catalog snapshot.
//!
//! All lookups are pure reads. Malformed numeric fields are treated as
//! unknown and skipped; dirty data weakens results, it never fails them.

use std::cmp::Ordering;

use advisor_catalog::{CatalogIndex, PhoneRecord};
use advisor_core::RankingConfig;
use advisor_query::{Criteria, QueryIntent, QueryKind};
use tracing::debug;

use crate::types::{RankedPhone, ResolvedResult};

pub struct Retriever;

impl Retriever {
    /// Execute an intent against the catalog snapshot.
    pub fn execute(
        intent: &QueryIntent,
        catalog: &CatalogIndex,
        config: &RankingConfig,
    ) -> ResolvedResult {
        match intent.kind {
            QueryKind::SpecLookup => intent
                .matches
                .first()
                .map(|m| ResolvedResult::SingleSpec(m.record.clone()))
                .unwrap_or(ResolvedResult::NotFound),
            QueryKind::Comparison => Self::comparison(intent),
            QueryKind::Recommendation => Self::recommend(&intent.criteria, catalog, config),
            QueryKind::General => ResolvedResult::NotFound,
        }
    }

    /// The two highest-confidence matches, reordered by where they appear
    /// in the question so "A vs B" renders as A then B.
    fn comparison(intent: &QueryIntent) -> ResolvedResult {
        let mut pair: Vec<_> = intent.matches.iter().take(2).collect();
        if pair.len() < 2 {
            return ResolvedResult::NotFound;
        }
        pair.sort_by_key(|m| m.position);
        ResolvedResult::Comparison(pair[0].record.clone(), pair[1].record.clone())
    }

    fn recommend(
        criteria: &Criteria,
        catalog: &CatalogIndex,
        config: &RankingConfig,
    ) -> ResolvedResult {
        // Hard filters. A record with an unparseable field cannot satisfy
        // a threshold, so it is excluded only when that constraint is set.
        let filtered: Vec<&PhoneRecord> = catalog
            .all()
            .iter()
            .filter(|r| match criteria.max_price {
                Some(ceiling) => r.price_usd().map(|p| p <= ceiling).unwrap_or(false),
                None => true,
            })
            .filter(|r| match criteria.min_ram_gb {
                Some(floor) => r.ram_gb().map(|g| g >= floor).unwrap_or(false),
                None => true,
            })
            .collect();

        debug!(
            "Recommendation filter kept {} of {} records",
            filtered.len(),
            catalog.len()
        );

        let camera_cut = tertile_cut(filtered.iter().filter_map(|r| r.camera_mp()));
        let battery_cut = tertile_cut(filtered.iter().filter_map(|r| r.battery_mah()));

        let mut ranked: Vec<RankedPhone> = filtered
            .into_iter()
            .map(|record| {
                let mut score = config.base_score;
                let mut reasons: Vec<String> = Vec::new();

                if let Some(ceiling) = criteria.max_price {
                    reasons.push(format!("within ${:.0} budget", ceiling));
                }
                if let Some(floor) = criteria.min_ram_gb {
                    if let Some(gb) = record.ram_gb() {
                        reasons.push(format!("{} GB RAM meets the {} GB minimum", gb, floor));
                    }
                }
                if criteria.camera_preference {
                    if let (Some(mp), Some(cut)) = (record.camera_mp(), camera_cut) {
                        if mp >= cut {
                            score += config.preference_bonus;
                            reasons.push(format!("{} MP camera in the top tier", mp));
                        }
                    }
                }
                if criteria.battery_preference {
                    if let (Some(mah), Some(cut)) = (record.battery_mah(), battery_cut) {
                        let meets_floor = criteria
                            .min_battery_mah
                            .map(|floor| mah >= floor)
                            .unwrap_or(false);
                        if mah >= cut || meets_floor {
                            score += config.preference_bonus;
                            reasons.push(format!("{} mAh battery in the top tier", mah));
                        }
                    }
                }
                if criteria.display_preference && has_premium_display(record) {
                    score += config.preference_bonus;
                    reasons.push("AMOLED / high-refresh display".to_string());
                }

                let rationale = if reasons.is_empty() {
                    "solid all-round pick".to_string()
                } else {
                    reasons.join(", ")
                };

                RankedPhone {
                    record: record.clone(),
                    score,
                    rationale,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| cmp_year_desc(&a.record, &b.record))
                .then_with(|| a.record.model_name.cmp(&b.record.model_name))
        });
        ranked.truncate(config.max_results);

        ResolvedResult::RankedList(ranked)
    }
}

/// Boundary of the top tertile of distinct parsed values, or `None` when
/// nothing parsed. Distinct values keep the cut meaningful when most of
/// the catalog shares one spec value.
fn tertile_cut<T: Ord + Copy>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut values: Vec<T> = values.collect();
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();
    Some(values[values.len() / 3])
}

/// Display bonus goes to panels advertising AMOLED or a 120Hz refresh.
fn has_premium_display(record: &PhoneRecord) -> bool {
    let display = record.display.to_lowercase();
    display.contains("amoled") || display.contains("120hz")
}

/// Newer release year first; unknown years sort last.
fn cmp_year_desc(a: &PhoneRecord, b: &PhoneRecord) -> Ordering {
    match (a.release_year(), b.release_year()) {
        (Some(ya), Some(yb)) => yb.cmp(&ya),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
