//! Query understanding types.

use advisor_resolve::ResolvedMatch;
use serde::{Deserialize, Serialize};

/// Constraints and preferences parsed from a question. Hard filters
/// (`max_price`, `min_ram_gb`) exclude records; preference flags only
/// bias ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Price ceiling in dollars — hard filter.
    pub max_price: Option<f64>,
    /// Battery floor in mAh — ranking bias only; battery text is too
    /// inconsistent to exclude on.
    pub min_battery_mah: Option<u32>,
    /// RAM floor in GB — hard filter.
    pub min_ram_gb: Option<u32>,
    pub battery_preference: bool,
    pub camera_preference: bool,
    pub display_preference: bool,
}

impl Criteria {
    /// True when at least one criterion was recognized.
    pub fn any_set(&self) -> bool {
        self.max_price.is_some()
            || self.min_battery_mah.is_some()
            || self.min_ram_gb.is_some()
            || self.battery_preference
            || self.camera_preference
            || self.display_preference
    }

    /// One-line summary for prompts and logs, or `None` when nothing was
    /// recognized.
    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(price) = self.max_price {
            parts.push(format!("max price ${:.0}", price));
        }
        if let Some(mah) = self.min_battery_mah {
            parts.push(format!("at least {} mAh", mah));
        }
        if let Some(gb) = self.min_ram_gb {
            parts.push(format!("at least {} GB RAM", gb));
        }
        if self.battery_preference {
            parts.push("battery priority".into());
        }
        if self.camera_preference {
            parts.push("camera priority".into());
        }
        if self.display_preference {
            parts.push("display priority".into());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Query type, in precedence order of the classifier rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    SpecLookup,
    Comparison,
    Recommendation,
    General,
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpecLookup => write!(f, "spec_lookup"),
            Self::Comparison => write!(f, "comparison"),
            Self::Recommendation => write!(f, "recommendation"),
            Self::General => write!(f, "general"),
        }
    }
}

/// Classified query: kind plus the resolver matches and criteria it was
/// decided from. Built per request and consumed immediately.
#[derive(Debug, Clone)]
pub struct QueryIntent {
    pub kind: QueryKind,
    /// Resolver output, confidence-descending.
    pub matches: Vec<ResolvedMatch>,
    pub criteria: Criteria,
}
